use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{core::utils::ensure_dir, ledger::Ledger};

use super::{Collection, Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// Stores each collection as a pretty-printed JSON array under one data
/// directory, replacing files atomically (write temp, then rename) so a
/// crashed save never leaves a truncated file behind.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: PathBuf) -> Result<Self> {
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(crate::core::utils::data_dir())
    }

    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.file_name())
    }

    fn read_collection<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        let path = self.collection_path(collection);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_collection<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        let path = self.collection_path(collection);
        let json = serde_json::to_string_pretty(records)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        Ok(Ledger {
            bank_accounts: self.read_collection(Collection::BankAccounts)?,
            credit_cards: self.read_collection(Collection::CreditCards)?,
            holdings: self.read_collection(Collection::Holdings)?,
            loans: self.read_collection(Collection::Loans)?,
            transactions: self.read_collection(Collection::Transactions)?,
        })
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        for collection in Collection::ALL {
            self.save_collection(ledger, collection)?;
        }
        Ok(())
    }

    fn save_collection(&self, ledger: &Ledger, collection: Collection) -> Result<()> {
        match collection {
            Collection::BankAccounts => {
                self.write_collection(collection, &ledger.bank_accounts)
            }
            Collection::CreditCards => self.write_collection(collection, &ledger.credit_cards),
            Collection::Holdings => self.write_collection(collection, &ledger.holdings),
            Collection::Loans => self.write_collection(collection, &ledger.loans),
            Collection::Transactions => self.write_collection(collection, &ledger.transactions),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AccountKind, BankAccount};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = JsonStorage::new(temp.path().to_path_buf()).expect("json storage");
        (storage, temp)
    }

    #[test]
    fn load_returns_empty_ledger_when_no_files_exist() {
        let (storage, _guard) = storage_with_temp_dir();
        let ledger = storage.load().expect("load empty");
        assert!(ledger.bank_accounts.is_empty());
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (storage, _guard) = storage_with_temp_dir();
        let mut ledger = Ledger::new();
        ledger
            .add_bank_account(BankAccount::new(
                "HDFC",
                "1234",
                AccountKind::Savings,
                dec!(1500.25),
                dec!(3.5),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            ))
            .expect("add account");
        storage.save(&ledger).expect("save ledger");

        let loaded = storage.load().expect("load ledger");
        assert_eq!(loaded.bank_accounts.len(), 1);
        assert_eq!(loaded.bank_accounts[0].bank_name, "HDFC");
        assert_eq!(loaded.bank_accounts[0].balance, dec!(1500.25));
    }
}
