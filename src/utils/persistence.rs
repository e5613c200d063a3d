use std::{fs, path::Path};

use crate::{
    errors::LedgerError,
    ledger::{Ledger, CURRENT_SCHEMA_VERSION},
};

/// Serializes the ledger to pretty JSON with ISO-8601 dates.
pub fn to_json(ledger: &Ledger) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

/// Parses a ledger from JSON, reviving date fields, and rejects snapshots
/// written by a newer schema.
pub fn from_json(data: &str) -> Result<Ledger, LedgerError> {
    let ledger: Ledger = serde_json::from_str(data)?;
    if ledger.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::UnsupportedSchema {
            found: ledger.schema_version,
            supported: CURRENT_SCHEMA_VERSION,
        });
    }
    Ok(ledger)
}

/// Writes the provided ledger to disk atomically by staging to a temporary
/// file.
pub fn save_ledger_to_file(ledger: &Ledger, path: &Path) -> Result<(), LedgerError> {
    let tmp = path.with_extension("tmp");
    let json = to_json(ledger)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a ledger snapshot from disk, returning structured errors on failure.
pub fn load_ledger_from_file(path: &Path) -> Result<Ledger, LedgerError> {
    let data = fs::read_to_string(path)?;
    from_json(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{SplitDraft, Transaction, TransactionDraft};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn json_roundtrip_preserves_entities_and_dates() {
        let mut ledger = Ledger::seeded("Me", &["Friend A"]);
        let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
        ledger.add_transaction(Transaction::from_draft(
            TransactionDraft::new(date, vec![SplitDraft::new(Uuid::new_v4(), -1234)])
                .with_payee("Cafe"),
        ));

        let revived = from_json(&to_json(&ledger).unwrap()).unwrap();
        assert_eq!(revived.accounts, ledger.accounts);
        assert_eq!(revived.persons, ledger.persons);
        assert_eq!(revived.transactions, ledger.transactions);
        assert_eq!(revived.transactions[0].date, date);
    }

    #[test]
    fn newer_schema_is_rejected() {
        let mut ledger = Ledger::new();
        ledger.schema_version = CURRENT_SCHEMA_VERSION + 1;
        let err = from_json(&to_json(&ledger).unwrap()).expect_err("future schema must fail");
        assert!(matches!(err, LedgerError::UnsupportedSchema { .. }));
    }

    #[test]
    fn malformed_json_surfaces_serde_error() {
        assert!(matches!(
            from_json("{\"accounts\": 7}"),
            Err(LedgerError::Serde(_))
        ));
    }
}
