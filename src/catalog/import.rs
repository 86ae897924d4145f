use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DishError, Result};
use crate::models::Ingredient;

/// One row of a catalog CSV: `code,type,value,price`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub code: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub value: String,

    pub price: f64,
}

impl CatalogRecord {
    /// The single-character type code of this row.
    pub fn code_char(&self) -> Result<char> {
        let mut chars = self.code.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(DishError::InvalidInput(format!(
                "type code must be a single character, got {:?}",
                self.code
            ))),
        }
    }

    pub fn to_ingredient(&self) -> Ingredient {
        Ingredient::new(self.kind.trim(), self.value.trim(), self.price)
    }
}

/// Read catalog rows from CSV with a header line.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CatalogRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        let record: CatalogRecord = row?;
        record.code_char()?;
        records.push(record);
    }
    Ok(records)
}

/// Load catalog rows from a CSV file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_records() {
        let csv = "code,type,value,price\nB,Bun,Sesame bun,1.5\nS, Sauce , Ketchup ,0.25\n";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].code_char().unwrap(), 'B');
        assert_eq!(records[1].to_ingredient(), Ingredient::new("Sauce", "Ketchup", 0.25));
    }

    #[test]
    fn test_rejects_multi_char_code() {
        let csv = "code,type,value,price\nBB,Bun,Sesame bun,1.5\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DishError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_bad_price() {
        let csv = "code,type,value,price\nB,Bun,Sesame bun,cheap\n";
        let err = read_records(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DishError::Csv(_)));
    }
}
