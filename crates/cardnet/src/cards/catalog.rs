//! CSV import of issuing-network rule records.
//!
//! Lets a deployment seed its repository from a flat file instead of the
//! built-in defaults. Columns: `id,name,starts_with_numbers,in_range,
//! allowed_lengths`; empty cells in the optional columns become absent.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::IssuingNetworkRecord;

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read network catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid network catalog data: {0}")]
    Csv(#[from] csv::Error),
}

pub fn load_records<R: Read>(reader: R) -> Result<Vec<IssuingNetworkRecord>, CatalogImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<CatalogRow>() {
        let row = row?;
        records.push(IssuingNetworkRecord {
            id: row.id,
            name: row.name,
            starts_with_numbers: row.starts_with_numbers,
            in_range: row.in_range,
            allowed_lengths: row.allowed_lengths,
        });
    }

    Ok(records)
}

pub fn load_records_from_path(
    path: impl AsRef<Path>,
) -> Result<Vec<IssuingNetworkRecord>, CatalogImportError> {
    let file = File::open(path)?;
    load_records(file)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: i64,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    starts_with_numbers: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    in_range: Option<String>,
    allowed_lengths: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
