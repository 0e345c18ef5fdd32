//! File-backed dataset loading
//!
//! The dashboard proper fetches datasets over REST; for the CLI and for
//! tests a dataset is just a JSON file holding an array of records.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::SourceError;
use crate::model::Record;

/// Loads a dataset from a JSON file containing an array of records.
///
/// The file is deserialized straight into [`Record`]s so that object key
/// order survives; going through an intermediate `serde_json::Value` would
/// reorder keys.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file() {
        let err = load_records(Path::new("/nonexistent/records.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
