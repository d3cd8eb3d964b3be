use crate::record::PlatformRecord;
use crate::types::{DatasetError, Result};
use std::path::Path;

/// Load the platform comparison dataset from a CSV file.
///
/// The first row declares the column names; every following row becomes one
/// [`PlatformRecord`]. Header names and cell values are trimmed, fully blank
/// rows are skipped, and ragged rows fail with [`DatasetError::Malformed`].
pub async fn load_platforms(path: impl AsRef<Path>) -> Result<Vec<PlatformRecord>> {
    let path = path.as_ref().to_owned();

    let contents = match tokio::fs::read_to_string(&path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(DatasetError::NotFound(path));
        }
        Err(err) => return Err(err.into()),
    };

    // CSV parsing is CPU-bound, spawn blocking
    let records = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            if row.iter().all(|cell| cell.is_empty()) {
                continue;
            }
            records.push(PlatformRecord::from_row(&headers, &row));
        }
        Ok::<_, DatasetError>(records)
    })
    .await??;

    log::debug!("loaded {} platform records", records.len());
    Ok(records)
}

/// Unique, non-blank platform names in dataset order
pub fn platform_names(records: &[PlatformRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        let name = record.platform_name.as_str();
        if !name.is_empty() && !names.iter().any(|seen| seen == name) {
            names.push(name.to_string());
        }
    }
    names
}
