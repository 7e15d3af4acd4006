use std::fs;

use super::error::StoreError;
use super::files::{DataFile, FileFormat};
use crate::domain::{CsvRow, EntryError, LeaderboardSnapshot, PlayerRecord};

/// Read and convert every entry of a data file
pub fn read_records(file: &DataFile) -> Result<Vec<PlayerRecord>, StoreError> {
    let text = fs::read_to_string(&file.path).map_err(|e| StoreError::io(&file.path, e))?;

    match file.format {
        FileFormat::Json => parse_json(file, &text),
        FileFormat::Csv => parse_csv(file, &text),
    }
}

fn parse_json(file: &DataFile, text: &str) -> Result<Vec<PlayerRecord>, StoreError> {
    let snapshot: LeaderboardSnapshot =
        serde_json::from_str(text).map_err(|source| StoreError::Json {
            path: file.path.clone(),
            source,
        })?;

    snapshot
        .entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_record(file.season, file.bracket)
                .map_err(|source| invalid_entry(file, index, source))
        })
        .collect()
}

fn parse_csv(file: &DataFile, text: &str) -> Result<Vec<PlayerRecord>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|source| StoreError::Csv {
            path: file.path.clone(),
            source,
        })?;
        let record = row
            .into_record(file.season, file.bracket)
            .map_err(|source| invalid_entry(file, index, source))?;
        records.push(record);
    }

    Ok(records)
}

fn invalid_entry(file: &DataFile, index: usize, source: EntryError) -> StoreError {
    StoreError::InvalidEntry {
        path: file.path.clone(),
        index,
        source,
    }
}
