//! Member Entries Loader Module
//! Loads raw weight entries from JSON or CSV (via Polars).

use super::entries::{MemberEntries, WeightEntry, DATE_FORMAT};
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read entries: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse entries JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("CSV is missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("Unsupported entries file '{0}' (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

#[derive(Deserialize)]
struct RawEntry {
    date: Option<String>,
    weight: Option<f64>,
}

/// Loads member weight entries from disk.
pub struct DataLoader;

impl DataLoader {
    /// Load an entries file, picking the reader from the extension.
    pub fn load(path: &Path) -> Result<Vec<MemberEntries>, LoaderError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let members = match extension.as_deref() {
            Some("json") => Self::parse_json(&std::fs::read_to_string(path)?)?,
            Some("csv") => Self::read_csv(path)?,
            _ => return Err(LoaderError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(
            path = %path.display(),
            members = members.len(),
            "loaded weight entries"
        );

        Ok(members)
    }

    /// Parse `{ "<username>": [{"date": "...", "weight": n}, ...] }`.
    pub fn parse_json(text: &str) -> Result<Vec<MemberEntries>, LoaderError> {
        let doc: Map<String, Value> = serde_json::from_str(text)?;
        let mut members = Vec::with_capacity(doc.len());

        for (username, value) in doc {
            let raw: Vec<RawEntry> = serde_json::from_value(value)?;
            let mut member = MemberEntries::new(username);
            for entry in raw {
                let Some(date) = entry.date else {
                    tracing::warn!(user = %member.username, "skipping entry without date");
                    continue;
                };
                if let Some(parsed) = Self::parse_entry(&member.username, &date, entry.weight) {
                    member.entries.push(parsed);
                }
            }
            members.push(member);
        }

        Ok(members)
    }

    /// Read a `username,date,weight` CSV. Members appear in the order of
    /// their first row.
    pub fn read_csv(path: &Path) -> Result<Vec<MemberEntries>, LoaderError> {
        let df = LazyCsvReader::new(path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let users = Self::string_column(&df, "username")?;
        let dates = Self::string_column(&df, "date")?;
        let weights = df
            .column("weight")
            .map_err(|_| LoaderError::MissingColumn("weight"))?
            .cast(&DataType::Float64)?;
        let weights = weights.f64()?;

        let users = users.as_materialized_series().str()?;
        let dates = dates.as_materialized_series().str()?;

        let mut members: Vec<MemberEntries> = Vec::new();
        for i in 0..df.height() {
            let (Some(user), Some(date)) = (users.get(i), dates.get(i)) else {
                tracing::warn!(row = i, "skipping row without username or date");
                continue;
            };

            let Some(entry) = Self::parse_entry(user, date, weights.get(i)) else {
                continue;
            };

            if let Some(idx) = members.iter().position(|m| m.username == user) {
                members[idx].entries.push(entry);
            } else {
                let mut member = MemberEntries::new(user);
                member.entries.push(entry);
                members.push(member);
            }
        }

        Ok(members)
    }

    fn string_column(df: &DataFrame, name: &'static str) -> Result<Column, LoaderError> {
        let column = df.column(name).map_err(|_| LoaderError::MissingColumn(name))?;
        Ok(column.cast(&DataType::String)?)
    }

    fn parse_entry(user: &str, date: &str, weight: Option<f64>) -> Option<WeightEntry> {
        let date = match NaiveDate::parse_from_str(date.trim(), DATE_FORMAT) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!(user, date, error = %e, "skipping entry with invalid date");
                return None;
            }
        };
        match weight {
            Some(weight) if !weight.is_nan() => Some(WeightEntry { date, weight }),
            _ => {
                tracing::warn!(user, %date, "skipping entry without weight");
                None
            }
        }
    }
}
