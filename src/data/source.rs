//! Where a comparison dataset comes from.

use super::entries::{build_comparison, DateRange};
use super::loader::{DataLoader, LoaderError};
use super::payload::{read_payload_file, PayloadError, WeightDataset};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Entries(#[from] LoaderError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// A ready-made escaped payload.
    Payload(PathBuf),
    /// Raw member entries aligned into a payload on load.
    Entries { path: PathBuf, range: DateRange },
}

impl DatasetSource {
    pub fn load(&self) -> Result<WeightDataset, SourceError> {
        match self {
            Self::Payload(path) => {
                let dataset = read_payload_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    users = dataset.user_weights.len(),
                    dates = dataset.dates.len(),
                    "loaded payload"
                );
                Ok(dataset)
            }
            Self::Entries { path, range } => {
                let members = DataLoader::load(path)?;
                Ok(build_comparison(&members, *range))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.txt");
        std::fs::write(
            &path,
            "{&quot;dates&quot;:[&quot;2021-01-01&quot;],&quot;user_weights&quot;:{&quot;alice&quot;:[70]}}",
        )
        .unwrap();

        let dataset = DatasetSource::Payload(path).load().unwrap();
        assert_eq!(dataset.usernames(), vec!["alice"]);
    }

    #[test]
    fn loads_and_aligns_entries_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(
            &path,
            r#"{"alice": [{"date": "2021-01-02", "weight": 70}],
                "bob": [{"date": "2021-01-01", "weight": 80}]}"#,
        )
        .unwrap();

        let source = DatasetSource::Entries {
            path,
            range: DateRange::default(),
        };
        let dataset = source.load().unwrap();
        assert_eq!(dataset.dates, vec!["2021-01-01", "2021-01-02"]);
        assert_eq!(dataset.weights_for("alice"), Some(&[None, Some(70.0)][..]));
    }

    #[test]
    fn missing_payload_file_is_io_error() {
        let source = DatasetSource::Payload(PathBuf::from("/nonexistent/payload.txt"));
        assert!(matches!(
            source.load(),
            Err(SourceError::Payload(PayloadError::Io(_)))
        ));
    }
}
