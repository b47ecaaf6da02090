//! Labeled training set loader.
//!
//! Reads a headered CSV file and extracts the configured text and label
//! columns. Rows with blank text are skipped with a warning; any label that
//! does not parse as an integer class aborts loading.

use std::io::Read;

use mindspace_types::config::DatasetConfig;
use mindspace_types::error::DatasetError;
use mindspace_types::sentiment::{Label, TrainingExample};

/// Load the training set described by `config`.
pub async fn load_training_set(config: &DatasetConfig) -> Result<Vec<TrainingExample>, DatasetError> {
    let path = config.path.display().to_string();
    let bytes = tokio::fs::read(&config.path)
        .await
        .map_err(|e| DatasetError::Io {
            path: path.clone(),
            message: e.to_string(),
        })?;

    let examples = parse_training_set(bytes.as_slice(), &config.text_column, &config.label_column)?;
    if examples.is_empty() {
        return Err(DatasetError::Empty(path));
    }

    tracing::info!(path = %path, examples = examples.len(), "Loaded training set");
    Ok(examples)
}

/// Parse CSV rows from `reader`. Row numbers in errors are 1-based data rows.
pub fn parse_training_set<R: Read>(
    reader: R,
    text_column: &str,
    label_column: &str,
) -> Result<Vec<TrainingExample>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| DatasetError::Malformed(e.to_string()))?
        .clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    };
    let text_idx = column(text_column)?;
    let label_idx = column(label_column)?;

    let mut examples = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| DatasetError::Malformed(format!("row {row}: {e}")))?;

        let text = record.get(text_idx).unwrap_or_default().trim();
        if text.is_empty() {
            tracing::warn!(row, "Skipping row with empty text");
            continue;
        }

        let raw_label = record.get(label_idx).unwrap_or_default();
        let label: Label = raw_label
            .parse()
            .map_err(|message| DatasetError::InvalidLabel { row, message })?;

        examples.push(TrainingExample {
            text: text.to_string(),
            label,
        });
    }

    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
id,text,label_scaled
1,great product,1
2,terrible service,0
3,\"fine, nothing special\",1
";

    #[test]
    fn test_parse_selects_configured_columns() {
        let examples = parse_training_set(SAMPLE.as_bytes(), "text", "label_scaled").unwrap();
        assert_eq!(
            examples,
            vec![
                TrainingExample::new("great product", 1),
                TrainingExample::new("terrible service", 0),
                TrainingExample::new("fine, nothing special", 1),
            ]
        );
    }

    #[test]
    fn test_parse_missing_column() {
        let err = parse_training_set(SAMPLE.as_bytes(), "text", "sentiment").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn(c) if c == "sentiment"));
    }

    #[test]
    fn test_parse_invalid_label_reports_row() {
        let csv = "text,label\nok,1\nbad,positive\n";
        let err = parse_training_set(csv.as_bytes(), "text", "label").unwrap_err();
        assert!(matches!(err, DatasetError::InvalidLabel { row: 2, .. }));
    }

    #[test]
    fn test_parse_skips_blank_text() {
        let csv = "text,label\n   ,1\nhello,2.0\n";
        let examples = parse_training_set(csv.as_bytes(), "text", "label").unwrap();
        assert_eq!(examples, vec![TrainingExample::new("hello", 2)]);
    }

    #[test]
    fn test_parse_ragged_row_is_malformed() {
        let csv = "text,label\nhello,1,extra\n";
        let err = parse_training_set(csv.as_bytes(), "text", "label").unwrap_err();
        assert!(matches!(err, DatasetError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_load_training_set_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("train.csv");
        tokio::fs::write(&path, SAMPLE).await.unwrap();

        let config = DatasetConfig {
            path,
            ..DatasetConfig::default()
        };
        let examples = load_training_set(&config).await.unwrap();
        assert_eq!(examples.len(), 3);
    }

    #[tokio::test]
    async fn test_load_training_set_missing_file() {
        let config = DatasetConfig {
            path: PathBuf::from("/nonexistent/mindspace/train.csv"),
            ..DatasetConfig::default()
        };
        let err = load_training_set(&config).await.unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_training_set_header_only_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("train.csv");
        tokio::fs::write(&path, "text,label_scaled\n").await.unwrap();

        let config = DatasetConfig {
            path,
            ..DatasetConfig::default()
        };
        let err = load_training_set(&config).await.unwrap_err();
        assert!(matches!(err, DatasetError::Empty(_)));
    }
}
