// ============================================================
// PROPOSITION READER
// ============================================================
// Parse proposition CSV exports with header mapping and error handling

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::domain::error::AppError;
use crate::domain::proposition::Proposition;

/// Header columns every proposition export must carry, matched by exact name.
const REQUIRED_COLUMNS: [&str; 3] = ["topic", "opinion", "comment"];

/// Reader for proposition CSV exports
pub struct PropositionReader {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for PropositionReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl PropositionReader {
    /// Create a new reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a CSV file and return propositions in input order
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Proposition>, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<Vec<Proposition>, AppError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let columns = Self::map_columns(&headers)?;

        let mut propositions = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            propositions.push(Self::parse_record(index, &columns, &record)?);
        }

        Ok(propositions)
    }

    /// Resolve the positions of the required columns from the header row.
    /// Extra columns are ignored; a missing column fails the whole parse.
    fn map_columns(headers: &StringRecord) -> Result<[usize; 3], AppError> {
        let mut positions = [0usize; 3];

        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            positions[slot] = headers
                .iter()
                .position(|h| h == *name)
                .ok_or_else(|| {
                    AppError::ParseError(format!("Missing required column: {}", name))
                })?;
        }

        Ok(positions)
    }

    /// Build a proposition from a single data record
    fn parse_record(
        index: usize,
        columns: &[usize; 3],
        record: &StringRecord,
    ) -> Result<Proposition, AppError> {
        let field = |slot: usize, name: &str| -> Result<String, AppError> {
            record
                .get(columns[slot])
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::ParseError(format!(
                        "Row {} has no value for column '{}'",
                        index + 1,
                        name
                    ))
                })
        };

        Ok(Proposition::new(
            index,
            field(0, "topic")?,
            field(1, "opinion")?,
            field(2, "comment")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_export() {
        let content = "topic,opinion,comment\nClimate,Pro,It's real\nTax,Con,Too high";
        let reader = PropositionReader::new();
        let props = reader.parse_content(content).unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props[0].index, 0);
        assert_eq!(props[0].topic, "Climate");
        assert_eq!(props[1].comment, "Too high");
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let content = "comment,topic,opinion\nIt's real,Climate,Pro";
        let reader = PropositionReader::new();
        let props = reader.parse_content(content).unwrap();

        assert_eq!(props[0].topic, "Climate");
        assert_eq!(props[0].opinion, "Pro");
        assert_eq!(props[0].comment, "It's real");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let content = "id,topic,opinion,comment,score\n7,Climate,Pro,It's real,0.9";
        let reader = PropositionReader::new();
        let props = reader.parse_content(content).unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(props[0].comment, "It's real");
    }

    #[test]
    fn test_missing_column_names_the_column() {
        let content = "topic,comment\nClimate,It's real";
        let reader = PropositionReader::new();
        let err = reader.parse_content(content).unwrap_err();

        match err {
            AppError::ParseError(msg) => assert!(msg.contains("opinion")),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let content = "Topic,Opinion,Comment\nClimate,Pro,It's real";
        let reader = PropositionReader::new();
        assert!(reader.parse_content(content).is_err());
    }

    #[test]
    fn test_empty_table_yields_no_rows() {
        let content = "topic,opinion,comment";
        let reader = PropositionReader::new();
        let props = reader.parse_content(content).unwrap();

        assert!(props.is_empty());
    }

    #[test]
    fn test_quoted_fields_keep_embedded_commas() {
        let content = "topic,opinion,comment\nTax,Con,\"Too high, honestly\"";
        let reader = PropositionReader::new();
        let props = reader.parse_content(content).unwrap();

        assert_eq!(props[0].comment, "Too high, honestly");
    }
}
