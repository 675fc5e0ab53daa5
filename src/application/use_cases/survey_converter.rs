// ============================================================
// SURVEY CONVERTER USE CASE
// ============================================================
// Orchestrate CSV parsing and Advanced Format rendering

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::proposition::Proposition;
use crate::infrastructure::csv::PropositionReader;

/// Document header expected by the Qualtrics importer.
const PREAMBLE: &str = "[[AdvancedFormat]]\n\n[[Block:GOVBlock]]\n\n";

/// Separator between consecutive question blocks (one blank line).
const BLOCK_SEPARATOR: &str = "\n\n";

/// Result of a survey conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertedSurvey {
    /// Number of question blocks written
    pub row_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Survey conversion use case
pub struct SurveyConverter {
    reader: PropositionReader,
}

impl SurveyConverter {
    /// Create a new survey converter
    pub fn new() -> Self {
        Self {
            reader: PropositionReader::new(),
        }
    }

    /// Convert a proposition CSV into an Advanced Format survey file.
    ///
    /// The input is parsed fully before the output sink is opened, so a
    /// parse failure never leaves a partial output file behind.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConvertedSurvey> {
        let start = Instant::now();

        let propositions = self.reader.parse_file(input)?;
        let document = Self::render_document(&propositions);

        let file = File::create(output).map_err(|e| {
            AppError::IoError(format!("Failed to create {}: {}", output.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(document.as_bytes()).map_err(|e| {
            AppError::IoError(format!("Failed to write {}: {}", output.display(), e))
        })?;
        writer.flush().map_err(|e| {
            AppError::IoError(format!("Failed to flush {}: {}", output.display(), e))
        })?;

        Ok(ConvertedSurvey {
            row_count: propositions.len(),
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Render the full survey document: preamble, then one question block
    /// per proposition with exactly one blank line between blocks.
    pub fn render_document(propositions: &[Proposition]) -> String {
        let blocks = propositions
            .iter()
            .map(Self::render_block)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR);

        format!("{}{}", PREAMBLE, blocks)
    }

    /// Render a single essay question block.
    /// Field values are inserted verbatim; the importer trusts clean input.
    fn render_block(prop: &Proposition) -> String {
        format!(
            "[[Question:TextEntry:Essay]]\n\
             [[ID:{}]]\n\
             <h4><strong>Topic:</strong> {}</h4>\n\
             <br/>\n\
             <h3><strong>Opinion:</strong> {}</h3>\n\
             <br/>\n\
             <p><strong>&ldquo;{}&rdquo;</strong></p>",
            prop.question_id(),
            prop.topic,
            prop.opinion,
            prop.comment
        )
    }
}

impl Default for SurveyConverter {
    fn default() -> Self {
        Self::new()
    }
}
