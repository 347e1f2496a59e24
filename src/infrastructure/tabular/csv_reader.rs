// ============================================================
// CSV READER
// ============================================================
// Decode uploaded CSV bytes and parse them into a Table

use crate::domain::error::{AppError, Result};
use crate::domain::Table;
use csv::{ReaderBuilder, Trim};

/// CSV reader with encoding and delimiter detection
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse uploaded bytes into a table with automatic delimiter detection.
    pub fn read_auto_detect(label: &str, bytes: &[u8]) -> Result<Table> {
        let content = Self::decode_bytes(bytes);
        let delimiter = Self::detect_delimiter(&content);

        Self::default()
            .with_delimiter(delimiter)
            .read_content(label, &content)
    }

    /// Parse CSV content from a decoded string.
    pub fn read_content(&self, label: &str, content: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let mut rows = Vec::new();

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
            if row.iter().all(|s| s.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }

        Ok(Table::new(label.to_string(), headers, rows))
    }

    /// Decode uploaded bytes: UTF-8 first, Windows-1252 fallback, lossy
    /// UTF-8 as a last resort.
    fn decode_bytes(bytes: &[u8]) -> String {
        if let Ok(content) = std::str::from_utf8(bytes) {
            return content.to_string();
        }

        let (content, _, had_errors) = encoding_rs::WINDOWS_1252.decode(bytes);
        if !had_errors {
            return content.into_owned();
        }

        String::from_utf8_lossy(bytes).to_string()
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let mut field_counts = Vec::new();

            for line in &sample_lines {
                let count = line.chars().filter(|&c| c as u8 == delimiter).count();
                field_counts.push(count);
            }

            // Score by consistency (low standard deviation) and frequency
            if !field_counts.is_empty() {
                let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
                let variance = field_counts
                    .iter()
                    .map(|&x| (x as f32 - avg).powi(2))
                    .sum::<f32>()
                    / field_counts.len() as f32;

                let score = avg / (1.0 + variance.sqrt());

                if score > best_score {
                    best_score = score;
                    best_delimiter = delimiter;
                }
            }
        }

        best_delimiter
    }
}
