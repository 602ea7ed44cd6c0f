//! CSV training corpus reader
//!
//! Each row is `language, text, [text, ...]` with no header row and a
//! variable number of columns. Rows are validated here, where the file
//! name and line number are known, so the trainer only ever sees
//! well-formed records.

use super::TrainingRecord;
use crate::error::{LangIdError, LangIdResult};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default per-field limit in characters. Training texts are often whole
/// documents in a single cell.
pub const DEFAULT_MAX_FIELD_LEN: usize = 100_000_000;

/// Reads training records from CSV with an explicit field-size limit.
#[derive(Debug, Clone, Copy)]
pub struct CorpusReader {
    max_field_len: usize,
}

impl Default for CorpusReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FIELD_LEN)
    }
}

impl CorpusReader {
    pub fn new(max_field_len: usize) -> Self {
        Self { max_field_len }
    }

    pub fn max_field_len(&self) -> usize {
        self.max_field_len
    }

    /// Open a CSV file and iterate its records.
    pub fn open(&self, path: &Path) -> LangIdResult<CorpusRecords<BufReader<File>>> {
        let file = File::open(path).map_err(|e| LangIdError::io(path, e))?;
        Ok(self.records(BufReader::new(file), &path.display().to_string()))
    }

    /// Iterate records from any reader. `source_name` appears in errors.
    pub fn records<R: Read>(&self, reader: R, source_name: &str) -> CorpusRecords<R> {
        let inner = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        CorpusRecords {
            inner,
            source_name: source_name.to_string(),
            max_field_len: self.max_field_len,
        }
    }
}

/// Iterator over validated [`TrainingRecord`]s of one source.
pub struct CorpusRecords<R> {
    inner: csv::StringRecordsIntoIter<R>,
    source_name: String,
    max_field_len: usize,
}

impl<R: Read> CorpusRecords<R> {
    fn to_record(&self, row: csv::StringRecord) -> LangIdResult<TrainingRecord> {
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let malformed = |reason: &str| LangIdError::MalformedRecord {
            source_name: self.source_name.clone(),
            line,
            reason: reason.to_string(),
        };

        for field in row.iter() {
            // Byte length bounds the char count from above, so only long
            // fields pay for counting.
            if field.len() > self.max_field_len {
                let len = field.chars().count();
                if len > self.max_field_len {
                    return Err(LangIdError::FieldTooLarge {
                        source_name: self.source_name.clone(),
                        line,
                        len,
                        limit: self.max_field_len,
                    });
                }
            }
        }

        let mut fields = row.iter();
        let label = match fields.next() {
            Some(label) if !label.trim().is_empty() => label.to_string(),
            _ => return Err(malformed("missing language label")),
        };
        let texts: Vec<String> = fields.map(str::to_string).collect();
        if texts.is_empty() {
            return Err(malformed("no text fields after the language label"));
        }

        Ok(TrainingRecord { label, texts })
    }
}

impl<R: Read> Iterator for CorpusRecords<R> {
    type Item = LangIdResult<TrainingRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.inner.next()?;
        Some(row.map_err(LangIdError::from).and_then(|row| self.to_record(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(reader: CorpusReader, csv: &str) -> LangIdResult<Vec<TrainingRecord>> {
        reader.records(csv.as_bytes(), "test.csv").collect()
    }

    #[test]
    fn test_variable_width_rows() {
        let records = read_all(
            CorpusReader::default(),
            "en,the cat sat\nfr,le chat,est assis,sur le tapis\n",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "en");
        assert_eq!(records[0].texts, vec!["the cat sat"]);
        assert_eq!(records[1].texts.len(), 3);
    }

    #[test]
    fn test_quoted_fields_keep_commas_and_newlines() {
        let records = read_all(
            CorpusReader::default(),
            "en,\"one, two\nthree\"\n",
        )
        .unwrap();
        assert_eq!(records[0].texts, vec!["one, two\nthree"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let records = read_all(CorpusReader::default(), "en,abc\n\n\nde,def\n").unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_label_fails_with_line() {
        let err = read_all(CorpusReader::default(), "en,abc\n,orphan text\n").unwrap_err();
        match err {
            LangIdError::MalformedRecord { source_name, line, reason } => {
                assert_eq!(source_name, "test.csv");
                assert_eq!(line, 2);
                assert!(reason.contains("label"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_label_without_text_fails() {
        let err = read_all(CorpusReader::default(), "en\n").unwrap_err();
        assert!(matches!(err, LangIdError::MalformedRecord { line: 1, .. }), "got {err:?}");
    }

    #[test]
    fn test_field_limit_is_enforced() {
        let err = read_all(CorpusReader::new(5), "en,abcdef\n").unwrap_err();
        match err {
            LangIdError::FieldTooLarge { len, limit, .. } => {
                assert_eq!(len, 6);
                assert_eq!(limit, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_field_limit_counts_characters() {
        // Six bytes, three characters.
        let records = read_all(CorpusReader::new(3), "xx,äöü\n").unwrap();
        assert_eq!(records[0].texts, vec!["äöü"]);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CorpusReader::default()
            .open(&dir.path().join("nope.csv"))
            .err()
            .unwrap();
        assert!(matches!(err, LangIdError::Io { .. }));
    }
}
