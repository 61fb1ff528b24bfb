use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use log::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error reading {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Yields `(key, value)` string pairs for training examples or library entries.
///
/// For training data the key is the raw text and the value its label tag
/// (`"1"` or `"-1"`). For library data the key is a raw token and the value its
/// canonical replacement or `"-"`.
pub trait DataSource: fmt::Debug {
    /// Human-readable identifier used in logs.
    fn name(&self) -> String;

    fn load(&self) -> Result<Vec<(String, String)>, DataSourceError>;
}

/// In-memory pairs.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pairs: Vec<(String, String)>,
}

impl MemorySource {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl DataSource for MemorySource {
    fn name(&self) -> String {
        format!("memory ({} pairs)", self.pairs.len())
    }

    fn load(&self) -> Result<Vec<(String, String)>, DataSourceError> {
        Ok(self.pairs.clone())
    }
}

/// Several sources read one after another as a single source.
#[derive(Debug, Default)]
pub struct ChainedSource<'a> {
    sources: Vec<&'a dyn DataSource>,
}

impl<'a> ChainedSource<'a> {
    pub fn new(sources: Vec<&'a dyn DataSource>) -> Self {
        Self { sources }
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl DataSource for ChainedSource<'_> {
    fn name(&self) -> String {
        let names: Vec<String> = self.sources.iter().map(|s| s.name()).collect();
        format!("[{}]", names.join(", "))
    }

    fn load(&self) -> Result<Vec<(String, String)>, DataSourceError> {
        let mut pairs = Vec::new();
        for source in &self.sources {
            pairs.extend(source.load()?);
        }
        Ok(pairs)
    }
}

/// Two-column CSV file without a header row.
///
/// Fields may be quoted but every row must fit on one line. Rows with fewer
/// than two columns, and rows that fail to parse, are skipped; only failing to
/// read the file is an error.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Reads the first column of every non-empty row.
    pub fn first_column(&self) -> Result<Vec<String>, DataSourceError> {
        Ok(self
            .records()?
            .into_iter()
            .filter_map(|record| record.get(0).map(str::to_string))
            .collect())
    }

    fn records(&self) -> Result<Vec<StringRecord>, DataSourceError> {
        let data = fs::read(&self.path).map_err(|source| DataSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = csv_reader(&data);

        let mut records = Vec::new();
        let mut record = StringRecord::new();
        loop {
            match reader.read_record(&mut record) {
                Ok(false) => break,
                Ok(true) => {
                    let (start, line) = record
                        .position()
                        .map_or((0, 1), |pos| (pos.byte() as usize, pos.line()));
                    let end = (reader.position().byte() as usize).min(data.len());
                    let raw = trim_line_end(&data[start.min(end)..end]);
                    if raw.contains(&b'\n') {
                        // An unbalanced quote runs every following row into one field.
                        let last = line + raw.iter().filter(|&&b| b == b'\n').count() as u64;
                        warn!(
                            "Rows on lines {}-{} of {:?} ran together; reading them one line at a time",
                            line, last, self.path
                        );
                        self.reread_lines(raw, line, &mut records);
                    } else {
                        records.push(record.clone());
                    }
                }
                Err(err) if matches!(err.kind(), ErrorKind::Io(_)) => {
                    return Err(DataSourceError::Csv {
                        path: self.path.clone(),
                        source: err,
                    });
                }
                Err(err) => warn!("Skipping malformed row of {:?}: {}", self.path, err),
            }
        }
        Ok(records)
    }

    fn reread_lines(&self, raw: &[u8], first_line: u64, records: &mut Vec<StringRecord>) {
        for (offset, line) in raw.split(|&b| b == b'\n').enumerate() {
            let line_no = first_line + offset as u64;
            let line = trim_line_end(line);
            if line.is_empty() {
                continue;
            }
            if line.iter().filter(|&&b| b == b'"').count() % 2 == 1 {
                warn!("Skipping line {} of {:?}: unbalanced quote", line_no, self.path);
                continue;
            }
            let mut record = StringRecord::new();
            match csv_reader(line).read_record(&mut record) {
                Ok(true) => records.push(record),
                Ok(false) => {}
                Err(err) => warn!("Skipping line {} of {:?}: {}", line_no, self.path, err),
            }
        }
    }
}

fn csv_reader(data: &[u8]) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data)
}

fn trim_line_end(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

impl DataSource for CsvSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<(String, String)>, DataSourceError> {
        let records = self.records()?;
        let total = records.len();
        let pairs: Vec<(String, String)> = records
            .into_iter()
            .filter(|record| record.len() > 1)
            .map(|record| (record[0].to_string(), record[1].to_string()))
            .collect();
        if pairs.len() < total {
            debug!(
                "Ignored {} rows with fewer than two columns in {:?}",
                total - pairs.len(),
                self.path
            );
        }
        Ok(pairs)
    }
}
