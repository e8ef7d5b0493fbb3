use crate::dataset::Samples;
use crate::error::{LinfitError, MalformedRow, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Outcome of loading a two-column table: the usable samples plus every
/// row that was skipped, in file order.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub samples: Samples,
    pub skipped: Vec<MalformedRow>,
}

/// Loader for `feature,target` CSV files with a header row (e.g. `km,price`).
///
/// Column 0 is the feature, column 1 the target; extra columns are ignored.
/// Rows that fail numeric parsing are skipped with a warning, unless the loader
/// is [`strict`](Self::strict), in which case the first bad row aborts loading.
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    delimiter: Option<u8>,
    strict: bool,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field delimiter, `,` by default.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Fail on the first malformed row instead of skipping it.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let report = self.load_from_reader(BufReader::new(file))?;
        info!(
            "loaded {} samples from '{}' ({} rows skipped)",
            report.samples.len(),
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<LoadReport> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .delimiter(self.delimiter.unwrap_or(b','))
            .from_reader(reader);

        let mut x = Vec::new();
        let mut y = Vec::new();
        let mut skipped = Vec::new();

        for result in rdr.records() {
            let parsed = match result {
                Ok(record) => parse_record(&record),
                Err(e) => Err(MalformedRow {
                    line: e.position().map(|p| p.line()).unwrap_or(0),
                    reason: e.to_string(),
                }),
            };

            match parsed {
                Ok((feature, target)) => {
                    x.push(feature);
                    y.push(target);
                }
                Err(row) if self.strict => return Err(LinfitError::MalformedRow(row)),
                Err(row) => {
                    warn!("skipping {row}");
                    skipped.push(row);
                }
            }
        }

        Ok(LoadReport {
            samples: Samples::new(x, y)?,
            skipped,
        })
    }
}

fn parse_record(record: &StringRecord) -> std::result::Result<(f64, f64), MalformedRow> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let field = |idx: usize, name: &str| -> std::result::Result<f64, MalformedRow> {
        let raw = record.get(idx).ok_or_else(|| MalformedRow {
            line,
            reason: format!("missing {name} column"),
        })?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(MalformedRow {
                line,
                reason: format!("{name} '{raw}' is not a finite number"),
            }),
        }
    };
    Ok((field(0, "feature")?, field(1, "target")?))
}
