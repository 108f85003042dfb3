use crate::error::RosterError;
use std::{num::IntErrorKind, path::PathBuf};

/// Settings derived from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub count: usize,
    pub path: PathBuf,
}

impl Config {
    /// Build a `Config` from the arguments following the program name.
    ///
    /// Returns `Ok(None)` when the argument count is not exactly two, in which
    /// case the caller should print usage.
    pub fn from_args<I>(args: I) -> Result<Option<Self>, RosterError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let [count, path] = args.as_slice() else {
            return Ok(None);
        };

        Ok(Some(Config {
            count: parse_count(count)?,
            path: PathBuf::from(path),
        }))
    }
}

/// Parse a student count, rejecting anything that is not a non-negative integer.
pub fn parse_count(value: &str) -> Result<usize, RosterError> {
    let out_of_range =
        || RosterError::invalid_argument(format!("student count {value} is out of range"));
    let negative = || RosterError::invalid_argument(format!("student count {value} is negative"));

    let count: i128 = value.trim().parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            IntErrorKind::PosOverflow => out_of_range(),
            IntErrorKind::NegOverflow => negative(),
            _ => RosterError::invalid_argument(format!("{value:?} is not an integer")),
        }
    })?;

    if count < 0 {
        return Err(negative());
    }

    usize::try_from(count).map_err(|_| out_of_range())
}

/// Options controlling how a source is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip the first row of the source.
    pub has_headers: bool,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            has_headers: false,
            delimiter: b',',
        }
    }
}

impl LoadOptions {
    /// Build a csv reader over `reader` using these options.
    pub(crate) fn reader<R: std::io::Read>(&self, reader: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader)
    }
}
