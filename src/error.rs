use std::{error, fmt, io};

#[derive(Debug)]
pub enum RosterError {
    /// A configuration value or command line argument is out of range.
    InvalidArgument(String),

    /// IO error occured while reading the source or writing results.
    IoError(io::Error),

    /// A failure in the csv layer that is not tied to a single record.
    CsvError(csv::Error),

    /// An entry could not be parsed into a student.
    MalformedRecord { line: u64, reason: String },

    /// Two records share the same student ID.
    DuplicateId(u32),

    /// The source ran out before the expected number of records was read.
    CountMismatch { expected: usize, actual: usize },

    /// The store has already been populated.
    AlreadyLoaded,

    /// The store was queried before a successful load.
    NotLoaded,

    /// The student ID does not match a loaded record.
    NotFound(u32),
}

impl RosterError {
    /// Construct an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RosterError::InvalidArgument(msg.into())
    }

    /// Construct a MalformedRecord error.
    pub fn malformed(line: u64, reason: impl fmt::Display) -> Self {
        RosterError::MalformedRecord {
            line,
            reason: reason.to_string(),
        }
    }

    /// Construct a CountMismatch error.
    pub fn count_mismatch(expected: usize, actual: usize) -> Self {
        RosterError::CountMismatch { expected, actual }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            RosterError::IoError(err) => write!(f, "io error: {err}"),
            RosterError::CsvError(err) => write!(f, "csv error: {err}"),
            RosterError::MalformedRecord { line, reason } => {
                write!(f, "malformed record on line {line}: {reason}")
            }
            RosterError::DuplicateId(id) => {
                write!(f, "student with id {id} already exists")
            }
            RosterError::CountMismatch { expected, actual } => write!(
                f,
                "expected {expected} student records but the source only held {actual}"
            ),
            RosterError::AlreadyLoaded => write!(f, "records have already been loaded"),
            RosterError::NotLoaded => write!(f, "records have not been loaded"),
            RosterError::NotFound(id) => {
                write!(f, "student with id {id} does not exist")
            }
        }
    }
}

impl From<io::Error> for RosterError {
    fn from(error: io::Error) -> Self {
        RosterError::IoError(error)
    }
}

impl From<csv::Error> for RosterError {
    fn from(error: csv::Error) -> Self {
        RosterError::CsvError(error)
    }
}

impl error::Error for RosterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            RosterError::IoError(err) => Some(err),
            RosterError::CsvError(err) => Some(err),
            _ => None,
        }
    }
}
