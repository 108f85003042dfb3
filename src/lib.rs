//! Bounded loading of student records from delimited text.

pub mod config;
pub mod error;
pub mod parse;
pub mod store;
pub mod student;

pub use config::{Config, LoadOptions};
pub use error::RosterError;
pub use store::RecordStore;
pub use student::Student;
