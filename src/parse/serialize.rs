use crate::{error::RosterError, store::RecordStore, student::Student};
use serde::{Serialize, Serializer};
use std::io::Write;

/// The representation of a CSV student record on output.
#[derive(Debug, Serialize)]
struct StudentRecord<'a> {
    id: u32,
    name: &'a str,
    #[serde(serialize_with = "score_serialize")]
    score: f64,
}

/// Render a score with two decimal places.
fn score_serialize<S>(x: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&format!("{x:.2}"))
}

impl<'a> From<&'a Student> for StudentRecord<'a> {
    fn from(student: &'a Student) -> Self {
        StudentRecord {
            id: student.id(),
            name: student.name(),
            score: student.score(),
        }
    }
}

/// For each student in the `RecordStore`, serialize and write it to `writer`.
pub fn unload_data<W: Write>(store: &RecordStore, writer: W) -> Result<(), RosterError> {
    let mut wtr = csv::Writer::from_writer(writer);

    for student in store {
        let record: StudentRecord = student.into();
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}
