use crate::{config::LoadOptions, error::RosterError, student::Student};
use std::io::Read;

/// Number of fields in an `id,name,score` entry.
const FIELD_COUNT: usize = 3;

/// Lazily read students from `reader`, one entry per line.
///
/// Nothing past the last entry pulled from the iterator is read.
pub fn read_students<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> impl Iterator<Item = Result<Student, RosterError>> {
    options.reader(reader).into_records().map(|result| {
        let record = result.map_err(record_error)?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.len() != FIELD_COUNT {
            return Err(RosterError::malformed(
                line,
                format!("expected {FIELD_COUNT} fields, found {}", record.len()),
            ));
        }

        record
            .deserialize::<Student>(None)
            .map_err(|err| deserialize_error(line, err))
    })
}

/// Classify a failure to read a raw entry.
fn record_error(err: csv::Error) -> RosterError {
    if let csv::ErrorKind::Utf8 { pos, err: utf8 } = err.kind() {
        let line = pos.as_ref().map_or(0, |pos| pos.line());
        return RosterError::malformed(line, utf8);
    }

    err.into()
}

/// Turn a field level failure into a `MalformedRecord` at `line`.
fn deserialize_error(line: u64, err: csv::Error) -> RosterError {
    match err.kind() {
        csv::ErrorKind::Deserialize { err: de, .. } => RosterError::malformed(line, de),
        _ => RosterError::malformed(line, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::read_students;
    use crate::{config::LoadOptions, error::RosterError, student::Student};

    #[test]
    fn read_in_order() {
        let csv = "1,Alice,90\n2,Bob,85\n";
        let students: Vec<Student> = read_students(csv.as_bytes(), &LoadOptions::default())
            .collect::<Result<_, _>>()
            .expect("Deserialize Failure");

        assert_eq!(
            students,
            vec![Student::new(1, "Alice", 90.0), Student::new(2, "Bob", 85.0)]
        );
    }

    #[test]
    fn skip_header() {
        let csv = "id,name,score\n1,Alice,90\n";
        let options = LoadOptions {
            has_headers: true,
            ..LoadOptions::default()
        };
        let mut iter = read_students(csv.as_bytes(), &options);
        let student = iter.next().expect("No Items").expect("Deserialize Failure");

        assert_eq!(student.name(), "Alice");
        assert!(iter.next().is_none());
    }

    #[test]
    fn custom_delimiter() {
        let csv = "1;Alice;90";
        let options = LoadOptions {
            delimiter: b';',
            ..LoadOptions::default()
        };
        let mut iter = read_students(csv.as_bytes(), &options);
        let student = iter.next().expect("No Items").expect("Deserialize Failure");

        assert_eq!(student, Student::new(1, "Alice", 90.0));
    }

    #[test]
    fn malformed_line_number() {
        let csv = "1,Alice,90\n2,Bob,lots\n";
        let mut iter = read_students(csv.as_bytes(), &LoadOptions::default());
        iter.next().expect("No Items").expect("Deserialize Failure");
        let result = iter.next().expect("No Items");

        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn missing_field() {
        let csv = "1,Alice,90\n2,Bob\n";
        let mut iter = read_students(csv.as_bytes(), &LoadOptions::default());
        iter.next().expect("No Items").expect("Deserialize Failure");
        let result = iter.next().expect("No Items");

        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn extra_field() {
        let csv = "1,Alice,90\n2,Bob,85,95\n";
        let mut iter = read_students(csv.as_bytes(), &LoadOptions::default());
        iter.next().expect("No Items").expect("Deserialize Failure");
        let result = iter.next().expect("No Items");

        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 2, ref reason }) if reason == "expected 3 fields, found 4"
        ));
    }

    #[test]
    fn invalid_utf8() {
        let csv: &[u8] = b"1,Alice,90\n2,B\xffb,85\n";
        let mut iter = read_students(csv, &LoadOptions::default());
        iter.next().expect("No Items").expect("Deserialize Failure");
        let result = iter.next().expect("No Items");

        assert!(matches!(result, Err(RosterError::MalformedRecord { .. })));
    }
}
