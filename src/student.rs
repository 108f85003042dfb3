use serde::{Deserialize, Deserializer};

/// A single student entry as stored in a `RecordStore`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    id: u32,
    #[serde(deserialize_with = "name_from_str")]
    name: String,
    #[serde(deserialize_with = "score_from_str")]
    score: f64,
}

impl Student {
    /// Construct a new `Student`.
    pub fn new(id: u32, name: impl Into<String>, score: f64) -> Self {
        Student {
            id,
            name: name.into(),
            score,
        }
    }

    /// Get the student ID.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Get the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the score.
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Deserialize a display name, rejecting blank values.
fn name_from_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(d)?;
    let name = name.trim();

    if name.is_empty() {
        return Err(serde::de::Error::custom("empty name"));
    }

    Ok(name.to_owned())
}

/// Deserialize a score, rejecting NaN and infinities.
fn score_from_str<'de, D>(d: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(d)?;

    if !score.is_finite() {
        return Err(serde::de::Error::custom("score is not a finite number"));
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::Student;

    fn read_one(entry: &str) -> Result<Student, csv::Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(entry.as_bytes());
        let mut iter = rdr.deserialize::<Student>();
        iter.next().expect("No Items")
    }

    #[test]
    fn deserialize_student() {
        let student = read_one("1,Alice,90").expect("Deserialize Failure");

        assert_eq!(student, Student::new(1, "Alice", 90.0));
    }

    #[test]
    fn deserialize_trimmed() {
        let student = read_one(" 2 , Bob Smith ,  85.5").expect("Deserialize Failure");

        assert_eq!(student.id(), 2);
        assert_eq!(student.name(), "Bob Smith");
        assert_eq!(student.score(), 85.5);
    }

    #[test]
    fn blank_name() {
        assert!(read_one("1,  ,90").is_err());
    }

    #[test]
    fn bad_id() {
        assert!(read_one("x,Alice,90").is_err());
        assert!(read_one("-1,Alice,90").is_err());
    }

    #[test]
    fn bad_score() {
        assert!(read_one("1,Alice,").is_err());
        assert!(read_one("1,Alice,NaN").is_err());
        assert!(read_one("1,Alice,ninety").is_err());
    }
}
