use crate::{
    config::LoadOptions, error::RosterError, parse::deserialize::read_students, student::Student,
};
use log::{debug, info, warn};
use std::{
    collections::{hash_map::Entry, HashMap},
    fs::File,
    io::{BufReader, Read},
    path::Path,
    slice::Iter,
};

/// Upper bound on up-front allocation, the expected count comes from user input.
const PREALLOCATE_LIMIT: usize = 4096;

/// A fixed capacity collection of students populated by a single load.
#[derive(Debug)]
pub struct RecordStore {
    expected: usize,
    loaded: bool,
    records: Vec<Student>,
    index: HashMap<u32, usize>,
}

impl RecordStore {
    /// Construct an empty, unloaded `RecordStore` that will hold `expected` students.
    pub fn new(expected: usize) -> Self {
        RecordStore {
            expected,
            loaded: false,
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Construct a `RecordStore` from a signed count, rejecting negative values.
    pub fn with_count(expected: i64) -> Result<Self, RosterError> {
        let expected = usize::try_from(expected).map_err(|_| {
            RosterError::invalid_argument(format!("student count {expected} is negative"))
        })?;

        Ok(RecordStore::new(expected))
    }

    /// Get the number of students the store was constructed to hold.
    #[inline]
    pub fn expected_count(&self) -> usize {
        self.expected
    }

    /// Return whether a load has completed successfully.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Get the number of loaded students, zero until a load succeeds.
    #[inline]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Open the file at `path` and load students from it.
    /// The file is closed before this returns, whatever the outcome.
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RosterError> {
        if self.loaded {
            return Err(RosterError::AlreadyLoaded);
        }

        let path = path.as_ref();
        debug!("opening {}", path.display());
        let f = File::open(path)?;
        self.load(BufReader::new(f))
    }

    /// Load students from `reader` using the default `LoadOptions`.
    pub fn load<R: Read>(&mut self, reader: R) -> Result<(), RosterError> {
        self.load_with(reader, &LoadOptions::default())
    }

    /// Load students from `reader`, reading at most the expected number of entries.
    pub fn load_with<R: Read>(
        &mut self,
        reader: R,
        options: &LoadOptions,
    ) -> Result<(), RosterError> {
        if self.loaded {
            return Err(RosterError::AlreadyLoaded);
        }

        self.load_records(read_students(reader, options))
    }

    /// Load already parsed entries.
    ///
    /// The store is only populated when every entry up to the expected count
    /// is present, well formed and unique. On failure it is left unloaded.
    pub fn load_records<I>(&mut self, source: I) -> Result<(), RosterError>
    where
        I: IntoIterator<Item = Result<Student, RosterError>>,
    {
        if self.loaded {
            return Err(RosterError::AlreadyLoaded);
        }

        match gather_records(self.expected, source) {
            Ok((records, index)) => {
                info!("loaded {} student records", records.len());
                self.records = records;
                self.index = index;
                self.loaded = true;
                Ok(())
            }
            Err(err) => {
                warn!("load failed: {err}");
                Err(err)
            }
        }
    }

    /// Look up a student by ID.
    pub fn get(&self, id: u32) -> Result<&Student, RosterError> {
        if !self.loaded {
            return Err(RosterError::NotLoaded);
        }

        self.index
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(RosterError::NotFound(id))
    }

    /// Iterate over the loaded students in load order.
    pub fn all(&self) -> Iter<'_, Student> {
        self.records.iter()
    }
}

/// Pull up to `expected` students from `source` into a fresh record list and index.
fn gather_records<I>(
    expected: usize,
    source: I,
) -> Result<(Vec<Student>, HashMap<u32, usize>), RosterError>
where
    I: IntoIterator<Item = Result<Student, RosterError>>,
{
    let capacity = expected.min(PREALLOCATE_LIMIT);
    let mut records = Vec::with_capacity(capacity);
    let mut index = HashMap::with_capacity(capacity);

    for result in source.into_iter().take(expected) {
        let student = result?;

        match index.entry(student.id()) {
            Entry::Occupied(_) => return Err(RosterError::DuplicateId(student.id())),
            Entry::Vacant(entry) => {
                entry.insert(records.len());
            }
        }

        debug!("accepted student {}", student.id());
        records.push(student);
    }

    if records.len() < expected {
        return Err(RosterError::count_mismatch(expected, records.len()));
    }

    Ok((records, index))
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Student;
    type IntoIter = Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
