use std::fs;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::{Error, IOError, JSONError};

/// A flat record kind with its own table file.
pub trait Record: Serialize + DeserializeOwned {
    const TABLE: &'static str;
}

/// JSON-file record store, one `<table>.json` array per record kind.
///
/// Inserts append; nothing is ever merged or replaced. A table file is only
/// ever replaced by renaming a fully written sibling over it.
pub struct RecordStore {
    base_path: PathBuf,
}

impl RecordStore {
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).map_err(|e| IOError::new(&base_path, e))?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Appends `records` to their table and returns how many were written.
    pub fn insert<R: Record>(&self, records: &[R]) -> Result<usize, Error> {
        let mut batch = self.batch();
        let count = batch.stage(records)?;
        batch.commit()?;
        Ok(count)
    }

    /// Starts a write spanning several tables.
    pub fn batch(&self) -> Batch<'_> {
        Batch {
            store: self,
            staged: Vec::new(),
        }
    }

    /// All rows of a table; a table never written to is empty.
    pub fn load<R: Record>(&self) -> Result<Vec<R>, Error> {
        let table_file = self.table_file::<R>();
        match read_raw(&table_file)? {
            Some(raw) => parse_rows(&table_file, &raw),
            None => Ok(Vec::new()),
        }
    }

    pub fn clear(&self) -> Result<(), Error> {
        match fs::remove_dir_all(&self.base_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(IOError::new(&self.base_path, e).into()),
        }
    }

    fn table_file<R: Record>(&self) -> PathBuf {
        let mut table_file = self.base_path.clone();
        table_file.push(R::TABLE);
        table_file.set_extension("json");
        table_file
    }
}

/// Appends to several tables that land together or not at all.
///
/// Each table is fully written to a `.json.tmp` sibling while staging;
/// [`Batch::commit`] renames them into place and puts back the previous
/// contents if any rename fails. Dropping an uncommitted batch discards it.
pub struct Batch<'a> {
    store: &'a RecordStore,
    staged: Vec<Staged>,
}

struct Staged {
    table_file: PathBuf,
    staged_file: PathBuf,
    previous: Option<String>,
}

impl Batch<'_> {
    /// Writes the table with `records` appended to its staging file.
    pub fn stage<R: Record>(&mut self, records: &[R]) -> Result<usize, Error> {
        if records.is_empty() {
            return Ok(0);
        }
        let table_file = self.store.table_file::<R>();
        let previous = read_raw(&table_file)?;
        let mut rows: Vec<serde_json::Value> = match &previous {
            Some(raw) => parse_rows(&table_file, raw)?,
            None => Vec::new(),
        };
        for record in records {
            rows.push(
                serde_json::to_value(record)
                    .map_err(|e| JSONError::new(Some(table_file.clone()), e))?,
            );
        }

        let raw = serde_json::to_string_pretty(&rows)
            .map_err(|e| JSONError::new(Some(table_file.clone()), e))?;
        let base_path = &self.store.base_path;
        fs::create_dir_all(base_path).map_err(|e| IOError::new(base_path, e))?;
        let staged_file = table_file.with_extension("json.tmp");
        fs::write(&staged_file, raw).map_err(|e| IOError::new(&staged_file, e))?;

        self.staged.push(Staged {
            table_file,
            staged_file,
            previous,
        });
        Ok(records.len())
    }

    pub fn commit(mut self) -> Result<(), Error> {
        let staged = mem::take(&mut self.staged);
        for (done, entry) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(&entry.staged_file, &entry.table_file) {
                staged[..done].iter().for_each(Staged::restore);
                staged[done..].iter().for_each(Staged::discard);
                return Err(IOError::new(&entry.table_file, e).into());
            }
        }
        Ok(())
    }
}

impl Drop for Batch<'_> {
    fn drop(&mut self) {
        self.staged.iter().for_each(Staged::discard);
    }
}

impl Staged {
    fn restore(&self) {
        let restored = match &self.previous {
            Some(raw) => fs::write(&self.table_file, raw),
            None => fs::remove_file(&self.table_file),
        };
        if let Err(e) = restored {
            warn!(file = %self.table_file.display(), error = %e, "could not restore table");
        }
    }

    fn discard(&self) {
        let _ = fs::remove_file(&self.staged_file);
    }
}

fn read_raw(table_file: &Path) -> Result<Option<String>, Error> {
    match fs::read_to_string(table_file) {
        Ok(raw) => Ok(Some(raw)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(IOError::new(table_file, e).into()),
    }
}

fn parse_rows<T: DeserializeOwned>(table_file: &Path, raw: &str) -> Result<Vec<T>, Error> {
    serde_json::from_str(raw).map_err(|e| JSONError::new(Some(table_file.into()), e).into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::records::{CountryRecord, VenueRecord};

    fn country(name: &str, code: &str) -> CountryRecord {
        CountryRecord {
            name: name.into(),
            code: code.into(),
        }
    }

    #[test]
    fn unwritten_table_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        let venues: Vec<VenueRecord> = store.load().unwrap();
        assert!(venues.is_empty());
    }

    #[test]
    fn insert_appends_without_merging() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        assert_eq!(store.insert(&[country("England", "GB")]).unwrap(), 1);
        assert_eq!(
            store
                .insert(&[country("England", "GB"), country("Spain", "ES")])
                .unwrap(),
            2
        );

        let countries: Vec<CountryRecord> = store.load().unwrap();
        assert_eq!(
            countries,
            vec![
                country("England", "GB"),
                country("England", "GB"),
                country("Spain", "ES"),
            ]
        );
        assert!(dir.path().join("countries.json").exists());
    }

    #[test]
    fn tables_are_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        store.insert(&[country("England", "GB")]).unwrap();

        let venues: Vec<VenueRecord> = store.load().unwrap();
        assert!(venues.is_empty());
        assert!(!dir.path().join("venues.json").exists());
    }

    #[test]
    fn clear_removes_everything() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("data");
        let store = RecordStore::open(&base).unwrap();
        store.insert(&[country("England", "GB")]).unwrap();

        store.clear().unwrap();
        assert!(!base.exists());

        // clearing twice is fine, and the store recreates its directory
        store.clear().unwrap();
        store.insert(&[country("Wales", "GB-WLS")]).unwrap();
        let countries: Vec<CountryRecord> = store.load().unwrap();
        assert_eq!(countries.len(), 1);
    }

    #[test]
    fn insert_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();

        store.insert(&[country("England", "GB")]).unwrap();

        assert!(dir.path().join("countries.json").exists());
        assert!(!dir.path().join("countries.json.tmp").exists());
    }

    #[test]
    fn failed_stage_discards_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        fs::create_dir(dir.path().join("venues.json")).unwrap();

        let mut batch = store.batch();
        batch.stage(&[country("England", "GB")]).unwrap();
        assert!(batch.stage(&[VenueRecord::default()]).is_err());
        drop(batch);

        let countries: Vec<CountryRecord> = store.load().unwrap();
        assert!(countries.is_empty());
        assert!(!dir.path().join("countries.json.tmp").exists());
    }

    #[test]
    fn failed_commit_restores_committed_tables() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        store.insert(&[country("England", "GB")]).unwrap();

        let mut batch = store.batch();
        batch.stage(&[country("Spain", "ES")]).unwrap();
        batch.stage(&[VenueRecord::default()]).unwrap();
        // the venues rename cannot replace a directory
        fs::create_dir(dir.path().join("venues.json")).unwrap();

        let err = batch.commit().unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let countries: Vec<CountryRecord> = store.load().unwrap();
        assert_eq!(countries, vec![country("England", "GB")]);
        assert!(!dir.path().join("venues.json.tmp").exists());
    }

    #[test]
    fn corrupt_table_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("countries.json"), "{not json").unwrap();

        let err = store.load::<CountryRecord>().unwrap_err();
        assert!(matches!(err, Error::JSON(_)));
    }
}
