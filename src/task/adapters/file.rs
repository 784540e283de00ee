//! File-backed persistence: one JSON document per namespace.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::task::{
    adapters::codec,
    config::StoreConfig,
    domain::TaskRecord,
    ports::{PersistenceError, PersistenceResult, TaskPersistence},
};

/// Persists the task list as `<namespace>.json` inside a directory.
///
/// The directory is held as a capability handle, so the adapter can only
/// touch files beneath it. Saves write a temporary sibling first and rename
/// it over the document.
#[derive(Debug)]
pub struct FileTaskPersistence {
    dir: Dir,
    root: Utf8PathBuf,
    file_name: String,
}

impl FileTaskPersistence {
    /// Wraps an already opened directory.
    ///
    /// `root` is used only to make error messages point at real paths.
    #[must_use]
    pub fn new(dir: Dir, root: impl Into<Utf8PathBuf>, namespace: &str) -> Self {
        Self {
            dir,
            root: root.into(),
            file_name: format!("{namespace}.json"),
        }
    }

    /// Opens an existing directory with ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the directory cannot be opened.
    pub fn open_ambient(path: &Utf8Path, config: &StoreConfig) -> PersistenceResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| PersistenceError::io(path, err))?;
        Ok(Self::new(dir, path, &config.namespace))
    }

    /// Returns the full path of the JSON document.
    #[must_use]
    pub fn document_path(&self) -> Utf8PathBuf {
        self.root.join(&self.file_name)
    }

    fn temp_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }
}

impl TaskPersistence for FileTaskPersistence {
    fn save(&self, records: &[TaskRecord]) -> PersistenceResult<()> {
        let payload = codec::encode(records)?;
        let temp_name = self.temp_name();
        self.dir
            .write(&temp_name, payload)
            .map_err(|err| PersistenceError::io(self.root.join(&temp_name), err))?;
        self.dir
            .rename(&temp_name, &self.dir, &self.file_name)
            .map_err(|err| PersistenceError::io(self.document_path(), err))
    }

    fn load(&self) -> PersistenceResult<Option<Vec<TaskRecord>>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => Ok(codec::decode(&contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PersistenceError::io(self.document_path(), err)),
        }
    }
}
