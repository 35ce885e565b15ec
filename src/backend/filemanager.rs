use std::fs::create_dir_all;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::backend::error::OrganizerError;
use crate::backend::error::Result;

pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn create_or_load() -> Result<Self> {
        let root = match ProjectDirs::from("org", "musicorganizer", "MusicOrganizer") {
            Some(dir_builder) => dir_builder.data_dir().to_path_buf(),
            None => return Err(OrganizerError::UnrecognisedHomeDir),
        };

        Self::at(root)
    }

    pub fn at(root: PathBuf) -> Result<Self> {
        create_dir_all(&root).map_err(|e| OrganizerError::DirectoryNotFound(root.clone(), e))?;
        Ok(Self { root })
    }

    pub fn get_root_ref(&self) -> &Path {
        self.root.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a").join("b");

        let data_dir = DataDir::at(root.clone()).unwrap();
        assert!(root.is_dir());
        assert_eq!(data_dir.get_root_ref(), root.as_path());

        // Second load over an existing directory is fine
        DataDir::at(root).unwrap();
    }
}
