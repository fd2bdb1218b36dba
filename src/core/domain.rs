use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "libraryData.json";

// Identifiable defines the matching key shared by catalog records
pub trait Identifiable {
    fn id(&self) -> &str;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(Path::new(DEFAULT_DATA_FILE))
    }
}
