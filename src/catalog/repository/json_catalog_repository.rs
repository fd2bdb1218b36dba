use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::catalog::domain::model::Catalog;
use crate::catalog::dto::CatalogDocument;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// JsonCatalogRepository keeps the catalog in a single JSON file that is
// rewritten in full on every save.
#[derive(Debug)]
pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<Catalog> for JsonCatalogRepository {
    fn load(&self) -> LibraryResult<Option<Catalog>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no data file");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        if json.trim().is_empty() {
            debug!(path = %self.path.display(), "data file is empty");
            return Ok(None);
        }
        let doc: CatalogDocument = serde_json::from_str(&json)?;
        Catalog::try_from(doc).map(Some)
    }

    fn save(&mut self, catalog: &Catalog) -> LibraryResult<usize> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let doc = CatalogDocument::stamped(catalog);
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json)?;
        Ok(doc.books.len())
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use crate::books::Book;
    use crate::books::domain::model::BookRecord;
    use crate::catalog::domain::model::Catalog;
    use crate::catalog::repository::json_catalog_repository::JsonCatalogRepository;
    use crate::core::library::{BookKind, LibraryError};
    use crate::core::repository::Repository;

    fn mixed_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(BookRecord::new("hoi", "Thom", "12-34", 2000, "bio"));
        catalog.add(BookRecord::ebook("hallo", "Hans", "21-43", 2001, "horror", 12));
        catalog
    }

    #[test]
    fn test_should_load_nothing_for_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let repo = JsonCatalogRepository::new(&dir.path().join("missing.json"));
        assert_eq!(None, repo.load().expect("should load"));
    }

    #[test]
    fn test_should_load_nothing_for_empty_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("empty.json");
        fs::write(&path, "  \n").expect("write");
        let repo = JsonCatalogRepository::new(&path);
        assert_eq!(None, repo.load().expect("should load"));
    }

    #[test]
    fn test_should_fail_for_malformed_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"books\": [").expect("write");
        let repo = JsonCatalogRepository::new(&path);
        assert!(matches!(repo.load(), Err(LibraryError::Serialization { .. })));
    }

    #[test]
    fn test_should_round_trip_plain_and_ebook() {
        let dir = TempDir::new().expect("temp dir");
        let mut repo = JsonCatalogRepository::new(&dir.path().join("library.json"));
        let catalog = mixed_catalog();
        assert_eq!(2, repo.save(&catalog).expect("should save"));

        let loaded = repo.load().expect("should load").expect("should have catalog");
        assert_eq!(catalog, loaded);
        assert_eq!(BookKind::EBook, loaded.books()[1].kind());
        assert_eq!(Some(12), loaded.books()[1].file_size_mb());
    }

    #[test]
    fn test_should_overwrite_on_save() {
        let dir = TempDir::new().expect("temp dir");
        let mut repo = JsonCatalogRepository::new(&dir.path().join("library.json"));
        repo.save(&mixed_catalog()).expect("should save");
        repo.save(&Catalog::new()).expect("should save");
        let loaded = repo.load().expect("should load").expect("should have catalog");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_should_create_missing_directories() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("deeper").join("library.json");
        let mut repo = JsonCatalogRepository::new(&path);
        repo.save(&mixed_catalog()).expect("should save");
        assert!(path.exists());
    }

    #[test]
    fn test_should_fail_saving_into_a_file_path() {
        let dir = TempDir::new().expect("temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").expect("write");
        let mut repo = JsonCatalogRepository::new(&blocker.join("library.json"));
        assert!(matches!(repo.save(&mixed_catalog()), Err(LibraryError::Runtime { .. })));
    }
}
