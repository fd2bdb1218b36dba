use crate::catalog::domain::model::Catalog;
use crate::catalog::dto::CatalogDocument;
use crate::catalog::repository::CatalogRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryCatalogRepository holds the last saved document as serialized JSON so
// that it goes through the same conversions as the file repository.
#[derive(Debug, Default)]
pub struct MemoryCatalogRepository {
    json: Option<String>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(json: &str) -> Self {
        Self {
            json: Some(json.to_string()),
        }
    }
}

impl Repository<Catalog> for MemoryCatalogRepository {
    fn load(&self) -> LibraryResult<Option<Catalog>> {
        match self.json.as_deref() {
            Some(json) if !json.trim().is_empty() => {
                let doc: CatalogDocument = serde_json::from_str(json)?;
                Catalog::try_from(doc).map(Some)
            }
            _ => Ok(None),
        }
    }

    fn save(&mut self, catalog: &Catalog) -> LibraryResult<usize> {
        let doc = CatalogDocument::stamped(catalog);
        self.json = Some(serde_json::to_string(&doc)?);
        Ok(doc.books.len())
    }
}

impl CatalogRepository for MemoryCatalogRepository {
    fn location(&self) -> String {
        "memory".to_string()
    }
}
