use tracing::{debug, info, warn};
use crate::books::domain::model::BookRecord;
use crate::catalog::domain::{CatalogService, LoadOutcome};
use crate::catalog::domain::model::{Catalog, SortKey};
use crate::catalog::repository::CatalogRepository;
use crate::core::library::LibraryResult;

pub struct CatalogServiceImpl {
    catalog: Catalog,
    repository: Box<dyn CatalogRepository>,
}

impl CatalogServiceImpl {
    pub fn new(repository: Box<dyn CatalogRepository>) -> Self {
        Self {
            catalog: Catalog::new(),
            repository,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: BookRecord) {
        debug!(isbn = book.isbn(), title = book.title(), "adding book");
        self.catalog.add(book);
    }

    fn remove_book(&mut self, isbn: &str) -> usize {
        let removed = self.catalog.remove_by_isbn(isbn);
        debug!(isbn, removed, "removed books");
        removed
    }

    fn search_books(&self, query: &str) -> Vec<BookRecord> {
        self.catalog.search(query).into_iter().cloned().collect()
    }

    fn list_books(&mut self, sort_key: SortKey) -> Vec<BookRecord> {
        self.catalog.list_sorted(sort_key).to_vec()
    }

    fn load(&mut self) -> LoadOutcome {
        let location = self.repository.location();
        match self.repository.load() {
            Ok(Some(catalog)) => {
                info!(location = %location, books = catalog.len(), "library loaded");
                self.catalog = catalog;
                LoadOutcome::Loaded(self.catalog.len())
            }
            Ok(None) => {
                info!(location = %location, "no library data found");
                self.catalog = Catalog::new();
                LoadOutcome::Fresh
            }
            Err(err) => {
                warn!(location = %location, error = %err, "an error occurred while loading the library, starting empty");
                self.catalog = Catalog::new();
                LoadOutcome::Recovered(err)
            }
        }
    }

    fn save(&mut self) -> LibraryResult<usize> {
        let location = self.repository.location();
        self.repository.save(&self.catalog)
            .map(|written| {
                info!(location = %location, books = written, "library saved");
                written
            })
            .map_err(|err| {
                warn!(location = %location, error = %err, "an error occurred while saving the library");
                err
            })
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
