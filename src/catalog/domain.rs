pub mod model;
pub mod service;

use crate::books::domain::model::BookRecord;
use crate::catalog::domain::model::{Catalog, SortKey};
use crate::core::library::{LibraryError, LibraryResult};

// LoadOutcome tells the caller how the catalog was obtained. A recovered load
// leaves an empty catalog and carries the error to report as a warning.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(usize),
    Fresh,
    Recovered(LibraryError),
}

impl LoadOutcome {
    pub fn warning(&self) -> Option<&LibraryError> {
        match self {
            LoadOutcome::Recovered(err) => Some(err),
            _ => None,
        }
    }
}

pub trait CatalogService {
    fn add_book(&mut self, book: BookRecord);
    fn remove_book(&mut self, isbn: &str) -> usize;
    fn search_books(&self, query: &str) -> Vec<BookRecord>;
    fn list_books(&mut self, sort_key: SortKey) -> Vec<BookRecord>;
    fn load(&mut self) -> LoadOutcome;
    fn save(&mut self) -> LibraryResult<usize>;
    fn catalog(&self) -> &Catalog;
}
