use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::SortKey;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListBooksCommandRequest {
    pub sort_key: SortKey,
}

impl ListBooksCommandRequest {
    pub fn new(sort_key: &str) -> Self {
        Self {
            sort_key: SortKey::from(sort_key),
        }
    }
}

#[derive(Debug)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookRecord>,
}

// sorting reorders the catalog itself, a later save keeps this order
impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        Ok(ListBooksCommandResponse { books: self.catalog_service.list_books(req.sort_key) })
    }
}
