use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RemoveBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

// removed is zero when no record carried the isbn, which is not an error
#[derive(Debug)]
pub struct RemoveBookCommandResponse {
    pub isbn: String,
    pub removed: usize,
}

impl RemoveBookCommandResponse {
    pub fn new(isbn: String, removed: usize) -> Self {
        Self {
            isbn,
            removed,
        }
    }
}

impl<'a> Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand<'a> {
    fn execute(&mut self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let removed = self.catalog_service.remove_book(req.isbn.as_str());
        Ok(RemoveBookCommandResponse::new(req.isbn, removed))
    }
}
