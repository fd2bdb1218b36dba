use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{LibraryError, LibraryResult};

pub struct AddBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> AddBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: i64,
    pub genre: String,
    pub ebook: bool,
    pub file_size_mb: Option<i64>,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i64, genre: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
            genre: genre.to_string(),
            ebook: false,
            file_size_mb: None,
        }
    }

    pub fn with_file_size(mut self, file_size_mb: i64) -> Self {
        self.ebook = true;
        self.file_size_mb = Some(file_size_mb);
        self
    }

    pub fn build_book(&self) -> LibraryResult<BookRecord> {
        match (self.ebook, self.file_size_mb) {
            (true, Some(file_size_mb)) => Ok(BookRecord::ebook(
                &self.title, &self.author, &self.isbn, self.publication_year, &self.genre, file_size_mb)),
            (false, None) => Ok(BookRecord::new(
                &self.title, &self.author, &self.isbn, self.publication_year, &self.genre)),
            (true, None) => Err(LibraryError::validation(
                "an e-book needs a file size in mb", Some("missing_file_size".to_string()))),
            (false, Some(_)) => Err(LibraryError::validation(
                "a file size only applies to e-books", Some("unexpected_file_size".to_string()))),
        }
    }
}

#[derive(Debug)]
pub struct AddBookCommandResponse {
    pub book: BookRecord,
    pub total: usize,
}

impl AddBookCommandResponse {
    pub fn new(book: BookRecord, total: usize) -> Self {
        Self {
            book,
            total,
        }
    }
}

impl<'a> Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand<'a> {
    fn execute(&mut self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book().map_err(CommandError::from)?;
        self.catalog_service.add_book(book.clone());
        Ok(AddBookCommandResponse::new(book, self.catalog_service.catalog().len()))
    }
}
