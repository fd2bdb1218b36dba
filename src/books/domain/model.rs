use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::Book;
use crate::core::domain::Identifiable;
use crate::core::library::BookKind;

// BookFormat carries the variant specific payload of a book record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookFormat {
    Plain,
    EBook { file_size_mb: i64 },
}

// BookRecord abstracts a single catalog entry. The isbn is a matching key only,
// several records may share it. Records are never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    title: String,
    author: String,
    isbn: String,
    publication_year: i64,
    genre: String,
    format: BookFormat,
}

impl BookRecord {
    pub fn new(title: &str, author: &str, isbn: &str, publication_year: i64, genre: &str) -> Self {
        Self::with_format(title, author, isbn, publication_year, genre, BookFormat::Plain)
    }

    pub fn ebook(title: &str, author: &str, isbn: &str, publication_year: i64, genre: &str, file_size_mb: i64) -> Self {
        Self::with_format(title, author, isbn, publication_year, genre, BookFormat::EBook { file_size_mb })
    }

    pub fn with_format(title: &str, author: &str, isbn: &str, publication_year: i64, genre: &str, format: BookFormat) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            publication_year,
            genre: genre.to_string(),
            format,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn publication_year(&self) -> i64 {
        self.publication_year
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn format(&self) -> BookFormat {
        self.format
    }

    pub fn file_size_mb(&self) -> Option<i64> {
        match self.format {
            BookFormat::Plain => None,
            BookFormat::EBook { file_size_mb } => Some(file_size_mb),
        }
    }
}

impl Identifiable for BookRecord {
    fn id(&self) -> &str {
        &self.isbn
    }
}

impl Book for BookRecord {
    fn kind(&self) -> BookKind {
        match self.format {
            BookFormat::Plain => BookKind::Plain,
            BookFormat::EBook { .. } => BookKind::EBook,
        }
    }

    fn is_match(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.author.to_lowercase().contains(&query)
    }
}

impl Display for BookRecord {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.format {
            BookFormat::Plain => write!(f, "{} by {} is a {} book published in {} with isbn {}",
                                        self.title, self.author, self.genre, self.publication_year, self.isbn),
            BookFormat::EBook { file_size_mb } => write!(f, "{} by {} is a {} type book published in {} with isbn {}, its filesize is {}mb",
                                                         self.title, self.author, self.genre, self.publication_year, self.isbn, file_size_mb),
        }
    }
}
