use std::cmp::Ordering;
use crate::books::Book;
use crate::books::domain::model::BookRecord;
use crate::core::domain::Identifiable;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortKey {
    #[default]
    Title,
    Author,
    PublicationYear,
}

// Unknown keys fall back to title ordering. The digits match the old console menu.
impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "author" | "2" => SortKey::Author,
            "year" | "publicationyear" | "publication_year" | "3" => SortKey::PublicationYear,
            _ => SortKey::Title,
        }
    }
}

// Text compares case-folded first, the raw text only breaks ties
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue<'a> {
    Text { folded: String, raw: &'a str },
    Number(i64),
}

impl<'a> SortValue<'a> {
    fn text(raw: &'a str) -> Self {
        SortValue::Text { folded: raw.to_lowercase(), raw }
    }
}

fn sort_value(book: &BookRecord, key: SortKey) -> Option<SortValue<'_>> {
    match key {
        SortKey::Title => Some(SortValue::text(book.title())),
        SortKey::Author => Some(SortValue::text(book.author())),
        SortKey::PublicationYear => Some(SortValue::Number(book.publication_year())),
    }
}

/// Orders two records by `key`. An absent value sorts before any present
/// value and two absent values compare equal.
pub fn compare_books(key: SortKey, a: &BookRecord, b: &BookRecord) -> Ordering {
    compare_nullable(sort_value(a, key), sort_value(b, key))
}

fn compare_nullable<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp(&b),
    }
}

// Catalog is the ordered collection of book records. It keeps insertion
// order until list_sorted reorders it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_books(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn add(&mut self, book: BookRecord) {
        self.books.push(book);
    }

    /// Removes every record with exactly this isbn and returns how many went.
    pub fn remove_by_isbn(&mut self, isbn: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id() != isbn);
        before - self.books.len()
    }

    pub fn search(&self, query: &str) -> Vec<&BookRecord> {
        self.books.iter().filter(|book| book.is_match(query)).collect()
    }

    /// Sorts the catalog itself, not a copy.
    pub fn list_sorted(&mut self, key: SortKey) -> &[BookRecord] {
        self.books.sort_unstable_by(|a, b| compare_books(key, a, b));
        &self.books
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
