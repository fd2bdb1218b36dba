use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookRecord;
use crate::books::dto::BookDto;
use crate::catalog::domain::model::Catalog;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::optional_serializer;

// CatalogDocument is the top level object of the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default, with = "optional_serializer", skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<NaiveDateTime>,
    #[serde(default, alias = "Books")]
    pub books: Vec<BookDto>,
}

impl CatalogDocument {
    pub fn stamped(catalog: &Catalog) -> Self {
        Self {
            saved_at: Some(Utc::now().naive_utc()),
            books: catalog.books().iter().map(BookDto::from).collect(),
        }
    }
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = LibraryError;

    fn try_from(other: CatalogDocument) -> Result<Self, Self::Error> {
        let books = other.books.into_iter()
            .map(BookRecord::try_from)
            .collect::<LibraryResult<Vec<_>>>()?;
        Ok(Catalog::from_books(books))
    }
}
