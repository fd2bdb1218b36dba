use serde::{Deserialize, Serialize};
use crate::books::Book;
use crate::books::domain::model::{BookFormat, BookRecord};
use crate::core::library::{BookKind, LibraryError};

// BookDto is the on-disk shape of a book record. Files written before the kind
// tag existed use PascalCase names and signal an e-book only through FileSize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    #[serde(default, alias = "Kind", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BookKind>,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Author")]
    pub author: String,
    #[serde(alias = "Isbn")]
    pub isbn: String,
    #[serde(alias = "PublicationYear")]
    pub publication_year: i64,
    #[serde(alias = "Genre")]
    pub genre: String,
    #[serde(default, alias = "FileSize", alias = "FileSizeMb", skip_serializing_if = "Option::is_none")]
    pub file_size_mb: Option<i64>,
}

impl From<&BookRecord> for BookDto {
    fn from(other: &BookRecord) -> Self {
        Self {
            kind: Some(other.kind()),
            title: other.title().to_string(),
            author: other.author().to_string(),
            isbn: other.isbn().to_string(),
            publication_year: other.publication_year(),
            genre: other.genre().to_string(),
            file_size_mb: other.file_size_mb(),
        }
    }
}

impl TryFrom<BookDto> for BookRecord {
    type Error = LibraryError;

    fn try_from(other: BookDto) -> Result<Self, Self::Error> {
        let format = match (other.kind, other.file_size_mb) {
            (Some(BookKind::EBook), Some(file_size_mb)) | (None, Some(file_size_mb)) => {
                BookFormat::EBook { file_size_mb }
            }
            (Some(BookKind::Plain), None) | (None, None) => BookFormat::Plain,
            (Some(BookKind::EBook), None) => {
                return Err(LibraryError::validation(
                    format!("e-book with isbn {:?} has no fileSizeMb", other.isbn).as_str(),
                    Some("missing_file_size".to_string())));
            }
            (Some(BookKind::Plain), Some(_)) => {
                return Err(LibraryError::validation(
                    format!("plain book with isbn {:?} carries fileSizeMb", other.isbn).as_str(),
                    Some("unexpected_file_size".to_string())));
            }
        };
        Ok(BookRecord::with_format(other.title.as_str(), other.author.as_str(), other.isbn.as_str(),
                                   other.publication_year, other.genre.as_str(), format))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::Book;
    use crate::books::domain::model::BookRecord;
    use crate::books::dto::BookDto;
    use crate::core::library::{BookKind, LibraryError};

    #[test]
    fn test_should_write_kind_and_camel_case() {
        let book = BookRecord::ebook("hallo", "Hans", "21-43", 2001, "horror", 12);
        let json = serde_json::to_value(BookDto::from(&book)).expect("serialize");
        assert_eq!("EBook", json["kind"]);
        assert_eq!(2001, json["publicationYear"]);
        assert_eq!(12, json["fileSizeMb"]);
    }

    #[test]
    fn test_should_omit_file_size_for_plain_books() {
        let book = BookRecord::new("hoi", "Thom", "12-34", 2000, "bio");
        let json = serde_json::to_value(BookDto::from(&book)).expect("serialize");
        assert_eq!("Plain", json["kind"]);
        assert!(json.get("fileSizeMb").is_none());
    }

    #[test]
    fn test_should_infer_kind_from_legacy_fields() {
        let dto: BookDto = serde_json::from_str(
            r#"{"Title":"hallo","Author":"Hans","Isbn":"21-43","PublicationYear":2001,"Genre":"horror","FileSize":12}"#)
            .expect("deserialize");
        assert_eq!(None, dto.kind);
        let book = BookRecord::try_from(dto).expect("convert");
        assert_eq!(BookKind::EBook, book.kind());
        assert_eq!(Some(12), book.file_size_mb());

        let dto: BookDto = serde_json::from_str(
            r#"{"Title":"hoi","Author":"Thom","Isbn":"12-34","PublicationYear":2000,"Genre":"bio"}"#)
            .expect("deserialize");
        assert_eq!(BookKind::Plain, BookRecord::try_from(dto).expect("convert").kind());
    }

    #[test]
    fn test_should_reject_ebook_without_size() {
        let dto: BookDto = serde_json::from_str(
            r#"{"kind":"EBook","title":"t","author":"a","isbn":"i","publicationYear":1,"genre":"g"}"#)
            .expect("deserialize");
        assert!(matches!(BookRecord::try_from(dto), Err(LibraryError::Validation { .. })));
    }

    #[test]
    fn test_should_reject_plain_with_size() {
        let dto: BookDto = serde_json::from_str(
            r#"{"kind":"Plain","title":"t","author":"a","isbn":"i","publicationYear":1,"genre":"g","fileSizeMb":3}"#)
            .expect("deserialize");
        assert!(matches!(BookRecord::try_from(dto), Err(LibraryError::Validation { .. })));
    }
}
