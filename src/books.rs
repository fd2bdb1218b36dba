use crate::core::domain::Identifiable;
use crate::core::library::BookKind;

pub mod domain;
pub mod dto;

pub trait Book: Identifiable {
    fn kind(&self) -> BookKind;
    // case-insensitive substring match against title or author
    fn is_match(&self, query: &str) -> bool;
}
