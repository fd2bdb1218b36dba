pub mod json_catalog_repository;
pub mod memory_catalog_repository;

use crate::catalog::domain::model::Catalog;
use crate::core::repository::Repository;

pub trait CatalogRepository: Repository<Catalog> {
    // human readable location used in log lines
    fn location(&self) -> String;
}
