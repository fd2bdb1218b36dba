use crate::catalog::domain::{CatalogService, LoadOutcome};
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::json_catalog_repository::JsonCatalogRepository;
use crate::catalog::repository::memory_catalog_repository::MemoryCatalogRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_catalog_repository(config: &Configuration, store: RepositoryStore) -> Box<dyn CatalogRepository> {
    match store {
        RepositoryStore::JsonFile => Box::new(JsonCatalogRepository::new(&config.data_file)),
        RepositoryStore::InMemory => Box::new(MemoryCatalogRepository::new()),
    }
}

// builds the service and loads the stored catalog into it
pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> (Box<dyn CatalogService>, LoadOutcome) {
    let repository = create_catalog_repository(config, store);
    let mut svc = CatalogServiceImpl::new(repository);
    let outcome = svc.load();
    (Box::new(svc), outcome)
}
