use clap::ValueEnum;
use crate::core::library::LibraryResult;

// Repository persists a whole aggregate as one document
pub trait Repository<Aggregate> {
    // load the aggregate, None when nothing has been stored yet
    fn load(&self) -> LibraryResult<Option<Aggregate>>;

    // overwrite the stored document, returns number of records written
    fn save(&mut self, aggregate: &Aggregate) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Clone, Copy, ValueEnum)]
pub enum RepositoryStore {
    #[value(name = "json")]
    JsonFile,
    #[value(name = "memory")]
    InMemory,
}
