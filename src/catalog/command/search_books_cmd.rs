use crate::books::domain::model::BookRecord;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<BookRecord>,
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        Ok(SearchBooksCommandResponse { books: self.catalog_service.search_books(req.query.as_str()) })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookRecord;
    use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn sample_service() -> Box<dyn CatalogService> {
        let (mut svc, _) = factory::create_catalog_service(&Configuration::default(), RepositoryStore::InMemory);
        svc.add_book(BookRecord::new("hoi", "Thom", "12-34", 2000, "bio"));
        svc.add_book(BookRecord::new("hallo", "Hans", "21-43", 2001, "horror"));
        svc
    }

    #[test]
    fn test_should_run_search_books() {
        let svc = sample_service();
        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("hans"))
            .expect("should search");
        assert_eq!(1, res.books.len());
        assert_eq!("hallo", res.books[0].title());
    }

    #[test]
    fn test_should_return_everything_for_empty_query() {
        let svc = sample_service();
        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::default())
            .expect("should search");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title()).collect();
        assert_eq!(vec!["hoi", "hallo"], titles);
    }

    #[test]
    fn test_should_return_nothing_for_no_match() {
        let svc = sample_service();
        let res = SearchBooksCommand::new(svc.as_ref())
            .execute(SearchBooksCommandRequest::new("tolkien"))
            .expect("should search");
        assert!(res.books.is_empty());
    }
}
