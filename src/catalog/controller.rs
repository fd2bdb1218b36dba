use crate::books::domain::model::BookRecord;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

// Each handler runs one command and returns the lines to show the user.

pub fn add_book(svc: &mut dyn CatalogService, req: AddBookCommandRequest) -> Result<Vec<String>, CommandError> {
    let res = AddBookCommand::new(svc).execute(req)?;
    Ok(vec![format!("successfully added book {} to the library", res.book.title())])
}

pub fn remove_book(svc: &mut dyn CatalogService, req: RemoveBookCommandRequest) -> Result<Vec<String>, CommandError> {
    let res = RemoveBookCommand::new(svc).execute(req)?;
    if res.removed == 0 {
        Ok(vec!["No books found with that isbn, so no books were removed".to_string()])
    } else {
        Ok(vec![format!("successfully removed {} books with isbn {}", res.removed, res.isbn)])
    }
}

pub fn search_books(svc: &dyn CatalogService, req: SearchBooksCommandRequest) -> Result<Vec<String>, CommandError> {
    let res = SearchBooksCommand::new(svc).execute(req)?;
    if res.books.is_empty() {
        return Ok(vec!["No books found matching the query".to_string()]);
    }
    let mut lines = vec![format!("Books found matching the query: {}", res.books.len())];
    lines.extend(render(&res.books));
    Ok(lines)
}

pub fn list_books(svc: &mut dyn CatalogService, req: ListBooksCommandRequest) -> Result<Vec<String>, CommandError> {
    let res = ListBooksCommand::new(svc).execute(req)?;
    Ok(render(&res.books))
}

fn render(books: &[BookRecord]) -> Vec<String> {
    books.iter().map(BookRecord::to_string).collect()
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::AddBookCommandRequest;
    use crate::catalog::command::list_books_cmd::ListBooksCommandRequest;
    use crate::catalog::command::remove_book_cmd::RemoveBookCommandRequest;
    use crate::catalog::command::search_books_cmd::SearchBooksCommandRequest;
    use crate::catalog::controller::{add_book, list_books, remove_book, search_books};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::CommandError;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    fn sample_service() -> Box<dyn CatalogService> {
        let (mut svc, _) = factory::create_catalog_service(&Configuration::default(), RepositoryStore::InMemory);
        add_book(svc.as_mut(), AddBookCommandRequest::new("hoi", "Thom", "12-34", 2000, "bio")).expect("add");
        add_book(svc.as_mut(), AddBookCommandRequest::new("hallo", "Hans", "21-43", 2001, "horror").with_file_size(12)).expect("add");
        svc
    }

    #[test]
    fn test_should_render_added_book() {
        let (mut svc, _) = factory::create_catalog_service(&Configuration::default(), RepositoryStore::InMemory);
        let lines = add_book(svc.as_mut(), AddBookCommandRequest::new("hoi", "Thom", "12-34", 2000, "bio")).expect("add");
        assert_eq!(vec!["successfully added book hoi to the library"], lines);
    }

    #[test]
    fn test_should_render_removal() {
        let mut svc = sample_service();
        let lines = remove_book(svc.as_mut(), RemoveBookCommandRequest::new("99-99")).expect("remove");
        assert_eq!(vec!["No books found with that isbn, so no books were removed"], lines);
        let lines = remove_book(svc.as_mut(), RemoveBookCommandRequest::new("12-34")).expect("remove");
        assert_eq!(vec!["successfully removed 1 books with isbn 12-34"], lines);
    }

    #[test]
    fn test_should_render_search() {
        let svc = sample_service();
        let lines = search_books(svc.as_ref(), SearchBooksCommandRequest::new("HANS")).expect("search");
        assert_eq!(vec![
            "Books found matching the query: 1".to_string(),
            "hallo by Hans is a horror type book published in 2001 with isbn 21-43, its filesize is 12mb".to_string(),
        ], lines);
        let lines = search_books(svc.as_ref(), SearchBooksCommandRequest::new("nobody")).expect("search");
        assert_eq!(vec!["No books found matching the query"], lines);
    }

    #[test]
    fn test_should_render_sorted_list() {
        let mut svc = sample_service();
        let lines = list_books(svc.as_mut(), ListBooksCommandRequest::new("title")).expect("list");
        assert_eq!(vec![
            "hallo by Hans is a horror type book published in 2001 with isbn 21-43, its filesize is 12mb".to_string(),
            "hoi by Thom is a bio book published in 2000 with isbn 12-34".to_string(),
        ], lines);
    }

    #[test]
    fn test_should_surface_validation_error() {
        let mut svc = sample_service();
        let mut req = AddBookCommandRequest::new("x", "y", "z", 1, "g");
        req.ebook = true;
        assert!(matches!(add_book(svc.as_mut(), req), Err(CommandError::Validation { .. })));
    }
}
