use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, Subcommand};
use tracing::{error, warn};
use lms_catalog::catalog::command::add_book_cmd::AddBookCommandRequest;
use lms_catalog::catalog::command::list_books_cmd::ListBooksCommandRequest;
use lms_catalog::catalog::command::remove_book_cmd::RemoveBookCommandRequest;
use lms_catalog::catalog::command::search_books_cmd::SearchBooksCommandRequest;
use lms_catalog::catalog::controller::{add_book, list_books, remove_book, search_books};
use lms_catalog::catalog::factory;
use lms_catalog::core::domain::{Configuration, DEFAULT_DATA_FILE};
use lms_catalog::core::repository::RepositoryStore;
use lms_catalog::utils::logging::setup_tracing;

/// Book catalog kept in a local JSON file
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
struct Cli {
    /// Data file holding the catalog
    #[arg(long, env = "LIBRARY_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Where the catalog is stored
    #[arg(long, value_enum, default_value_t = RepositoryStore::JsonFile)]
    store: RepositoryStore,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a book
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        #[arg(long)]
        isbn: String,
        /// Publication year
        #[arg(long, allow_negative_numbers = true)]
        year: i64,
        #[arg(long)]
        genre: String,
        /// The book is an e-book
        #[arg(long)]
        ebook: bool,
        /// File size in mb, e-books only
        #[arg(long)]
        file_size_mb: Option<i64>,
    },
    /// Remove every book with the given isbn
    Remove {
        isbn: String,
    },
    /// Search titles and authors, ignoring case
    Search {
        /// Matches everything when omitted
        query: Option<String>,
    },
    /// List all books sorted by title, author or year
    List {
        #[arg(long, default_value = "title")]
        sort: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(cli.log_json, cli.verbose);

    let config = Configuration::new(&cli.data_file);
    let (mut svc, outcome) = factory::create_catalog_service(&config, cli.store);

    let res = match cli.command {
        Commands::Add { title, author, isbn, year, genre, ebook, file_size_mb } => {
            let req = AddBookCommandRequest {
                title,
                author,
                isbn,
                publication_year: year,
                genre,
                ebook,
                file_size_mb,
            };
            add_book(svc.as_mut(), req)
        }
        Commands::Remove { isbn } => remove_book(svc.as_mut(), RemoveBookCommandRequest::new(&isbn)),
        Commands::Search { query } => search_books(svc.as_ref(), SearchBooksCommandRequest::new(query.as_deref().unwrap_or_default())),
        Commands::List { sort } => list_books(svc.as_mut(), ListBooksCommandRequest::new(&sort)),
    };

    let lines = match res {
        Ok(lines) => lines,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };
    for line in lines {
        println!("{}", line);
    }

    if let Some(err) = outcome.warning() {
        warn!(error = %err, "{} could not be read and is replaced by this run's catalog", config.data_file.display());
    }
    if svc.save().is_err() {
        warn!("changes from this run were not saved");
    }
    ExitCode::SUCCESS
}
