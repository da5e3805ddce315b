//! Address Book - command line entry point
//!
//! Opens the configured address book file, prints a summary and, when a
//! query is given, every contact containing it.

use address_book::{AddressBook, AddressBookError, Config, FileStore};
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout only carries results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = FileStore::new(&config.book_file);
    let book = match AddressBook::open(&store) {
        Ok(book) => book,
        Err(AddressBookError::NotFound(path)) => {
            warn!("No address book at {}, starting empty", path);
            AddressBook::new()
        }
        Err(e) => return Err(e.into()),
    };

    info!("Opened {}", store.path().display());
    println!("{}", book);

    if let Some(query) = std::env::args().nth(1) {
        let matches = book.search_by_substring(&query);
        let limit = match config.max_search_results {
            0 => matches.len(),
            n => n,
        };
        for entry in matches.iter().take(limit) {
            println!("{}", entry);
        }
    }

    Ok(())
}
