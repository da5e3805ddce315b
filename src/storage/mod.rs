//! Text storage collaborators used for persistence.
//!
//! The codec only deals in text; these traits decide where that text lives.

mod file_store;
mod traits;

pub use file_store::FileStore;
pub use traits::{TextSink, TextSource};
