//! Jump to definition backed by a ctags tags file.
//!
//! [`CTagsIndex`] loads `<root>/<tags file>` into an immutable snapshot and
//! answers exact-name queries against it. Reindexing builds a complete new
//! snapshot before publishing it, so a lookup never sees a partial index, and
//! a failed reindex keeps the last good one.
//!
//! ```no_run
//! # async fn demo() -> Result<(), ctags_index::IndexError> {
//! use ctags_index::CTagsIndex;
//!
//! let index = CTagsIndex::with_default_file("/path/to/workspace");
//! let tags = index.reindex().await?;
//! println!("Indexed {} tags", tags.len());
//!
//! if let Some(defs) = index.lookup("main").await {
//!     println!("jump to {}", defs[0].location());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod index;
pub mod io;
pub mod logging;
pub mod parsing;
pub mod query;
pub mod types;

pub use config::Settings;
pub use generator::{GenerateError, TagGenerator};
pub use index::{CTagsIndex, DEFAULT_TAGS_FILE, IndexError, IndexResult, IndexState, TagIndex};
pub use parsing::{TagsFileParser, parse_tags};
pub use query::word_at;
pub use types::TagRecord;
