//! Tags index: immutable snapshots and their owner.
//!
//! # Architecture
//!
//! ```text
//! tags file --read--> text --parse--> Vec<TagRecord> --group--> TagIndex
//!                                                                  |
//!                                         CTagsIndex::publish (Arc swap)
//!                                                                  |
//!                                                  lookup() reads snapshot
//! ```

mod ctags;
mod error;
mod snapshot;

pub use ctags::{CTagsIndex, DEFAULT_TAGS_FILE, IndexState};
pub use error::{IndexError, IndexResult};
pub use snapshot::TagIndex;
