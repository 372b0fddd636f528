//! # dayone-to-jrnl
//!
//! Converts a [Day One](https://dayoneapp.com) JSON export into a
//! [jrnl](https://jrnl.sh) plain-text journal.
//!
//! ## What it does
//!
//! Day One exports a single `Journal.json` next to a `photos/` folder. Each entry is
//! appended to `journal.txt` in the target directory:
//!
//! ```text
//! 2016-03-07 20:23 Walked to the harbour.
//!
//! @travel @helsinki
//!
//! photos/5f0a1c2e....jpeg
//!
//! ```
//!
//! - Timestamps are shown in each entry's own time zone.
//! - Day One's inline photo placeholder and trailing `#hashtag` line are dropped, since
//!   the same information is written as the tag and photo blocks.
//! - Referenced photos are copied into `photos/` next to the journal.
//!
//! ## Appending
//!
//! The journal is always appended to. Running the conversion twice writes every entry
//! twice.
//!
//! ## Usage
//!
//! ```sh
//! dayone-to-jrnl ~/Downloads/export/Journal.json ~/jrnl/
//! ```
pub mod convert;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod parser;
pub mod tag_line;
pub mod utils;

pub use convert::{ConvertSummary, execute};
pub use error::ConvertError;
pub use utils::ConvertConfig;
