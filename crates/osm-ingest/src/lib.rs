//! OSM XML ingestion.
//!
//! Tags are streamed from the document with `quick-xml`; nothing beyond the
//! current element is held in memory.
//!
//! # Usage
//!
//! ```ignore
//! use osm_ingest::TagReader;
//!
//! let mut reader = TagReader::open("sydney_australia.osm", "addr:street")?;
//! for record in &mut reader {
//!     let record = record?;
//!     println!("{} {}", record.owner, record.value);
//! }
//! println!("skipped {} malformed tags", reader.skipped());
//! ```

pub mod error;
pub mod key_types;
pub mod reader;
mod stream;

pub use error::IngestError;
pub use key_types::{classify_key, count_key_types, scan_key_types};
pub use reader::TagReader;
