//! Story extraction pipeline.
//!
//! # Module Structure
//!
//! - `segment`: picks the story blocks out of a page
//! - `record`: title, links and date of a block, plus where its narrative starts
//! - `state`: running state of the detagging walk
//! - `detag`: markup stripping with hyperlink offset capture
//!
//! # Usage
//!
//! ```rust,ignore
//! use ngate_fortune::extractor::{detag, extract_record, story_blocks, BlockRecord};
//!
//! let doc = dom::parse(html);
//! for (i, block) in story_blocks(&doc, "storylink").iter().enumerate() {
//!     match extract_record(block, i)? {
//!         BlockRecord::Stub(record) => { /* done */ }
//!         BlockRecord::Story { record, narrative } => {
//!             let out = detag(&narrative, &record.title, true);
//!         }
//!     }
//! }
//! ```

pub mod detag;
pub mod record;
pub mod segment;
pub mod state;

pub use detag::detag;
pub use record::{extract_record, BlockRecord};
pub use segment::story_blocks;
pub use state::{DetagState, Detagged};
