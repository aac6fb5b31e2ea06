//! Page-level orchestration: segment, extract, detag.

use tracing::{debug, warn};

use crate::dom;
use crate::error::Result;
use crate::extractor::{detag, extract_record, story_blocks, BlockRecord};
use crate::options::Options;
use crate::result::{HeadlineRecord, PageResult};

/// Main entry point for page extraction.
///
/// Blocks that do not match the expected layout are skipped with a
/// warning; they never fail the page.
#[allow(clippy::unnecessary_wraps)]
pub(crate) fn extract_page(html: &str, options: &Options) -> Result<PageResult> {
    let document = dom::parse(html);
    let blocks = story_blocks(&document, &options.marker_class);
    debug!(blocks = blocks.len(), "segmented page");

    let mut result = PageResult::default();

    for (index, block) in blocks.iter().enumerate() {
        debug!("processing entry {index}");

        let record = match extract_record(block, index) {
            Ok(BlockRecord::Stub(record)) => record,
            Ok(BlockRecord::Story { record, narrative }) => {
                let out = detag(&narrative, &record.title, options.apply_special_cases);
                HeadlineRecord {
                    text: out.text,
                    context: out.context,
                    addendums: out.addendums,
                    ..record
                }
            }
            Err(err) => {
                warn!(%err, "skipping story block");
                result.warnings.push(err.to_string());
                continue;
            }
        };

        result.headlines.push(record);
    }

    Ok(result)
}
