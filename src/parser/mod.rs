//! Parser module — extract blocks, build records, merge overloads.

pub mod builder;
pub mod extract;
pub mod merge;

use crate::error::BuildError;
use merge::DocSet;
use tracing::{trace, warn};

/// Parse all documented blocks of `source` into `docs`.
///
/// Stops at the first parameter mismatch; records absorbed before it stay
/// in `docs`.
pub fn parse_into(source: &str, docs: &mut DocSet) -> Result<(), BuildError> {
    for (index, comment) in extract::comments(source).enumerate() {
        let lines = extract::split_lines(&comment);
        trace!(block = index, lines = lines.len(), "comment block");

        match builder::build(&lines)? {
            Some(record) => docs.absorb(record),
            None => warn!(block = index, "skipping comment without a declaration line"),
        }
    }
    Ok(())
}

/// Parse `source` into a fresh [`DocSet`].
pub fn parse(source: &str) -> Result<DocSet, BuildError> {
    let mut docs = DocSet::new();
    parse_into(source, &mut docs)?;
    Ok(docs)
}
