//! Parsers for the cluster's `_cat` tabular text endpoints.
//!
//! The cluster reports state as whitespace-aligned text tables with a fixed
//! column order and no header row in the responses we request. Parsing is
//! positional: each line is split on whitespace and tokens are paired with
//! the known header list for that endpoint.

mod indices;
mod row;
mod segments;

pub use self::indices::{INDEX_HEADERS, IndexRecord};
pub use self::row::{CatError, CatRow, CatValue, parse_row};
pub use self::segments::{SEGMENT_HEADERS, SegmentRecord};
