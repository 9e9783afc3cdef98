//! Result type for sequential pattern mining.
//!
//! A [`SequentialPattern`] is an ordered list of [`Itemset`]s annotated with
//! the IDs of the sequences that contain it. Pattern-growth miners (PrefixSpan,
//! BIDE+) build patterns by appending itemsets, branch the search with
//! [`SequentialPattern::clone_sequence`], and derive absolute and relative
//! support from the sequence IDs.

mod error;
mod format;
mod itemset;
mod pattern;
mod render;
mod sequence_ids;

pub use crate::error::{PatternError, Result};
pub use crate::format::SupportFormat;
pub use crate::itemset::{Item, Itemset};
pub use crate::pattern::SequentialPattern;
pub use crate::render::{Brackets, PatternDisplay};
pub use crate::sequence_ids::{SequenceId, SequenceIds};
