//! The individual tree rewrites applied by
//! [`DocumentNormalizer`](crate::DocumentNormalizer).
//!
//! Each rewrite takes ownership of the selections it is given and returns
//! the rewritten selections.

pub mod branch_merger;
mod fragment_resolver;
mod fragment_table;
pub mod leaf_deduplicator;

pub use fragment_resolver::FragmentResolver;
pub use fragment_table::FragmentTable;
