//! I/O collaborators: catalog fetch and its on-disk cache.

pub mod cache;
pub mod catalog;
