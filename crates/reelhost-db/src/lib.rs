//! Database access for reelhost.
//!
//! One repository per aggregate; queries use runtime binding so the crate
//! builds without a live database.

pub mod videos;

pub use videos::VideoRepository;
