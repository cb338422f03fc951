//! Media processing for reelhost: probing uploaded videos for their pixel
//! dimensions and remuxing containers for progressive ("fast-start") playback.
//!
//! Both operations shell out to the ffmpeg tool family; the crate wraps them
//! behind narrow async traits so handlers can be tested without the binaries.

pub mod error;
pub mod orientation;
pub mod probe;
pub mod remux;
mod tool;
pub mod traits;

pub use error::ProcessingError;
pub use orientation::Orientation;
pub use probe::{Dimensions, FfprobeProber};
pub use remux::FfmpegRemuxer;
pub use traits::{MediaProber, Remuxer};
