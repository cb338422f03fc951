//! Fast-start remuxer: relocates container index metadata to the front of
//! the file so playback can begin before the whole object downloads.

use crate::error::ProcessingError;
use crate::tool::{run_tool, validate_tool_path};
use crate::traits::Remuxer;
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

/// Suffix appended to the input path for the remuxed sibling file.
const OUTPUT_SUFFIX: &str = ".processed.mp4";

/// Derive the output path for a remux of `input`.
pub fn faststart_output_path(input: &Path) -> PathBuf {
    let mut os: OsString = input.as_os_str().to_os_string();
    os.push(OUTPUT_SUFFIX);
    PathBuf::from(os)
}

/// Remuxer backed by the real ffmpeg binary. Streams and global metadata are
/// copied, never re-encoded.
pub struct FfmpegRemuxer {
    ffmpeg_path: String,
    timeout: Duration,
}

impl FfmpegRemuxer {
    pub fn new(ffmpeg_path: String, timeout: Duration) -> Result<Self, ProcessingError> {
        validate_tool_path(&ffmpeg_path)?;
        Ok(Self {
            ffmpeg_path,
            timeout,
        })
    }
}

#[async_trait]
impl Remuxer for FfmpegRemuxer {
    #[tracing::instrument(skip(self), fields(tool = "ffmpeg"))]
    async fn remux(&self, input: &Path) -> Result<PathBuf, ProcessingError> {
        let output_path = faststart_output_path(input);
        let start = std::time::Instant::now();

        let mut command = Command::new(&self.ffmpeg_path);
        command
            .arg("-i")
            .arg(input)
            .args(["-movflags", "faststart", "-map_metadata", "0", "-codec", "copy", "-f", "mp4"])
            .arg(&output_path);

        // On failure the partial output is disposable; the caller owns cleanup.
        run_tool("ffmpeg", command, self.timeout).await?;

        tracing::info!(
            input = %input.display(),
            output = %output_path.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fast-start remux completed"
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faststart_output_path_appends_suffix() {
        let out = faststart_output_path(Path::new("/tmp/abc.mp4"));
        assert_eq!(out, PathBuf::from("/tmp/abc.mp4.processed.mp4"));
    }

    #[test]
    fn test_faststart_output_path_is_sibling() {
        let out = faststart_output_path(Path::new("/var/tmp/uploads/v1.mp4"));
        assert_eq!(out.parent(), Some(Path::new("/var/tmp/uploads")));
    }

    #[test]
    fn test_remuxer_rejects_dangerous_tool_path() {
        assert!(FfmpegRemuxer::new("ffmpeg$(boom)".to_string(), Duration::from_secs(5)).is_err());
    }
}
