//! Media prober: extracts the first video stream's width/height via ffprobe.

use crate::error::ProcessingError;
use crate::orientation::Orientation;
use crate::tool::{run_tool, validate_tool_path};
use crate::traits::MediaProber;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

/// Pixel dimensions of the first video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn orientation(&self) -> Orientation {
        Orientation::classify(self.width, self.height)
    }
}

/// Parse ffprobe's JSON output (`{"streams":[{"width":W,"height":H}]}`).
///
/// Kept separate from the subprocess call so it is testable without the
/// binary.
pub fn parse_probe_output(stdout: &[u8]) -> Result<Dimensions, ProcessingError> {
    let probe_data: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| ProcessingError::ParseOutput(format!("invalid JSON: {}", e)))?;

    let stream = probe_data["streams"]
        .get(0)
        .ok_or_else(|| ProcessingError::ParseOutput("no video stream found".to_string()))?;

    let width = stream["width"]
        .as_u64()
        .ok_or_else(|| ProcessingError::ParseOutput("missing stream width".to_string()))?
        as u32;

    let height = stream["height"]
        .as_u64()
        .ok_or_else(|| ProcessingError::ParseOutput("missing stream height".to_string()))?
        as u32;

    Ok(Dimensions { width, height })
}

/// Prober backed by the real ffprobe binary.
pub struct FfprobeProber {
    ffprobe_path: String,
    timeout: Duration,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: String, timeout: Duration) -> Result<Self, ProcessingError> {
        validate_tool_path(&ffprobe_path)?;
        Ok(Self {
            ffprobe_path,
            timeout,
        })
    }
}

#[async_trait]
impl MediaProber for FfprobeProber {
    #[tracing::instrument(skip(self), fields(tool = "ffprobe"))]
    async fn probe(&self, path: &Path) -> Result<Dimensions, ProcessingError> {
        let start = std::time::Instant::now();

        let mut command = Command::new(&self.ffprobe_path);
        command
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "json",
            ])
            .arg(path);

        let output = run_tool("ffprobe", command, self.timeout).await?;
        let dimensions = parse_probe_output(&output.stdout)?;

        tracing::info!(
            width = dimensions.width,
            height = dimensions.height,
            orientation = %dimensions.orientation(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Video probe completed"
        );

        Ok(dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_probe_output() {
        let stdout = br#"{"programs": [], "streams": [{"width": 1920, "height": 1080}]}"#;
        let dims = parse_probe_output(stdout).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 1920,
                height: 1080
            }
        );
        assert_eq!(dims.orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_parse_probe_output_uses_first_stream() {
        let stdout = br#"{"streams": [{"width": 1080, "height": 1920}, {"width": 640, "height": 480}]}"#;
        let dims = parse_probe_output(stdout).unwrap();
        assert_eq!(dims.width, 1080);
        assert_eq!(dims.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_parse_probe_output_no_streams() {
        let err = parse_probe_output(br#"{"streams": []}"#).unwrap_err();
        assert!(matches!(err, ProcessingError::ParseOutput(_)));
        assert!(err.to_string().contains("no video stream"));
    }

    #[test]
    fn test_parse_probe_output_missing_dimensions() {
        let err = parse_probe_output(br#"{"streams": [{"codec_name": "h264"}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing stream width"));

        let err = parse_probe_output(br#"{"streams": [{"width": 1920}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing stream height"));
    }

    #[test]
    fn test_parse_probe_output_invalid_json() {
        let err = parse_probe_output(b"not json at all").unwrap_err();
        assert!(matches!(err, ProcessingError::ParseOutput(_)));
    }

    #[test]
    fn test_prober_rejects_dangerous_tool_path() {
        let err = FfprobeProber::new("ffprobe; true".to_string(), Duration::from_secs(5));
        assert!(err.is_err());
    }
}
