//! Shared subprocess plumbing for the ffmpeg tool family.

use crate::error::ProcessingError;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Validate that a tool path doesn't contain shell metacharacters or
/// traversal sequences.
pub(crate) fn validate_tool_path(path: &str) -> Result<(), ProcessingError> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) || path.contains("..") {
        return Err(ProcessingError::InvalidToolPath(path.to_string()));
    }
    Ok(())
}

/// Run a tool to completion, bounded by `timeout`. The child is killed if the
/// deadline expires. Non-zero exit becomes `ToolFailed` carrying stderr.
pub(crate) async fn run_tool(
    tool: &'static str,
    mut command: Command,
    timeout: Duration,
) -> Result<Output, ProcessingError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let start = std::time::Instant::now();

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => result.map_err(|e| ProcessingError::Spawn { tool, source: e })?,
        Err(_) => {
            tracing::warn!(
                tool = tool,
                timeout_secs = timeout.as_secs(),
                "External tool timed out, killing child"
            );
            return Err(ProcessingError::ToolTimedOut {
                tool,
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::error!(
            tool = tool,
            status = %output.status,
            stderr = %stderr,
            duration_ms = start.elapsed().as_millis() as u64,
            "External tool failed"
        );
        return Err(ProcessingError::ToolFailed {
            tool,
            status: output.status,
            stderr,
        });
    }

    tracing::debug!(
        tool = tool,
        duration_ms = start.elapsed().as_millis() as u64,
        "External tool completed"
    );

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tool_path() {
        assert!(validate_tool_path("ffprobe").is_ok());
        assert!(validate_tool_path("/usr/local/bin/ffmpeg").is_ok());
        assert!(validate_tool_path("ffprobe; rm -rf /").is_err());
        assert!(validate_tool_path("../ffprobe").is_err());
        assert!(validate_tool_path("ffmpeg|cat").is_err());
    }
}
