use thiserror::Error;

/// Errors from external-tool invocation and output handling.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("{tool} timed out after {timeout_secs}s")]
    ToolTimedOut {
        tool: &'static str,
        timeout_secs: u64,
    },

    #[error("Failed to execute {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse probe output: {0}")]
    ParseOutput(String),

    #[error("Invalid tool path: {0}")]
    InvalidToolPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
