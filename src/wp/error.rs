//! Error types for WP-CLI invocations

use thiserror::Error;

/// Error from running an external command
#[derive(Debug, Error)]
pub enum CommandError {
    /// The subprocess exited non-zero. Carries the captured stderr stream,
    /// verbatim - the exit code and stdout are discarded.
    #[error("{0}")]
    Failed(String),

    /// The subprocess could not be spawned at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_displays_stderr_verbatim() {
        let error = CommandError::Failed("network unreachable".to_string());
        assert_eq!(error.to_string(), "network unreachable");
    }

    #[test]
    fn failed_keeps_whitespace_and_newlines() {
        let stderr = "Error: something broke\n  at line 3\n";
        let error = CommandError::Failed(stderr.to_string());
        assert_eq!(error.to_string(), stderr);
    }

    #[test]
    fn spawn_names_the_program() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let error = CommandError::Spawn {
            program: "wp".to_string(),
            source,
        };
        assert!(error.to_string().contains("wp"));
    }
}
