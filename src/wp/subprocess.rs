//! Subprocess runner built on tokio::process

use crate::wp::{CommandError, CommandRunner};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs commands by spawning real subprocesses.
///
/// Captures stdout and stderr to completion; a non-zero exit is translated
/// into [`CommandError::Failed`] carrying the stderr text unmodified. There
/// is deliberately no timeout: a hung subprocess hangs the whole run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        debug!("spawning {} with {} args", program, args.len());

        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CommandError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                "{} exited with code {:?}: {}",
                program,
                output.status.code(),
                stderr.trim()
            );
            return Err(CommandError::Failed(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_stdout_on_success() {
        let runner = SystemRunner;
        let args = vec!["-c".to_string(), "echo hello".to_string()];
        let stdout = runner.run("sh", &args).await.unwrap();
        assert_eq!(stdout, "hello\n");
    }

    #[tokio::test]
    async fn nonzero_exit_yields_stderr_verbatim() {
        let runner = SystemRunner;
        let args = vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()];
        let error = runner.run("sh", &args).await.unwrap_err();
        assert_eq!(error.to_string(), "boom\n");
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let runner = SystemRunner;
        let result = runner.run("definitely-not-a-real-binary", &[]).await;
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }
}
