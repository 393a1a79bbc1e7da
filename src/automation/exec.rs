use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

/// Identity reported when the provider CLI cannot tell who is signed in.
pub const UNKNOWN_OPERATOR: &str = "unknown";

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Failed to launch '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with {status}: {stderr}")]
    NonZeroExit {
        command: String,
        status: String,
        stderr: String,
    },
}

/// Runs a command line through the system shell and returns its stdout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str) -> Result<String, ExecutionError>;
}

#[derive(Debug, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }

    fn shell_cmd(command: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", command]);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.args(["-c", command]);
            cmd
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<String, ExecutionError> {
        debug!("Spawning: {}", command);

        let output = Self::shell_cmd(command)
            .output()
            .await
            .map_err(|source| ExecutionError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                command: command.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Ask the provider CLI who the signed-in operator is.
///
/// Falls back to [`UNKNOWN_OPERATOR`] when the query fails or prints nothing.
pub async fn resolve_operator(runner: &dyn CommandRunner, identity_command: &str) -> String {
    match runner.run(identity_command).await {
        Ok(output) => {
            let name = output.trim().trim_matches('"').trim();
            if name.is_empty() {
                warn!("'{}' returned no operator name", identity_command);
                UNKNOWN_OPERATOR.to_string()
            } else {
                name.to_string()
            }
        }
        Err(e) => {
            warn!("Could not retrieve operator name: {}", e);
            UNKNOWN_OPERATOR.to_string()
        }
    }
}
