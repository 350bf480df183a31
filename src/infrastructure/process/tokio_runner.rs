use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::application::ports::{ProcessError, ProcessOutput, ProcessRunner};

/// Subprocess execution on the async runtime. A request blocks on its own
/// child process without tying up unrelated requests. Children that outlive
/// the configured timeout are killed.
pub struct TokioProcessRunner {
    timeout: Duration,
}

impl TokioProcessRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait::async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        tracing::debug!(program = %program, ?args, "Launching child process");

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ProcessError::Launch {
                program: program.to_string(),
                source: e,
            })?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| ProcessError::TimedOut {
                program: program.to_string(),
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| ProcessError::Launch {
                program: program.to_string(),
                source: e,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!(program = %program, exit_code, "Child process finished");

        Ok(ProcessOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
