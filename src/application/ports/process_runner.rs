use std::io;

/// Captured result of a finished child process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Narrow capability interface over subprocess execution, so components that
/// shell out (audio extraction, local recognition) can be exercised against
/// a fake runner in tests.
#[async_trait::async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` to completion and capture its output.
    /// A non-zero exit is not an error at this level; callers inspect
    /// `ProcessOutput::exit_code`.
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("failed to launch {program}: {source}")]
    Launch { program: String, source: io::Error },
    #[error("{program} did not finish within {seconds}s")]
    TimedOut { program: String, seconds: u64 },
}
