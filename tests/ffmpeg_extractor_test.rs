use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use vidscribe::application::ports::{
    AudioExtractor, ExtractionError, ProcessError, ProcessOutput, ProcessRunner,
};
use vidscribe::infrastructure::media::FfmpegExtractor;

struct FakeProcessRunner {
    output: Option<ProcessOutput>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeProcessRunner {
    fn succeeding() -> Self {
        Self::with_output(ProcessOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        })
    }

    fn with_output(output: ProcessOutput) -> Self {
        Self {
            output: Some(output),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_to_launch() -> Self {
        Self {
            output: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ProcessRunner for FakeProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<ProcessOutput, ProcessError> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        match &self.output {
            Some(output) => Ok(output.clone()),
            None => Err(ProcessError::Launch {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            }),
        }
    }
}

#[tokio::test]
async fn given_successful_transcode_when_extracting_then_returns_wav_path_beside_input() {
    let runner = Arc::new(FakeProcessRunner::succeeding());
    let extractor = FfmpegExtractor::new("ffmpeg".to_string(), runner.clone());

    let audio = extractor
        .extract(Path::new("/tmp/work/abc123.webm"))
        .await
        .unwrap();

    assert_eq!(audio, Path::new("/tmp/work/abc123.wav"));

    let calls = runner.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let (program, args) = &calls[0];
    assert_eq!(program, "ffmpeg");
    assert_eq!(
        args,
        &[
            "-i",
            "/tmp/work/abc123.webm",
            "-vn",
            "-acodec",
            "pcm_s16le",
            "-ar",
            "16000",
            "-ac",
            "1",
            "-y",
            "/tmp/work/abc123.wav",
        ]
    );
}

#[tokio::test]
async fn given_nonzero_exit_when_extracting_then_returns_process_failed_with_stderr() {
    let runner = Arc::new(FakeProcessRunner::with_output(ProcessOutput {
        exit_code: 1,
        stdout: String::new(),
        stderr: "moov atom not found".to_string(),
    }));
    let extractor = FfmpegExtractor::new("ffmpeg".to_string(), runner);

    let result = extractor.extract(Path::new("/tmp/work/abc123.webm")).await;

    match result {
        Err(ExtractionError::ProcessFailed { exit_code, stderr }) => {
            assert_eq!(exit_code, 1);
            assert_eq!(stderr, "moov atom not found");
        }
        other => panic!("expected ProcessFailed, got {:?}", other),
    }
}

#[tokio::test]
async fn given_missing_binary_when_extracting_then_returns_launch_error() {
    let runner = Arc::new(FakeProcessRunner::failing_to_launch());
    let extractor = FfmpegExtractor::new("ffmpeg".to_string(), runner);

    let result = extractor.extract(Path::new("/tmp/work/abc123.webm")).await;

    assert!(matches!(result, Err(ExtractionError::Launch(_))));
}
