use std::fmt;

/// Stages of one transcription request. The pipeline is strictly linear;
/// a failure names the stage that was being entered when it occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Received,
    Stored,
    AudioExtracted,
    Recognized,
    Completed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Received => "Received",
            PipelineStage::Stored => "Stored",
            PipelineStage::AudioExtracted => "AudioExtracted",
            PipelineStage::Recognized => "Recognized",
            PipelineStage::Completed => "Completed",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
