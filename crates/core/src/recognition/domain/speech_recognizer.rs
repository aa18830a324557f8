use super::transcript_segment::TranscriptSegment;
use crate::audio::domain::audio_segment::AudioSegment;
use crate::shared::constants::WHISPER_MODEL_BASE_URL;

/// Domain interface for speech-to-text recognition.
///
/// Implementations run inference on audio to produce an ordered sequence
/// of segment-level timestamped text spans.
pub trait SpeechRecognizer: Send {
    fn recognize(
        &self,
        audio: &AudioSegment,
    ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>>;
}

/// Whisper model tier: larger models trade speed for accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelSize {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    /// ggml model file name for this tier.
    pub fn file_name(&self) -> &'static str {
        match self {
            ModelSize::Tiny => "ggml-tiny.bin",
            ModelSize::Base => "ggml-base.bin",
            ModelSize::Small => "ggml-small.bin",
            ModelSize::Medium => "ggml-medium.bin",
            ModelSize::Large => "ggml-large-v3.bin",
        }
    }

    pub fn download_url(&self) -> String {
        format!("{}/{}", WHISPER_MODEL_BASE_URL, self.file_name())
    }
}
