use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file to PCM.
pub trait AudioReader: Send {
    /// Decode the best audio stream to a mono PCM segment at the given
    /// sample rate. Returns None if the input has no audio stream.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>>;
}
