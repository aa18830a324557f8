use std::path::Path;

use crate::analysis::domain::speech_features::{
    average_phrase_length, onset_latency, pause_stats, speech_rate, total_duration,
    DEFAULT_PAUSE_THRESHOLD,
};
use crate::analysis::domain::speech_metrics::SpeechMetrics;
use crate::audio::domain::audio_reader::AudioReader;
use crate::recognition::domain::speech_recognizer::SpeechRecognizer;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

pub struct AnalyzeSpeechUseCase {
    reader: Box<dyn AudioReader>,
    recognizer: Box<dyn SpeechRecognizer>,
    pause_threshold: f64,
}

impl AnalyzeSpeechUseCase {
    pub fn new(reader: Box<dyn AudioReader>, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            reader,
            recognizer,
            pause_threshold: DEFAULT_PAUSE_THRESHOLD,
        }
    }

    pub fn with_pause_threshold(mut self, threshold: f64) -> Self {
        self.pause_threshold = threshold;
        self
    }

    /// Decode, recognize, and reduce one audio file to timing statistics.
    ///
    /// Reader and recognizer failures propagate unmodified. An input with
    /// no audio stream yields an empty segment list, so every metric takes
    /// its empty-input fallback value.
    pub fn run(&self, audio_path: &Path) -> Result<SpeechMetrics, Box<dyn std::error::Error>> {
        // 1. Decode to mono PCM at the Whisper input rate
        let segments = match self.reader.read_audio(audio_path, WHISPER_SAMPLE_RATE)? {
            // 2. Recognize timestamped segments
            Some(audio) => self.recognizer.recognize(&audio)?,
            None => {
                log::warn!("No audio stream in {}", audio_path.display());
                Vec::new()
            }
        };

        // 3. Reduce the same segment slice through each metric
        let (avg_pause, pause_count) = pause_stats(&segments, self.pause_threshold);

        // 4. Round scalars for reporting; the count stays exact and the
        //    segments pass through untouched
        Ok(SpeechMetrics {
            speech_rate_wps: round2(speech_rate(&segments)),
            avg_phrase_length: round2(average_phrase_length(&segments)),
            avg_pause_duration: round2(avg_pause),
            pause_count,
            speech_onset_latency: round2(onset_latency(&segments)),
            total_duration: round2(total_duration(&segments)),
            segments,
        })
    }
}

/// Round to 2 decimal places, halves away from zero (`f64::round`).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::domain::audio_segment::AudioSegment;
    use crate::recognition::domain::transcript_segment::TranscriptSegment;
    use approx::assert_relative_eq;
    use std::path::Path;

    // ─── Stubs ───

    struct StubAudioReader {
        segment: Option<AudioSegment>,
    }

    impl AudioReader for StubAudioReader {
        fn read_audio(
            &self,
            _: &Path,
            _: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            Ok(self.segment.clone())
        }
    }

    struct FailingAudioReader;

    impl AudioReader for FailingAudioReader {
        fn read_audio(
            &self,
            _: &Path,
            _: u32,
        ) -> Result<Option<AudioSegment>, Box<dyn std::error::Error>> {
            Err("decode failed".into())
        }
    }

    struct StubRecognizer {
        segments: Vec<TranscriptSegment>,
    }

    impl SpeechRecognizer for StubRecognizer {
        fn recognize(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
            Ok(self.segments.clone())
        }
    }

    struct FailingRecognizer;

    impl SpeechRecognizer for FailingRecognizer {
        fn recognize(
            &self,
            _: &AudioSegment,
        ) -> Result<Vec<TranscriptSegment>, Box<dyn std::error::Error>> {
            Err("inference failed".into())
        }
    }

    fn silent_audio() -> AudioSegment {
        AudioSegment::new(vec![0.0; 16000], 16000)
    }

    fn use_case_with(segments: Vec<TranscriptSegment>) -> AnalyzeSpeechUseCase {
        AnalyzeSpeechUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(StubRecognizer { segments }),
        )
    }

    #[test]
    fn test_two_segment_scenario() {
        let uc = use_case_with(vec![
            TranscriptSegment::new("hello world", 0.0, 1.0),
            TranscriptSegment::new("foo", 1.5, 2.0),
        ]);
        let metrics = uc.run(Path::new("in.wav")).unwrap();

        assert_relative_eq!(metrics.speech_rate_wps, 1.5);
        assert_relative_eq!(metrics.avg_phrase_length, 1.5);
        assert_relative_eq!(metrics.avg_pause_duration, 0.5);
        assert_eq!(metrics.pause_count, 1);
        assert_relative_eq!(metrics.speech_onset_latency, 0.0);
        assert_relative_eq!(metrics.total_duration, 2.0);
        assert_eq!(metrics.segments.len(), 2);
    }

    #[test]
    fn test_zero_duration_segment_scenario() {
        let uc = use_case_with(vec![TranscriptSegment::new("a b c", 5.0, 5.0)]);
        let metrics = uc.run(Path::new("in.wav")).unwrap();

        assert_relative_eq!(metrics.speech_rate_wps, 0.0);
        assert_relative_eq!(metrics.avg_phrase_length, 3.0);
        assert_eq!(metrics.pause_count, 0);
        assert_relative_eq!(metrics.speech_onset_latency, 5.0);
        assert_relative_eq!(metrics.total_duration, 0.0);
    }

    #[test]
    fn test_scalars_rounded_to_two_decimals() {
        // 4 words over 2.674s = 1.4958...wps; onset 0.333
        let uc = use_case_with(vec![
            TranscriptSegment::new("one two three", 0.333, 1.0),
            TranscriptSegment::new("four", 2.0, 3.007),
        ]);
        let metrics = uc.run(Path::new("in.wav")).unwrap();

        assert_relative_eq!(metrics.speech_rate_wps, 1.5);
        assert_relative_eq!(metrics.speech_onset_latency, 0.33);
        assert_relative_eq!(metrics.avg_pause_duration, 1.0);
        assert_relative_eq!(metrics.total_duration, 2.67);
    }

    #[test]
    fn test_segments_pass_through_unrounded() {
        let segments = vec![TranscriptSegment::new("hi", 0.333, 1.0071)];
        let uc = use_case_with(segments.clone());
        let metrics = uc.run(Path::new("in.wav")).unwrap();
        assert_eq!(metrics.segments, segments);
    }

    #[test]
    fn test_pause_threshold_override() {
        let segments = vec![
            TranscriptSegment::new("a", 0.0, 1.0),
            TranscriptSegment::new("b", 1.1, 2.0), // gap 0.1
        ];
        let default_uc = use_case_with(segments.clone());
        assert_eq!(default_uc.run(Path::new("in.wav")).unwrap().pause_count, 0);

        let strict_uc = use_case_with(segments).with_pause_threshold(0.05);
        assert_eq!(strict_uc.run(Path::new("in.wav")).unwrap().pause_count, 1);
    }

    #[test]
    fn test_missing_audio_stream_yields_empty_metrics() {
        let uc = AnalyzeSpeechUseCase::new(
            Box::new(StubAudioReader { segment: None }),
            Box::new(FailingRecognizer),
        );
        let metrics = uc.run(Path::new("in.wav")).unwrap();

        assert_relative_eq!(metrics.speech_rate_wps, 0.0);
        assert_relative_eq!(metrics.avg_phrase_length, 0.0);
        assert_relative_eq!(metrics.avg_pause_duration, 0.0);
        assert_eq!(metrics.pause_count, 0);
        assert_relative_eq!(metrics.speech_onset_latency, 0.0);
        assert_relative_eq!(metrics.total_duration, 0.0);
        assert!(metrics.segments.is_empty());
    }

    #[test]
    fn test_reader_error_propagates() {
        let uc = AnalyzeSpeechUseCase::new(
            Box::new(FailingAudioReader),
            Box::new(StubRecognizer { segments: vec![] }),
        );
        let err = uc.run(Path::new("in.wav")).unwrap_err();
        assert!(err.to_string().contains("decode failed"));
    }

    #[test]
    fn test_recognizer_error_propagates() {
        let uc = AnalyzeSpeechUseCase::new(
            Box::new(StubAudioReader {
                segment: Some(silent_audio()),
            }),
            Box::new(FailingRecognizer),
        );
        let err = uc.run(Path::new("in.wav")).unwrap_err();
        assert!(err.to_string().contains("inference failed"));
    }

    #[test]
    fn test_round2_truncates_below_half() {
        assert_relative_eq!(round2(1.4949999), 1.49);
        assert_relative_eq!(round2(1.4951), 1.5);
        assert_relative_eq!(round2(-1.337), -1.34);
        assert_relative_eq!(round2(2.0), 2.0);
    }
}
