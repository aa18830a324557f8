use crate::recognition::domain::transcript_segment::TranscriptSegment;

/// Speech timing statistics derived from one recognition pass.
///
/// Scalar fields are rounded to 2 decimal places by the analysis pipeline;
/// `segments` carries the recognizer output through unrounded and unmodified.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechMetrics {
    /// Words per second over the whole spoken span.
    pub speech_rate_wps: f64,
    /// Mean words per segment.
    pub avg_phrase_length: f64,
    /// Mean duration of pauses exceeding the threshold, in seconds.
    pub avg_pause_duration: f64,
    /// Number of such pauses.
    pub pause_count: usize,
    /// Start time of the first segment, in seconds.
    pub speech_onset_latency: f64,
    /// First segment start to last segment end, in seconds.
    pub total_duration: f64,
    pub segments: Vec<TranscriptSegment>,
}
