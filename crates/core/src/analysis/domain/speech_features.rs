use crate::recognition::domain::transcript_segment::TranscriptSegment;

/// Minimum silence gap between adjacent segments counted as a pause, in seconds.
pub const DEFAULT_PAUSE_THRESHOLD: f64 = 0.2;

/// Words per second across the whole spoken span.
///
/// The span is `last.end - first.start`. Returns 0.0 for empty input or a
/// non-positive span (zero-length segment, out-of-order timestamps).
pub fn speech_rate(segments: &[TranscriptSegment]) -> f64 {
    if segments.is_empty() {
        return 0.0;
    }
    let span = total_duration(segments);
    if span <= 0.0 {
        return 0.0;
    }
    word_total(segments) as f64 / span
}

/// Arithmetic mean of per-segment word counts. Returns 0.0 for empty input.
pub fn average_phrase_length(segments: &[TranscriptSegment]) -> f64 {
    if segments.is_empty() {
        return 0.0;
    }
    word_total(segments) as f64 / segments.len() as f64
}

/// Mean duration and count of inter-segment gaps strictly greater than
/// `threshold` seconds.
///
/// A gap exactly equal to the threshold is not a pause. Returns `(0.0, 0)`
/// when no gap qualifies, including for sequences shorter than two segments.
pub fn pause_stats(segments: &[TranscriptSegment], threshold: f64) -> (f64, usize) {
    let pauses: Vec<f64> = segments
        .windows(2)
        .map(|pair| pair[1].start - pair[0].end)
        .filter(|gap| *gap > threshold)
        .collect();

    if pauses.is_empty() {
        return (0.0, 0);
    }
    let mean = pauses.iter().sum::<f64>() / pauses.len() as f64;
    (mean, pauses.len())
}

/// Start time of the first segment. Returns 0.0 for empty input.
pub fn onset_latency(segments: &[TranscriptSegment]) -> f64 {
    segments.first().map_or(0.0, |seg| seg.start)
}

/// Span from the first segment's start to the last segment's end.
/// Returns 0.0 for empty input.
pub fn total_duration(segments: &[TranscriptSegment]) -> f64 {
    match (segments.first(), segments.last()) {
        (Some(first), Some(last)) => last.end - first.start,
        _ => 0.0,
    }
}

fn word_total(segments: &[TranscriptSegment]) -> usize {
    segments.iter().map(|seg| seg.word_count()).sum()
}
