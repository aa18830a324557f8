use super::transcript_segment::TranscriptSegment;

/// Render segments as one line each, in the form `start — end: text`,
/// with times printed to 2 decimal places.
pub fn timestamped_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| format!("{:.2} — {:.2}: {}", seg.start, seg.end, seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join the trimmed segment texts with single spaces, timestamps stripped.
pub fn plain_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| seg.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
