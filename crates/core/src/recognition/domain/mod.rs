pub mod speech_recognizer;
pub mod transcript_renderer;
pub mod transcript_segment;
