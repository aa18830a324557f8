/// Whisper expects 16 kHz mono PCM input.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const WHISPER_MODEL_BASE_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Application directory name under the platform cache/data dir.
pub const MODEL_CACHE_NAMESPACE: &str = "Speechmeter";
