pub mod analyze_speech_use_case;
