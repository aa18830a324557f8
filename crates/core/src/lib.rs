pub mod analysis;
pub mod audio;
pub mod pipeline;
pub mod recognition;
pub mod shared;
