//! Audio display plumbing
//!
//! There is no capture or playback; this module only feeds the waveform
//! surface with (currently empty) sample data.

pub mod source;
pub mod surface;

pub use source::AudioSource;
pub use surface::{SurfaceId, WaveformHandle, WaveformHost, WaveformStyle};
