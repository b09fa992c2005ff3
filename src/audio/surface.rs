//! Waveform rendering surface
//!
//! A surface is acquired from a [`WaveformHost`] when the overview mounts
//! and released when it unmounts. The host keeps a ledger of live
//! surfaces so a missed release shows up as a non-zero live count.

use super::source::AudioSource;
use egui::Color32;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// Identifier of an acquired surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

/// Fixed visual parameters of the waveform surface
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformStyle {
    /// Color of the not-yet-played bars
    pub wave_color: Color32,
    /// Color of the played bars
    pub progress_color: Color32,
    pub cursor_color: Color32,
    pub bar_width: f32,
    pub bar_radius: f32,
    pub bar_gap: f32,
    pub cursor_width: f32,
    pub height: f32,
}

impl Default for WaveformStyle {
    fn default() -> Self {
        Self {
            wave_color: Color32::from_rgb(0x4F, 0x76, 0xC7),
            progress_color: Color32::from_rgb(0x38, 0x33, 0x51),
            cursor_color: Color32::from_rgb(0x38, 0x33, 0x51),
            bar_width: 2.0,
            bar_radius: 3.0,
            bar_gap: 2.0,
            cursor_width: 1.0,
            height: 80.0,
        }
    }
}

#[derive(Debug, Default)]
struct SurfaceLedger {
    next_id: u64,
    live: Vec<SurfaceId>,
    acquired: u64,
    released: u64,
}

/// Owner of the surface ledger; hands out [`WaveformHandle`]s
#[derive(Debug, Clone, Default)]
pub struct WaveformHost {
    ledger: Arc<Mutex<SurfaceLedger>>,
}

impl WaveformHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a new surface configured with `style`, then load an empty
    /// audio source into it
    pub fn acquire(&self, style: WaveformStyle) -> WaveformHandle {
        let id = {
            let mut ledger = self.ledger.lock();
            let id = SurfaceId(ledger.next_id);
            ledger.next_id += 1;
            ledger.live.push(id);
            ledger.acquired += 1;
            id
        };

        info!("[WAVEFORM] Acquired surface {:?}", id);

        let mut handle = WaveformHandle {
            id,
            style,
            source: None,
            ledger: Arc::clone(&self.ledger),
        };
        handle.load(AudioSource::empty());
        handle
    }

    /// Number of surfaces currently held
    pub fn live_count(&self) -> usize {
        self.ledger.lock().live.len()
    }

    /// Total surfaces ever acquired from this host
    pub fn acquired_total(&self) -> u64 {
        self.ledger.lock().acquired
    }

    /// Total surfaces released back to this host
    pub fn released_total(&self) -> u64 {
        self.ledger.lock().released
    }
}

/// Exclusive handle to an acquired waveform surface
///
/// Dropping the handle releases the surface.
#[derive(Debug)]
pub struct WaveformHandle {
    id: SurfaceId,
    style: WaveformStyle,
    /// `None` until the first load
    source: Option<AudioSource>,
    ledger: Arc<Mutex<SurfaceLedger>>,
}

impl WaveformHandle {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn style(&self) -> &WaveformStyle {
        &self.style
    }

    pub fn source(&self) -> Option<&AudioSource> {
        self.source.as_ref()
    }

    /// Replace the displayed audio
    pub fn load(&mut self, source: AudioSource) {
        debug!(
            "[WAVEFORM] Surface {:?} loaded {} samples",
            self.id,
            source.samples().len()
        );
        self.source = Some(source);
    }

    /// Release the surface now
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for WaveformHandle {
    fn drop(&mut self) {
        let mut ledger = self.ledger.lock();
        if let Some(pos) = ledger.live.iter().position(|id| *id == self.id) {
            ledger.live.swap_remove(pos);
            ledger.released += 1;
        }
        info!("[WAVEFORM] Released surface {:?}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = WaveformStyle::default();
        assert_eq!(style.wave_color, Color32::from_rgb(79, 118, 199));
        assert_eq!(style.progress_color, Color32::from_rgb(56, 51, 81));
        assert_eq!(style.bar_width, 2.0);
        assert_eq!(style.bar_gap, 2.0);
        assert_eq!(style.height, 80.0);
        assert_eq!(style.cursor_width, 1.0);
    }

    #[test]
    fn test_acquire_and_release() {
        let host = WaveformHost::new();
        let handle = host.acquire(WaveformStyle::default());
        assert_eq!(host.live_count(), 1);

        handle.release();
        assert_eq!(host.live_count(), 0);
        assert_eq!(host.acquired_total(), 1);
        assert_eq!(host.released_total(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let host = WaveformHost::new();
        let a = host.acquire(WaveformStyle::default());
        let b = host.acquire(WaveformStyle::default());
        assert_ne!(a.id(), b.id());
        assert_eq!(host.live_count(), 2);
        drop(a);
        assert_eq!(host.live_count(), 1);
        drop(b);
        assert_eq!(host.live_count(), 0);
    }

    #[test]
    fn test_acquire_loads_empty_source() {
        let host = WaveformHost::new();
        let handle = host.acquire(WaveformStyle::default());
        assert_eq!(handle.style(), &WaveformStyle::default());
        assert_eq!(handle.source(), Some(&AudioSource::empty()));
    }
}
