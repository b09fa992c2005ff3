//! Audio sample source for the waveform surface

/// Mono sample data loaded into a waveform surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioSource {
    samples: Vec<f32>,
}

impl AudioSource {
    /// A source with no samples; renders as a flat baseline
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let source = AudioSource::empty();
        assert!(source.is_empty());
        assert!(source.samples().is_empty());
        assert_eq!(source, AudioSource::default());
    }
}
