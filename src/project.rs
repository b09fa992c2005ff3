//! Project description and completion counters
//!
//! Recording progress is not tracked yet, so the counters are fixed.

/// Number of sounds recorded so far
pub const COMPLETED_SOUNDS: u32 = 0;

/// Number of sounds the soundbank needs
pub const TOTAL_SOUNDS: u32 = 134;

/// Recorded/total counters for the soundbank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStats {
    pub completed: u32,
    pub total: u32,
}

impl Default for CompletionStats {
    fn default() -> Self {
        Self {
            completed: COMPLETED_SOUNDS,
            total: TOTAL_SOUNDS,
        }
    }
}

impl CompletionStats {
    /// Completion as a whole percentage, rounded half away from zero
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Fraction in [0, 1] for the gauge
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f32 / self.total as f32).clamp(0.0, 1.0)
    }

    /// Short "completed/total (percent%)" summary
    pub fn summary(&self) -> String {
        format!("{}/{} ({}%)", self.completed, self.total, self.percentage())
    }
}

/// Static description of the soundbank shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub language: &'static str,
    /// Voicebank type (CV = consonant-vowel samples)
    pub voice_type: &'static str,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            language: "Japanese",
            voice_type: "CV",
        }
    }
}

/// Recording status of a single phoneme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingStatus {
    #[default]
    Unrecorded,
}

impl RecordingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordingStatus::Unrecorded => "Unrecorded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_completion_is_zero() {
        let stats = CompletionStats::default();
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.total, 134);
        assert_eq!(stats.percentage(), 0);
        assert_eq!(stats.fraction(), 0.0);
        assert_eq!(stats.summary(), "0/134 (0%)");
    }

    #[test]
    fn test_percentage_rounds() {
        let stats = CompletionStats {
            completed: 67,
            total: 134,
        };
        assert_eq!(stats.percentage(), 50);

        let stats = CompletionStats {
            completed: 1,
            total: 134,
        };
        // 0.746% rounds up
        assert_eq!(stats.percentage(), 1);
    }

    #[test]
    fn test_zero_total_does_not_divide() {
        let stats = CompletionStats {
            completed: 0,
            total: 0,
        };
        assert_eq!(stats.percentage(), 0);
        assert_eq!(stats.fraction(), 0.0);
    }

    #[test]
    fn test_project_info_defaults() {
        let info = ProjectInfo::default();
        assert_eq!(info.language, "Japanese");
        assert_eq!(info.voice_type, "CV");
        assert_eq!(RecordingStatus::default().label(), "Unrecorded");
    }
}
