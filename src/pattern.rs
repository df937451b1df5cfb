//! Rhythm templates: sparse, per-bar lists of beat events.

use derive_more::Display;

use crate::drum::Drum;

pub mod catalog;

// -------------------------------------------------------------------------------------------------

/// Errors raised when a rhythm template violates the beat invariants.
#[derive(Clone, Debug, Display, PartialEq)]
pub enum PatternError {
    /// Beat values within a template must be strictly increasing.
    #[display("beat {beat} at event {index} is not above its predecessor")]
    UnsortedBeats { index: usize, beat: f64 },
    /// Beat values must lie in `[1.0, numerator + 1.0)`.
    #[display("beat {beat} lies outside the bar")]
    BeatOutOfRange { beat: f64 },
}

impl std::error::Error for PatternError {}

// -------------------------------------------------------------------------------------------------

/// A single entry in a [`RhythmPattern`]: which drums sound at which position
/// within the bar.
///
/// `beat` is 1-based and measured in quarter-note units: `1.0` is the first
/// beat, `1.5` the eighth note after it, `2.0` the second beat. Fractions of
/// `0.33`/`0.67` mark triplet subdivisions. An empty `drums` list is a rest.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatEvent {
    pub beat: f64,
    pub drums: Vec<Drum>,
    pub accent: bool,
}

impl BeatEvent {
    /// Create a new sounding beat event.
    pub fn new(beat: f64, drums: Vec<Drum>, accent: bool) -> Self {
        Self {
            beat,
            drums,
            accent,
        }
    }

    /// Create a rest at the given beat position.
    pub fn rest(beat: f64) -> Self {
        Self {
            beat,
            drums: Vec::new(),
            accent: false,
        }
    }

    /// True when no drum sounds at this position.
    pub fn is_rest(&self) -> bool {
        self.drums.is_empty()
    }

    /// Fractional part of the beat position, encoding the subdivision.
    pub(crate) fn beat_fraction(&self) -> f64 {
        self.beat.fract()
    }
}

// -------------------------------------------------------------------------------------------------

/// One bar's worth of rhythm: an ordered list of [`BeatEvent`]s, meant to be
/// repeated over a number of bars by the timeline compiler.
///
/// Beat values are validated to be strictly increasing and not below `1.0` on
/// construction; the upper bar bound is checked by the compiler, which knows
/// the meter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RhythmPattern {
    events: Vec<BeatEvent>,
}

impl RhythmPattern {
    /// Create a validated pattern from a list of beat events.
    pub fn new(events: Vec<BeatEvent>) -> Result<Self, PatternError> {
        let mut last_beat = f64::NEG_INFINITY;
        for (index, event) in events.iter().enumerate() {
            if event.beat < 1.0 {
                return Err(PatternError::BeatOutOfRange { beat: event.beat });
            }
            if event.beat <= last_beat {
                return Err(PatternError::UnsortedBeats {
                    index,
                    beat: event.beat,
                });
            }
            last_beat = event.beat;
        }
        Ok(Self { events })
    }

    /// Create a pattern from events known to satisfy the beat invariants.
    /// Used internally where validity is preserved by construction.
    pub(crate) fn from_events_unchecked(events: Vec<BeatEvent>) -> Self {
        debug_assert!(
            Self::new(events.clone()).is_ok(),
            "events violate the beat invariants"
        );
        Self { events }
    }

    /// Look up one of the predefined catalog patterns by name.
    pub fn from_name(name: &str) -> Option<Self> {
        catalog::from_name(name)
    }

    /// The pattern's beat events, in beat order.
    pub fn events(&self) -> &[BeatEvent] {
        &self.events
    }

    /// Number of beat events in the pattern.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True for a degenerate, empty pattern.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

// -------------------------------------------------------------------------------------------------
