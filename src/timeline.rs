//! Compiles rhythm templates into absolute-offset note timelines.

use std::fmt::Display;

use crate::{
    config::GenerationConfig,
    drum::Drum,
    pattern::{BeatEvent, PatternError, RhythmPattern},
};

// -------------------------------------------------------------------------------------------------

/// Velocity of accented notes, on the MIDI 0..=127 scale.
pub const ACCENT_VELOCITY: u8 = 100;
/// Velocity of unaccented notes.
pub const PLAIN_VELOCITY: u8 = 70;

/// Tolerance used when matching fractional beat positions against the `0.33`
/// and `0.67` triplet markers. Kept as an explicit tolerance so that slightly
/// off template values still classify as triplets.
pub const TRIPLET_TOLERANCE: f64 = 0.01;

/// Note length used for single-event templates, where no adjacent-beat
/// spacing exists to infer a duration from.
const DEFAULT_NOTE_LENGTH: f64 = 0.5;

// -------------------------------------------------------------------------------------------------

/// A single compiled note or rest: drums sounding together at an absolute
/// offset, with a duration and a velocity. Offsets and durations are measured
/// in quarter-note lengths; offsets are absolute across all compiled bars.
/// Rests carry no velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineEvent {
    pub drums: Vec<Drum>,
    pub duration: f64,
    pub offset: f64,
    pub velocity: Option<u8>,
}

impl TimelineEvent {
    /// True when this event is a timed rest.
    pub fn is_rest(&self) -> bool {
        self.drums.is_empty()
    }
}

impl Display for TimelineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let drums = if self.is_rest() {
            "---".to_string()
        } else {
            self.drums
                .iter()
                .map(Drum::to_string)
                .collect::<Vec<_>>()
                .join("|")
        };
        match self.velocity {
            Some(velocity) => f.write_fmt(format_args!(
                "{:.2}: {} {:.2} v{}",
                self.offset, drums, self.duration, velocity
            )),
            None => f.write_fmt(format_args!(
                "{:.2}: {} {:.2}",
                self.offset, drums, self.duration
            )),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Expand a rhythm template into a timeline of absolute-offset events across
/// the given number of repeated bars of `numerator` quarter-note beats.
///
/// Templates containing any triplet-subdivided beat are compiled entirely
/// through the triplet algorithm; all other templates through the straight
/// one. The decision is template-wide: straight and triplet subdivisions only
/// mix at the per-beat granularity of the triplet algorithm's group fallback.
///
/// Compilation is pure and deterministic: the same template and bar count
/// always produce the same timeline.
pub fn compile(
    pattern: &RhythmPattern,
    bars: u32,
    numerator: u32,
) -> Result<Vec<TimelineEvent>, PatternError> {
    let bar_length = numerator as f64;
    for event in pattern.events() {
        if event.beat >= bar_length + 1.0 {
            return Err(PatternError::BeatOutOfRange { beat: event.beat });
        }
    }
    let has_triplets = pattern
        .events()
        .iter()
        .any(|event| is_triplet_fraction(event.beat_fraction()));
    let mut timeline = Vec::with_capacity(pattern.len() * bars as usize);
    for bar in 0..bars {
        let bar_offset = (bar * numerator) as f64;
        if has_triplets {
            compile_triplet_bar(pattern, bar_offset, &mut timeline);
        } else {
            compile_straight_bar(pattern, bar_offset, &mut timeline);
        }
    }
    Ok(timeline)
}

/// [`compile`] with bar count and meter taken from a [`GenerationConfig`].
pub fn compile_with_config(
    pattern: &RhythmPattern,
    config: &GenerationConfig,
) -> Result<Vec<TimelineEvent>, PatternError> {
    compile(pattern, config.bars, config.numerator)
}

// -------------------------------------------------------------------------------------------------

/// Compile one bar of a template without triplet subdivisions: each event is
/// placed at `bar_offset + beat - 1` with an inferred duration.
fn compile_straight_bar(
    pattern: &RhythmPattern,
    bar_offset: f64,
    timeline: &mut Vec<TimelineEvent>,
) {
    for (index, event) in pattern.events().iter().enumerate() {
        let offset = bar_offset + event.beat - 1.0;
        let duration = inferred_duration(pattern, index);
        timeline.push(timeline_event(event, duration, offset));
    }
}

/// Compile one bar of a triplet-subdivided template. Events are grouped by
/// their integer beat: groups containing a late (`≈0.67`) triplet member are
/// laid out on the 1/3 grid, all other groups fall back to straight layout
/// within their beat, with durations still inferred across the whole
/// template.
fn compile_triplet_bar(
    pattern: &RhythmPattern,
    bar_offset: f64,
    timeline: &mut Vec<TimelineEvent>,
) {
    let events = pattern.events();
    let mut start = 0;
    while start < events.len() {
        // beats are strictly increasing, so a beat group is a consecutive run
        // of events sharing the same integer beat, already sorted by beat
        let beat_int = events[start].beat.floor();
        let mut end = start + 1;
        while end < events.len() && events[end].beat.floor() == beat_int {
            end += 1;
        }
        let group = &events[start..end];
        let beat_offset = bar_offset + beat_int - 1.0;

        let is_triplet_group = group
            .iter()
            .any(|event| is_late_triplet(event.beat_fraction()));
        if is_triplet_group {
            for event in group {
                let fraction = event.beat_fraction();
                let intra_beat_offset = if fraction.abs() < TRIPLET_TOLERANCE {
                    0.0
                } else if is_late_triplet(fraction) {
                    2.0 / 3.0
                } else {
                    // malformed or partial triplet group: use the raw fraction
                    fraction
                };
                let duration = if is_late_triplet(fraction) {
                    2.0 / 3.0
                } else {
                    1.0 / 3.0
                };
                timeline.push(timeline_event(event, duration, beat_offset + intra_beat_offset));
            }
        } else {
            for (group_index, event) in group.iter().enumerate() {
                let offset = beat_offset + event.beat_fraction();
                let duration = inferred_duration(pattern, start + group_index);
                timeline.push(timeline_event(event, duration, offset));
            }
        }
        start = end;
    }
}

/// Infer the duration of the event at `index` from the template's beat
/// spacing: the distance to the next event, or for the last event the mean of
/// all consecutive beat deltas, or the default note length for single-event
/// templates.
fn inferred_duration(pattern: &RhythmPattern, index: usize) -> f64 {
    let events = pattern.events();
    if index + 1 < events.len() {
        return events[index + 1].beat - events[index].beat;
    }
    if events.len() < 2 {
        return DEFAULT_NOTE_LENGTH;
    }
    let mut delta_sum = 0.0;
    for pair in events.windows(2) {
        delta_sum += pair[1].beat - pair[0].beat;
    }
    delta_sum / (events.len() - 1) as f64
}

fn timeline_event(event: &BeatEvent, duration: f64, offset: f64) -> TimelineEvent {
    let velocity = if event.is_rest() {
        None
    } else if event.accent {
        Some(ACCENT_VELOCITY)
    } else {
        Some(PLAIN_VELOCITY)
    };
    TimelineEvent {
        drums: event.drums.clone(),
        duration,
        offset,
        velocity,
    }
}

fn is_triplet_fraction(fraction: f64) -> bool {
    (fraction - 0.33).abs() < TRIPLET_TOLERANCE || is_late_triplet(fraction)
}

fn is_late_triplet(fraction: f64) -> bool {
    (fraction - 0.67).abs() < TRIPLET_TOLERANCE
}

// -------------------------------------------------------------------------------------------------
