//! Event sinks: the boundary that consumes compiled timelines.

use std::collections::HashMap;

use crate::{
    drum::Drum,
    pattern::{PatternError, RhythmPattern},
    timeline::{self, PLAIN_VELOCITY},
};

// -------------------------------------------------------------------------------------------------

/// Consumer of compiled timeline events. Sinks own pitch lookup, track
/// assignment and eventual serialization; the compiler only hands them drums,
/// timing and velocity.
pub trait EventSink {
    /// Append the drums sounding together at an absolute offset. An empty
    /// `drums` slice is a timed rest and carries no velocity.
    fn append(&mut self, drums: &[Drum], duration: f64, offset: f64, velocity: Option<u8>);
}

/// Compile the given template and feed the resulting timeline into a sink.
pub fn render_into(
    pattern: &RhythmPattern,
    bars: u32,
    numerator: u32,
    sink: &mut dyn EventSink,
) -> Result<(), PatternError> {
    for event in timeline::compile(pattern, bars, numerator)? {
        sink.append(&event.drums, event.duration, event.offset, event.velocity);
    }
    Ok(())
}

// -------------------------------------------------------------------------------------------------

/// A single note or rest collected by a [`TrackSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum TrackEvent {
    Note {
        pitch: u8,
        duration: f64,
        offset: f64,
        velocity: u8,
    },
    Rest {
        duration: f64,
        offset: f64,
    },
}

/// Sink which resolves drum names through an externally supplied name to
/// pitch map and collects the resulting track events in memory.
///
/// Drums without a pitch mapping are skipped with a warning instead of
/// failing the whole render, so partial configurations stay usable.
#[derive(Clone, Debug, Default)]
pub struct TrackSink {
    pitch_map: HashMap<String, u8>,
    events: Vec<TrackEvent>,
}

impl TrackSink {
    pub fn new(pitch_map: HashMap<String, u8>) -> Self {
        Self {
            pitch_map,
            events: Vec::new(),
        }
    }

    /// The collected track events, in append order.
    pub fn events(&self) -> &[TrackEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TrackEvent> {
        self.events
    }
}

impl EventSink for TrackSink {
    fn append(&mut self, drums: &[Drum], duration: f64, offset: f64, velocity: Option<u8>) {
        if drums.is_empty() {
            self.events.push(TrackEvent::Rest { duration, offset });
            return;
        }
        for drum in drums {
            if let Some(pitch) = self.pitch_map.get(drum.name()) {
                self.events.push(TrackEvent::Note {
                    pitch: *pitch,
                    duration,
                    offset,
                    velocity: velocity.unwrap_or(PLAIN_VELOCITY),
                });
            } else {
                log::warn!("No pitch mapping for drum '{}': skipping", drum);
            }
        }
    }
}

// -------------------------------------------------------------------------------------------------
