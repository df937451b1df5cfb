//! Predefined, named rhythm templates.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::drum::Drum::{self, Bass, ClosedHihat, Snare};
use crate::pattern::{BeatEvent, RhythmPattern};

// -------------------------------------------------------------------------------------------------

fn event(beat: f64, drums: &[Drum], accent: bool) -> BeatEvent {
    BeatEvent::new(beat, drums.to_vec(), accent)
}

/// Standard rock: bass on 1 and 3, snare on 2 and 4, straight eighth hi-hats.
pub fn standard_rock() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[Bass, ClosedHihat], true),
        event(1.5, &[ClosedHihat], false),
        event(2.0, &[Snare, ClosedHihat], true),
        event(2.5, &[ClosedHihat], false),
        event(3.0, &[Bass, ClosedHihat], true),
        event(3.5, &[ClosedHihat], false),
        event(4.0, &[Snare, ClosedHihat], true),
        event(4.5, &[ClosedHihat], false),
    ])
}

/// Disco: four-on-the-floor bass with backbeat snares.
pub fn disco() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[Bass, ClosedHihat], true),
        event(1.5, &[ClosedHihat], false),
        event(2.0, &[Bass, Snare, ClosedHihat], true),
        event(2.5, &[ClosedHihat], false),
        event(3.0, &[Bass, ClosedHihat], true),
        event(3.5, &[ClosedHihat], false),
        event(4.0, &[Bass, Snare, ClosedHihat], true),
        event(4.5, &[ClosedHihat], false),
    ])
}

/// Shuffle: triplet-feel hi-hats on the first and third triplet of each beat.
pub fn shuffle() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[Bass, ClosedHihat], true),
        event(1.67, &[ClosedHihat], false),
        event(2.0, &[ClosedHihat], false),
        event(2.67, &[ClosedHihat], false),
        event(3.0, &[Snare, ClosedHihat], true),
        event(3.67, &[ClosedHihat], false),
        event(4.0, &[ClosedHihat], false),
        event(4.67, &[ClosedHihat], false),
    ])
}

/// Funk: syncopated sixteenths with off-beat bass pushes.
pub fn funk() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[Bass, ClosedHihat], true),
        event(1.25, &[ClosedHihat], false),
        event(1.5, &[ClosedHihat], false),
        event(2.0, &[Snare, ClosedHihat], true),
        event(2.5, &[Bass], false),
        event(2.75, &[ClosedHihat], false),
        event(3.0, &[ClosedHihat], false),
        event(3.5, &[Bass, ClosedHihat], false),
        event(4.0, &[Snare, ClosedHihat], true),
        event(4.5, &[ClosedHihat], false),
    ])
}

/// Ballad: plain quarter notes, bass on 1, snare on 3.
pub fn ballad() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[Bass, ClosedHihat], true),
        event(2.0, &[ClosedHihat], false),
        event(3.0, &[Snare, ClosedHihat], true),
        event(4.0, &[ClosedHihat], false),
    ])
}

/// Reggae: bass and snare pushed onto the off-beats.
pub fn reggae() -> RhythmPattern {
    RhythmPattern::from_events_unchecked(vec![
        event(1.0, &[ClosedHihat], false),
        event(1.5, &[Bass, ClosedHihat], false),
        event(2.0, &[ClosedHihat], false),
        event(2.5, &[Snare, ClosedHihat], true),
        event(3.0, &[ClosedHihat], false),
        event(3.5, &[Bass, ClosedHihat], false),
        event(4.0, &[ClosedHihat], false),
        event(4.5, &[Snare, ClosedHihat], true),
    ])
}

// -------------------------------------------------------------------------------------------------

// map of all catalog patterns by name
lazy_static! {
    static ref PATTERN_TABLE: HashMap<&'static str, fn() -> RhythmPattern> = {
        HashMap::from([
            ("standard_rock", standard_rock as fn() -> RhythmPattern),
            ("disco", disco as fn() -> RhythmPattern),
            ("shuffle", shuffle as fn() -> RhythmPattern),
            ("funk", funk as fn() -> RhythmPattern),
            ("ballad", ballad as fn() -> RhythmPattern),
            ("reggae", reggae as fn() -> RhythmPattern),
        ])
    };
}

/// Fetch a catalog pattern by name.
pub fn from_name(name: &str) -> Option<RhythmPattern> {
    PATTERN_TABLE.get(name).map(|create| create())
}

/// Names of all catalog patterns, sorted alphabetically.
pub fn names() -> Vec<&'static str> {
    let mut names = PATTERN_TABLE.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table() {
        assert_eq!(
            names(),
            vec![
                "ballad",
                "disco",
                "funk",
                "reggae",
                "shuffle",
                "standard_rock"
            ]
        );
        for name in names() {
            let pattern = from_name(name).unwrap();
            assert!(!pattern.is_empty(), "empty catalog pattern '{}'", name);
        }
        assert!(from_name("bossa_nova").is_none());
    }

    #[test]
    fn shapes() {
        assert_eq!(standard_rock().len(), 8);
        assert_eq!(disco().len(), 8);
        assert_eq!(shuffle().len(), 8);
        assert_eq!(funk().len(), 10);
        assert_eq!(ballad().len(), 4);
        assert_eq!(reggae().len(), 8);
        // no catalog pattern contains a rest
        for name in names() {
            let pattern = from_name(name).unwrap();
            assert!(pattern.events().iter().all(|event| !event.is_rest()));
        }
    }
}
