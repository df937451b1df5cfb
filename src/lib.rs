//! Drum kit rhythm sheet generator: expands declarative, per-bar rhythm
//! templates into playable note timelines, with probabilistic template
//! variations.
//!
//! The crate is organized around a small pipeline: a catalog or user supplied
//! [`RhythmPattern`] optionally passes through the [`VariantGenerator`], the
//! [`timeline`] compiler expands it into absolute-offset [`TimelineEvent`]s,
//! and an [`EventSink`] consumes the result.

pub mod drum;
pub use drum::{Drum, AUXILIARY_DRUMS};

pub mod pattern;
pub use pattern::{BeatEvent, PatternError, RhythmPattern};

pub mod variant;
pub use variant::{VariantGenerator, VariantKind};

pub mod timeline;
pub use timeline::{compile, compile_with_config, TimelineEvent};

pub mod sink;
pub use sink::{render_into, EventSink, TrackSink};

pub mod config;
pub use config::GenerationConfig;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{
        pattern::catalog,
        timeline::{ACCENT_VELOCITY, PLAIN_VELOCITY},
        *,
    };

    #[test]
    fn standard_rock_end_to_end() {
        let config = GenerationConfig::default();
        let rock = RhythmPattern::from_name("standard_rock").unwrap();
        let timeline = compile_with_config(&rock, &config).unwrap();

        // 8 template events over 4 bars
        assert_eq!(timeline.len(), 32);

        // bar 1, beat 1: accented bass + hi-hat eighth
        let first = &timeline[0];
        assert_eq!(first.offset, 0.0);
        assert_eq!(first.duration, 0.5);
        assert_eq!(first.velocity, Some(ACCENT_VELOCITY));
        assert_eq!(first.drums, vec![Drum::Bass, Drum::ClosedHihat]);

        // the closing off-beat hi-hat of every bar is a plain eighth
        for bar in 0..4 {
            let last_in_bar = &timeline[bar * 8 + 7];
            assert_eq!(last_in_bar.duration, 0.5);
            assert_eq!(last_in_bar.velocity, Some(PLAIN_VELOCITY));
        }

        // offsets strictly increase across the whole render
        for pair in timeline.windows(2) {
            assert!(pair[0].offset < pair[1].offset);
        }
    }

    #[test]
    fn variant_end_to_end() {
        let rock = catalog::standard_rock();
        let mut generator = VariantGenerator::new(Some(42));
        let variant = generator.create_variant(&rock, VariantKind::All);

        // variants keep the template shape, so the compiled timeline keeps
        // the event count and bar layout
        let timeline = compile(&variant, 4, 4).unwrap();
        assert_eq!(timeline.len(), 32);
        for event in &timeline {
            assert!(!event.drums.is_empty());
            assert!(event.velocity.is_some());
        }
    }
}
