//! Probabilistic rhythm template variations.

use derive_more::Display;
use rand::{rng, seq::IndexedRandom, Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    drum::{Drum, AUXILIARY_DRUMS},
    pattern::RhythmPattern,
};

// -------------------------------------------------------------------------------------------------

/// Which variation to apply to a rhythm template.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Add snares to events lacking them, forcing an accent.
    #[display("snare")]
    Snare,
    /// Add bass drums to events lacking them.
    #[display("bass")]
    Bass,
    /// Add and remove auxiliary drums at random.
    #[display("random")]
    Random,
    /// Snare, bass and random modifications applied in sequence.
    #[display("all")]
    All,
    /// No modification: returns a plain copy of the template.
    #[display("identity")]
    Identity,
}

// -------------------------------------------------------------------------------------------------

/// Derives modified copies of rhythm templates by probabilistically adding or
/// removing drum hits at existing beat positions. Input templates are never
/// mutated and beat positions never change, so variants keep the template's
/// beat invariants.
///
/// Uses a Xoshiro random generator which can be seeded for reproducible
/// variants.
#[derive(Debug, Clone)]
pub struct VariantGenerator {
    rand_gen: Xoshiro256PlusPlus,
    seed: Option<u64>,
}

impl VariantGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rand_seed = seed.unwrap_or_else(|| rng().random());
        let rand_gen = Xoshiro256PlusPlus::seed_from_u64(rand_seed);
        Self { rand_gen, seed }
    }

    /// Reset the random generator to its initial state, when seeded.
    pub fn reset(&mut self) {
        if let Some(seed) = self.seed {
            self.rand_gen = Xoshiro256PlusPlus::seed_from_u64(seed);
        }
    }

    /// With the given probability per event, add a snare to events which have
    /// none yet. Added snares are played as accents.
    pub fn add_random_snare(
        &mut self,
        pattern: &RhythmPattern,
        probability: f64,
    ) -> RhythmPattern {
        let mut events = pattern.events().to_vec();
        for event in &mut events {
            if !event.drums.contains(&Drum::Snare) && self.chance(probability) {
                event.drums.push(Drum::Snare);
                event.accent = true;
            }
        }
        RhythmPattern::from_events_unchecked(events)
    }

    /// With the given probability per event, add a bass drum to events which
    /// have none yet. Accents are left as they are.
    pub fn add_random_bass(&mut self, pattern: &RhythmPattern, probability: f64) -> RhythmPattern {
        let mut events = pattern.events().to_vec();
        for event in &mut events {
            if !event.drums.contains(&Drum::Bass) && self.chance(probability) {
                event.drums.push(Drum::Bass);
            }
        }
        RhythmPattern::from_events_unchecked(events)
    }

    /// Randomly add auxiliary drums to and remove them from events. Bass and
    /// snare are protected from removal as long as any other drum can go, and
    /// events are never reduced to an empty drum list.
    pub fn random_modify_notes(
        &mut self,
        pattern: &RhythmPattern,
        add_probability: f64,
        remove_probability: f64,
    ) -> RhythmPattern {
        let mut events = pattern.events().to_vec();
        for event in &mut events {
            if self.chance(add_probability) {
                let candidates = AUXILIARY_DRUMS
                    .iter()
                    .copied()
                    .filter(|drum| !event.drums.contains(drum))
                    .collect::<Vec<_>>();
                if let Some(drum) = candidates.choose(&mut self.rand_gen) {
                    event.drums.push(*drum);
                }
            }
            if event.drums.len() > 1 && self.chance(remove_probability) {
                let removable = event
                    .drums
                    .iter()
                    .copied()
                    .filter(|drum| !matches!(drum, Drum::Bass | Drum::Snare))
                    .collect::<Vec<_>>();
                let removed = if let Some(drum) = removable.choose(&mut self.rand_gen) {
                    Some(*drum)
                } else {
                    // only protected drums remain: pick from all of them
                    event.drums.as_slice().choose(&mut self.rand_gen).copied()
                };
                if let Some(drum) = removed {
                    if let Some(position) = event.drums.iter().position(|d| *d == drum) {
                        event.drums.remove(position);
                    }
                }
            }
        }
        RhythmPattern::from_events_unchecked(events)
    }

    /// Create a template variant of the given kind, using each kind's default
    /// probabilities.
    pub fn create_variant(&mut self, pattern: &RhythmPattern, kind: VariantKind) -> RhythmPattern {
        match kind {
            VariantKind::Snare => self.add_random_snare(pattern, 0.3),
            VariantKind::Bass => self.add_random_bass(pattern, 0.2),
            VariantKind::Random => self.random_modify_notes(pattern, 0.15, 0.1),
            VariantKind::All => {
                let variant = self.add_random_snare(pattern, 0.2);
                let variant = self.add_random_bass(&variant, 0.15);
                self.random_modify_notes(&variant, 0.1, 0.05)
            }
            VariantKind::Identity => pattern.clone(),
        }
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.rand_gen.random::<f64>() < probability
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::pattern::catalog;

    #[test]
    fn snare_probability_bounds() {
        let pattern = catalog::standard_rock();
        let mut generator = VariantGenerator::new(Some(1));
        // probability 1: every event carries an accented snare
        let variant = generator.add_random_snare(&pattern, 1.0);
        for event in variant.events() {
            assert!(event.drums.contains(&Drum::Snare));
            assert!(event.accent);
        }
        // probability 0: untouched
        let variant = generator.add_random_snare(&pattern, 0.0);
        assert_eq!(variant, pattern);
    }

    #[test]
    fn bass_does_not_force_accents() {
        let pattern = catalog::reggae();
        let mut generator = VariantGenerator::new(Some(1));
        let variant = generator.add_random_bass(&pattern, 1.0);
        for (event, original) in variant.events().iter().zip(pattern.events()) {
            assert!(event.drums.contains(&Drum::Bass));
            assert_eq!(event.accent, original.accent);
        }
    }

    #[test]
    fn modify_never_empties_events() {
        let pattern = catalog::funk();
        for seed in 0..100 {
            let mut generator = VariantGenerator::new(Some(seed));
            let variant = generator.random_modify_notes(&pattern, 1.0, 1.0);
            for event in variant.events() {
                assert!(!event.drums.is_empty());
            }
        }
    }

    #[test]
    fn modify_protects_bass_and_snare() {
        // a single-drum snare event can't lose its snare, a bass+snare event
        // loses exactly one of the two
        let pattern = RhythmPattern::new(vec![
            crate::pattern::BeatEvent::new(1.0, vec![Drum::Snare], true),
            crate::pattern::BeatEvent::new(2.0, vec![Drum::Bass, Drum::Snare], true),
        ])
        .unwrap();
        for seed in 0..20 {
            let mut generator = VariantGenerator::new(Some(seed));
            let variant = generator.random_modify_notes(&pattern, 0.0, 1.0);
            assert_eq!(variant.events()[0].drums, vec![Drum::Snare]);
            assert_eq!(variant.events()[1].drums.len(), 1);
        }
    }

    #[test]
    fn seeded_variants_are_reproducible() {
        let pattern = catalog::standard_rock();
        for kind in [
            VariantKind::Snare,
            VariantKind::Bass,
            VariantKind::Random,
            VariantKind::All,
        ] {
            let variant_a = VariantGenerator::new(Some(42)).create_variant(&pattern, kind);
            let variant_b = VariantGenerator::new(Some(42)).create_variant(&pattern, kind);
            assert_eq!(variant_a, variant_b, "kind '{}'", kind);
        }
        // reset rewinds a seeded generator
        let mut generator = VariantGenerator::new(Some(7));
        let first = generator.create_variant(&pattern, VariantKind::All);
        generator.reset();
        let second = generator.create_variant(&pattern, VariantKind::All);
        assert_eq!(first, second);
    }

    #[test]
    fn identity_returns_a_plain_copy() {
        let pattern = catalog::ballad();
        let mut generator = VariantGenerator::new(None);
        assert_eq!(generator.create_variant(&pattern, VariantKind::Identity), pattern);
    }

    #[test]
    fn variants_keep_beat_positions() {
        let pattern = catalog::disco();
        let mut generator = VariantGenerator::new(Some(3));
        let variant = generator.create_variant(&pattern, VariantKind::All);
        let beats = |p: &RhythmPattern| p.events().iter().map(|e| e.beat).collect::<Vec<_>>();
        assert_eq!(beats(&variant), beats(&pattern));
    }
}
