//! Generation settings shared between the compiler, sinks and future
//! probabilistic generators.

// -------------------------------------------------------------------------------------------------

/// Numeric generation parameters: tempo, meter, bar count, and the named
/// probabilities of a probabilistic sheet generator.
///
/// The deterministic timeline compiler only consumes `bars` and `numerator`;
/// tempo and `denominator` are metadata for event sinks, and the probability
/// fields are carried configuration state for generators which create
/// templates from scratch rather than from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Tempo in beats per minute.
    pub bpm: f32,
    /// Time signature numerator: quarter-note beats per bar.
    pub numerator: u32,
    /// Time signature denominator.
    pub denominator: u32,
    /// Number of bar repetitions to compile.
    pub bars: u32,
    /// Base note length in quarter-note units.
    pub base_note_length: f64,
    pub subdivision_probability: f64,
    pub triplet_probability: f64,
    pub rest_probability: f64,
    pub double_note_probability: f64,
    pub triple_note_probability: f64,
    pub accent_probability: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            numerator: 4,
            denominator: 4,
            bars: 4,
            base_note_length: 0.5,
            subdivision_probability: 0.1,
            triplet_probability: 0.1,
            rest_probability: 0.3,
            double_note_probability: 0.1,
            triple_note_probability: 0.1,
            accent_probability: 0.2,
        }
    }
}

// -------------------------------------------------------------------------------------------------
