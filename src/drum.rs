//! Drum kit voices addressed by rhythm templates.

use derive_more::Display;

// -------------------------------------------------------------------------------------------------

/// A single drum kit voice. The closed set of voices the generator knows about:
/// templates, variants and pitch maps all refer to drums by their canonical
/// snake_case name as given by the `Display` impl.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
pub enum Drum {
    #[display("bass")]
    Bass,
    #[display("snare")]
    Snare,
    #[display("closed_hihat")]
    ClosedHihat,
    #[display("open_hihat")]
    OpenHihat,
    #[display("ride")]
    Ride,
    #[display("crash")]
    Crash,
    #[display("t1")]
    Tom1,
    #[display("t2")]
    Tom2,
    #[display("t3")]
    Tom3,
}

/// Auxiliary voices which `random_modify_notes` may add to or remove from an
/// event. `bass` and `snare` are deliberately excluded: they carry the groove
/// and are only touched by their dedicated variant operations.
pub const AUXILIARY_DRUMS: [Drum; 7] = [
    Drum::ClosedHihat,
    Drum::OpenHihat,
    Drum::Ride,
    Drum::Crash,
    Drum::Tom1,
    Drum::Tom2,
    Drum::Tom3,
];

impl Drum {
    /// Canonical name, as used in pitch map lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Drum::Bass => "bass",
            Drum::Snare => "snare",
            Drum::ClosedHihat => "closed_hihat",
            Drum::OpenHihat => "open_hihat",
            Drum::Ride => "ride",
            Drum::Crash => "crash",
            Drum::Tom1 => "t1",
            Drum::Tom2 => "t2",
            Drum::Tom3 => "t3",
        }
    }
}

impl TryFrom<&str> for Drum {
    type Error = String;

    /// Parse a drum voice from its canonical snake_case name.
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name {
            "bass" => Ok(Drum::Bass),
            "snare" => Ok(Drum::Snare),
            "closed_hihat" => Ok(Drum::ClosedHihat),
            "open_hihat" => Ok(Drum::OpenHihat),
            "ride" => Ok(Drum::Ride),
            "crash" => Ok(Drum::Crash),
            "t1" => Ok(Drum::Tom1),
            "t2" => Ok(Drum::Tom2),
            "t3" => Ok(Drum::Tom3),
            _ => Err(format!("Invalid drum name: '{}'", name)),
        }
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        for drum in [
            Drum::Bass,
            Drum::Snare,
            Drum::ClosedHihat,
            Drum::OpenHihat,
            Drum::Ride,
            Drum::Crash,
            Drum::Tom1,
            Drum::Tom2,
            Drum::Tom3,
        ] {
            assert_eq!(drum.to_string(), drum.name());
            assert_eq!(Drum::try_from(drum.name()), Ok(drum));
        }
        assert!(Drum::try_from("cowbell").is_err());
        assert!(Drum::try_from("").is_err());
    }

    #[test]
    fn auxiliary_set() {
        assert!(!AUXILIARY_DRUMS.contains(&Drum::Bass));
        assert!(!AUXILIARY_DRUMS.contains(&Drum::Snare));
        assert_eq!(AUXILIARY_DRUMS.len(), 7);
    }
}
