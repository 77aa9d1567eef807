//! Broadcast band plan and frequency classification.

use std::fmt;
use std::ops::RangeInclusive;

/// Broadcast band a channel frequency falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// VHF low band, 54–88 MHz.
    VhfLow,
    /// VHF high band, 174–216 MHz.
    VhfHigh,
    /// UHF band, 470–608 MHz.
    Uhf,
    /// Outside every known band. Never produced for a constructed `Channel`.
    Unknown,
}

/// Tunable bands with their inclusive MHz ranges, in ascending order.
pub const BAND_PLAN: [(Band, RangeInclusive<u32>); 3] = [
    (Band::VhfLow, 54..=88),
    (Band::VhfHigh, 174..=216),
    (Band::Uhf, 470..=608),
];

impl Band {
    /// Classifies a frequency in MHz.
    #[must_use]
    pub fn of(frequency: u32) -> Self {
        BAND_PLAN
            .iter()
            .find(|(_, range)| range.contains(&frequency))
            .map_or(Self::Unknown, |(band, _)| *band)
    }

    /// Returns the inclusive MHz range of the band, `None` for `Unknown`.
    #[must_use]
    pub fn range(self) -> Option<RangeInclusive<u32>> {
        BAND_PLAN
            .iter()
            .find(|(band, _)| *band == self)
            .map(|(_, range)| range.clone())
    }

    /// Returns the label used in channel descriptions.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VhfLow => "VHF_LOW",
            Self::VhfHigh => "VHF_HIGH",
            Self::Uhf => "UHF",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_band_edges() {
        // Arrange & Act & Assert
        assert_eq!(Band::of(54), Band::VhfLow);
        assert_eq!(Band::of(88), Band::VhfLow);
        assert_eq!(Band::of(174), Band::VhfHigh);
        assert_eq!(Band::of(216), Band::VhfHigh);
        assert_eq!(Band::of(470), Band::Uhf);
        assert_eq!(Band::of(608), Band::Uhf);
    }

    #[test]
    fn test_band_gaps_are_unknown() {
        // Arrange & Act & Assert
        for mhz in [0, 53, 89, 100, 173, 217, 469, 609, 10_000] {
            assert_eq!(Band::of(mhz), Band::Unknown, "{mhz} MHz");
        }
    }

    #[test]
    fn test_range_lookup() {
        // Arrange & Act & Assert
        assert_eq!(Band::VhfHigh.range(), Some(174..=216));
        assert_eq!(Band::Unknown.range(), None);
    }

    #[test]
    fn test_display_labels() {
        // Arrange & Act & Assert
        assert_eq!(Band::VhfLow.to_string(), "VHF_LOW");
        assert_eq!(Band::VhfHigh.to_string(), "VHF_HIGH");
        assert_eq!(Band::Uhf.to_string(), "UHF");
        assert_eq!(Band::Unknown.to_string(), "UNKNOWN");
    }

    proptest! {
        #[test]
        fn classified_band_contains_frequency(mhz in 0u32..1_000) {
            let band = Band::of(mhz);
            match band.range() {
                Some(range) => prop_assert!(range.contains(&mhz)),
                None => prop_assert!(BAND_PLAN.iter().all(|(_, r)| !r.contains(&mhz))),
            }
        }
    }
}
