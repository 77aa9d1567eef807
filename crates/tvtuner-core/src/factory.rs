//! Factory default channel lineup.

use crate::channel::Channel;

/// Factory lineup as `(name, MHz)` pairs, in display order.
pub const FACTORY_LINEUP: [(&str, u32); 10] = [
    ("RTP 1 HD", 54),
    ("CM TV HD", 62),
    ("SPORT.TV + HD", 78),
    ("Canal 11 HD", 86),
    ("Globo Portugal HD", 174),
    ("TVI Reality HD", 182),
    ("SIC Mulher HD", 190),
    ("SIC Caras HD", 198),
    ("SIC Radical HD", 206),
    ("Discovery Channel HD", 470),
];

/// Builds a fresh copy of the factory lineup, every channel non-favorite.
#[must_use]
pub fn factory_channels() -> Vec<Channel> {
    FACTORY_LINEUP
        .iter()
        .filter_map(|&(name, mhz)| Channel::new(name, mhz).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::band::Band;

    #[test]
    fn test_every_entry_is_constructible() {
        // Arrange & Act
        let channels = factory_channels();

        // Assert
        assert_eq!(channels.len(), FACTORY_LINEUP.len());
        assert!(channels.iter().all(|ch| !ch.is_favorite()));
    }

    #[test]
    fn test_lineup_spans_all_bands() {
        // Arrange & Act
        let channels = factory_channels();

        // Assert
        assert_eq!(channels[0].band(), Band::VhfLow);
        assert_eq!(channels[4].band(), Band::VhfHigh);
        assert_eq!(channels[9].band(), Band::Uhf);
    }

    #[test]
    fn test_copies_are_independent() {
        // Arrange
        let mut first = factory_channels();

        // Act
        first[0].toggle_favorite();
        let second = factory_channels();

        // Assert
        assert!(first[0].is_favorite());
        assert!(!second[0].is_favorite());
    }
}
