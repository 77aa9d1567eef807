//! Channel entity.

use std::fmt;

use crate::band::Band;
use crate::error::ChannelError;

/// A tunable channel: fixed name and frequency plus a favorite flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    name: String,
    frequency: u32,
    favorite: bool,
}

impl Channel {
    /// Creates a non-favorite channel. The name is stored verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ChannelError::InvalidFrequency` if `frequency` (MHz) is
    /// outside every band of [`crate::BAND_PLAN`].
    pub fn new(name: impl Into<String>, frequency: u32) -> Result<Self, ChannelError> {
        if Band::of(frequency) == Band::Unknown {
            return Err(ChannelError::InvalidFrequency(frequency));
        }
        Ok(Self {
            name: name.into(),
            frequency,
            favorite: false,
        })
    }

    /// Channel name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frequency in MHz.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Whether the channel is marked as favorite.
    #[must_use]
    pub const fn is_favorite(&self) -> bool {
        self.favorite
    }

    /// Band derived from the frequency.
    #[must_use]
    pub fn band(&self) -> Band {
        Band::of(self.frequency)
    }

    /// Flips the favorite flag.
    pub const fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Channel[name={}, frequency={}MHz, band={}, favorite={}]",
            self.name,
            self.frequency,
            self.band(),
            self.favorite
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use proptest::prelude::*;

    use super::*;
    use crate::band::BAND_PLAN;

    #[test]
    fn test_new_channel_is_not_favorite() {
        // Arrange & Act
        let ch = Channel::new("RTP 1 HD", 54).unwrap();

        // Assert
        assert_eq!(ch.name(), "RTP 1 HD");
        assert_eq!(ch.frequency(), 54);
        assert_eq!(ch.band(), Band::VhfLow);
        assert!(!ch.is_favorite());
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        // Arrange & Act
        let result = Channel::new("Test", 100);

        // Assert
        assert_eq!(result, Err(ChannelError::InvalidFrequency(100)));
    }

    #[test]
    fn test_name_stored_verbatim() {
        // Arrange & Act
        let ch = Channel::new("  padded  ", 600).unwrap();

        // Assert
        assert_eq!(ch.name(), "  padded  ");
        assert_eq!(ch.band(), Band::Uhf);
    }

    #[test]
    fn test_toggle_favorite_twice_restores_flag() {
        // Arrange
        let mut ch = Channel::new("CM TV HD", 62).unwrap();

        // Act & Assert
        ch.toggle_favorite();
        assert!(ch.is_favorite());
        ch.toggle_favorite();
        assert!(!ch.is_favorite());
    }

    #[test]
    fn test_display() {
        // Arrange
        let mut ch = Channel::new("SIC Radical HD", 206).unwrap();
        ch.toggle_favorite();

        // Act
        let text = ch.to_string();

        // Assert
        assert_eq!(
            text,
            "Channel[name=SIC Radical HD, frequency=206MHz, band=VHF_HIGH, favorite=true]"
        );
    }

    #[test]
    fn test_error_message() {
        // Arrange & Act
        let msg = ChannelError::InvalidFrequency(120).to_string();

        // Assert
        assert!(msg.contains("120 MHz"));
    }

    proptest! {
        #[test]
        fn construction_matches_band_plan(mhz in 0u32..1_000) {
            let in_plan = BAND_PLAN.iter().any(|(_, r)| r.contains(&mhz));
            match Channel::new("probe", mhz) {
                Ok(ch) => {
                    prop_assert!(in_plan);
                    prop_assert_ne!(ch.band(), Band::Unknown);
                }
                Err(err) => {
                    prop_assert!(!in_plan);
                    prop_assert_eq!(err, ChannelError::InvalidFrequency(mhz));
                }
            }
        }
    }
}
