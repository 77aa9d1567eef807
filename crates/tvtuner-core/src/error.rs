//! Error types for channel construction and registry mutations.

use thiserror::Error;

/// Errors raised while constructing a channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// Frequency does not fall inside any band of the band plan.
    #[error("invalid frequency: {0} MHz is outside every broadcast band")]
    InvalidFrequency(u32),
}

/// Errors raised by registry operations that report a reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another channel already occupies the frequency.
    #[error("duplicate frequency: {frequency} MHz is already used at position {existing}")]
    DuplicateFrequency {
        /// Rejected frequency in MHz.
        frequency: u32,
        /// Zero-based position of the channel already on that frequency.
        existing: usize,
    },
}
