//! Channel list management for a television tuner.
//!
//! A [`TunerRegistry`] owns an ordered list of [`Channel`]s seeded from the
//! factory lineup, plus the position currently tuned.

/// Band plan and frequency classification.
pub mod band;
/// Channel entity.
pub mod channel;
mod error;
/// Factory default lineup.
pub mod factory;
/// Channel list with tuning cursor.
pub mod registry;

pub use band::{BAND_PLAN, Band};
pub use channel::Channel;
pub use error::{ChannelError, RegistryError};
pub use factory::{FACTORY_LINEUP, factory_channels};
#[allow(clippy::module_name_repetitions)]
pub use registry::{DuplicateFrequencyPolicy, TunerRegistry};
