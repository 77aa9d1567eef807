//! Tuner registry: the ordered channel list and the tuned position.
//!
//! Position-taking operations never panic on a bad position; they report
//! failure through `false` or `None` and leave the registry untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::RegistryError;
use crate::factory::factory_channels;

/// How `add` treats a channel whose frequency is already in the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateFrequencyPolicy {
    /// Accept the channel anyway.
    #[default]
    Allow,
    /// Refuse the channel.
    Reject,
}

/// Ordered channel list with a "currently tuned" cursor.
///
/// The cursor always refers to a valid position or is unset. Removing the
/// tuned channel unsets it; removing an earlier channel moves it down so it
/// keeps pointing at the same channel. Swaps do not move it: tuning follows
/// the slot, not the channel.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct TunerRegistry {
    channels: Vec<Channel>,
    cursor: Option<usize>,
    policy: DuplicateFrequencyPolicy,
}

impl Default for TunerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TunerRegistry {
    /// Creates a registry seeded with the factory lineup, accepting
    /// duplicate frequencies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DuplicateFrequencyPolicy::default())
    }

    /// Creates a registry seeded with the factory lineup.
    #[must_use]
    pub fn with_policy(policy: DuplicateFrequencyPolicy) -> Self {
        let mut registry = Self {
            channels: Vec::new(),
            cursor: None,
            policy,
        };
        registry.reset_to_factory();
        registry
    }

    /// Active duplicate frequency policy.
    #[must_use]
    pub const fn policy(&self) -> DuplicateFrequencyPolicy {
        self.policy
    }

    /// Number of channels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.channels.len()
    }

    /// Whether a channel is tuned.
    #[must_use]
    pub const fn is_tuned(&self) -> bool {
        self.cursor.is_some()
    }

    /// Tuned position, if any.
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Tuned channel, if any.
    #[must_use]
    pub fn current_channel(&self) -> Option<&Channel> {
        self.cursor.and_then(|pos| self.channels.get(pos))
    }

    /// Channel at `position`, `None` if out of range.
    #[must_use]
    pub fn get_channel(&self, position: usize) -> Option<&Channel> {
        self.channels.get(position)
    }

    /// Iterates channels in position order.
    pub fn channels(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }

    /// Iterates `(position, channel)` pairs of favorite channels.
    pub fn favorites(&self) -> impl Iterator<Item = (usize, &Channel)> {
        self.channels
            .iter()
            .enumerate()
            .filter(|(_, ch)| ch.is_favorite())
    }

    fn is_valid(&self, position: usize) -> bool {
        position < self.channels.len()
    }

    /// Tunes to `position`. Retuning the current position succeeds.
    pub fn tune(&mut self, position: usize) -> bool {
        if !self.is_valid(position) {
            return false;
        }
        self.cursor = Some(position);
        tracing::debug!(position, "tuned");
        true
    }

    /// Toggles the favorite flag of the tuned channel. Fails when not tuned.
    pub fn toggle_favorite(&mut self) -> bool {
        let Some(channel) = self.cursor.and_then(|pos| self.channels.get_mut(pos)) else {
            return false;
        };
        channel.toggle_favorite();
        tracing::debug!(
            name = channel.name(),
            favorite = channel.is_favorite(),
            "toggled favorite"
        );
        true
    }

    /// Appends a channel, returning its position.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateFrequency` when the policy is
    /// `Reject` and the frequency is already in use.
    pub fn try_add(&mut self, channel: Channel) -> Result<usize, RegistryError> {
        if self.policy == DuplicateFrequencyPolicy::Reject
            && let Some(existing) = self
                .channels
                .iter()
                .position(|ch| ch.frequency() == channel.frequency())
        {
            tracing::warn!(
                name = channel.name(),
                frequency = channel.frequency(),
                existing,
                "rejected channel with duplicate frequency"
            );
            return Err(RegistryError::DuplicateFrequency {
                frequency: channel.frequency(),
                existing,
            });
        }

        let position = self.channels.len();
        tracing::debug!(position, name = channel.name(), "added channel");
        self.channels.push(channel);
        Ok(position)
    }

    /// Appends a channel. Returns `false` if the duplicate policy refuses it.
    pub fn add(&mut self, channel: Channel) -> bool {
        self.try_add(channel).is_ok()
    }

    /// Removes and returns the channel at `position`.
    pub fn remove(&mut self, position: usize) -> Option<Channel> {
        if !self.is_valid(position) {
            return None;
        }
        self.cursor = match self.cursor {
            Some(cur) if cur == position => None,
            Some(cur) if cur > position => cur.checked_sub(1),
            other => other,
        };
        let removed = self.channels.remove(position);
        tracing::debug!(
            position,
            name = removed.name(),
            cursor = ?self.cursor,
            "removed channel"
        );
        Some(removed)
    }

    /// Position of the first channel whose name contains `query`,
    /// ignoring case. Blank queries never match.
    #[must_use]
    pub fn find_by_name(&self, query: &str) -> Option<usize> {
        if query.trim().is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        self.channels
            .iter()
            .position(|ch| ch.name().to_lowercase().contains(&needle))
    }

    /// Exchanges two slots. The cursor stays on its position.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if !self.is_valid(a) || !self.is_valid(b) {
            return false;
        }
        self.channels.swap(a, b);
        tracing::debug!(a, b, "swapped channels");
        true
    }

    /// Replaces the list with a fresh factory lineup and unsets the cursor.
    pub fn reset_to_factory(&mut self) {
        self.channels = factory_channels();
        self.cursor = None;
        tracing::debug!(count = self.channels.len(), "reset to factory lineup");
    }

    /// One-line state summary with a 1-based position.
    #[must_use]
    pub fn render_summary(&self) -> String {
        self.to_string()
    }

    /// Numbered channel listing, one line per channel, 1-based.
    #[must_use]
    pub fn render_list(&self) -> String {
        self.channels
            .iter()
            .enumerate()
            .map(|(i, ch)| format_list_line(i, ch))
            .collect()
    }
}

/// Formats one listing line for the channel at zero-based `position`.
#[must_use]
pub fn format_list_line(position: usize, channel: &Channel) -> String {
    format!("{:3}. {channel}\n", position.saturating_add(1))
}

impl fmt::Display for TunerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.cursor, self.current_channel()) {
            (Some(pos), Some(ch)) => write!(
                f,
                "Tuner[position={}, channel={ch}, channels={}]",
                pos.saturating_add(1),
                self.count()
            ),
            _ => write!(
                f,
                "Tuner[position=None, channel=None, channels={}]",
                self.count()
            ),
        }
    }
}
