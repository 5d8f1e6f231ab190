//! Delivery-channel bitmask shared by announcements and alerts.
//!
//! DESIGN
//! ======
//! Channels are powers of two OR'd into one integer. Each entity accepts a
//! fixed universe of flags (announcements add WhatsApp); bits outside the
//! universe are dropped on construction so they can never be written back.

#[cfg(test)]
#[path = "channels_test.rs"]
mod channels_test;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single delivery channel flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    App,
    Sms,
    Email,
    WhatsApp,
}

impl Channel {
    /// Bit value of the flag.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::App => 1,
            Self::Sms => 2,
            Self::Email => 4,
            Self::WhatsApp => 8,
        }
    }

    /// Label shown next to the checkbox and in table cells.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::App => "App",
            Self::Sms => "SMS",
            Self::Email => "Correo",
            Self::WhatsApp => "WhatsApp",
        }
    }

    /// Parse the backend's channel name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "App" => Some(Self::App),
            "SMS" | "Sms" => Some(Self::Sms),
            "Correo" | "Email" => Some(Self::Email),
            "WhatsApp" => Some(Self::WhatsApp),
            _ => None,
        }
    }
}

/// The set of flags an entity may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelUniverse {
    /// App, SMS, Email, WhatsApp.
    Announcement,
    /// App, SMS, Email.
    Alert,
}

impl ChannelUniverse {
    /// Flags in display order.
    #[must_use]
    pub const fn channels(self) -> &'static [Channel] {
        match self {
            Self::Announcement => &[Channel::App, Channel::Sms, Channel::Email, Channel::WhatsApp],
            Self::Alert => &[Channel::App, Channel::Sms, Channel::Email],
        }
    }

    /// OR of every defined flag ("All").
    #[must_use]
    pub fn mask(self) -> u32 {
        self.channels().iter().fold(0, |acc, c| acc | c.bit())
    }
}

/// Bitmask of delivery channels, always restricted to its universe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelSet {
    bits: u32,
    universe: ChannelUniverse,
}

impl ChannelSet {
    /// Empty set ("None").
    #[must_use]
    pub const fn none(universe: ChannelUniverse) -> Self {
        Self { bits: 0, universe }
    }

    /// Every flag of the universe ("All").
    #[must_use]
    pub fn all(universe: ChannelUniverse) -> Self {
        Self { bits: universe.mask(), universe }
    }

    /// Build from a raw stored integer. Unknown and negative bits are dropped.
    #[must_use]
    pub fn from_raw(raw: i64, universe: ChannelUniverse) -> Self {
        let low = u32::try_from(raw.max(0) & i64::from(u32::MAX)).unwrap_or(0);
        Self { bits: low & universe.mask(), universe }
    }

    /// Single-flag set.
    #[must_use]
    pub fn only(channel: Channel, universe: ChannelUniverse) -> Self {
        Self::none(universe).toggled(channel)
    }

    /// Stored integer value.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    #[must_use]
    pub const fn universe(self) -> ChannelUniverse {
        self.universe
    }

    /// Membership test: `value & flag != 0`.
    #[must_use]
    pub const fn contains(self, channel: Channel) -> bool {
        self.bits & channel.bit() != 0
    }

    /// Clear the flag if present, set it otherwise. Flags outside the
    /// universe leave the value unchanged.
    #[must_use]
    pub fn toggled(self, channel: Channel) -> Self {
        let flag = channel.bit() & self.universe.mask();
        let bits = if self.bits & flag != 0 { self.bits & !flag } else { self.bits | flag };
        Self { bits, universe: self.universe }
    }

    /// In-place variant of [`ChannelSet::toggled`].
    pub fn toggle(&mut self, channel: Channel) {
        *self = self.toggled(channel);
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Active channels in display order.
    #[must_use]
    pub fn active(self) -> Vec<Channel> {
        self.universe
            .channels()
            .iter()
            .copied()
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Comma-separated labels for table cells; `"—"` when empty.
    #[must_use]
    pub fn describe(self) -> String {
        let labels: Vec<&str> = self.active().into_iter().map(Channel::label).collect();
        if labels.is_empty() { "—".to_owned() } else { labels.join(", ") }
    }

    /// Re-home the value into another universe, dropping foreign bits.
    #[must_use]
    pub fn with_universe(self, universe: ChannelUniverse) -> Self {
        Self { bits: self.bits & universe.mask(), universe }
    }
}

impl Serialize for ChannelSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits)
    }
}

/// Deserializes into the widest universe. Entity types narrow the value
/// with [`ChannelSet::with_universe`] through their own `deserialize_with`.
impl<'de> Deserialize<'de> for ChannelSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChannelSetVisitor)
    }
}

struct ChannelSetVisitor;

impl Visitor<'_> for ChannelSetVisitor {
    type Value = ChannelSet;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a channel bitmask integer or channel name")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ChannelSet::from_raw(v, ChannelUniverse::Announcement))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ChannelSet::from_raw(i64::try_from(v).unwrap_or(0), ChannelUniverse::Announcement))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ChannelSet::from_raw(v as i64, ChannelUniverse::Announcement))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        let universe = ChannelUniverse::Announcement;
        if v.trim() == "Todos" {
            return Ok(ChannelSet::all(universe));
        }
        if let Ok(n) = v.trim().parse::<i64>() {
            return Ok(ChannelSet::from_raw(n, universe));
        }
        // "App, SMS" style flag lists.
        let set = v
            .split(',')
            .filter_map(Channel::from_name)
            .fold(ChannelSet::none(universe), |acc, c| if acc.contains(c) { acc } else { acc.toggled(c) });
        Ok(set)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ChannelSet::none(ChannelUniverse::Announcement))
    }
}

/// `deserialize_with` helper for alert records.
///
/// # Errors
///
/// Returns a deserialization error when the value is neither a number nor a
/// channel name.
pub fn deserialize_alert_channels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ChannelSet, D::Error> {
    let set = Option::<ChannelSet>::deserialize(deserializer)?;
    Ok(set.map_or(ChannelSet::none(ChannelUniverse::Alert), |s| s.with_universe(ChannelUniverse::Alert)))
}

/// `deserialize_with` helper for announcement records.
///
/// # Errors
///
/// Returns a deserialization error when the value is neither a number nor a
/// channel name.
pub fn deserialize_announcement_channels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ChannelSet, D::Error> {
    let set = Option::<ChannelSet>::deserialize(deserializer)?;
    Ok(set.unwrap_or(ChannelSet::none(ChannelUniverse::Announcement)))
}
