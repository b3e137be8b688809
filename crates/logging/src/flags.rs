//! crates/logging/src/flags.rs
//! Named formatting and filtering options stored as a bit-set.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use thiserror::Error;

/// One independently toggleable logger option.
///
/// The discriminants are the bit positions used by [`Flags`] and are part of
/// the public contract: raw masks built with [`Flags::from_bits_retain`] use
/// the same values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Flag {
    /// Prefix each line with the local wall-clock time as `[HH:MM:SS]`.
    Timestamps = 1 << 0,
    /// Prefix each line with the bracketed severity label.
    SeverityLabels = 1 << 1,
    /// Separate the prefix from the message with four spaces.
    Whitespace = 1 << 2,
    /// Prefix each line with the bracketed logger tag.
    Tag = 1 << 3,
    /// Wrap each line in the severity's ANSI colour.
    Colors = 1 << 4,
    /// Consult the shared severity filter table.
    SeverityFilter = 1 << 5,
    /// Consult the shared tag filter table.
    TagFilter = 1 << 6,
    /// Read both filter tables as whitelists instead of blacklists.
    Whitelist = 1 << 7,
    /// Terminate each line with a newline.
    EndOfLine = 1 << 8,
}

impl Flag {
    /// Every flag, in bit order.
    pub const ALL: [Self; 9] = [
        Self::Timestamps,
        Self::SeverityLabels,
        Self::Whitespace,
        Self::Tag,
        Self::Colors,
        Self::SeverityFilter,
        Self::TagFilter,
        Self::Whitelist,
        Self::EndOfLine,
    ];

    /// The flag's bit in a [`Flags`] mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        self as u32
    }

    /// Token name accepted by [`FromStr`] and [`Flags::apply_tokens`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Timestamps => "timestamps",
            Self::SeverityLabels => "labels",
            Self::Whitespace => "whitespace",
            Self::Tag => "tag",
            Self::Colors => "colors",
            Self::SeverityFilter => "severity-filter",
            Self::TagFilter => "tag-filter",
            Self::Whitelist => "whitelist",
            Self::EndOfLine => "newline",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a flag name or token list cannot be parsed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown logger flag `{name}`")]
pub struct FlagParseError {
    name: String,
}

impl FlagParseError {
    /// The rejected flag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Flag {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|flag| flag.name() == normalized)
            .ok_or_else(|| FlagParseError { name: s.to_owned() })
    }
}

/// Set of [`Flag`]s held as a `u32` bit mask.
///
/// Bits that do not correspond to a named flag are kept as-is and ignored by
/// the logger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags(u32);

impl Flags {
    /// No options enabled.
    pub const NONE: Self = Self(0);

    /// Every option except [`Flag::Whitelist`]: fully decorated lines and
    /// blacklist filtering with nothing blacklisted.
    pub const DEFAULTS: Self = Self(
        Flag::Timestamps.bit()
            | Flag::SeverityLabels.bit()
            | Flag::Whitespace.bit()
            | Flag::Tag.bit()
            | Flag::Colors.bit()
            | Flag::SeverityFilter.bit()
            | Flag::TagFilter.bit()
            | Flag::EndOfLine.bit(),
    );

    /// Every named option.
    pub const ALL: Self = Self(Self::DEFAULTS.0 | Flag::Whitelist.bit());

    /// Builds a set from a raw mask, keeping unknown bits.
    #[must_use]
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw mask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether every bit of `other` is set.
    #[must_use]
    pub fn contains(self, other: impl Into<Self>) -> bool {
        let other = other.into();
        self.0 & other.0 == other.0
    }

    /// Reports whether no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets every bit of `other`.
    pub fn insert(&mut self, other: impl Into<Self>) {
        self.0 |= other.into().0;
    }

    /// Clears every bit of `other`.
    pub fn remove(&mut self, other: impl Into<Self>) {
        self.0 &= !other.into().0;
    }

    /// Returns a copy with `other` set.
    #[must_use]
    pub fn with(mut self, other: impl Into<Self>) -> Self {
        self.insert(other);
        self
    }

    /// Returns a copy with `other` cleared.
    #[must_use]
    pub fn without(mut self, other: impl Into<Self>) -> Self {
        self.remove(other);
        self
    }

    /// Iterates over the named flags that are set, in bit order.
    pub fn iter(self) -> impl Iterator<Item = Flag> {
        Flag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }

    /// Applies a comma-separated token list on top of `self`.
    ///
    /// Tokens are applied left to right: `name` or `+name` sets a flag,
    /// `-name` clears it, and `defaults`, `all` and `none` replace the whole
    /// set. Empty tokens are ignored.
    ///
    /// ```
    /// use logging::{Flag, Flags};
    ///
    /// let flags = Flags::DEFAULTS.apply_tokens("-colors, -timestamps, +whitelist")?;
    /// assert!(!flags.contains(Flag::Colors));
    /// assert!(flags.contains(Flag::Whitelist));
    ///
    /// let plain = Flags::DEFAULTS.apply_tokens("none,newline")?;
    /// assert_eq!(plain, Flags::from(Flag::EndOfLine));
    /// # Ok::<(), logging::FlagParseError>(())
    /// ```
    pub fn apply_tokens(self, tokens: &str) -> Result<Self, FlagParseError> {
        let mut flags = self;
        for token in tokens.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.to_ascii_lowercase().as_str() {
                "defaults" => flags = Self::DEFAULTS,
                "all" => flags = Self::ALL,
                "none" => flags = Self::NONE,
                _ => {
                    if let Some(name) = token.strip_prefix('-') {
                        flags.remove(name.parse::<Flag>()?);
                    } else {
                        let name = token.strip_prefix('+').unwrap_or(token);
                        flags.insert(name.parse::<Flag>()?);
                    }
                }
            }
        }
        Ok(flags)
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Self(flag.bit())
    }
}

impl FromIterator<Flag> for Flags {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |flags, flag| flags.with(flag))
    }
}

impl<T: Into<Flags>> BitOr<T> for Flags {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self {
        self.with(rhs)
    }
}

impl<T: Into<Flags>> BitOr<T> for Flag {
    type Output = Flags;

    fn bitor(self, rhs: T) -> Flags {
        Flags::from(self).with(rhs)
    }
}

impl<T: Into<Flags>> BitOrAssign<T> for Flags {
    fn bitor_assign(&mut self, rhs: T) {
        self.insert(rhs);
    }
}

impl fmt::Display for Flags {
    /// Renders the named flags as a token list accepted by
    /// [`Flags::apply_tokens`], or `none` when no named flag is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = self.iter();
        match names.next() {
            None => f.write_str("none"),
            Some(first) => {
                f.write_str(first.name())?;
                for flag in names {
                    write!(f, ",{}", flag.name())?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Flags {
    type Err = FlagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::NONE.apply_tokens(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Flags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Flags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tokens = String::deserialize(deserializer)?;
        tokens.parse().map_err(serde::de::Error::custom)
    }
}
