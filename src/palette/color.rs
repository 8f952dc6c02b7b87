//! Color record and its value types
//!
//! A record stores its hex without the leading `#`. The rgb triple is derived
//! from the hex and may be absent until first computed; the name carries an
//! explicit pending state while a lookup is in flight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Placeholder shown while a name lookup is pending
pub const PENDING_NAME: &str = "...";

/// Hex used for freshly added swatches
pub const DEFAULT_HEX: &str = "000000";

/// Opaque swatch identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(Uuid);

impl ColorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ColorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ColorId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Six lowercase hex digits, no leading `#`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hex(String);

impl Hex {
    /// Parse `rrggbb` or `#rrggbb` (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::MalformedInput(format!("not a 6-digit hex color: {:?}", s)));
        }

        Ok(Self(digits.to_ascii_lowercase()))
    }

    /// Digits without `#`, as sent to the naming service
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with leading `#`
    pub fn display(&self) -> String {
        format!("#{}", self.0)
    }

    pub fn to_rgb(&self) -> Rgb {
        // Validated in `parse`, so every pair is a hex byte
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        Rgb {
            r: channel(0),
            g: channel(2),
            b: channel(4),
        }
    }
}

impl Default for Hex {
    fn default() -> Self {
        Self(DEFAULT_HEX.to_string())
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Hex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Hex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Hex::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// RGB decomposition of a hex color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(Error::MalformedInput(format!("not an r,g,b triple: {:?}", s)));
        };

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| Error::MalformedInput(format!("bad rgb channel: {:?}", p)))
        };

        Ok(Rgb {
            r: channel(*r)?,
            g: channel(*g)?,
            b: channel(*b)?,
        })
    }
}

/// Stored as a comma-joined string; empty means not yet computed
mod rgb_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Rgb;

    pub fn serialize<S: Serializer>(rgb: &Option<Rgb>, serializer: S) -> Result<S::Ok, S::Error> {
        match rgb {
            Some(rgb) => serializer.serialize_str(&rgb.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Rgb>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}

/// Display name state of a swatch
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ColorName {
    #[default]
    Unnamed,
    Pending,
    Named(String),
}

impl ColorName {
    pub fn is_pending(&self) -> bool {
        matches!(self, ColorName::Pending)
    }

    /// Text to render, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            ColorName::Unnamed => None,
            ColorName::Pending => Some(PENDING_NAME),
            ColorName::Named(name) => Some(name),
        }
    }
}

impl From<Option<String>> for ColorName {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => ColorName::Unnamed,
            Some(s) if s.is_empty() => ColorName::Unnamed,
            Some(s) if s == PENDING_NAME => ColorName::Pending,
            Some(s) => ColorName::Named(s),
        }
    }
}

impl From<ColorName> for Option<String> {
    fn from(name: ColorName) -> Self {
        match name {
            ColorName::Unnamed => None,
            ColorName::Pending => Some(PENDING_NAME.to_string()),
            ColorName::Named(s) => Some(s),
        }
    }
}

/// One swatch of the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub id: ColorId,
    pub order: u32,
    pub hex: Hex,
    #[serde(default, with = "rgb_string")]
    pub rgb: Option<Rgb>,
    #[serde(default)]
    pub name: ColorName,
}

impl ColorRecord {
    /// A default swatch; the store assigns its order on insertion
    pub fn new(id: ColorId) -> Self {
        Self {
            id,
            order: 0,
            hex: Hex::default(),
            rgb: None,
            name: ColorName::Unnamed,
        }
    }

    pub fn with_hex(mut self, hex: Hex) -> Self {
        self.rgb = Some(hex.to_rgb());
        self.hex = hex;
        self
    }

    /// The rgb triple, computing it from hex if absent
    pub fn rgb(&self) -> Rgb {
        self.rgb.unwrap_or_else(|| self.hex.to_rgb())
    }
}
