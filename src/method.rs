//! Steganography method vocabulary.
//!
//! The service exposes one endpoint pair per algorithm. The four tokens
//! returned by [`StegoMethod::token`] are used verbatim as URL path segments
//! and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-side steganography algorithm to invoke
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum StegoMethod {
    /// Least significant bits of the RGB channels
    #[default]
    Color,
    /// Intensity values of grayscale images
    Gray,
    /// Pattern-based bit shifting
    Pattern,
    /// String-specialized encoding
    Strings,
}

impl StegoMethod {
    /// All methods, in the order they are offered to the user
    pub fn all() -> &'static [StegoMethod] {
        &[
            StegoMethod::Color,
            StegoMethod::Gray,
            StegoMethod::Pattern,
            StegoMethod::Strings,
        ]
    }

    /// Protocol token used as the `{method}` path segment
    pub fn token(&self) -> &'static str {
        match self {
            StegoMethod::Color => "color",
            StegoMethod::Gray => "gray",
            StegoMethod::Pattern => "pattern",
            StegoMethod::Strings => "strings",
        }
    }

    /// Display name for pickers and listings
    pub fn label(&self) -> &'static str {
        match self {
            StegoMethod::Color => "Color Steganography",
            StegoMethod::Gray => "Grayscale Steganography",
            StegoMethod::Pattern => "Pattern-Based Bit Shifting",
            StegoMethod::Strings => "String Steganography",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StegoMethod::Color => {
                "Embeds data by modifying the least significant bits of color channels in RGB images"
            }
            StegoMethod::Gray => {
                "Optimized for grayscale images, hiding information in intensity values"
            }
            StegoMethod::Pattern => {
                "Uses dynamic bit patterns for enhanced security and reduced detectability"
            }
            StegoMethod::Strings => {
                "Specialized method for efficiently encoding text strings within images"
            }
        }
    }
}

impl fmt::Display for StegoMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when parsing an unknown method token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown steganography method '{0}' (expected one of: color, gray, pattern, strings)")]
pub struct UnknownMethod(pub String);

impl FromStr for StegoMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StegoMethod::all()
            .iter()
            .copied()
            .find(|m| m.token() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}
