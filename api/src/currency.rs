//! Defines the billing currencies a cost can be reported in.

use serde::Deserialize;
use serde::Serialize;

/// A billing currency, carrying its code and display symbol.
///
/// Every supported currency bills in hundredths, so amounts always render
/// with exactly two decimal places.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    #[default]
    USD, // United States Dollar
    EUR, // Euro
    GBP, // Great British Pound
    CAD, // Canadian Dollar
    AUD, // Australian Dollar
}

impl Currency {
    /// Number of decimal digits in the currency's minor unit.
    pub const DECIMALS: u32 = 2;

    /// Returns the graphical symbol for the currency (e.g., '$').
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Returns the ISO 4217 code (e.g., "USD"), as used in the `Unit` field
    /// of billing exports.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}
