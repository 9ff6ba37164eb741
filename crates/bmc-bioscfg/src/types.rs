// crates/bmc-bioscfg/src/types.rs

//! Public, vendor-neutral types shared by all adapters.

use crate::error::BiosCfgError;
use core::fmt;
use core::str::FromStr;
use std::collections::{BTreeMap, HashMap};

/// Output of normalization: canonical key to canonical value.
pub type CanonicalSettingMap = BTreeMap<String, String>;

/// Free-form construction options handed to the factory (e.g. Dell's
/// `model` and `servicetag`).
pub type VendorOptions = HashMap<String, String>;

/// Value written by toggles and produced by normalization for "on".
pub const ENABLED_VALUE: &str = "Enabled";
/// Value written by toggles and produced by normalization for "off".
pub const DISABLED_VALUE: &str = "Disabled";

/// Returns the `Enabled`/`Disabled` literal for a toggle state.
pub(crate) fn enabled_disabled(enable: bool) -> &'static str {
    if enable { ENABLED_VALUE } else { DISABLED_VALUE }
}

/// Hardware vendors with a BIOS configuration adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Dell,
    Supermicro,
    AsrockRack,
}

impl Vendor {
    /// The lowercase identifier the factory accepts for this vendor.
    pub fn as_str(self) -> &'static str {
        match self {
            Vendor::Dell => "dell",
            Vendor::Supermicro => "supermicro",
            Vendor::AsrockRack => "asrockrack",
        }
    }

    /// Serialization formats the vendor's own tooling can import.
    pub fn supported_formats(self) -> &'static [ConfigFormat] {
        match self {
            Vendor::Dell => &[ConfigFormat::Xml, ConfigFormat::Json],
            Vendor::Supermicro | Vendor::AsrockRack => &[ConfigFormat::Xml],
        }
    }

    /// True if the vendor's tooling can import `format`.
    pub fn supports(self, format: ConfigFormat) -> bool {
        self.supported_formats().contains(&format)
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Vendor {
    type Err = BiosCfgError;

    /// Vendor identifiers are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "dell" => Ok(Vendor::Dell),
            "supermicro" => Ok(Vendor::Supermicro),
            "asrockrack" => Ok(Vendor::AsrockRack),
            _ => Err(BiosCfgError::UnknownVendor(lower)),
        }
    }
}

/// Serialization format of a configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Xml,
    Json,
}

impl ConfigFormat {
    /// The lowercase identifier the factory accepts for this format.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigFormat::Xml => "xml",
            ConfigFormat::Json => "json",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = BiosCfgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "xml" => Ok(ConfigFormat::Xml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(BiosCfgError::UnknownConfigFormat(lower)),
        }
    }
}

/// Interpretation of a setting's `type` attribute.
///
/// The tag decides which value field of a setting is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// `type="CheckBox"`, value in `checkedStatus`.
    CheckBox,
    /// `type="Option"`, value in `selectedOption`.
    Option,
    /// `type="Password"`, value never reported.
    Password,
    /// `type="Numeric"`, value in `numericValue`.
    Numeric,
}

impl SettingKind {
    /// Tag given to settings created through `raw`.
    pub const DEFAULT: SettingKind = SettingKind::Option;

    /// Parses a vendor `type` tag. Tags are matched exactly.
    pub fn parse(tag: &str) -> Result<Self, BiosCfgError> {
        match tag {
            "CheckBox" => Ok(SettingKind::CheckBox),
            "Option" => Ok(SettingKind::Option),
            "Password" => Ok(SettingKind::Password),
            "Numeric" => Ok(SettingKind::Numeric),
            other => Err(BiosCfgError::UnknownSettingType(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKind::CheckBox => "CheckBox",
            SettingKind::Option => "Option",
            SettingKind::Password => "Password",
            SettingKind::Numeric => "Numeric",
        }
    }
}
