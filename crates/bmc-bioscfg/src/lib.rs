// src/lib.rs

#![doc = "Vendor BIOS configuration adapters for server provisioning."]
#![doc = ""]
#![doc = "Each supported vendor (Dell, Supermicro, ASRockRack) exports BIOS settings in"]
#![doc = "its own document format. This library parses those exports, edits them through"]
#![doc = "a vendor-neutral set of toggles, serializes them back for re-import, and reports"]
#![doc = "their contents under canonical keys."]
#![doc = ""]
#![doc = "- `new_vendor_config_manager`: builds the adapter for a vendor/format pair."]
#![doc = "- `VendorConfigManager`: the contract every adapter implements."]
#![doc = "- `normalize`: the canonical name/value vocabulary used by `standard_config`."]

// --- Crate Modules ---

mod builder;
mod error;
pub mod model;
pub mod normalize;
mod parser;
pub mod store;
pub mod tree;
mod types;
pub mod vendor;

// --- Public API Re-exports ---

pub use error::BiosCfgError;
pub use types::{
    CanonicalSettingMap, ConfigFormat, DISABLED_VALUE, ENABLED_VALUE, SettingKind, Vendor,
    VendorOptions,
};
pub use vendor::{
    AsrockrackVendorConfig, DellOptions, DellVendorConfig, SupermicroVendorConfig,
    VendorConfigManager, new_vendor_config_manager,
};
