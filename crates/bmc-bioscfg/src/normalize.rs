// crates/bmc-bioscfg/src/normalize.rs

//! Maps vendor setting names and values onto a vendor-neutral vocabulary.
//!
//! The name table is static data: known vendor spellings (case and spacing
//! matter) map to a canonical key, everything else is reported under
//! `raw:<original name>`. Values collapse the many spellings of on/off into
//! `Enabled`/`Disabled`; boot modes are uppercased with `legacy` reported as
//! `BIOS`.

use crate::error::BiosCfgError;
use crate::model::dell::SystemConfiguration;
use crate::tree::{self, MenuNode, SettingNode};
use crate::types::{CanonicalSettingMap, DISABLED_VALUE, ENABLED_VALUE, SettingKind};

/// Canonical keys produced by [`normalize_name`].
pub mod keys {
    pub const AMD_SEV: &str = "amd_sev";
    pub const BOOT_MODE: &str = "boot_mode";
    pub const INTEL_TXT: &str = "intel_txt";
    pub const INTEL_SGX: &str = "intel_sgx";
    pub const SECURE_BOOT: &str = "secure_boot";
    pub const SMT: &str = "smt";
    pub const SR_IOV: &str = "sr_iov";
    pub const TPM: &str = "tpm";
}

/// Prefix for settings with no canonical key.
pub const RAW_PREFIX: &str = "raw:";

/// Credential settings that are never reported, whatever their value.
pub const DROPPED_SETTINGS: &[&str] = &[
    "NewSetupPassword",
    "NewSysPassword",
    "OldSetupPassword",
    "OldSysPassword",
];

/// Vendor spelling → canonical key.
const NAME_TABLE: &[(&str, &str)] = &[
    ("CpuMinSevAsid", keys::AMD_SEV),
    ("BootMode", keys::BOOT_MODE),
    ("Boot mode select", keys::BOOT_MODE),
    ("IntelTxt", keys::INTEL_TXT),
    ("Software Guard Extensions (SGX)", keys::INTEL_SGX),
    ("SecureBoot", keys::SECURE_BOOT),
    ("Secure Boot", keys::SECURE_BOOT),
    ("Hyper-Threading", keys::SMT),
    ("Hyper-Threading [ALL]", keys::SMT),
    ("LogicalProc", keys::SMT),
    ("SriovGlobalEnable", keys::SR_IOV),
    ("TpmSecurity", keys::TPM),
    ("Security Device Support", keys::TPM),
    // SUM exports (and our TPM toggle) carry a leading space here.
    (" Security Device Support", keys::TPM),
];

/// Returns true for settings that must not appear in normalized output.
pub fn is_dropped(name: &str) -> bool {
    DROPPED_SETTINGS.contains(&name)
}

/// Maps a vendor setting name to its canonical key, or `raw:<name>`.
pub fn normalize_name(name: &str) -> String {
    NAME_TABLE
        .iter()
        .find(|(vendor, _)| *vendor == name)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| format!("{}{}", RAW_PREFIX, name))
}

fn normalize_boot_mode(value: &str) -> String {
    if value.eq_ignore_ascii_case("legacy") {
        "BIOS".to_string()
    } else {
        value.to_uppercase()
    }
}

/// Maps a vendor value to its canonical form for the given canonical key.
pub fn normalize_value(key: &str, value: &str) -> String {
    if key == keys::BOOT_MODE {
        return normalize_boot_mode(value);
    }

    match value.to_lowercase().as_str() {
        "disable" | "disabled" | "off" => DISABLED_VALUE.to_string(),
        "enable" | "enabled" | "on" => ENABLED_VALUE.to_string(),
        _ => value.to_string(),
    }
}

/// Normalizes one typed setting into a `(key, value)` pair.
///
/// # Errors
/// Returns `BiosCfgError::UnknownSettingType` if the setting's type tag is
/// not one of `CheckBox`, `Option`, `Password` or `Numeric`.
pub fn normalize_setting<S: SettingNode>(setting: &S) -> Result<(String, String), BiosCfgError> {
    let kind = SettingKind::parse(setting.type_tag())?;
    let key = normalize_name(setting.name());

    let value = match kind {
        SettingKind::Password => String::new(),
        _ => normalize_value(&key, setting.value_for(kind)),
    };

    Ok((key, value))
}

/// Normalizes every setting of a menu forest, at every depth.
///
/// All-or-nothing: the first unknown setting type aborts with an error.
pub fn normalize_tree<M: MenuNode>(menus: &[M]) -> Result<CanonicalSettingMap, BiosCfgError> {
    let mut config = CanonicalSettingMap::new();

    tree::walk_settings(menus, &mut |setting: &M::Setting| -> Result<(), BiosCfgError> {
        if is_dropped(setting.name()) {
            return Ok(());
        }
        let (key, value) = normalize_setting(setting)?;
        config.insert(key, value);
        Ok(())
    })?;

    Ok(config)
}

/// Normalizes every attribute of every component of a Dell profile.
///
/// Dell attributes are untyped, so the value is normalized as-is.
pub fn normalize_components(cfg: &SystemConfiguration) -> CanonicalSettingMap {
    cfg.components
        .iter()
        .flat_map(|c| c.attributes.iter())
        .filter(|a| !is_dropped(&a.name))
        .map(|a| {
            let key = normalize_name(&a.name);
            let value = normalize_value(&key, &a.value);
            (key, value)
        })
        .collect()
}
