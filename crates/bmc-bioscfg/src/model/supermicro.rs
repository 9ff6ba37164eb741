// crates/bmc-bioscfg/src/model/supermicro.rs

//! Document model of a Supermicro Update Manager (SUM) BIOS export.
//!
//! ```xml
//! <BiosCfg>
//!   <Menu name="Advanced">
//!     <Menu name="CPU Configuration">
//!       <Setting name="Hyper-Threading" selectedOption="Enabled" type="Option"/>
//!     </Menu>
//!   </Menu>
//! </BiosCfg>
//! ```
//!
//! Elements SUM emits for documentation purposes (`<Information>`,
//! `<AvailableOptions>`, ...) are skipped on input.

use crate::tree::{MenuNode, SettingNode};
use crate::types::SettingKind;
use serde::{Deserialize, Serialize};

/// Name of the document's root element.
pub const ROOT_ELEMENT: &str = "BiosCfg";

/// The `<BiosCfg>` root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "BiosCfg")]
pub struct BiosCfg {
    #[serde(rename = "Menu", default, skip_serializing_if = "Vec::is_empty")]
    pub menus: Vec<Menu>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "Setting", default, skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<Setting>,

    #[serde(rename = "Menu", default, skip_serializing_if = "Vec::is_empty")]
    pub menus: Vec<Menu>,
}

/// A `<Setting>` leaf. Which value attribute is meaningful depends on `kind`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@order", default, skip_serializing_if = "String::is_empty")]
    pub order: String,

    #[serde(rename = "@selectedOption", default, skip_serializing_if = "String::is_empty")]
    pub selected_option: String,

    /// The raw `type` attribute (`CheckBox`, `Option`, `Password`, `Numeric`).
    #[serde(rename = "@type", default)]
    pub kind: String,

    #[serde(rename = "@checkedStatus", default, skip_serializing_if = "String::is_empty")]
    pub checked_status: String,

    #[serde(rename = "@numericValue", default, skip_serializing_if = "String::is_empty")]
    pub numeric_value: String,
}

impl MenuNode for Menu {
    type Setting = Setting;

    fn named(name: &str) -> Self {
        Menu {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn menus(&self) -> &[Self] {
        &self.menus
    }

    fn menus_mut(&mut self) -> &mut Vec<Self> {
        &mut self.menus
    }

    fn settings(&self) -> &[Setting] {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Vec<Setting> {
        &mut self.settings
    }
}

impl SettingNode for Setting {
    fn named(name: &str) -> Self {
        Setting {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        &self.kind
    }

    fn set_type_tag(&mut self, tag: &str) {
        self.kind = tag.to_string();
    }

    fn value_for(&self, kind: SettingKind) -> &str {
        match kind {
            SettingKind::CheckBox => &self.checked_status,
            SettingKind::Option => &self.selected_option,
            SettingKind::Numeric => &self.numeric_value,
            SettingKind::Password => "",
        }
    }

    fn set_value_for(&mut self, kind: SettingKind, value: &str) {
        match kind {
            SettingKind::CheckBox => self.checked_status = value.to_string(),
            SettingKind::Numeric => self.numeric_value = value.to_string(),
            // SUM has no dedicated password attribute.
            SettingKind::Option | SettingKind::Password => {
                self.selected_option = value.to_string()
            }
        }
    }
}
