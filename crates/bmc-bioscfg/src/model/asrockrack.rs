// crates/bmc-bioscfg/src/model/asrockrack.rs

//! Document model of an ASRockRack BIOS configuration export.
//!
//! Same tree shape as the Supermicro export, but settings carry a capitalized
//! `Name` attribute and only ever a `selectedOption` value.

use crate::tree::{MenuNode, SettingNode};
use crate::types::SettingKind;
use serde::{Deserialize, Serialize};

/// Name of the document's root element.
pub const ROOT_ELEMENT: &str = "BiosCfg";

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

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    #[serde(rename = "@Name", default)]
    pub name: String,

    #[serde(rename = "@order", default, skip_serializing_if = "String::is_empty")]
    pub order: String,

    #[serde(rename = "@selectedOption", default, skip_serializing_if = "String::is_empty")]
    pub selected_option: String,

    #[serde(rename = "@type", default)]
    pub kind: String,
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

    // Every kind is stored in `selectedOption`; passwords are never reported.
    fn value_for(&self, kind: SettingKind) -> &str {
        match kind {
            SettingKind::Password => "",
            _ => &self.selected_option,
        }
    }

    fn set_value_for(&mut self, _kind: SettingKind, value: &str) {
        self.selected_option = value.to_string();
    }
}
