// crates/bmc-bioscfg/src/store.rs

//! The write/read capability every vendor document offers to its adapter.
//!
//! Tree documents (Supermicro, ASRockRack) address a setting by a menu path;
//! Dell's flat profile addresses it by FQDD, taken from the first path
//! segment.

use crate::error::BiosCfgError;
use crate::model::{asrockrack, dell, supermicro};
use crate::tree::{self, MenuNode};
use log::warn;

/// Write and read access to the settings of a vendor document.
pub trait SettingStore {
    /// Writes `value` into setting `name` under `menu_path`, creating
    /// whatever structure is missing.
    fn set(&mut self, menu_path: &[&str], name: &str, value: &str) -> Result<(), BiosCfgError>;

    /// Returns the authoritative value of setting `name` under `menu_path`.
    fn get(&self, menu_path: &[&str], name: &str) -> Option<&str>;
}

fn tree_set<M: MenuNode>(
    menus: &mut Vec<M>,
    menu_path: &[&str],
    name: &str,
    value: &str,
) -> Result<(), BiosCfgError> {
    let mut path = Vec::with_capacity(menu_path.len() + 1);
    path.extend_from_slice(menu_path);
    path.push(name);

    let setting = tree::find_or_create_setting(menus, &path)?;
    tree::assign_value(setting, value);
    Ok(())
}

fn tree_get<'a, M: MenuNode>(menus: &'a [M], menu_path: &[&str], name: &str) -> Option<&'a str> {
    tree::find_setting(menus, menu_path, name).and_then(tree::authoritative_value)
}

impl SettingStore for supermicro::BiosCfg {
    fn set(&mut self, menu_path: &[&str], name: &str, value: &str) -> Result<(), BiosCfgError> {
        tree_set(&mut self.menus, menu_path, name, value)
    }

    fn get(&self, menu_path: &[&str], name: &str) -> Option<&str> {
        tree_get(&self.menus, menu_path, name)
    }
}

impl SettingStore for asrockrack::BiosCfg {
    fn set(&mut self, menu_path: &[&str], name: &str, value: &str) -> Result<(), BiosCfgError> {
        tree_set(&mut self.menus, menu_path, name, value)
    }

    fn get(&self, menu_path: &[&str], name: &str) -> Option<&str> {
        tree_get(&self.menus, menu_path, name)
    }
}

impl SettingStore for dell::SystemConfiguration {
    fn set(&mut self, menu_path: &[&str], name: &str, value: &str) -> Result<(), BiosCfgError> {
        let (fqdd, rest) = menu_path.split_first().ok_or(BiosCfgError::EmptyMenuPath)?;
        if !rest.is_empty() {
            warn!(
                "Dell components are flat, ignoring path segments {:?} after {:?}",
                rest, fqdd
            );
        }

        self.find_component(fqdd).find_attribute(name).value = value.to_string();
        Ok(())
    }

    fn get(&self, menu_path: &[&str], name: &str) -> Option<&str> {
        let fqdd = menu_path.first()?;
        self.component(fqdd)?
            .attribute(name)
            .map(|a| a.value.as_str())
    }
}
