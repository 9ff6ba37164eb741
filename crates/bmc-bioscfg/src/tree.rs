// crates/bmc-bioscfg/src/tree.rs

//! Find-or-create traversal over Menu → Setting trees.
//!
//! Supermicro and ASRockRack exports share the same shape (nested `<Menu>`
//! elements owning `<Setting>` leaves) but differ in attribute names and in
//! which value fields a setting carries. The [`MenuNode`] and [`SettingNode`]
//! traits abstract over those differences so the traversal below is written
//! once.
//!
//! All lookups are linear, case-sensitive and exact. New nodes are appended,
//! so sibling order is always insertion order.

use crate::error::BiosCfgError;
use crate::types::SettingKind;
use log::{debug, warn};

/// A leaf `<Setting>` in a vendor menu tree.
pub trait SettingNode {
    /// Builds an empty setting with the given name.
    fn named(name: &str) -> Self;

    fn name(&self) -> &str;

    /// The raw `type` attribute, exactly as found in the document.
    fn type_tag(&self) -> &str;

    fn set_type_tag(&mut self, tag: &str);

    /// Returns the value field that `kind` makes authoritative.
    fn value_for(&self, kind: SettingKind) -> &str;

    /// Writes `value` into the field that `kind` makes authoritative.
    fn set_value_for(&mut self, kind: SettingKind, value: &str);
}

/// A `<Menu>` node: owns child menus and settings.
pub trait MenuNode: Sized {
    type Setting: SettingNode;

    /// Builds an empty menu with the given name.
    fn named(name: &str) -> Self;

    fn name(&self) -> &str;

    fn menus(&self) -> &[Self];

    fn menus_mut(&mut self) -> &mut Vec<Self>;

    fn settings(&self) -> &[Self::Setting];

    fn settings_mut(&mut self) -> &mut Vec<Self::Setting>;
}

/// Returns the menu called `name` in `menus`, appending a new one if none exists.
pub fn find_or_create_menu<'a, M: MenuNode>(menus: &'a mut Vec<M>, name: &str) -> &'a mut M {
    let idx = match menus.iter().position(|m| m.name() == name) {
        Some(idx) => idx,
        None => {
            debug!("Creating menu {:?}", name);
            menus.push(M::named(name));
            menus.len() - 1
        }
    };
    &mut menus[idx]
}

/// Returns the setting called `name` directly inside `menu`, appending a new
/// one if none exists.
pub fn find_or_create_menu_setting<'a, M: MenuNode>(
    menu: &'a mut M,
    name: &str,
) -> &'a mut M::Setting {
    let settings = menu.settings_mut();
    let idx = match settings.iter().position(|s| s.name() == name) {
        Some(idx) => idx,
        None => {
            debug!("Creating setting {:?}", name);
            settings.push(M::Setting::named(name));
            settings.len() - 1
        }
    };
    &mut settings[idx]
}

/// Resolves `path` (menu names followed by the setting name), creating any
/// missing menus along the way and the setting itself in the innermost menu.
///
/// # Errors
/// Returns `BiosCfgError::EmptyMenuPath` if `path` does not contain at least
/// one menu name before the setting name.
pub fn find_or_create_setting<'a, M: MenuNode>(
    menus: &'a mut Vec<M>,
    path: &[&str],
) -> Result<&'a mut M::Setting, BiosCfgError> {
    let (setting_name, menu_path) = path.split_last().ok_or(BiosCfgError::EmptyMenuPath)?;
    let (first, rest) = menu_path.split_first().ok_or(BiosCfgError::EmptyMenuPath)?;

    let mut menu = find_or_create_menu(menus, first);
    for part in rest {
        menu = find_or_create_menu(menu.menus_mut(), part);
    }

    Ok(find_or_create_menu_setting(menu, setting_name))
}

/// Read-only lookup of the setting `name` under `menu_path`.
pub fn find_setting<'a, M: MenuNode>(
    menus: &'a [M],
    menu_path: &[&str],
    name: &str,
) -> Option<&'a M::Setting> {
    let (first, rest) = menu_path.split_first()?;

    let mut menu = menus.iter().find(|m| m.name() == *first)?;
    for part in rest {
        menu = menu.menus().iter().find(|m| m.name() == *part)?;
    }

    menu.settings().iter().find(|s| s.name() == name)
}

/// Visits every setting of the forest depth-first. A menu's own settings are
/// visited before its child menus. The first error returned by `visit` stops
/// the walk.
pub fn walk_settings<M, F, E>(menus: &[M], visit: &mut F) -> Result<(), E>
where
    M: MenuNode,
    F: FnMut(&M::Setting) -> Result<(), E>,
{
    for menu in menus {
        for setting in menu.settings() {
            visit(setting)?;
        }
        walk_settings(menu.menus(), visit)?;
    }
    Ok(())
}

/// Writes `value` into the field the setting's type makes authoritative.
///
/// Settings without a type tag (freshly created ones) are tagged
/// `SettingKind::DEFAULT` first.
pub fn assign_value<S: SettingNode>(setting: &mut S, value: &str) {
    if setting.type_tag().is_empty() {
        setting.set_type_tag(SettingKind::DEFAULT.as_str());
    }

    let kind = match SettingKind::parse(setting.type_tag()) {
        Ok(kind) => kind,
        Err(_) => {
            warn!(
                "Setting {:?} has unknown type {:?}, writing value as {}",
                setting.name(),
                setting.type_tag(),
                SettingKind::DEFAULT.as_str()
            );
            SettingKind::DEFAULT
        }
    };

    setting.set_value_for(kind, value);
}

/// Returns the authoritative value of a setting, or `None` when its type tag
/// is not recognized.
pub fn authoritative_value<S: SettingNode>(setting: &S) -> Option<&str> {
    SettingKind::parse(setting.type_tag())
        .ok()
        .map(|kind| setting.value_for(kind))
}
