// crates/bmc-bioscfg/src/model/dell.rs

//! Document model of a Dell Server Configuration Profile (SCP) in XML form.
//!
//! Dell's profile is flat: `<Component>` elements keyed by an opaque FQDD
//! (e.g. `BIOS.Setup.1-1`) own `<Attribute Name="...">value</Attribute>`
//! entries.

use log::debug;
use serde::{Deserialize, Serialize};

/// Name of the document's root element.
pub const ROOT_ELEMENT: &str = "SystemConfiguration";

/// The `<SystemConfiguration>` root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "SystemConfiguration")]
pub struct SystemConfiguration {
    #[serde(rename = "@Model", default)]
    pub model: String,

    #[serde(rename = "@ServiceTag", default)]
    pub service_tag: String,

    #[serde(rename = "@TimeStamp", default)]
    pub time_stamp: String,

    #[serde(rename = "Comments", default, skip_serializing_if = "Comments::is_empty")]
    pub comments: Comments,

    #[serde(rename = "Component", default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

/// `<Comments><Comment>...</Comment></Comments>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comments {
    #[serde(rename = "Comment", default)]
    pub comment: Vec<String>,
}

impl Comments {
    pub fn is_empty(&self) -> bool {
        self.comment.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "@FQDD")]
    pub fqdd: String,

    #[serde(rename = "Attribute", default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "@Name")]
    pub name: String,

    /// Kept verbatim ("True"/"False") so exports round-trip unchanged.
    #[serde(rename = "@SetOnImport", default, skip_serializing_if = "Option::is_none")]
    pub set_on_import: Option<String>,

    #[serde(rename = "@Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(rename = "$text", default)]
    pub value: String,
}

impl SystemConfiguration {
    /// Returns the component with the given FQDD, appending an empty one if
    /// none exists.
    pub fn find_component(&mut self, fqdd: &str) -> &mut Component {
        let idx = match self.components.iter().position(|c| c.fqdd == fqdd) {
            Some(idx) => idx,
            None => {
                debug!("Creating component {:?}", fqdd);
                self.components.push(Component {
                    fqdd: fqdd.to_string(),
                    attributes: Vec::new(),
                });
                self.components.len() - 1
            }
        };
        &mut self.components[idx]
    }

    /// Read-only lookup of a component by FQDD.
    pub fn component(&self, fqdd: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.fqdd == fqdd)
    }
}

impl Component {
    /// Returns the attribute with the given name, appending an empty one if
    /// none exists.
    pub fn find_attribute(&mut self, name: &str) -> &mut Attribute {
        let idx = match self.attributes.iter().position(|a| a.name == name) {
            Some(idx) => idx,
            None => {
                debug!("Creating attribute {:?} in {:?}", name, self.fqdd);
                self.attributes.push(Attribute {
                    name: name.to_string(),
                    ..Default::default()
                });
                self.attributes.len() - 1
            }
        };
        &mut self.attributes[idx]
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}
