// crates/bmc-bioscfg/src/model/dell_json.rs

//! JSON rendering of a Dell Server Configuration Profile.
//!
//! Dell's JSON profile uses different key spellings from the XML one
//! (`Components`, `Attributes`, `"Set On Import"`), so it gets its own serde
//! mirror. It converts to and from the XML-shaped [`SystemConfiguration`],
//! which stays the in-memory document for both formats.

use super::dell::{Attribute, Comments, Component, SystemConfiguration};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"SystemConfiguration": {...}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDocument {
    #[serde(rename = "SystemConfiguration")]
    pub system_configuration: JsonSystemConfiguration,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct JsonSystemConfiguration {
    #[serde(rename = "Model", default)]
    pub model: String,

    #[serde(rename = "ServiceTag", default)]
    pub service_tag: String,

    #[serde(rename = "TimeStamp", default)]
    pub time_stamp: String,

    #[serde(rename = "Comments", default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<JsonComment>,

    #[serde(rename = "Components", default)]
    pub components: Vec<JsonComponent>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonComment {
    #[serde(rename = "Comment")]
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonComponent {
    #[serde(rename = "FQDD")]
    pub fqdd: String,

    #[serde(rename = "Attributes", default)]
    pub attributes: Vec<JsonAttribute>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonAttribute {
    #[serde(rename = "Name")]
    pub name: String,

    /// Usually a string, but exports occasionally carry bare numbers.
    #[serde(rename = "Value", default)]
    pub value: Value,

    #[serde(rename = "Set On Import", default, skip_serializing_if = "Option::is_none")]
    pub set_on_import: Option<String>,

    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<&SystemConfiguration> for JsonDocument {
    fn from(cfg: &SystemConfiguration) -> Self {
        let components = cfg
            .components
            .iter()
            .map(|c| JsonComponent {
                fqdd: c.fqdd.clone(),
                attributes: c
                    .attributes
                    .iter()
                    .map(|a| JsonAttribute {
                        name: a.name.clone(),
                        value: Value::String(a.value.clone()),
                        set_on_import: a.set_on_import.clone(),
                        comment: a.comment.clone(),
                    })
                    .collect(),
            })
            .collect();

        JsonDocument {
            system_configuration: JsonSystemConfiguration {
                model: cfg.model.clone(),
                service_tag: cfg.service_tag.clone(),
                time_stamp: cfg.time_stamp.clone(),
                comments: cfg
                    .comments
                    .comment
                    .iter()
                    .map(|c| JsonComment { comment: c.clone() })
                    .collect(),
                components,
            },
        }
    }
}

impl From<JsonDocument> for SystemConfiguration {
    fn from(doc: JsonDocument) -> Self {
        let sc = doc.system_configuration;
        SystemConfiguration {
            model: sc.model,
            service_tag: sc.service_tag,
            time_stamp: sc.time_stamp,
            comments: Comments {
                comment: sc.comments.into_iter().map(|c| c.comment).collect(),
            },
            components: sc
                .components
                .into_iter()
                .map(|c| Component {
                    fqdd: c.fqdd,
                    attributes: c
                        .attributes
                        .into_iter()
                        .map(|a| Attribute {
                            name: a.name,
                            set_on_import: a.set_on_import,
                            comment: a.comment,
                            value: value_to_string(a.value),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
