// crates/bmc-bioscfg/src/builder.rs

//! Renders document models back into the vendor's import format.

use crate::error::BiosCfgError;
use core::fmt::Write;
use log::trace;
use serde::Serialize;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Serializes a document model into an indented XML string.
///
/// The root element name comes from the model's `serde(rename)`.
///
/// # Errors
/// Returns an `BiosCfgError` if serialization fails.
pub fn to_xml_string<T: Serialize>(document: &T) -> Result<String, BiosCfgError> {
    let mut buffer = String::new();
    // We must write the XML declaration manually
    write!(&mut buffer, "{}", XML_DECLARATION)?;

    let mut serializer = quick_xml::se::Serializer::new(&mut buffer);
    serializer.indent(' ', 2);

    document.serialize(serializer)?;

    trace!("Rendered {} bytes of XML", buffer.len());
    Ok(buffer)
}

/// Serializes a document model into a pretty-printed JSON string.
pub fn to_json_string<T: Serialize>(document: &T) -> Result<String, BiosCfgError> {
    let buffer = serde_json::to_string_pretty(document).map_err(BiosCfgError::JsonSerializing)?;
    trace!("Rendered {} bytes of JSON", buffer.len());
    Ok(buffer)
}
