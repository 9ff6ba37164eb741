// crates/bmc-bioscfg/src/parser.rs

//! Turns raw export bytes into document models.
//!
//! Supermicro's SUM writes ISO-8859-1 and says so in the XML declaration;
//! [`decode_declared`] honours that label and transcodes to UTF-8 before
//! `quick-xml` sees the text. Everything else must already be UTF-8.

use crate::error::BiosCfgError;
use encoding_rs::{Encoding, UTF_8};
use log::trace;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Interprets `data` as UTF-8, dropping a leading byte order mark.
///
/// # Errors
/// Returns `BiosCfgError::Encoding` if the bytes are not valid UTF-8.
pub fn decode_utf8(data: &[u8]) -> Result<&str, BiosCfgError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    std::str::from_utf8(data)
        .map_err(|e| BiosCfgError::Encoding(format!("input is not valid UTF-8: {}", e)))
}

/// Returns the encoding named by the XML declaration, if there is one.
///
/// # Errors
/// Returns `BiosCfgError::Encoding` for a label `encoding_rs` does not know,
/// or `BiosCfgError::XmlReading` if the declaration itself is malformed.
pub fn declared_encoding(data: &[u8]) -> Result<Option<&'static Encoding>, BiosCfgError> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut reader = Reader::from_reader(data);
    let mut buf = Vec::new();

    match reader.read_event_into(&mut buf)? {
        Event::Decl(decl) => match decl.encoding() {
            Some(label) => {
                let label = label.map_err(quick_xml::Error::from)?;
                Encoding::for_label(&label).map(Some).ok_or_else(|| {
                    BiosCfgError::Encoding(format!(
                        "unsupported charset label {:?}",
                        String::from_utf8_lossy(&label)
                    ))
                })
            }
            None => Ok(None),
        },
        _ => Ok(None),
    }
}

/// Decodes `data` using the charset of its XML declaration (UTF-8 if none).
///
/// # Errors
/// Returns `BiosCfgError::Encoding` if the bytes are invalid in that charset.
pub fn decode_declared(data: &[u8]) -> Result<Cow<'_, str>, BiosCfgError> {
    let encoding = declared_encoding(data)?.unwrap_or(UTF_8);
    let (text, actual, had_errors) = encoding.decode(data);

    if had_errors {
        return Err(BiosCfgError::Encoding(format!(
            "input is not valid {}",
            actual.name()
        )));
    }
    if actual != UTF_8 {
        trace!("Transcoded {} bytes from {} to UTF-8", data.len(), actual.name());
    }

    Ok(text)
}

/// Returns the local name of the document's root element, or `None` if the
/// text holds no element at all.
pub fn root_element(text: &str) -> Result<Option<String>, BiosCfgError> {
    let mut reader = Reader::from_str(text);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = e.local_name();
                return Ok(Some(String::from_utf8_lossy(name.as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Deserializes an XML document model whose root element must be `root`.
///
/// The deserializer does not look at the root element's name, so it is
/// checked here first.
///
/// # Errors
/// Returns `BiosCfgError::UnexpectedRootElement` if the document belongs to
/// another schema, or `BiosCfgError::XmlParsing` if it does not deserialize.
pub fn from_xml<T: DeserializeOwned>(text: &str, root: &str) -> Result<T, BiosCfgError> {
    trace!("Parsing {} bytes of XML", text.len());
    if let Some(found) = root_element(text)? {
        if found != root {
            return Err(BiosCfgError::UnexpectedRootElement {
                expected: root.to_string(),
                found,
            });
        }
    }
    Ok(quick_xml::de::from_str(text)?)
}

/// Deserializes a JSON document model.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, BiosCfgError> {
    trace!("Parsing {} bytes of JSON", text.len());
    serde_json::from_str(text).map_err(BiosCfgError::JsonParsing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::supermicro::BiosCfg;

    #[test]
    fn test_decode_latin1_declared_input() {
        let data = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\" standalone=\"yes\"?>\
<BiosCfg><Menu name=\"Temp \xB0C\"/></BiosCfg>";

        let text = decode_declared(data).expect("latin-1 decodes");
        assert!(text.contains("Temp \u{00B0}C"));

        let cfg: BiosCfg = from_xml(&text, "BiosCfg").expect("transcoded text parses");
        assert_eq!(cfg.menus[0].name, "Temp \u{00B0}C");
    }

    #[test]
    fn test_decode_without_declaration_is_utf8() {
        let data = "<BiosCfg><Menu name=\"Gr\u{00FC}n\"/></BiosCfg>".as_bytes();
        assert!(declared_encoding(data).unwrap().is_none());
        assert!(decode_declared(data).unwrap().contains("Gr\u{00FC}n"));

        // A lone latin-1 byte is not valid UTF-8.
        let data = b"<BiosCfg><Menu name=\"\xB0\"/></BiosCfg>";
        assert!(matches!(decode_declared(data), Err(BiosCfgError::Encoding(_))));
    }

    #[test]
    fn test_unknown_charset_label() {
        let data = b"<?xml version=\"1.0\" encoding=\"klingon\"?><BiosCfg/>";
        assert!(matches!(declared_encoding(data), Err(BiosCfgError::Encoding(_))));
    }

    #[test]
    fn test_decode_utf8_strips_bom() {
        let data = b"\xEF\xBB\xBF<BiosCfg/>";
        assert_eq!(decode_utf8(data).unwrap(), "<BiosCfg/>");
        assert!(matches!(
            decode_utf8(b"\xFF\xFE"),
            Err(BiosCfgError::Encoding(_))
        ));
    }

    #[test]
    fn test_malformed_xml_is_a_parse_error() {
        let result = from_xml::<BiosCfg>("<BiosCfg><Menu name=\"Boot\">", "BiosCfg");
        assert!(
            matches!(result, Err(BiosCfgError::XmlParsing(_))),
            "Expected XmlParsing error, got {:?}",
            result
        );
    }

    #[test]
    fn test_root_element_skips_prolog() {
        let text = "<?xml version=\"1.0\"?>\n<!-- exported by SUM -->\n<BiosCfg><Menu name=\"Boot\"/></BiosCfg>";
        assert_eq!(root_element(text).unwrap().as_deref(), Some("BiosCfg"));
        assert_eq!(
            root_element("<SystemConfiguration/>").unwrap().as_deref(),
            Some("SystemConfiguration")
        );
        assert_eq!(root_element("").unwrap(), None);
    }

    #[test]
    fn test_wrong_root_element_is_rejected() {
        let result = from_xml::<BiosCfg>(
            "<SystemConfiguration Model=\"x\"><Component FQDD=\"a\"/></SystemConfiguration>",
            "BiosCfg",
        );
        assert!(
            matches!(
                result,
                Err(BiosCfgError::UnexpectedRootElement { ref expected, ref found })
                    if expected == "BiosCfg" && found == "SystemConfiguration"
            ),
            "Expected UnexpectedRootElement error, got {:?}",
            result
        );
    }
}
