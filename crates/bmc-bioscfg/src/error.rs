// crates/bmc-bioscfg/src/error.rs

use core::fmt;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;
use quick_xml::Error as XmlError;

/// Errors that can occur while building, parsing, serializing or
/// normalizing a vendor BIOS configuration.
#[derive(Debug)]
pub enum BiosCfgError {
    /// The vendor identifier handed to the factory is not supported.
    UnknownVendor(String),

    /// The configuration format is unknown, or not supported by the vendor.
    UnknownConfigFormat(String),

    /// A setting carried a `type` tag outside the known set.
    UnknownSettingType(String),

    /// A boot mode or boot order value outside the vendor's enumeration.
    InvalidBootModeOption(String),

    /// An Intel SGX mode outside the vendor's enumeration.
    InvalidSgxOption(String),

    /// `raw` was called without a menu (or FQDD) to place the setting in.
    EmptyMenuPath,

    /// The XML root element does not belong to the adapter's vendor schema.
    UnexpectedRootElement { expected: String, found: String },

    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error from the `quick-xml` reader while inspecting the declaration.
    XmlReading(XmlError),

    /// Dell JSON input could not be parsed.
    JsonParsing(serde_json::Error),

    /// Dell JSON output could not be produced.
    JsonSerializing(serde_json::Error),

    /// Input bytes were not valid in the declared or required charset.
    Encoding(String),

    /// An error occurred during string formatting.
    FmtError(fmt::Error),
}

impl From<DeError> for BiosCfgError {
    fn from(e: DeError) -> Self {
        BiosCfgError::XmlParsing(e)
    }
}

impl From<SeError> for BiosCfgError {
    fn from(e: SeError) -> Self {
        BiosCfgError::XmlSerializing(e)
    }
}

impl From<XmlError> for BiosCfgError {
    fn from(e: XmlError) -> Self {
        BiosCfgError::XmlReading(e)
    }
}

impl From<fmt::Error> for BiosCfgError {
    fn from(e: fmt::Error) -> Self {
        BiosCfgError::FmtError(e)
    }
}

impl fmt::Display for BiosCfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiosCfgError::UnknownVendor(v) => write!(f, "unknown/unsupported vendor: {}", v),
            BiosCfgError::UnknownConfigFormat(c) => write!(f, "unknown config format: {}", c),
            BiosCfgError::UnknownSettingType(t) => write!(f, "unknown setting type: {}", t),
            BiosCfgError::InvalidBootModeOption(m) => write!(f, "invalid boot mode option: {}", m),
            BiosCfgError::InvalidSgxOption(m) => write!(f, "invalid SGX option: {}", m),
            BiosCfgError::EmptyMenuPath => write!(f, "menu path must name at least one menu"),
            BiosCfgError::UnexpectedRootElement { expected, found } => write!(
                f,
                "unexpected root element <{}>, expected <{}>",
                found, expected
            ),
            BiosCfgError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            BiosCfgError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            BiosCfgError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            BiosCfgError::JsonParsing(e) => write!(f, "JSON parsing error: {}", e),
            BiosCfgError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
            BiosCfgError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            BiosCfgError::FmtError(e) => write!(f, "Formatting error: {}", e),
        }
    }
}

impl std::error::Error for BiosCfgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BiosCfgError::XmlParsing(e) => Some(e),
            BiosCfgError::XmlSerializing(e) => Some(e),
            BiosCfgError::XmlReading(e) => Some(e),
            BiosCfgError::JsonParsing(e) | BiosCfgError::JsonSerializing(e) => Some(e),
            BiosCfgError::FmtError(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BiosCfgError;
    use std::error::Error;

    #[test]
    fn test_from_de_error() {
        // Create a dummy DeError by failing to parse
        let xml_err = quick_xml::de::from_str::<u32>("<v>not a number</v>").unwrap_err();
        let err: BiosCfgError = xml_err.into();
        assert!(matches!(err, BiosCfgError::XmlParsing(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: BiosCfgError = xml_err.into();
        assert!(matches!(err, BiosCfgError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_fmt_error() {
        let err: BiosCfgError = core::fmt::Error.into();
        assert!(matches!(err, BiosCfgError::FmtError(_)));
    }

    #[test]
    fn test_display_names_offending_input() {
        let err = BiosCfgError::InvalidBootModeOption("BOGUS".into());
        assert_eq!(err.to_string(), "invalid boot mode option: BOGUS");

        let err = BiosCfgError::UnknownVendor("hal9000".into());
        assert_eq!(err.to_string(), "unknown/unsupported vendor: hal9000");
        assert!(err.source().is_none());

        let err = BiosCfgError::UnexpectedRootElement {
            expected: "BiosCfg".into(),
            found: "SystemConfiguration".into(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected root element <SystemConfiguration>, expected <BiosCfg>"
        );
    }
}
