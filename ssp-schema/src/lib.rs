#![doc=include_str!( "../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![deny(unsafe_code)]
#![deny(clippy::all)]

use hard_xml::{XmlRead, XmlWrite};
use thiserror::Error;

pub mod ssc;
pub mod ssd;
#[cfg(feature = "ssv")]
pub mod ssv;

/// Default namespace of SSP 1.0 System Structure Descriptions
pub const SSD_NAMESPACE: &str = "http://ssp-standard.org/SSP1/SystemStructureDescription";
/// Default namespace of SSP 1.0 common content
pub const SSC_NAMESPACE: &str = "http://ssp-standard.org/SSP1/SystemStructureCommon";
/// Default namespace of SSP 1.0 parameter values
pub const SSV_NAMESPACE: &str = "http://ssp-standard.org/SSP1/SystemStructureParameterValues";

/// The XML declaration emitted at the top of every non-fragment document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Error parsing XML: {0}")]
    XmlParse(String),

    #[error("Error writing XML: {0}")]
    XmlWrite(String),
}

/// Serialize an SSP element to an XML string, optionally prefixed with the XML declaration.
pub fn serialize<T: XmlWrite>(value: &T, fragment: bool) -> Result<String, Error> {
    let body = value
        .to_string()
        .map_err(|e| Error::XmlWrite(e.to_string()))?;
    if fragment {
        Ok(body)
    } else {
        Ok(format!("{XML_DECLARATION}\n{body}\n"))
    }
}

/// Deserialize an SSP element from an XML string.
pub fn deserialize<'a, T: XmlRead<'a>>(xml: &'a str) -> Result<T, Error> {
    T::from_str(xml).map_err(|e| Error::XmlParse(e.to_string()))
}
