#![doc=include_str!( "../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![deny(unsafe_code)]
#![deny(clippy::all)]

use std::fmt::Display;

use hard_xml::{XmlRead, XmlWrite};
use thiserror::Error;

#[cfg(feature = "fmi2")]
pub mod fmi2;
pub mod traits;
pub mod variable_counts;

/// The XML declaration emitted at the top of every non-fragment document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// The major version of the FMI standard
#[derive(Debug, PartialEq, Eq)]
pub enum MajorVersion {
    FMI1,
    FMI2,
    FMI3,
}

impl Display for MajorVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MajorVersion::FMI1 => write!(f, "1.0"),
            MajorVersion::FMI2 => write!(f, "2.0"),
            MajorVersion::FMI3 => write!(f, "3.0"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Variable {0} not found")]
    VariableNotFound(String),

    #[error(transparent)]
    Semver(#[from] lenient_semver::parser::OwnedError),

    #[error("Unsupported FMI major version {0}")]
    UnsupportedVersion(u64),

    #[error("Error parsing XML: {0}")]
    XmlParse(String),

    #[error("Error writing XML: {0}")]
    XmlWrite(String),
}

/// Serialize a schema element to an XML string.
///
/// If `fragment` is false, the output is prefixed with the XML declaration so it can be written
/// out directly as a standalone document.
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

/// Deserialize a schema element from an XML string.
pub fn deserialize<'a, T: XmlRead<'a>>(xml: &'a str) -> Result<T, Error> {
    T::from_str(xml).map_err(|e| Error::XmlParse(e.to_string()))
}
