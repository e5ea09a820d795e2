//! The `sysml-ssp` crate exports a composed system model as a set of co-simulation documents:
//!
//! * one FMI 2.0 `modelDescription.xml` per part definition,
//! * an SSP System Structure Description (`SystemStructure.ssd`) wiring the parts together,
//! * an SSP parameter set (`parameters.ssv`) with the default value of every parameter.
//!
//! All three are derived from the same [`model::System`] by the same enumeration rule
//! ([`variables::enumerate_variables`]), so variable and connector names agree across documents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use sysml_ssp::{
//!     config::GeneratorConfig,
//!     generate::generate_all,
//!     model::{Attribute, Direction, PartDefinition, Port, PortDefinition, System},
//! };
//!
//! let mut system = System::new("Plane", "Aircraft");
//! let bus = system.add_port_definition(
//!     PortDefinition::new("AltitudeBus").with_attribute(Attribute::new("altitude", "Real")),
//! );
//! let sensor = system.add_part_definition(
//!     PartDefinition::new("Altimeter")
//!         .with_attribute(Attribute::new("rate_hz", "Integer").with_value(50i64))
//!         .with_port(Port::new("out", Direction::Out, bus)),
//! );
//! let autopilot = system.add_part_definition(
//!     PartDefinition::new("Autopilot").with_port(Port::new("alt", Direction::In, bus)),
//! );
//! system.add_part("altimeter", sensor).unwrap();
//! system.add_part("autopilot", autopilot).unwrap();
//! system.connect("altimeter.out", "autopilot.alt").unwrap();
//!
//! let written = generate_all(&system, Path::new("generated"), &GeneratorConfig::default()).unwrap();
//! assert_eq!(written.len(), 4);
//! ```
#![deny(unsafe_code)]
#![deny(clippy::all)]

// Re-export the schema crates
pub use fmi_schema;
pub use ssp_schema;

pub mod config;
pub mod connections;
pub mod fmi;
pub mod generate;
pub mod model;
pub mod paths;
pub mod ssd;
pub mod ssv;
pub mod types;
pub mod variables;

pub use config::GeneratorConfig;
pub use generate::{
    generate_all, generate_model_descriptions, generate_parameter_set, generate_ssd,
};
pub use model::System;
pub use types::PrimitiveType;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Port definitions of {start} and {end} differ")]
    PortTypeMismatch { start: String, end: String },

    #[error("Port {element}.{port} has no resolved port definition")]
    UnresolvedPortDefinition { element: String, port: String },

    #[error("Unsupported type kind: {0}")]
    UnsupportedTypeKind(String),

    #[error("Cannot convert '{literal}' to {kind}")]
    InvalidLiteral { kind: String, literal: String },

    #[error("Unknown part: {0}")]
    UnknownPart(String),

    #[error("Unknown port: {0}")]
    UnknownPort(String),

    #[error("Unknown part definition: {0}")]
    UnknownPartDefinition(String),

    #[error("Duplicate part: {0}")]
    DuplicatePart(String),

    #[error("Duplicate part definition name: {0}")]
    DuplicatePartDefinition(String),

    #[error(transparent)]
    Schema(#[from] fmi_schema::Error),

    #[error(transparent)]
    Ssp(#[from] ssp_schema::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
