//! Loading a [`System`] from a JSON architecture document.
//!
//! ```json
//! {
//!   "package": "Aircraft",
//!   "port_definitions": [
//!     { "name": "NavBus", "doc": "Navigation state",
//!       "attributes": [ { "name": "altitude_m", "type": "Real" } ] }
//!   ],
//!   "part_definitions": [
//!     { "name": "Autopilot",
//!       "attributes": [ { "name": "gain", "type": "Real", "value": 0.75 } ],
//!       "ports": [ { "name": "nav_in", "direction": "in", "definition": "NavBus" } ] }
//!   ],
//!   "compositions": [
//!     { "name": "AircraftComposition",
//!       "parts": [ { "name": "autopilot", "definition": "Autopilot" } ],
//!       "connections": [ { "from": "nav.nav_out", "to": "autopilot.nav_in" } ] }
//!   ]
//! }
//! ```
//!
//! Arrays keep declaration order, which fixes the order of every generated variable.

use std::{collections::HashMap, path::Path};

use anyhow::Context;
use serde::Deserialize;
use sysml_ssp::model::{
    Attribute, AttributeValue, Direction, Literal, PartDefId, PartDefinition, Port, PortDefId,
    PortDefinition, System,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchitectureDocument {
    /// Package name used in model names. Defaults to the composition name.
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub port_definitions: Vec<PortDefinitionDoc>,
    #[serde(default)]
    pub part_definitions: Vec<PartDefinitionDoc>,
    #[serde(default)]
    pub compositions: Vec<CompositionDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortDefinitionDoc {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartDefinitionDoc {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub attributes: Vec<AttributeDoc>,
    #[serde(default)]
    pub ports: Vec<PortDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDoc {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub value: Option<ValueDoc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarDoc {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDoc {
    Scalar(ScalarDoc),
    List(Vec<ScalarDoc>),
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectionDoc {
    In,
    Out,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortDoc {
    pub name: String,
    pub direction: DirectionDoc,
    #[serde(default)]
    pub doc: Option<String>,
    /// Name of the port definition; a port without one exposes no signals.
    #[serde(default)]
    pub definition: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionDoc {
    pub name: String,
    #[serde(default)]
    pub parts: Vec<PartDoc>,
    #[serde(default)]
    pub connections: Vec<ConnectionDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartDoc {
    pub name: String,
    pub definition: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionDoc {
    pub from: String,
    pub to: String,
}

impl From<ScalarDoc> for Literal {
    fn from(value: ScalarDoc) -> Self {
        match value {
            ScalarDoc::Boolean(v) => Literal::Boolean(v),
            ScalarDoc::Integer(v) => Literal::Integer(v),
            ScalarDoc::Real(v) => Literal::Real(v),
            ScalarDoc::String(v) => Literal::String(v),
        }
    }
}

impl From<AttributeDoc> for Attribute {
    fn from(doc: AttributeDoc) -> Self {
        Attribute {
            name: doc.name,
            type_name: doc.type_name,
            doc: doc.doc,
            value: doc.value.map(|value| match value {
                ValueDoc::Scalar(v) => AttributeValue::Scalar(v.into()),
                ValueDoc::List(items) => {
                    AttributeValue::List(items.into_iter().map(Into::into).collect())
                }
            }),
        }
    }
}

impl From<DirectionDoc> for Direction {
    fn from(value: DirectionDoc) -> Self {
        match value {
            DirectionDoc::In => Direction::In,
            DirectionDoc::Out => Direction::Out,
        }
    }
}

impl ArchitectureDocument {
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read architecture {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse architecture {}", path.display()))
    }

    /// Build the [`System`] for `composition`. If `composition` is `None` the document must
    /// contain exactly one composition.
    pub fn into_system(self, composition: Option<&str>) -> anyhow::Result<System> {
        let ArchitectureDocument {
            package,
            port_definitions,
            part_definitions,
            mut compositions,
        } = self;

        let position = match composition {
            Some(name) => compositions
                .iter()
                .position(|c| c.name == name)
                .with_context(|| format!("Composition '{name}' not found"))?,
            None if compositions.len() == 1 => 0,
            None => anyhow::bail!(
                "The architecture declares {} compositions, select one with --composition",
                compositions.len()
            ),
        };
        let composition = compositions.swap_remove(position);

        let package = package.unwrap_or_else(|| composition.name.clone());
        let mut system = System::new(composition.name, package);

        let mut port_ids: HashMap<String, PortDefId> = HashMap::new();
        for port_def in port_definitions {
            let definition = PortDefinition {
                name: port_def.name.clone(),
                doc: port_def.doc,
                attributes: port_def.attributes.into_iter().map(Into::into).collect(),
            };
            port_ids.insert(port_def.name, system.add_port_definition(definition));
        }

        let mut part_ids: HashMap<String, PartDefId> = HashMap::new();
        for part_def in part_definitions {
            let ports = part_def
                .ports
                .into_iter()
                .map(|port| {
                    let definition = port
                        .definition
                        .map(|name| {
                            port_ids.get(&name).copied().with_context(|| {
                                format!(
                                    "Port '{}.{}' refers to unknown port definition '{name}'",
                                    part_def.name, port.name
                                )
                            })
                        })
                        .transpose()?;
                    Ok(Port {
                        name: port.name,
                        direction: port.direction.into(),
                        doc: port.doc,
                        definition,
                    })
                })
                .collect::<anyhow::Result<Vec<_>>>()?;

            let definition = PartDefinition {
                name: part_def.name.clone(),
                doc: part_def.doc,
                attributes: part_def.attributes.into_iter().map(Into::into).collect(),
                ports,
            };
            part_ids.insert(part_def.name, system.add_part_definition(definition));
        }

        for part in composition.parts {
            let definition = *part_ids.get(&part.definition).ok_or_else(|| {
                sysml_ssp::Error::UnknownPartDefinition(part.definition.clone())
            })?;
            system.add_part(part.name, definition)?;
        }

        for connection in composition.connections {
            system
                .connect(&connection.from, &connection.to)
                .with_context(|| {
                    format!("Invalid connection {} -> {}", connection.from, connection.to)
                })?;
        }

        log::debug!(
            "Loaded composition {} with {} part(s) and {} connection(s)",
            system.name,
            system.parts.len(),
            system.connections.len()
        );

        Ok(system)
    }
}

/// Read `path` and build the system for `composition`.
pub fn load_system(path: &Path, composition: Option<&str>) -> anyhow::Result<System> {
    ArchitectureDocument::from_path(path)?.into_system(composition)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "package": "Demo",
        "port_definitions": [
            { "name": "Signal", "attributes": [ { "name": "v", "type": "Real" } ] }
        ],
        "part_definitions": [
            { "name": "Source",
              "doc": "Emits a signal",
              "attributes": [
                { "name": "amplitude", "type": "Real", "value": 2.5 },
                { "name": "offsets", "type": "Integer", "value": [1, 2] },
                { "name": "label", "type": "String", "value": null },
                { "name": "enabled", "type": "Boolean", "value": true }
              ],
              "ports": [ { "name": "out", "direction": "out", "definition": "Signal" } ] },
            { "name": "Sink",
              "ports": [ { "name": "in", "direction": "in", "definition": "Signal" } ] }
        ],
        "compositions": [
            { "name": "Bench",
              "parts": [
                { "name": "src", "definition": "Source" },
                { "name": "dst", "definition": "Sink" }
              ],
              "connections": [ { "from": "src.out", "to": "dst.in" } ] },
            { "name": "Empty" }
        ]
    }"#;

    fn document() -> ArchitectureDocument {
        serde_json::from_str(DOC).unwrap()
    }

    #[test_log::test]
    fn test_load_composition() {
        let system = document().into_system(Some("Bench")).unwrap();
        assert_eq!(system.name, "Bench");
        assert_eq!(system.package, "Demo");
        assert_eq!(system.parts.len(), 2);
        assert_eq!(system.connections.len(), 1);

        let (_, source) = system.parts().next().unwrap();
        assert_eq!(source.doc.as_deref(), Some("Emits a signal"));
        assert_eq!(
            source.attributes[0].value,
            Some(AttributeValue::Scalar(Literal::Real(2.5)))
        );
        assert_eq!(
            source.attributes[1].value,
            Some(AttributeValue::List(vec![
                Literal::Integer(1),
                Literal::Integer(2)
            ]))
        );
        assert_eq!(source.attributes[2].value, None);
        assert_eq!(
            source.attributes[3].value,
            Some(AttributeValue::Scalar(Literal::Boolean(true)))
        );
        assert_eq!(source.ports[0].direction, Direction::Out);
    }

    #[test]
    fn test_composition_selection() {
        assert!(document().into_system(None).is_err());
        assert!(document().into_system(Some("Missing")).is_err());

        let empty = document().into_system(Some("Empty")).unwrap();
        assert!(empty.parts.is_empty());
        assert_eq!(empty.package, "Demo");
    }

    #[test]
    fn test_unknown_references() {
        let doc = r#"{
            "part_definitions": [
                { "name": "A", "ports": [ { "name": "p", "direction": "in", "definition": "Nope" } ] }
            ],
            "compositions": [ { "name": "C" } ]
        }"#;
        let doc: ArchitectureDocument = serde_json::from_str(doc).unwrap();
        let err = doc.into_system(None).unwrap_err();
        assert!(err.to_string().contains("unknown port definition 'Nope'"));

        let doc = r#"{
            "compositions": [ { "name": "C", "parts": [ { "name": "a", "definition": "Ghost" } ] } ]
        }"#;
        let doc: ArchitectureDocument = serde_json::from_str(doc).unwrap();
        let err = doc.into_system(None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown part definition: Ghost");
    }

    #[test]
    fn test_package_defaults_to_composition() {
        let doc: ArchitectureDocument =
            serde_json::from_str(r#"{ "compositions": [ { "name": "C" } ] }"#).unwrap();
        assert_eq!(doc.into_system(None).unwrap().package, "C");
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let doc = r#"{ "compositions": [], "extra": 1 }"#;
        assert!(serde_json::from_str::<ArchitectureDocument>(doc).is_err());
    }
}
