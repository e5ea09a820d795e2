//! Enumeration of the variables exposed by one part definition.
//!
//! Every artifact derives its per-component names from [`enumerate_variables`], and the order
//! defined here is shared by all of them: parameters (lists expanded element-wise) first, then the
//! attributes exposed through ports.

use fmi_schema::fmi2::{Causality, Variability};

use crate::{
    model::{Attribute, AttributeValue, Direction, Literal, PartDefinition, System},
    types::{map_type, PrimitiveType},
};

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDescriptor {
    pub name: String,
    pub causality: Causality,
    /// Zero-based value reference, unique within the component.
    pub value_reference: u32,
    /// One-based structural index, as referenced from `ModelStructure`.
    pub index: u32,
    pub kind: PrimitiveType,
    pub variability: Option<Variability>,
    pub description: Option<String>,
    pub start: Option<Literal>,
}

impl VariableDescriptor {
    pub fn is_parameter(&self) -> bool {
        self.causality == Causality::Parameter
    }
}

/// Name of element `index` of the list attribute `name`.
pub fn element_name(name: &str, index: usize) -> String {
    format!("{name}[{index}]")
}

/// One parameter value slot: a scalar attribute, or one element of a list attribute.
pub(crate) struct ParameterEntry<'a> {
    pub name: String,
    pub attribute: &'a Attribute,
    pub kind: PrimitiveType,
    pub value: Option<&'a Literal>,
}

/// Parameter entries of `definition`, list attributes expanded in element order.
pub(crate) fn parameter_entries(
    definition: &PartDefinition,
) -> impl Iterator<Item = ParameterEntry<'_>> {
    definition.attributes.iter().flat_map(|attribute| {
        let kind = map_type(attribute.type_name.as_deref());
        let entry = |name, value| ParameterEntry {
            name,
            attribute,
            kind,
            value,
        };
        match &attribute.value {
            Some(AttributeValue::List(items)) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| entry(element_name(&attribute.name, idx), Some(item)))
                .collect::<Vec<_>>(),
            Some(AttributeValue::Scalar(value)) => {
                vec![entry(attribute.name.clone(), Some(value))]
            }
            None => vec![entry(attribute.name.clone(), None)],
        }
    })
}

/// Produce the ordered variable descriptors of `definition`.
pub fn enumerate_variables(
    system: &System,
    definition: &PartDefinition,
) -> Vec<VariableDescriptor> {
    let parameters = parameter_entries(definition).map(|entry| {
        (
            entry.name,
            Causality::Parameter,
            entry.kind,
            Some(Variability::Fixed),
            entry.attribute.doc.clone(),
            entry.value.cloned(),
        )
    });

    let ports = system
        .port_attributes(definition)
        .map(|(port, port_def, attr)| {
            let causality = match port.direction {
                Direction::In => Causality::Input,
                Direction::Out => Causality::Output,
            };
            let description = attr
                .doc
                .as_ref()
                .or(port.doc.as_ref())
                .or(port_def.doc.as_ref())
                .cloned();
            (
                format!("{}.{}", port.name, attr.name),
                causality,
                map_type(attr.type_name.as_deref()),
                None,
                description,
                None,
            )
        });

    parameters
        .chain(ports)
        .enumerate()
        .map(
            |(position, (name, causality, kind, variability, description, start))| {
                let descriptor = VariableDescriptor {
                    name,
                    causality,
                    value_reference: position as u32,
                    index: position as u32 + 1,
                    kind,
                    variability,
                    description,
                    start,
                };
                log::trace!(
                    "{}: {} vr={} idx={}",
                    definition.name,
                    descriptor.name,
                    descriptor.value_reference,
                    descriptor.index
                );
                descriptor
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Port, PortDefinition};

    fn flight_computer() -> (System, PartDefinition) {
        let mut system = System::new("Plane", "Aircraft");
        let bus = system.add_port_definition(
            PortDefinition::new("AltitudeBus")
                .with_doc("Altitude bus")
                .with_attribute(Attribute::new("altitude", "Real")),
        );
        let definition = PartDefinition::new("FlightComputer")
            .with_attribute(Attribute::new("mass", "Real").with_value(1200.5))
            .with_attribute(Attribute::new("tags", "Integer").with_list([1i64, 2, 3]))
            .with_port(Port::new("out", Direction::Out, bus));
        (system, definition)
    }

    #[test]
    fn test_parameters_then_ports() {
        let (system, definition) = flight_computer();
        let vars = enumerate_variables(&system, &definition);

        let summary: Vec<_> = vars
            .iter()
            .map(|v| (v.name.as_str(), v.value_reference, v.index, v.causality))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("mass", 0, 1, Causality::Parameter),
                ("tags[0]", 1, 2, Causality::Parameter),
                ("tags[1]", 2, 3, Causality::Parameter),
                ("tags[2]", 3, 4, Causality::Parameter),
                ("out.altitude", 4, 5, Causality::Output),
            ]
        );

        assert!(vars[..4]
            .iter()
            .all(|v| v.variability == Some(Variability::Fixed)));
        assert_eq!(vars[4].variability, None);
        assert_eq!(vars[4].start, None);
        assert_eq!(vars[1].kind, PrimitiveType::Integer);
        assert_eq!(vars[2].start, Some(Literal::Integer(2)));
        assert_eq!(vars[4].description.as_deref(), Some("Altitude bus"));
    }

    #[test]
    fn test_list_expansion_stops_at_length() {
        let (system, definition) = flight_computer();
        let vars = enumerate_variables(&system, &definition);
        assert!(vars.iter().any(|v| v.name == "tags[2]"));
        assert!(!vars.iter().any(|v| v.name == "tags[3]"));
        assert!(!vars.iter().any(|v| v.name == "tags"));
    }

    #[test]
    fn test_description_fallback() {
        let mut system = System::new("S", "P");
        let bus = system.add_port_definition(
            PortDefinition::new("Bus")
                .with_doc("from definition")
                .with_attribute(Attribute::new("a", "Real").with_doc("from attribute"))
                .with_attribute(Attribute::new("b", "Real")),
        );
        let definition = PartDefinition::new("Unit")
            .with_port(Port::new("documented", Direction::In, bus).with_doc("from port"))
            .with_port(Port::new("plain", Direction::In, bus));
        let vars = enumerate_variables(&system, &definition);

        let descriptions: Vec<_> = vars
            .iter()
            .map(|v| (v.name.as_str(), v.description.as_deref()))
            .collect();
        assert_eq!(
            descriptions,
            vec![
                ("documented.a", Some("from attribute")),
                ("documented.b", Some("from port")),
                ("plain.a", Some("from attribute")),
                ("plain.b", Some("from definition")),
            ]
        );
        assert!(vars.iter().all(|v| v.causality == Causality::Input));
    }

    #[test]
    fn test_absent_value_has_no_start() {
        let system = System::new("S", "P");
        let definition = PartDefinition::new("Unit")
            .with_attribute(Attribute::new("gain", "Real").with_doc("Loop gain"));
        let vars = enumerate_variables(&system, &definition);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].name, "gain");
        assert_eq!(vars[0].start, None);
        assert_eq!(vars[0].description.as_deref(), Some("Loop gain"));
    }
}
