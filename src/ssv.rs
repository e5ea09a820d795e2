//! Build the SSP parameter set holding the default values of every part's parameters.

use std::borrow::Cow;

use ssp_schema::ssv::{
    BooleanValue, IntegerValue, Parameter, ParameterSet, ParameterValue, Parameters, RealValue,
    StringValue,
};

use crate::{
    config::GeneratorConfig,
    model::System,
    types::{format_value, PrimitiveType},
    variables::parameter_entries,
    Error,
};

fn parameter_value(kind: PrimitiveType, value: String) -> ParameterValue<'static> {
    let value: Cow<'static, str> = value.into();
    match kind {
        PrimitiveType::Real => ParameterValue::Real(RealValue { value, unit: None }),
        PrimitiveType::Integer => ParameterValue::Integer(IntegerValue { value }),
        PrimitiveType::Boolean => ParameterValue::Boolean(BooleanValue { value }),
        PrimitiveType::String => ParameterValue::String(StringValue { value }),
    }
}

pub struct ParameterSetBuilder<'a> {
    system: &'a System,
    config: &'a GeneratorConfig,
}

impl<'a> ParameterSetBuilder<'a> {
    pub fn new(system: &'a System, config: &'a GeneratorConfig) -> Self {
        Self { system, config }
    }

    /// Parameters are named `<instance>.<attribute>` (`<instance>.<attribute>[i]` for list
    /// elements). Attributes without a value are left out.
    pub fn build(&self) -> Result<ParameterSet<'static>, Error> {
        let mut parameters = Vec::new();

        for (part, definition) in self.system.parts() {
            for entry in parameter_entries(definition) {
                let name = format!("{}.{}", part.name, entry.name);
                let Some(value) = entry.value else {
                    log::trace!("Skipping {name}: no value");
                    continue;
                };
                let text = format_value(entry.kind, Some(value))?;
                parameters.push(Parameter {
                    name: name.into(),
                    description: None,
                    value: parameter_value(entry.kind, text),
                });
            }
        }

        log::debug!("Parameter set: {} parameter(s)", parameters.len());

        Ok(ParameterSet {
            xmlns_ssv: self.config.namespaces.ssv.clone().into(),
            xmlns_ssc: self.config.namespaces.ssc.clone().into(),
            version: "1.0".into(),
            name: self.config.parameter_set_name.clone().into(),
            generation_tool: Some(self.config.generation_tool.clone().into()),
            generation_date_and_time: Some(self.config.timestamp().into()),
            parameters: Parameters { parameters },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Attribute, PartDefinition};

    #[test]
    fn test_build_parameter_set() {
        let mut system = System::new("Plane", "Aircraft");
        let engine = system.add_part_definition(
            PartDefinition::new("Engine")
                .with_attribute(Attribute::new("thrust", "Real").with_value(1200.5))
                .with_attribute(Attribute::new("spare", "Real"))
                .with_attribute(Attribute::new("waypointX_km", "Real").with_list([1.0, 2.5, 4.0]))
                .with_attribute(Attribute::new("enabled", "Boolean").with_value(true))
                .with_attribute(Attribute::new("label", "String").with_value("left")),
        );
        system.add_part("left", engine).unwrap();
        system.add_part("right", engine).unwrap();

        let config = GeneratorConfig::default();
        let set = ParameterSetBuilder::new(&system, &config).build().unwrap();

        assert_eq!(set.name, "ArchitecturalDefaults");
        assert_eq!(set.version, "1.0");

        let entries: Vec<_> = set
            .parameters
            .parameters
            .iter()
            .filter(|p| p.name.starts_with("left."))
            .map(|p| (p.name.as_ref(), p.value.type_name(), p.value.value()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("left.thrust", "Real", "1200.5"),
                ("left.waypointX_km[0]", "Real", "1"),
                ("left.waypointX_km[1]", "Real", "2.5"),
                ("left.waypointX_km[2]", "Real", "4"),
                ("left.enabled", "Boolean", "true"),
                ("left.label", "String", "left"),
            ]
        );
        assert_eq!(set.parameters.parameters.len(), 12);
        assert!(set.parameter("left.spare").is_none());
        assert!(set.parameter("right.waypointX_km[3]").is_none());
        assert_eq!(
            set.parameters.parameters[6].name,
            "right.thrust",
            "instances follow insertion order"
        );
    }

    #[test]
    fn test_invalid_literal_aborts() {
        let mut system = System::new("S", "P");
        let def = system.add_part_definition(
            PartDefinition::new("Unit")
                .with_attribute(Attribute::new("flag", "Boolean").with_value("perhaps")),
        );
        system.add_part("unit", def).unwrap();
        let config = GeneratorConfig::default();
        assert!(matches!(
            ParameterSetBuilder::new(&system, &config).build(),
            Err(Error::InvalidLiteral { .. })
        ));
    }
}
