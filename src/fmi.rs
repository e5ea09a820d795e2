//! Build an FMI 2.0 [`Fmi2ModelDescription`] for a part definition.

use fmi_schema::{
    fmi2::{
        Boolean, Causality, CoSimulation, Fmi2ModelDescription, Fmi2Unknown, FmiString,
        InitialUnknowns, Integer, ModelStructure, ModelVariables, Outputs, Real, ScalarVariable,
        ScalarVariableElement,
    },
    variable_counts::VariableCounts,
};

use crate::{
    config::GeneratorConfig,
    model::{PartDefinition, System},
    types::{format_value, PrimitiveType},
    variables::{enumerate_variables, VariableDescriptor},
    Error,
};

pub struct ModelDescriptionBuilder<'a> {
    system: &'a System,
    config: &'a GeneratorConfig,
}

impl<'a> ModelDescriptionBuilder<'a> {
    pub fn new(system: &'a System, config: &'a GeneratorConfig) -> Self {
        Self { system, config }
    }

    pub fn build(&self, definition: &PartDefinition) -> Result<Fmi2ModelDescription, Error> {
        let package = &self.system.package;
        let variables = enumerate_variables(self.system, definition);

        let model_variables = build_model_variables(&variables)?;
        let model_structure = build_model_structure(&variables);

        let md = Fmi2ModelDescription {
            fmi_version: "2.0".to_owned(),
            model_name: format!("{package}.{}", definition.name),
            guid: self.config.guid(package, &definition.name),
            description: Some(definition.doc.clone().unwrap_or_default()),
            version: Some("1.0".to_owned()),
            generation_tool: Some(self.config.generation_tool.clone()),
            generation_date_and_time: Some(self.config.timestamp()),
            variable_naming_convention: Some("structured".to_owned()),
            number_of_event_indicators: Some(0),
            co_simulation: Some(CoSimulation {
                model_identifier: definition.name.clone(),
            }),
            model_variables,
            model_structure,
            ..Default::default()
        };
        log::trace!("{}: {}", md.model_name, md.model_counts());
        Ok(md)
    }
}

fn build_scalar_variable(var: &VariableDescriptor) -> Result<ScalarVariable, Error> {
    let start = var
        .start
        .as_ref()
        .map(|literal| format_value(var.kind, Some(literal)))
        .transpose()?;

    let elem = match var.kind {
        PrimitiveType::Real => ScalarVariableElement::Real(Real {
            start,
            ..Default::default()
        }),
        PrimitiveType::Integer => ScalarVariableElement::Integer(Integer {
            start,
            ..Default::default()
        }),
        PrimitiveType::Boolean => ScalarVariableElement::Boolean(Boolean {
            start,
            ..Default::default()
        }),
        PrimitiveType::String => ScalarVariableElement::String(FmiString {
            start,
            ..Default::default()
        }),
    };

    Ok(ScalarVariable {
        name: var.name.clone(),
        value_reference: var.value_reference,
        causality: Some(var.causality),
        variability: var.variability,
        description: var.description.clone().filter(|d| !d.is_empty()),
        elem,
    })
}

fn build_model_variables(variables: &[VariableDescriptor]) -> Result<ModelVariables, Error> {
    let variables = variables
        .iter()
        .map(build_scalar_variable)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ModelVariables { variables })
}

/// Every output is listed by structural index, both as an output and as an initial unknown.
fn build_model_structure(variables: &[VariableDescriptor]) -> ModelStructure {
    let unknowns: Vec<_> = variables
        .iter()
        .filter(|var| var.causality == Causality::Output)
        .map(|var| Fmi2Unknown { index: var.index })
        .collect();

    ModelStructure {
        outputs: Outputs {
            unknowns: unknowns.clone(),
        },
        initial_unknowns: InitialUnknowns { unknowns },
    }
}
