//! Build the SSP System Structure Description of a [`System`].

use fmi_schema::fmi2::Causality;
use ssp_schema::{
    ssc::{ConnectorType, TypeBoolean, TypeInteger, TypeReal, TypeString},
    ssd::{
        Component, Connection, Connections, Connector, ConnectorKind, Connectors,
        DefaultExperiment, Elements, System as SsdSystem, SystemStructureDescription,
    },
};

use crate::{
    config::GeneratorConfig,
    connections::resolve_connection,
    model::{PartDefinition, System},
    paths::fmu_resource_path,
    types::PrimitiveType,
    variables::{enumerate_variables, VariableDescriptor},
    Error,
};

/// MIME type of a component implemented by an FMU.
pub const FMU_COMPONENT_TYPE: &str = "application/x-fmu-sharedlibrary";

fn connector_type(kind: PrimitiveType) -> ConnectorType<'static> {
    match kind {
        PrimitiveType::Real => ConnectorType::Real(TypeReal::default()),
        PrimitiveType::Integer => ConnectorType::Integer(TypeInteger {}),
        PrimitiveType::Boolean => ConnectorType::Boolean(TypeBoolean {}),
        PrimitiveType::String => ConnectorType::String(TypeString {}),
    }
}

fn connector_kind(causality: Causality) -> ConnectorKind {
    match causality {
        Causality::Parameter => ConnectorKind::Parameter,
        Causality::CalculatedParameter => ConnectorKind::CalculatedParameter,
        Causality::Input => ConnectorKind::Input,
        Causality::Output => ConnectorKind::Output,
        Causality::Local | Causality::Independent => ConnectorKind::Inout,
    }
}

fn build_connector(var: VariableDescriptor) -> Connector<'static> {
    Connector {
        name: var.name.into(),
        kind: connector_kind(var.causality),
        description: None,
        connector_type: connector_type(var.kind),
    }
}

pub struct SystemStructureBuilder<'a> {
    system: &'a System,
    config: &'a GeneratorConfig,
}

impl<'a> SystemStructureBuilder<'a> {
    pub fn new(system: &'a System, config: &'a GeneratorConfig) -> Self {
        Self { system, config }
    }

    fn build_component(&self, name: &str, definition: &PartDefinition) -> Component<'static> {
        let connectors: Vec<_> = enumerate_variables(self.system, definition)
            .into_iter()
            .map(build_connector)
            .collect();
        log::debug!(
            "Component {name} ({}): {} connector(s)",
            definition.name,
            connectors.len()
        );
        Component {
            name: name.to_owned().into(),
            component_type: Some(FMU_COMPONENT_TYPE.into()),
            source: fmu_resource_path(&definition.name).into(),
            connectors: Some(Connectors { connectors }),
        }
    }

    /// Build the whole document. The first connection that fails to resolve aborts the build.
    pub fn build(&self) -> Result<SystemStructureDescription<'static>, Error> {
        let components = self
            .system
            .parts()
            .map(|(part, definition)| self.build_component(&part.name, definition))
            .collect();

        let mut connections = Vec::new();
        for connection in &self.system.connections {
            for resolved in resolve_connection(self.system, connection)? {
                connections.push(Connection {
                    start_element: Some(resolved.start_element.into()),
                    start_connector: resolved.start_connector.into(),
                    end_element: Some(resolved.end_element.into()),
                    end_connector: resolved.end_connector.into(),
                });
            }
        }

        let experiment = self.config.default_experiment;
        let namespaces = &self.config.namespaces;

        Ok(SystemStructureDescription {
            xmlns_ssd: namespaces.ssd.clone().into(),
            xmlns_ssc: namespaces.ssc.clone().into(),
            version: "1.0".into(),
            name: self.system.name.clone().into(),
            description: None,
            generation_tool: Some(self.config.generation_tool.clone().into()),
            generation_date_and_time: Some(self.config.timestamp().into()),
            system: SsdSystem {
                name: self.system.name.clone().into(),
                description: None,
                elements: Some(Elements { components }),
                connections: Some(Connections { connections }),
            },
            default_experiment: Some(DefaultExperiment {
                start_time: Some(experiment.start_time),
                stop_time: Some(experiment.stop_time),
            }),
        })
    }
}
