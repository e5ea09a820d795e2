//! Expansion of port-level connections into signal-level connections.

use crate::{
    model::{Connection, Endpoint, System},
    Error,
};

/// A point-to-point connection between two named connectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConnection {
    pub start_element: String,
    pub start_connector: String,
    pub end_element: String,
    pub end_connector: String,
}

fn describe(system: &System, endpoint: &Endpoint) -> String {
    let part = &system.part(endpoint.part).name;
    match endpoint.definition {
        Some(id) => format!(
            "{part}.{} ({})",
            endpoint.port,
            system.port_definition(id).name
        ),
        None => format!("{part}.{} (unresolved)", endpoint.port),
    }
}

/// Expand `connection` into one connection per attribute of the port definition shared by both
/// ends.
///
/// Both ends must refer to the same port definition id; structurally equal but distinct
/// definitions are a mismatch.
pub fn resolve_connection(
    system: &System,
    connection: &Connection,
) -> Result<Vec<ResolvedConnection>, Error> {
    let Connection { start, end } = connection;

    if start.definition != end.definition {
        return Err(Error::PortTypeMismatch {
            start: describe(system, start),
            end: describe(system, end),
        });
    }

    let Some(definition) = start.definition else {
        return Err(Error::UnresolvedPortDefinition {
            element: system.part(start.part).name.clone(),
            port: start.port.clone(),
        });
    };

    let start_element = &system.part(start.part).name;
    let end_element = &system.part(end.part).name;

    let resolved: Vec<_> = system
        .port_definition(definition)
        .attributes
        .iter()
        .map(|attr| ResolvedConnection {
            start_element: start_element.clone(),
            start_connector: format!("{}.{}", start.port, attr.name),
            end_element: end_element.clone(),
            end_connector: format!("{}.{}", end.port, attr.name),
        })
        .collect();

    log::debug!(
        "{start_element}.{} -> {end_element}.{}: {} signal(s)",
        start.port,
        end.port,
        resolved.len()
    );

    Ok(resolved)
}
