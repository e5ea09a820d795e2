//! SSD: the System Structure Description of a composed system.

use std::{borrow::Cow, fmt::Display, str::FromStr};

use crate::ssc::ConnectorType;

/// Root element of an SSD file (ssd:SystemStructureDescription).
///
/// Sequence: System, DefaultExperiment?. Attributes: version (required), name (required), plus
/// the common top-level metadata attributes.
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:SystemStructureDescription")]
pub struct SystemStructureDescription<'a> {
    #[xml(attr = "xmlns:ssd")]
    pub xmlns_ssd: Cow<'a, str>,

    #[xml(attr = "xmlns:ssc")]
    pub xmlns_ssc: Cow<'a, str>,

    /// "1.0" for SSP 1.0 (major.minor only)
    #[xml(attr = "version")]
    pub version: Cow<'a, str>,

    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    #[xml(attr = "description")]
    pub description: Option<Cow<'a, str>>,

    #[xml(attr = "generationTool")]
    pub generation_tool: Option<Cow<'a, str>>,

    #[xml(attr = "generationDateAndTime")]
    pub generation_date_and_time: Option<Cow<'a, str>>,

    #[xml(child = "ssd:System")]
    pub system: System<'a>,

    #[xml(child = "ssd:DefaultExperiment")]
    pub default_experiment: Option<DefaultExperiment>,
}

/// The single, flat system of an SSD (SSD 5.3).
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:System")]
pub struct System<'a> {
    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    #[xml(attr = "description")]
    pub description: Option<Cow<'a, str>>,

    #[xml(child = "ssd:Elements")]
    pub elements: Option<Elements<'a>>,

    #[xml(child = "ssd:Connections")]
    pub connections: Option<Connections<'a>>,
}

impl<'a> System<'a> {
    /// Components of the system, in document order.
    pub fn components(&self) -> impl Iterator<Item = &Component<'a>> {
        self.elements.iter().flat_map(|e| e.components.iter())
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection<'a>> {
        self.connections.iter().flat_map(|c| c.connections.iter())
    }

    pub fn component(&self, name: &str) -> Option<&Component<'a>> {
        self.components().find(|c| c.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Elements")]
pub struct Elements<'a> {
    #[xml(child = "ssd:Component")]
    pub components: Vec<Component<'a>>,
}

/// A component instance referencing an external simulation unit (SSD 5.3.2).
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Component")]
pub struct Component<'a> {
    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    /// MIME type of the component, e.g. `application/x-fmu-sharedlibrary`.
    #[xml(attr = "type")]
    pub component_type: Option<Cow<'a, str>>,

    /// URI of the component implementation, relative to the SSP root.
    #[xml(attr = "source")]
    pub source: Cow<'a, str>,

    #[xml(child = "ssd:Connectors")]
    pub connectors: Option<Connectors<'a>>,
}

impl<'a> Component<'a> {
    pub fn connectors(&self) -> impl Iterator<Item = &Connector<'a>> {
        self.connectors.iter().flat_map(|c| c.connectors.iter())
    }
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Connectors")]
pub struct Connectors<'a> {
    #[xml(child = "ssd:Connector")]
    pub connectors: Vec<Connector<'a>>,
}

/// Kind of a connector (SSD 5.3.4).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectorKind {
    #[default]
    Input,
    Output,
    Parameter,
    CalculatedParameter,
    Inout,
}

impl FromStr for ConnectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(ConnectorKind::Input),
            "output" => Ok(ConnectorKind::Output),
            "parameter" => Ok(ConnectorKind::Parameter),
            "calculatedParameter" => Ok(ConnectorKind::CalculatedParameter),
            "inout" => Ok(ConnectorKind::Inout),
            _ => Err(format!("Invalid ConnectorKind: {}", s)),
        }
    }
}

impl Display for ConnectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ConnectorKind::Input => "input",
            ConnectorKind::Output => "output",
            ConnectorKind::Parameter => "parameter",
            ConnectorKind::CalculatedParameter => "calculatedParameter",
            ConnectorKind::Inout => "inout",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Connector")]
pub struct Connector<'a> {
    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    #[xml(attr = "kind")]
    pub kind: ConnectorKind,

    #[xml(attr = "description")]
    pub description: Option<Cow<'a, str>>,

    #[xml(child = "ssc:Real", child = "ssc:Integer", child = "ssc:Boolean", child = "ssc:String")]
    pub connector_type: ConnectorType<'a>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Connections")]
pub struct Connections<'a> {
    #[xml(child = "ssd:Connection")]
    pub connections: Vec<Connection<'a>>,
}

/// A point-to-point connection between two connectors (SSD 5.3.6).
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:Connection")]
pub struct Connection<'a> {
    #[xml(attr = "startElement")]
    pub start_element: Option<Cow<'a, str>>,

    #[xml(attr = "startConnector")]
    pub start_connector: Cow<'a, str>,

    #[xml(attr = "endElement")]
    pub end_element: Option<Cow<'a, str>>,

    #[xml(attr = "endConnector")]
    pub end_connector: Cow<'a, str>,
}

/// SSD 5.1.1: DefaultExperiment has optional startTime / stopTime.
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssd:DefaultExperiment")]
pub struct DefaultExperiment {
    #[xml(attr = "startTime")]
    pub start_time: Option<f64>,

    #[xml(attr = "stopTime")]
    pub stop_time: Option<f64>,
}
