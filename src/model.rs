//! The in-memory system model.
//!
//! Definitions, parts and connections live in flat arenas owned by [`System`] and refer to each
//! other through the copyable ids [`PartDefId`], [`PortDefId`] and [`PartId`]. A part instance
//! never owns its definition; any number of instances may share one.

use std::{fmt::Display, str::FromStr};

use crate::Error;

/// Index of a [`PartDefinition`] in [`System::part_definitions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartDefId(pub(crate) usize);

/// Index of a [`PortDefinition`] in [`System::port_definitions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PortDefId(pub(crate) usize);

/// Index of a [`Part`] in [`System::parts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartId(pub(crate) usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Direction::In),
            "out" => Ok(Direction::Out),
            _ => Err(format!("Invalid Direction: {}", s)),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::In => write!(f, "in"),
            Direction::Out => write!(f, "out"),
        }
    }
}

/// A literal value as written in the architecture model.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Real(f64),
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Real(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_owned())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Scalar(Literal),
    List(Vec<Literal>),
}

/// A typed attribute, either a parameter of a part definition or a signal of a port definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attribute {
    pub name: String,
    /// The declared type name as written in the model, e.g. `Real` or `ScalarValues::Integer`.
    pub type_name: Option<String>,
    pub doc: Option<String>,
    pub value: Option<AttributeValue>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: Some(type_name.into()),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<Literal>) -> Self {
        self.value = Some(AttributeValue::Scalar(value.into()));
        self
    }

    pub fn with_list<I, L>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        self.value = Some(AttributeValue::List(
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn is_list(&self) -> bool {
        matches!(self.value, Some(AttributeValue::List(_)))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortDefinition {
    pub name: String,
    pub doc: Option<String>,
    pub attributes: Vec<Attribute>,
}

impl PortDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    pub name: String,
    pub direction: Direction,
    pub doc: Option<String>,
    pub definition: Option<PortDefId>,
}

impl Port {
    pub fn new(name: impl Into<String>, direction: Direction, definition: PortDefId) -> Self {
        Self {
            name: name.into(),
            direction,
            doc: None,
            definition: Some(definition),
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartDefinition {
    pub name: String,
    pub doc: Option<String>,
    /// Parameters, in declaration order.
    pub attributes: Vec<Attribute>,
    /// Ports, in declaration order.
    pub ports: Vec<Port>,
}

impl PartDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    pub fn port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }
}

/// A named instance of a part definition within the system.
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub name: String,
    pub definition: PartDefId,
}

/// One end of a [`Connection`]: a port on a part instance.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoint {
    pub part: PartId,
    pub port: String,
    /// Port definition of `port`, resolved when the connection was made.
    pub definition: Option<PortDefId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    pub start: Endpoint,
    pub end: Endpoint,
}

/// A flat, one-level composition of parts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct System {
    pub name: String,
    /// Name of the package the system was declared in. Model descriptions are named
    /// `<package>.<definition>`.
    pub package: String,
    pub port_definitions: Vec<PortDefinition>,
    pub part_definitions: Vec<PartDefinition>,
    pub parts: Vec<Part>,
    pub connections: Vec<Connection>,
}

impl System {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            ..Default::default()
        }
    }

    pub fn add_port_definition(&mut self, definition: PortDefinition) -> PortDefId {
        self.port_definitions.push(definition);
        PortDefId(self.port_definitions.len() - 1)
    }

    pub fn add_part_definition(&mut self, definition: PartDefinition) -> PartDefId {
        self.part_definitions.push(definition);
        PartDefId(self.part_definitions.len() - 1)
    }

    /// Add a named instance of `definition`. Instance names are unique within the system.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        definition: PartDefId,
    ) -> Result<PartId, Error> {
        let name = name.into();
        if definition.0 >= self.part_definitions.len() {
            return Err(Error::UnknownPartDefinition(format!("#{}", definition.0)));
        }
        if self.part_by_name(&name).is_some() {
            return Err(Error::DuplicatePart(name));
        }
        self.parts.push(Part { name, definition });
        Ok(PartId(self.parts.len() - 1))
    }

    /// Connect two ports given as `"<part>.<port>"`, resolving the port definitions of both ends.
    pub fn connect(&mut self, start: &str, end: &str) -> Result<(), Error> {
        let start = self.endpoint(start)?;
        let end = self.endpoint(end)?;
        log::debug!(
            "Connecting {}.{} -> {}.{}",
            self.part(start.part).name,
            start.port,
            self.part(end.part).name,
            end.port
        );
        self.connections.push(Connection { start, end });
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Endpoint, Error> {
        let (part_name, port_name) = path
            .split_once('.')
            .ok_or_else(|| Error::UnknownPort(path.to_owned()))?;
        let (part, instance) = self
            .part_by_name(part_name)
            .ok_or_else(|| Error::UnknownPart(part_name.to_owned()))?;
        let port = self
            .part_definition(instance.definition)
            .port(port_name)
            .ok_or_else(|| Error::UnknownPort(path.to_owned()))?;
        Ok(Endpoint {
            part,
            port: port.name.clone(),
            definition: port.definition,
        })
    }

    pub fn part(&self, id: PartId) -> &Part {
        &self.parts[id.0]
    }

    pub fn part_by_name(&self, name: &str) -> Option<(PartId, &Part)> {
        self.parts
            .iter()
            .enumerate()
            .find(|(_, part)| part.name == name)
            .map(|(idx, part)| (PartId(idx), part))
    }

    pub fn part_definition(&self, id: PartDefId) -> &PartDefinition {
        &self.part_definitions[id.0]
    }

    pub fn port_definition(&self, id: PortDefId) -> &PortDefinition {
        &self.port_definitions[id.0]
    }

    /// Part instances together with their definitions, in insertion order.
    pub fn parts(&self) -> impl Iterator<Item = (&Part, &PartDefinition)> {
        self.parts
            .iter()
            .map(|part| (part, self.part_definition(part.definition)))
    }

    /// Every attribute exposed through the ports of `definition`, in port declaration order and
    /// then attribute declaration order. Ports without a resolved definition expose nothing.
    pub fn port_attributes<'a>(
        &'a self,
        definition: &'a PartDefinition,
    ) -> impl Iterator<Item = (&'a Port, &'a PortDefinition, &'a Attribute)> + 'a {
        definition.ports.iter().flat_map(move |port| {
            port.definition
                .map(|id| self.port_definition(id))
                .into_iter()
                .flat_map(move |port_def| {
                    port_def
                        .attributes
                        .iter()
                        .map(move |attr| (port, port_def, attr))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus_system() -> System {
        let mut system = System::new("Plane", "Aircraft");
        let bus = system.add_port_definition(
            PortDefinition::new("StateBus")
                .with_attribute(Attribute::new("altitude", "Real"))
                .with_attribute(Attribute::new("airspeed", "Real")),
        );
        let sensor = system.add_part_definition(
            PartDefinition::new("Sensor").with_port(Port::new("state", Direction::Out, bus)),
        );
        let pilot = system.add_part_definition(
            PartDefinition::new("Pilot").with_port(Port::new("state", Direction::In, bus)),
        );
        system.add_part("sensor", sensor).unwrap();
        system.add_part("pilot", pilot).unwrap();
        system
    }

    #[test]
    fn test_connect_resolves_definitions() {
        let mut system = bus_system();
        system.connect("sensor.state", "pilot.state").unwrap();

        let connection = &system.connections[0];
        assert_eq!(system.part(connection.start.part).name, "sensor");
        assert_eq!(connection.end.port, "state");
        assert_eq!(connection.start.definition, Some(PortDefId(0)));
        assert_eq!(connection.start.definition, connection.end.definition);
    }

    #[test]
    fn test_connect_unknown_endpoints() {
        let mut system = bus_system();
        assert!(matches!(
            system.connect("nobody.state", "pilot.state"),
            Err(Error::UnknownPart(name)) if name == "nobody"
        ));
        assert!(matches!(
            system.connect("sensor.bogus", "pilot.state"),
            Err(Error::UnknownPort(path)) if path == "sensor.bogus"
        ));
        assert!(matches!(
            system.connect("sensor", "pilot.state"),
            Err(Error::UnknownPort(_))
        ));
        assert!(system.connections.is_empty());
    }

    #[test]
    fn test_duplicate_part() {
        let mut system = bus_system();
        let def = system.part_by_name("sensor").unwrap().1.definition;
        assert!(matches!(
            system.add_part("sensor", def),
            Err(Error::DuplicatePart(name)) if name == "sensor"
        ));
        assert!(matches!(
            system.add_part("ghost", PartDefId(42)),
            Err(Error::UnknownPartDefinition(_))
        ));
    }

    #[test]
    fn test_port_attributes_order() {
        let mut system = System::new("S", "P");
        let a = system.add_port_definition(
            PortDefinition::new("A")
                .with_attribute(Attribute::new("x", "Real"))
                .with_attribute(Attribute::new("y", "Real")),
        );
        let b = system.add_port_definition(
            PortDefinition::new("B").with_attribute(Attribute::new("flag", "Boolean")),
        );
        let def = PartDefinition::new("Unit")
            .with_port(Port::new("second", Direction::In, b))
            .with_port(Port {
                name: "floating".to_owned(),
                direction: Direction::Out,
                doc: None,
                definition: None,
            })
            .with_port(Port::new("first", Direction::Out, a));

        let names: Vec<_> = system
            .port_attributes(&def)
            .map(|(port, _, attr)| format!("{}.{}", port.name, attr.name))
            .collect();
        assert_eq!(names, ["second.flag", "first.x", "first.y"]);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("in".parse(), Ok(Direction::In));
        assert_eq!("out".parse(), Ok(Direction::Out));
        assert!("inout".parse::<Direction>().is_err());
    }
}
