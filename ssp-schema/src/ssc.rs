//! SSC: content shared between SSP document kinds.

use std::borrow::Cow;

/// `ssc:Real` connector type. The optional unit refers to a unit definition of the document.
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssc:Real")]
pub struct TypeReal<'a> {
    #[xml(attr = "unit")]
    pub unit: Option<Cow<'a, str>>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssc:Integer")]
pub struct TypeInteger {}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssc:Boolean")]
pub struct TypeBoolean {}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssc:String")]
pub struct TypeString {}

/// The primitive type of a connector (SSC 4.4, `ssc:GTypeChoice` restricted to the four
/// primitive kinds).
#[derive(Clone, Debug, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
pub enum ConnectorType<'a> {
    #[xml(tag = "ssc:Real")]
    Real(TypeReal<'a>),
    #[xml(tag = "ssc:Integer")]
    Integer(TypeInteger),
    #[xml(tag = "ssc:Boolean")]
    Boolean(TypeBoolean),
    #[xml(tag = "ssc:String")]
    String(TypeString),
}

impl Default for ConnectorType<'_> {
    fn default() -> Self {
        Self::Real(TypeReal::default())
    }
}

impl ConnectorType<'_> {
    /// The primitive type name, without namespace prefix.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConnectorType::Real(_) => "Real",
            ConnectorType::Integer(_) => "Integer",
            ConnectorType::Boolean(_) => "Boolean",
            ConnectorType::String(_) => "String",
        }
    }
}
