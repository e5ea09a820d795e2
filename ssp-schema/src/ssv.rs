//! SSV: System Structure Parameter Values.

use std::borrow::Cow;

/// Root element of an SSV file (ssv:ParameterSet).
#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:ParameterSet")]
pub struct ParameterSet<'a> {
    #[xml(attr = "xmlns:ssv")]
    pub xmlns_ssv: Cow<'a, str>,

    #[xml(attr = "xmlns:ssc")]
    pub xmlns_ssc: Cow<'a, str>,

    #[xml(attr = "version")]
    pub version: Cow<'a, str>,

    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    #[xml(attr = "generationTool")]
    pub generation_tool: Option<Cow<'a, str>>,

    #[xml(attr = "generationDateAndTime")]
    pub generation_date_and_time: Option<Cow<'a, str>>,

    #[xml(child = "ssv:Parameters")]
    pub parameters: Parameters<'a>,
}

impl<'a> ParameterSet<'a> {
    pub fn parameter(&self, name: &str) -> Option<&Parameter<'a>> {
        self.parameters.parameters.iter().find(|p| p.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:Parameters")]
pub struct Parameters<'a> {
    #[xml(child = "ssv:Parameter")]
    pub parameters: Vec<Parameter<'a>>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:Parameter")]
pub struct Parameter<'a> {
    #[xml(attr = "name")]
    pub name: Cow<'a, str>,

    #[xml(attr = "description")]
    pub description: Option<Cow<'a, str>>,

    #[xml(child = "ssv:Real", child = "ssv:Integer", child = "ssv:Boolean", child = "ssv:String")]
    pub value: ParameterValue<'a>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:Real")]
pub struct RealValue<'a> {
    #[xml(attr = "value")]
    pub value: Cow<'a, str>,

    #[xml(attr = "unit")]
    pub unit: Option<Cow<'a, str>>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:Integer")]
pub struct IntegerValue<'a> {
    #[xml(attr = "value")]
    pub value: Cow<'a, str>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:Boolean")]
pub struct BooleanValue<'a> {
    #[xml(attr = "value")]
    pub value: Cow<'a, str>,
}

#[derive(Clone, Debug, Default, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ssv:String")]
pub struct StringValue<'a> {
    #[xml(attr = "value")]
    pub value: Cow<'a, str>,
}

/// Typed value of a parameter. Values are kept in their canonical lexical form.
#[derive(Clone, Debug, PartialEq, hard_xml::XmlRead, hard_xml::XmlWrite)]
pub enum ParameterValue<'a> {
    #[xml(tag = "ssv:Real")]
    Real(RealValue<'a>),
    #[xml(tag = "ssv:Integer")]
    Integer(IntegerValue<'a>),
    #[xml(tag = "ssv:Boolean")]
    Boolean(BooleanValue<'a>),
    #[xml(tag = "ssv:String")]
    String(StringValue<'a>),
}

impl Default for ParameterValue<'_> {
    fn default() -> Self {
        Self::Real(RealValue::default())
    }
}

impl ParameterValue<'_> {
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Real(_) => "Real",
            ParameterValue::Integer(_) => "Integer",
            ParameterValue::Boolean(_) => "Boolean",
            ParameterValue::String(_) => "String",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ParameterValue::Real(v) => &v.value,
            ParameterValue::Integer(v) => &v.value,
            ParameterValue::Boolean(v) => &v.value,
            ParameterValue::String(v) => &v.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use hard_xml::XmlRead;

    use super::*;

    #[test]
    fn test_read_parameter_set() {
        let xml = r#"<ssv:ParameterSet xmlns:ssv="http://ssp-standard.org/SSP1/SystemStructureParameterValues" xmlns:ssc="http://ssp-standard.org/SSP1/SystemStructureCommon" version="1.0" name="ArchitecturalDefaults">
  <ssv:Parameters>
    <ssv:Parameter name="autopilot.mass"><ssv:Real value="1200.5"/></ssv:Parameter>
    <ssv:Parameter name="autopilot.enabled"><ssv:Boolean value="true"/></ssv:Parameter>
    <ssv:Parameter name="autopilot.label"><ssv:String value="AP &amp; co"/></ssv:Parameter>
  </ssv:Parameters>
</ssv:ParameterSet>"#;
        let set = ParameterSet::from_str(xml).unwrap();
        assert_eq!(set.name, "ArchitecturalDefaults");
        assert_eq!(set.parameters.parameters.len(), 3);

        let mass = set.parameter("autopilot.mass").unwrap();
        assert_eq!(mass.value.type_name(), "Real");
        assert_eq!(mass.value.value(), "1200.5");

        let label = set.parameter("autopilot.label").unwrap();
        assert_eq!(label.value.value(), "AP & co");
        assert!(set.parameter("autopilot.missing").is_none());
    }
}
