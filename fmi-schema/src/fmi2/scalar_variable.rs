use std::{fmt::Display, str::FromStr};

#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Causality {
    Parameter,
    CalculatedParameter,
    Input,
    Output,
    #[default]
    Local,
    Independent,
}

impl FromStr for Causality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parameter" => Ok(Causality::Parameter),
            "calculatedParameter" => Ok(Causality::CalculatedParameter),
            "input" => Ok(Causality::Input),
            "output" => Ok(Causality::Output),
            "local" => Ok(Causality::Local),
            "independent" => Ok(Causality::Independent),
            _ => Err(format!("Invalid Causality: {}", s)),
        }
    }
}

impl Display for Causality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Causality::Parameter => "parameter",
            Causality::CalculatedParameter => "calculatedParameter",
            Causality::Input => "input",
            Causality::Output => "output",
            Causality::Local => "local",
            Causality::Independent => "independent",
        };
        write!(f, "{}", s)
    }
}

/// Enumeration that defines the time dependency of the variable, in other words it defines the
/// time instants when a variable can change its value.
///
/// The default is [`Variability::Continuous`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Variability {
    /// The value of the variable never changes.
    Constant,
    /// The value of the variable is fixed after initialization.
    Fixed,
    /// The value of the variable is constant between external events (ModelExchange) and between
    /// Communication Points (CoSimulation) due to changing variables with causality = "parameter"
    /// or "input" and variability = "tunable".
    Tunable,
    /// The value of the variable only changes at events or communication points.
    Discrete,
    /// Only a variable of type = "Real" can be "continuous".
    #[default]
    Continuous,
}

impl FromStr for Variability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constant" => Ok(Variability::Constant),
            "fixed" => Ok(Variability::Fixed),
            "tunable" => Ok(Variability::Tunable),
            "discrete" => Ok(Variability::Discrete),
            "continuous" => Ok(Variability::Continuous),
            _ => Err(format!("Invalid Variability: {}", s)),
        }
    }
}

impl Display for Variability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Variability::Constant => "constant",
            Variability::Fixed => "fixed",
            Variability::Tunable => "tunable",
            Variability::Discrete => "discrete",
            Variability::Continuous => "continuous",
        };
        write!(f, "{}", s)
    }
}

/// Start values are carried as their canonical text so that the producer controls formatting.
#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "Real")]
pub struct Real {
    /// If present, name of type defined with TypeDefinitions / SimpleType providing defaults.
    #[xml(attr = "declaredType")]
    pub declared_type: Option<String>,

    /// Value before initialization, if initial=exact or approx.
    #[xml(attr = "start")]
    pub start: Option<String>,

    #[xml(attr = "unit")]
    pub unit: Option<String>,
}

#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "Integer")]
pub struct Integer {
    #[xml(attr = "declaredType")]
    pub declared_type: Option<String>,

    #[xml(attr = "start")]
    pub start: Option<String>,
}

#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "Boolean")]
pub struct Boolean {
    #[xml(attr = "declaredType")]
    pub declared_type: Option<String>,

    #[xml(attr = "start")]
    pub start: Option<String>,
}

#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "String")]
pub struct FmiString {
    #[xml(attr = "declaredType")]
    pub declared_type: Option<String>,

    #[xml(attr = "start")]
    pub start: Option<String>,
}

#[derive(Clone, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
pub enum ScalarVariableElement {
    #[xml(tag = "Real")]
    Real(Real),
    #[xml(tag = "Integer")]
    Integer(Integer),
    #[xml(tag = "Boolean")]
    Boolean(Boolean),
    #[xml(tag = "String")]
    String(FmiString),
}

impl Default for ScalarVariableElement {
    fn default() -> Self {
        Self::Real(Real::default())
    }
}

impl ScalarVariableElement {
    /// The element tag, which doubles as the FMI 2.0 primitive type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarVariableElement::Real(_) => "Real",
            ScalarVariableElement::Integer(_) => "Integer",
            ScalarVariableElement::Boolean(_) => "Boolean",
            ScalarVariableElement::String(_) => "String",
        }
    }

    pub fn start(&self) -> Option<&str> {
        match self {
            ScalarVariableElement::Real(v) => v.start.as_deref(),
            ScalarVariableElement::Integer(v) => v.start.as_deref(),
            ScalarVariableElement::Boolean(v) => v.start.as_deref(),
            ScalarVariableElement::String(v) => v.start.as_deref(),
        }
    }
}

#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "ScalarVariable")]
pub struct ScalarVariable {
    /// The full, unique name of the variable.
    #[xml(attr = "name")]
    pub name: String,

    /// A handle of the variable to efficiently identify the variable value in the model interface.
    #[xml(attr = "valueReference")]
    pub value_reference: u32,

    /// Enumeration that defines the causality of the variable.
    #[xml(attr = "causality")]
    pub causality: Option<Causality>,

    /// Enumeration that defines the time dependency of the variable.
    #[xml(attr = "variability")]
    pub variability: Option<Variability>,

    /// An optional description string describing the meaning of the variable.
    #[xml(attr = "description")]
    pub description: Option<String>,

    #[xml(child = "Real", child = "Integer", child = "Boolean", child = "String")]
    pub elem: ScalarVariableElement,
}

impl ScalarVariable {
    pub fn causality(&self) -> Causality {
        self.causality.unwrap_or_default()
    }

    pub fn variability(&self) -> Variability {
        self.variability.unwrap_or_default()
    }

    pub fn is_output(&self) -> bool {
        self.causality() == Causality::Output
    }
}

#[cfg(test)]
mod tests {
    use hard_xml::{XmlRead, XmlWrite};

    use super::*;

    #[test]
    fn test_scalar_variable() {
        let s = r#"
        <ScalarVariable
            name="inertia1.J"
            valueReference="1073741824"
            description="Moment of load inertia"
            causality="parameter"
            variability="fixed">
            <Real declaredType="Modelica.SIunits.Inertia" start="1"/>
        </ScalarVariable>
        "#;
        let sv = ScalarVariable::from_str(s).unwrap();
        assert_eq!(sv.name, "inertia1.J");
        assert_eq!(sv.value_reference, 1073741824);
        assert_eq!(sv.description.as_deref(), Some("Moment of load inertia"));
        assert_eq!(sv.causality(), Causality::Parameter);
        assert_eq!(sv.variability(), Variability::Fixed);
        assert_eq!(
            sv.elem,
            ScalarVariableElement::Real(Real {
                declared_type: Some("Modelica.SIunits.Inertia".to_string()),
                start: Some("1".to_string()),
                unit: None,
            })
        );
    }

    #[test]
    fn test_defaults_when_absent() {
        let s = r#"<ScalarVariable name="x" valueReference="3"><Integer/></ScalarVariable>"#;
        let sv = ScalarVariable::from_str(s).unwrap();
        assert_eq!(sv.causality(), Causality::Local);
        assert_eq!(sv.variability(), Variability::Continuous);
        assert_eq!(sv.elem.type_name(), "Integer");
        assert_eq!(sv.elem.start(), None);
    }

    #[test]
    fn test_write_omits_absent_attributes() {
        let sv = ScalarVariable {
            name: "bus.altitude".to_owned(),
            value_reference: 4,
            causality: Some(Causality::Output),
            elem: ScalarVariableElement::Real(Real::default()),
            ..Default::default()
        };
        let xml = sv.to_string().unwrap();
        assert_eq!(
            xml,
            r#"<ScalarVariable name="bus.altitude" valueReference="4" causality="output"><Real/></ScalarVariable>"#
        );
    }

    #[test]
    fn test_invalid_causality() {
        assert!("sideways".parse::<Causality>().is_err());
        assert_eq!("output".parse::<Causality>(), Ok(Causality::Output));
    }
}
