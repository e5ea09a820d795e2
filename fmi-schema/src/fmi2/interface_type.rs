#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "CoSimulation")]
pub struct CoSimulation {
    /// Short class name according to C-syntax
    #[xml(attr = "modelIdentifier")]
    pub model_identifier: String,
}

#[cfg(test)]
mod tests {
    use hard_xml::XmlRead;

    use super::*;

    #[test]
    fn test_co_simulation() {
        let s = r##"<CoSimulation modelIdentifier="Autopilot"/>"##;
        let x = CoSimulation::from_str(s).unwrap();
        assert_eq!(x.model_identifier, "Autopilot");
    }
}
