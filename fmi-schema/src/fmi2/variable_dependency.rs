/// Dependency of scalar Unknown from Knowns at Communication Points (CoSimulation):
/// Unknown=f(Known_1, Known_2, ...).
#[derive(Clone, Default, PartialEq, Debug, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[xml(tag = "Unknown")]
pub struct Fmi2Unknown {
    /// ScalarVariable index of Unknown (1-based position in `ModelVariables`)
    #[xml(attr = "index")]
    pub index: u32,
}
