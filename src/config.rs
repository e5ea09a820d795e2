//! Settings shared by all generated documents.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Namespace URIs bound to the `ssd`, `ssc` and `ssv` prefixes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespaces {
    pub ssd: String,
    pub ssc: String,
    pub ssv: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            ssd: ssp_schema::SSD_NAMESPACE.to_owned(),
            ssc: ssp_schema::SSC_NAMESPACE.to_owned(),
            ssv: ssp_schema::SSV_NAMESPACE.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExperimentDefaults {
    pub start_time: f64,
    pub stop_time: f64,
}

impl Default for ExperimentDefaults {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            stop_time: 3600.0,
        }
    }
}

/// Configuration passed explicitly to every builder, so that all artifacts of one run agree on
/// tool name, timestamp and namespaces.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub generation_tool: String,
    /// Scope mixed into every model description GUID.
    pub guid_scope: String,
    /// Captured once per run.
    pub generation_time: DateTime<Utc>,
    pub namespaces: Namespaces,
    pub default_experiment: ExperimentDefaults,
    pub parameter_set_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generation_tool: "sysml-ssp tooling".to_owned(),
            guid_scope: "sysml-ssp".to_owned(),
            generation_time: Utc::now(),
            namespaces: Namespaces::default(),
            default_experiment: ExperimentDefaults::default(),
            parameter_set_name: "ArchitecturalDefaults".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Use a fixed generation time, e.g. for reproducible output.
    pub fn with_generation_time(mut self, generation_time: DateTime<Utc>) -> Self {
        self.generation_time = generation_time;
        self
    }

    /// The generation time as `YYYY-MM-DDThh:mm:ssZ`.
    pub fn timestamp(&self) -> String {
        self.generation_time
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string()
    }

    /// Deterministic GUID of the model description for `component` in `package`, in braces.
    pub fn guid(&self, package: &str, component: &str) -> String {
        let name = format!("{}/{package}/{component}", self.guid_scope);
        let uuid = Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes());
        format!("{{{uuid}}}")
    }
}
