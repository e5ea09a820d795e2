//! File names and the layout of generated artifacts.

use std::path::{Path, PathBuf};

/// Directory, relative to the output root, holding one sub-directory per part definition.
pub const MODEL_DESCRIPTIONS_DIR: &str = "model_descriptions";
pub const MODEL_DESCRIPTION_FILENAME: &str = "modelDescription.xml";
pub const SSD_FILENAME: &str = "SystemStructure.ssd";
pub const SSV_FILENAME: &str = "parameters.ssv";

/// File name of the FMU built for `class`, e.g. `Aircraft_Autopilot.fmu` for `Aircraft.Autopilot`.
pub fn fmu_filename(class: &str) -> String {
    format!("{}.fmu", class.replace('.', "_"))
}

/// Location of the FMU for `class` inside an SSP archive.
pub fn fmu_resource_path(class: &str) -> String {
    format!("resources/{}", fmu_filename(class))
}

/// `<dir>/<definition>/modelDescription.xml`
pub fn model_description_path(dir: &Path, definition: &str) -> PathBuf {
    dir.join(definition).join(MODEL_DESCRIPTION_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmu_names() {
        assert_eq!(fmu_filename("Autopilot"), "Autopilot.fmu");
        assert_eq!(fmu_filename("Aircraft.Control.Autopilot"), "Aircraft_Control_Autopilot.fmu");
        assert_eq!(fmu_resource_path("Aircraft.Engine"), "resources/Aircraft_Engine.fmu");
    }

    #[test]
    fn test_model_description_path() {
        assert_eq!(
            model_description_path(Path::new("out"), "Engine"),
            Path::new("out/Engine/modelDescription.xml")
        );
    }
}
