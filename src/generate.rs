//! Writing the generated documents to disk.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use fmi_schema::fmi2::Fmi2ModelDescription;
use itertools::Itertools;
use ssp_schema::{ssd::SystemStructureDescription, ssv::ParameterSet};
use tempfile::NamedTempFile;

use crate::{
    config::GeneratorConfig,
    fmi::ModelDescriptionBuilder,
    model::System,
    paths::{model_description_path, MODEL_DESCRIPTIONS_DIR, SSD_FILENAME, SSV_FILENAME},
    ssd::SystemStructureBuilder,
    ssv::ParameterSetBuilder,
    Error,
};

/// A complete XML document that can be written as an artifact.
pub trait Document {
    /// Serialize the document, including the XML declaration.
    fn to_xml(&self) -> Result<String, Error>;
}

impl Document for Fmi2ModelDescription {
    fn to_xml(&self) -> Result<String, Error> {
        Ok(fmi_schema::serialize(self, false)?)
    }
}

impl Document for SystemStructureDescription<'_> {
    fn to_xml(&self) -> Result<String, Error> {
        Ok(ssp_schema::serialize(self, false)?)
    }
}

impl Document for ParameterSet<'_> {
    fn to_xml(&self) -> Result<String, Error> {
        Ok(ssp_schema::serialize(self, false)?)
    }
}

/// Write `document` to `path`, creating parent directories as needed.
///
/// The document is serialized completely before anything touches the file system, then written
/// to a temporary file next to `path` that is renamed over it. On failure the temporary file is
/// removed and `path` is left as it was.
pub fn write_artifact<D: Document + ?Sized>(path: &Path, document: &D) -> Result<PathBuf, Error> {
    let xml = document.to_xml()?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(xml.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(io::Error::from)?;

    log::debug!("Wrote {}", path.display());
    Ok(path.to_path_buf())
}

/// Write one `modelDescription.xml` per part definition used in `system` into
/// `<output_dir>/<definition>/`. Instances sharing a definition share its document.
pub fn generate_model_descriptions(
    system: &System,
    output_dir: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, Error> {
    log::info!("Generating model descriptions for {}", system.name);
    let builder = ModelDescriptionBuilder::new(system, config);

    let definitions: Vec<_> = system
        .parts()
        .unique_by(|(part, _)| part.definition)
        .collect();

    // Output paths are keyed by definition name.
    if let Some((_, duplicate)) = definitions
        .iter()
        .duplicates_by(|(_, definition)| definition.name.clone())
        .next()
    {
        return Err(Error::DuplicatePartDefinition(duplicate.name.clone()));
    }

    let written = definitions
        .into_iter()
        .map(|(part, definition)| {
            log::debug!("Model description for {} ({})", definition.name, part.name);
            let md = builder.build(definition)?;
            write_artifact(&model_description_path(output_dir, &definition.name), &md)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!("Wrote {} model description(s)", written.len());
    Ok(written)
}

/// Write the system structure description of `system` to `output_path`.
pub fn generate_ssd(
    system: &System,
    output_path: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf, Error> {
    log::info!("Generating system structure for {}", system.name);
    let ssd = SystemStructureBuilder::new(system, config).build()?;
    let path = write_artifact(output_path, &ssd)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Write the default parameter values of `system` to `output_path`.
pub fn generate_parameter_set(
    system: &System,
    output_path: &Path,
    config: &GeneratorConfig,
) -> Result<PathBuf, Error> {
    log::info!("Generating parameter set for {}", system.name);
    let ssv = ParameterSetBuilder::new(system, config).build()?;
    let path = write_artifact(output_path, &ssv)?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Generate every artifact under `root`:
///
/// ```text
/// <root>/model_descriptions/<Definition>/modelDescription.xml
/// <root>/SystemStructure.ssd
/// <root>/parameters.ssv
/// ```
pub fn generate_all(
    system: &System,
    root: &Path,
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>, Error> {
    let mut written =
        generate_model_descriptions(system, &root.join(MODEL_DESCRIPTIONS_DIR), config)?;
    written.push(generate_ssd(system, &root.join(SSD_FILENAME), config)?);
    written.push(generate_parameter_set(
        system,
        &root.join(SSV_FILENAME),
        config,
    )?);
    Ok(written)
}
