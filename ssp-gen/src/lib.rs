#![doc = include_str!("../README.md")]
#![deny(clippy::all)]

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use sysml_ssp::{
    paths::{MODEL_DESCRIPTIONS_DIR, SSD_FILENAME, SSV_FILENAME},
    GeneratorConfig, System,
};

pub mod architecture;

const DEFAULT_OUTPUT_ROOT: &str = "generated";

#[derive(Parser, Debug)]
#[command(name = "ssp-gen", bin_name = "ssp-gen", version)]
#[command(about = "Generate FMI model descriptions and SSP documents from a system architecture")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate co-simulation artifacts
    Generate {
        #[command(subcommand)]
        artifact: Artifact,
    },
}

#[derive(Subcommand, Debug)]
enum Artifact {
    /// Write the SSP system structure description
    Ssd {
        #[command(flatten)]
        source: SourceArgs,
        /// Path of the generated `.ssd` file
        #[arg(long, value_name = "PATH", default_value_os_t = default_path(SSD_FILENAME))]
        output: PathBuf,
    },
    /// Write the SSP parameter set with default parameter values
    Ssv {
        #[command(flatten)]
        source: SourceArgs,
        /// Path of the generated `.ssv` file
        #[arg(long, value_name = "PATH", default_value_os_t = default_path(SSV_FILENAME))]
        output: PathBuf,
    },
    /// Write one FMI 2.0 modelDescription.xml per part definition
    Fmi {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory receiving `<Definition>/modelDescription.xml`
        #[arg(long, value_name = "DIR", default_value_os_t = default_path(MODEL_DESCRIPTIONS_DIR))]
        output_dir: PathBuf,
    },
    /// Write model descriptions, system structure and parameter set
    All {
        #[command(flatten)]
        source: SourceArgs,
        /// Root directory of the generated artifacts
        #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_ROOT)]
        output_dir: PathBuf,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// JSON architecture document
    #[arg(long, value_name = "PATH")]
    architecture: PathBuf,
    /// Composition to export; may be omitted if the document declares only one
    #[arg(long)]
    composition: Option<String>,
    /// Package name used in model names, overriding the document
    #[arg(long)]
    package: Option<String>,
    /// Fixed generation time (RFC 3339) for reproducible output
    #[arg(long, value_parser = parse_generation_time)]
    generation_time: Option<DateTime<Utc>>,
}

fn default_path(name: &str) -> PathBuf {
    Path::new(DEFAULT_OUTPUT_ROOT).join(name)
}

fn parse_generation_time(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|time| time.with_timezone(&Utc))
        .map_err(|err| format!("expected an RFC 3339 timestamp: {err}"))
}

impl SourceArgs {
    fn load(&self) -> anyhow::Result<(System, GeneratorConfig)> {
        let mut system =
            architecture::load_system(&self.architecture, self.composition.as_deref())?;
        if let Some(package) = &self.package {
            system.package = package.clone();
        }

        let mut config = GeneratorConfig::default();
        if let Some(time) = self.generation_time {
            config = config.with_generation_time(time);
        }
        Ok((system, config))
    }
}

pub fn entrypoint() -> anyhow::Result<()> {
    entrypoint_from(std::env::args_os())
}

pub fn entrypoint_from<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Cli { verbose, command } = Cli::parse_from(args);

    let _logger = flexi_logger::Logger::try_with_env_or_str(if verbose { "debug" } else { "info" })?
        .set_palette("b1;3;2;4;6".to_string())
        .start()?;

    let Commands::Generate { artifact } = command;
    run(artifact)
}

fn run(artifact: Artifact) -> anyhow::Result<()> {
    match artifact {
        Artifact::Ssd { source, output } => {
            let (system, config) = source.load()?;
            let path = sysml_ssp::generate_ssd(&system, &output, &config)
                .with_context(|| format!("Failed to generate {}", output.display()))?;
            println!("SSD written to {}", path.display());
        }
        Artifact::Ssv { source, output } => {
            let (system, config) = source.load()?;
            let path = sysml_ssp::generate_parameter_set(&system, &output, &config)
                .with_context(|| format!("Failed to generate {}", output.display()))?;
            println!("Wrote {}", path.display());
        }
        Artifact::Fmi { source, output_dir } => {
            let (system, config) = source.load()?;
            let written = sysml_ssp::generate_model_descriptions(&system, &output_dir, &config)
                .with_context(|| {
                    format!("Failed to generate model descriptions in {}", output_dir.display())
                })?;
            if written.is_empty() {
                anyhow::bail!("No components matched the provided criteria.");
            }
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
        Artifact::All { source, output_dir } => {
            let (system, config) = source.load()?;
            let written = sysml_ssp::generate_all(&system, &output_dir, &config)
                .with_context(|| format!("Failed to generate artifacts in {}", output_dir.display()))?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}
