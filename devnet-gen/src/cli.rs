//! Command line surface of the network generator.
//!
//! Parses the device count and average degree, generates one network and
//! writes it to a file.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use devnet::render::dot_string;
use devnet::{ConfigError, GeneratorConfig, NetworkGenerator};
use thiserror::Error;
use tracing::info;

/// Command line options, parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "devnet-gen",
    version,
    about = "Generate a random connected network of devices with link speeds."
)]
pub struct Cli {
    /// Number of devices in the network.
    pub num_devices: usize,

    /// Average number of links per device.
    #[arg(allow_negative_numbers = true)]
    pub avg_degree: f64,

    /// Output file. Defaults to a name derived from the arguments.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible networks. Defaults to OS entropy.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Format of the output file.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Device count followed by one `u,v,speed` line per link.
    Text,
    /// Graphviz dot.
    Dot,
}

/// Errors surfaced while executing the command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments do not describe a valid network.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing the output file failed.
    #[error("failed to write `{}`: {source}", .path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    /// File the network was written to.
    pub path: PathBuf,
    /// Number of devices.
    pub num_devices: usize,
    /// Average degree requested on the command line.
    pub avg_degree: f64,
    /// Number of links written.
    pub links: usize,
    /// Whether the requested density exceeded the complete graph.
    pub saturated: bool,
}

/// File name used when no `--output` is given.
///
/// The degree prints with at least one decimal, so `2` becomes `2.0`.
/// Degrees below `1e-4` or from `1e16` up use an exponent with an explicit
/// sign and at least two digits, as in `1e-05` and `1.5e+16`.
pub fn default_output_name(num_devices: usize, avg_degree: f64) -> String {
    format!(
        "devices_{num_devices}_avgdegree_{}_large_network.txt",
        degree_repr(avg_degree)
    )
}

fn degree_repr(degree: f64) -> String {
    let repr = format!("{degree:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Generates the network described by `cli` and writes it out.
///
/// # Errors
/// Returns [`CliError`] when the arguments are invalid or the file cannot be
/// written. Nothing is written for invalid arguments.
pub fn run_cli(cli: Cli) -> Result<GenerationSummary, CliError> {
    let config = GeneratorConfig::new(cli.num_devices, cli.avg_degree)?;
    let mut generator = match cli.seed {
        Some(seed) => NetworkGenerator::seeded(seed),
        None => NetworkGenerator::from_entropy(),
    };
    let generation = generator.generate(&config);

    let contents = match cli.format {
        OutputFormat::Text => generation.to_text(),
        OutputFormat::Dot => dot_string(generation.graph()),
    };
    let path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(cli.num_devices, cli.avg_degree)));
    fs::write(&path, contents).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        links = generation.link_count(),
        "network written"
    );

    Ok(GenerationSummary {
        path,
        num_devices: cli.num_devices,
        avg_degree: cli.avg_degree,
        links: generation.link_count(),
        saturated: generation.is_saturated(),
    })
}

/// Writes the one line success message for `summary`.
///
/// # Errors
/// Returns any error raised by `writer`.
pub fn render_summary(summary: &GenerationSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Generated {} with {} devices and avg degree {:.2}.",
        summary.path.display(),
        summary.num_devices,
        summary.avg_degree
    )
}
