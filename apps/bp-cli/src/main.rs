use bp_blend::{PropertyKind, blend};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod display;
mod error;
mod input;

use display::{
    BlendReport, DEFAULT_ANILINE_POINT, DEFAULT_FLOW_RATES, default_values, format_result,
    truncate_flows,
};
use error::{CliError, CliResult};
use input::parse_list;

#[derive(Parser)]
#[command(name = "bp-cli")]
#[command(about = "BlendProp CLI - blended properties of liquid stream mixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported properties with their units and example inputs
    List,
    /// Blend one property over a set of components
    Blend {
        /// Property to blend (rvp, flash-point, pour-point, cloud-point,
        /// aniline-point, smoke-point, viscosity)
        kind: PropertyKind,
        /// Component values, comma separated (specific gravities for smoke-point)
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,
        /// Component flow rates, comma separated
        #[arg(long, allow_hyphen_values = true)]
        flows: Option<String>,
        /// Blended aniline point in °C (smoke-point only)
        #[arg(long, allow_negative_numbers = true)]
        aniline_point: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the blending index of a single component value
    Index {
        /// Property whose index to evaluate
        kind: PropertyKind,
        /// Component value in the property's units
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn main() -> CliResult<()> {
    // Logs go to stderr so JSON/YAML on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => cmd_list(),
        Commands::Blend {
            kind,
            values,
            flows,
            aniline_point,
            format,
        } => cmd_blend(
            kind,
            values.as_deref(),
            flows.as_deref(),
            aniline_point,
            format,
        ),
        Commands::Index { kind, value } => cmd_index(kind, value),
    }
}

fn cmd_list() -> CliResult<()> {
    println!("Supported properties:");
    for kind in PropertyKind::ALL {
        println!(
            "  {:<14} {:<14} [{}]  e.g. {}",
            kind.slug(),
            kind.label(),
            kind.unit(),
            default_values(kind)
        );
    }
    println!("Default flow rates: {}", DEFAULT_FLOW_RATES);
    Ok(())
}

fn cmd_blend(
    kind: PropertyKind,
    values: Option<&str>,
    flows: Option<&str>,
    aniline_point: Option<f64>,
    format: OutputFormat,
) -> CliResult<()> {
    let values = parse_list(values.unwrap_or(default_values(kind)), kind.component_label())?;
    let flow_rates = match flows {
        Some(text) => parse_list(text, "flow rates")?,
        None => truncate_flows(&parse_list(DEFAULT_FLOW_RATES, "flow rates")?, values.len()),
    };

    let aniline_point = match kind {
        PropertyKind::SmokePoint => Some(aniline_point.unwrap_or(DEFAULT_ANILINE_POINT)),
        _ if aniline_point.is_some() => {
            return Err(CliError::Unsupported {
                what: format!("--aniline-point only applies to smoke-point, not {}", kind.slug()),
            });
        }
        _ => None,
    };

    tracing::debug!(kind = %kind, components = values.len(), "blending");
    let result = blend(kind, &values, &flow_rates, aniline_point)?;

    let report = BlendReport {
        values: &values,
        flow_rates: &flow_rates,
        aniline_point,
        unit: result.unit(),
        result: &result,
    };
    match format {
        OutputFormat::Text => {
            for line in format_result(&result) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&report)?),
    }
    Ok(())
}

fn cmd_index(kind: PropertyKind, value: f64) -> CliResult<()> {
    let transform = kind.transform().ok_or_else(|| CliError::Unsupported {
        what: format!("{} is derived and has no blending index", kind.label()),
    })?;
    let index = transform.index(value)?;
    println!(
        "{} index of {} {}: {:.6e}",
        kind.label(),
        value,
        kind.unit(),
        index
    );
    Ok(())
}
