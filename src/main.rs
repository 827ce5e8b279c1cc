use anyhow::{bail, Context};
use asset_value::*;
use clap::{Args, Parser, Subcommand};
use std::cmp::Ordering;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "asset-value-cli")]
#[command(about = "Asset Value CLI - exact, type-checked amounts of fungible assets")]
#[command(version = "1.0.0")]
struct Cli {
    /// JSON asset catalog used to resolve precision from an asset id
    #[arg(long, global = true, env = "ASSET_VALUE_REGISTRY")]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ValueArgs {
    /// Asset id, e.g. cosmos:osmosis-1/slip44:118
    #[arg(short, long)]
    asset_id: String,

    /// Asset precision (optional when --registry knows the asset)
    #[arg(short, long, allow_hyphen_values = true)]
    precision: Option<i64>,

    /// Numeric value
    #[arg(short, long, allow_hyphen_values = true)]
    value: String,

    /// Whether the value is in base units or precision-scaled: base | precision
    #[arg(short, long, default_value = "base")]
    format: AssetValueFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a value in base units and at display precision
    Convert {
        #[command(flatten)]
        value: ValueArgs,

        /// Fractional digits for the precision rendering
        #[arg(short, long)]
        display: Option<u32>,
    },

    /// Produce the checksummed serialized form of a value
    Serialize {
        #[command(flatten)]
        value: ValueArgs,
    },

    /// Verify and decode a serialized value
    Inspect {
        serialized: String,
    },

    /// Add two serialized values of the same asset
    Add {
        left: String,
        right: String,
    },

    /// Subtract the second serialized value from the first
    Sub {
        left: String,
        right: String,
    },

    /// Multiply a serialized value by a scalar
    Mul {
        value: String,
        #[arg(allow_hyphen_values = true)]
        scalar: String,
    },

    /// Divide a serialized value by a scalar
    Div {
        value: String,
        #[arg(allow_hyphen_values = true)]
        scalar: String,
    },

    /// Compare two serialized values of the same asset
    Compare {
        left: String,
        right: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { value, display } => {
            handle_convert(cli.registry.as_deref(), value, display)
        }
        Commands::Serialize { value } => handle_serialize(cli.registry.as_deref(), value),
        Commands::Inspect { serialized } => handle_inspect(&serialized),
        Commands::Add { left, right } => handle_binary(&left, &right, AssetValue::plus),
        Commands::Sub { left, right } => handle_binary(&left, &right, AssetValue::minus),
        Commands::Mul { value, scalar } => {
            handle_scalar(&value, &scalar, |v, s| v.multiplied_by(s))
        }
        Commands::Div { value, scalar } => handle_scalar(&value, &scalar, |v, s| v.divided_by(s)),
        Commands::Compare { left, right } => handle_compare(&left, &right),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn build_value(registry: Option<&std::path::Path>, args: ValueArgs) -> anyhow::Result<AssetValue> {
    let asset = match (args.precision, registry) {
        (Some(precision), _) => AssetRef::identity(args.asset_id, precision),
        (None, Some(path)) => {
            let registry = InMemoryAssetRegistry::from_path(path)?;
            AssetRef::Asset(registry.lookup(&args.asset_id)?)
        }
        (None, None) => bail!("either --precision or --registry is required"),
    };
    Ok(AssetValue::from_params(AssetValueParams::new(args.value, asset, args.format))?)
}

fn parse_serialized(s: &str) -> anyhow::Result<AssetValue> {
    AssetValue::from_serialized(s).with_context(|| format!("cannot decode {:?}", s))
}

fn print_value(value: &AssetValue) {
    println!("Asset: {}", value.asset_id());
    println!("Precision: {}", value.precision());
    println!("Base Units: {}", value.to_base_unit());
    println!("Amount: {}", value.to_precision(None));
    println!("Serialized: {}", value.to_serialized());
}

fn handle_convert(
    registry: Option<&std::path::Path>,
    args: ValueArgs,
    display: Option<u32>,
) -> anyhow::Result<()> {
    let value = build_value(registry, args)?;

    println!("Base Units: {}", value.to_base_unit());
    println!("Amount: {}", value.to_precision(display));

    Ok(())
}

fn handle_serialize(registry: Option<&std::path::Path>, args: ValueArgs) -> anyhow::Result<()> {
    let value = build_value(registry, args)?;
    println!("{}", value.to_serialized());
    Ok(())
}

fn handle_inspect(serialized: &str) -> anyhow::Result<()> {
    let value = parse_serialized(serialized)?;
    println!("✓ Checksum is valid");
    print_value(&value);
    Ok(())
}

fn handle_binary(
    left: &str,
    right: &str,
    op: fn(&AssetValue, &AssetValue) -> Result<AssetValue>,
) -> anyhow::Result<()> {
    let left = parse_serialized(left)?;
    let right = parse_serialized(right)?;
    print_value(&op(&left, &right)?);
    Ok(())
}

fn handle_scalar(
    value: &str,
    scalar: &str,
    op: impl Fn(&AssetValue, &str) -> Result<AssetValue>,
) -> anyhow::Result<()> {
    let value = parse_serialized(value)?;
    print_value(&op(&value, scalar)?);
    Ok(())
}

fn handle_compare(left: &str, right: &str) -> anyhow::Result<()> {
    let left = parse_serialized(left)?;
    let right = parse_serialized(right)?;

    let symbol = match left.compare(&right)? {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", left.to_precision(None), symbol, right.to_precision(None));

    Ok(())
}
