use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::{LayoutArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `bitsig` binary.
#[derive(Parser, Debug)]
#[command(
	name = "bitsig",
	version,
	long_version = long_version(),
	about = "Exact store search over bit-signature indexes",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "BITSIG_CONFIG",
		action = ArgAction::Append,
		global = true,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "print-config",
		global = true,
		help = "Print the effective configuration before searching (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 's',
		long,
		value_name = "FILE",
		global = true,
		help = "JSON file holding the array of stores to index (default: input.stores)"
	)]
	pub(crate) stores: Option<PathBuf>,
	#[arg(
		short = 'l',
		long,
		value_enum,
		global = true,
		help = "How attributes are split across indexes (default: combined)"
	)]
	pub(crate) layout: Option<LayoutArg>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		global = true,
		help = "Output format for results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity; repeat for more detail (default: logging.level)"
	)]
	pub(crate) verbose: u8,
	#[command(subcommand)]
	pub(crate) command: SearchCommand,
}

/// What to look up once the stores are indexed.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub(crate) enum SearchCommand {
	/// Stores whose name matches exactly.
	Name {
		#[arg(value_name = "NAME")]
		name: String,
	},
	/// Stores at an exact latitude and longitude.
	Geo {
		#[arg(value_name = "LAT", allow_negative_numbers = true)]
		latitude: f64,
		#[arg(value_name = "LONG", allow_negative_numbers = true)]
		longitude: f64,
	},
	/// Stores carrying every listed category.
	Categories {
		#[arg(value_name = "CATEGORY", required = true)]
		categories: Vec<String>,
	},
	/// Index shape and occupancy.
	Stats,
}
