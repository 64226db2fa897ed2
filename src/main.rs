mod app_dirs;
mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, SearchCommand, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;
	logging::initialize(resolved.log_level)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(cli.output, &cli.command, resolved)
}

/// Index the stores, run `command` and print its outcome in the chosen format.
fn run_search(format: OutputFormat, command: &SearchCommand, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let outcome = workflow.run(command);

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
