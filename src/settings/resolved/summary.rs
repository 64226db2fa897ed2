use bitsig_stores::{IndexLayout, SignatureParams};

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", summary_text(config));
}

fn summary_text(config: &ResolvedConfig) -> String {
	let options = &config.options;
	let mut text = String::from("Effective configuration:\n");
	text.push_str(&format!("  Stores: {}\n", config.stores.display()));
	text.push_str(&format!("  Layout: {}\n", options.layout));
	match options.layout {
		IndexLayout::Combined => {
			text.push_str(&params_line("Combined index", options.combined));
		}
		IndexLayout::PerAttribute => {
			text.push_str(&params_line("Name index", options.name));
			text.push_str(&params_line("Geo index", options.geo));
			text.push_str(&params_line("Categories index", options.categories));
		}
	}
	text.push_str(&format!("  Log level: {}\n", config.log_level));
	text
}

fn params_line(label: &str, params: SignatureParams) -> String {
	format!(
		"  {label}: {} bits, {} hashes\n",
		params.width_bits, params.hashes
	)
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use bitsig_stores::SearcherOptions;
	use log::LevelFilter;

	use super::*;

	#[test]
	fn summary_lists_only_the_active_indexes() {
		let config = ResolvedConfig {
			stores: PathBuf::from("/tmp/stores.json"),
			options: SearcherOptions::default(),
			log_level: LevelFilter::Info,
		};

		let text = summary_text(&config);
		assert!(text.contains("Stores: /tmp/stores.json"));
		assert!(text.contains("Combined index: 2048 bits, 8 hashes"));
		assert!(!text.contains("Geo index"));
		assert!(text.contains("Log level: INFO"));
	}

	#[test]
	fn per_attribute_summary_lists_three_indexes() {
		let config = ResolvedConfig {
			stores: PathBuf::from("/tmp/stores.json"),
			options: SearcherOptions {
				layout: IndexLayout::PerAttribute,
				..SearcherOptions::default()
			},
			log_level: LevelFilter::Warn,
		};

		let text = summary_text(&config);
		assert!(text.contains("Layout: per-attribute"));
		assert!(text.contains("Name index: 1024 bits, 2 hashes"));
		assert!(text.contains("Categories index: 1024 bits, 12 hashes"));
		print_summary(&config);
	}
}
