use anyhow::Result;
use bitsig_stores::Store;
use serde_json::json;

use crate::workflow::SearchOutcome;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	print!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &SearchOutcome) -> String {
	match outcome {
		SearchOutcome::Matches { stores, .. } => stores
			.iter()
			.map(|store| store_line(store) + "\n")
			.collect(),
		SearchOutcome::NotFound { attribute } => format!("No stores found ({attribute} search)\n"),
		SearchOutcome::Stats {
			layout,
			documents,
			indexes,
		} => {
			let mut text = format!("Stores: {documents}\nLayout: {layout}\n");
			for (label, stats) in indexes {
				text.push_str(&format!(
					"  {label}: {} bits, k={}, {} scan, {} bytes, fill {:.3}\n",
					stats.width_bits,
					stats.hashes,
					stats.backend,
					stats.memory_bytes,
					stats.mean_fill_ratio
				));
			}
			text
		}
	}
}

fn store_line(store: &Store) -> String {
	format!(
		"{}\t{}, {}\t{}",
		store.name,
		store.geo.latitude,
		store.geo.longitude,
		store.categories.join(", ")
	)
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let payload = match outcome {
		SearchOutcome::Matches { stores, .. } => serde_json::to_value(stores)?,
		SearchOutcome::NotFound { .. } => json!([]),
		SearchOutcome::Stats {
			layout,
			documents,
			indexes,
		} => {
			let mut by_label = serde_json::Map::new();
			for (label, stats) in indexes {
				by_label.insert((*label).to_string(), serde_json::to_value(stats)?);
			}
			json!({
				"stores": documents,
				"layout": layout,
				"indexes": by_label,
			})
		}
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
