use anyhow::Result;
use bitsig_stores::{
	Attribute, Geo, IndexLayout, IndexStats, SearchError, Store, StoreSearcher, load_stores,
};

use crate::cli::SearchCommand;
use crate::settings::ResolvedConfig;

/// What a command produced, ready for output formatting.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchOutcome {
	Matches {
		attribute: Attribute,
		stores: Vec<Store>,
	},
	NotFound {
		attribute: Attribute,
	},
	Stats {
		layout: IndexLayout,
		documents: usize,
		indexes: Vec<(&'static str, IndexStats)>,
	},
}

/// Loads the configured stores once and answers commands against them.
pub(crate) struct SearchWorkflow {
	searcher: StoreSearcher,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let stores = load_stores(&config.stores)?;
		log::info!("loaded {} stores from {}", stores.len(), config.stores.display());
		Ok(Self::from_stores(stores, &config))
	}

	fn from_stores(stores: Vec<Store>, config: &ResolvedConfig) -> Self {
		Self {
			searcher: StoreSearcher::with_options(stores, config.options),
		}
	}

	pub(crate) fn run(&self, command: &SearchCommand) -> SearchOutcome {
		let (attribute, result) = match command {
			SearchCommand::Name { name } => {
				(Attribute::Name, self.searcher.search_by_name(name))
			}
			SearchCommand::Geo {
				latitude,
				longitude,
			} => (
				Attribute::Geo,
				self.searcher
					.search_by_geo(Geo::new(*latitude, *longitude)),
			),
			SearchCommand::Categories { categories } => (
				Attribute::Categories,
				self.searcher.search_by_categories(categories.as_slice()),
			),
			SearchCommand::Stats => {
				return SearchOutcome::Stats {
					layout: self.searcher.layout(),
					documents: self.searcher.len(),
					indexes: self.searcher.index_stats(),
				};
			}
		};

		match result {
			Ok(stores) => SearchOutcome::Matches {
				attribute,
				stores: stores.into_iter().cloned().collect(),
			},
			Err(SearchError::NotFound { attribute }) => SearchOutcome::NotFound { attribute },
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use bitsig_stores::SearcherOptions;
	use log::LevelFilter;
	use tempfile::tempdir;

	use super::*;

	const STORES: &str = r#"[
		{"name": "store 1", "geo": {"latitude": 0.5, "longitude": 0.5}, "categories": ["category 1", "category 2"]},
		{"name": "store 2", "geo": {"latitude": 0.5, "longitude": 0.5}, "categories": ["category 1", "category 404"]}
	]"#;

	fn workflow(layout: IndexLayout) -> SearchWorkflow {
		let dir = tempdir().unwrap();
		let stores = dir.path().join("stores.json");
		fs::write(&stores, STORES).unwrap();
		let config = ResolvedConfig {
			stores,
			options: SearcherOptions {
				layout,
				..SearcherOptions::default()
			},
			log_level: LevelFilter::Warn,
		};
		SearchWorkflow::from_config(config).unwrap()
	}

	fn names(outcome: &SearchOutcome) -> Vec<&str> {
		match outcome {
			SearchOutcome::Matches { stores, .. } => {
				stores.iter().map(|store| store.name.as_str()).collect()
			}
			other => panic!("expected matches, got {other:?}"),
		}
	}

	#[test]
	fn commands_map_to_searches() {
		for layout in [IndexLayout::Combined, IndexLayout::PerAttribute] {
			let workflow = workflow(layout);

			let outcome = workflow.run(&SearchCommand::Name {
				name: "store 1".into(),
			});
			assert_eq!(names(&outcome), ["store 1"]);

			let outcome = workflow.run(&SearchCommand::Geo {
				latitude: 0.5,
				longitude: 0.5,
			});
			assert_eq!(names(&outcome), ["store 1", "store 2"]);

			let outcome = workflow.run(&SearchCommand::Categories {
				categories: vec!["category 1".into(), "category 404".into()],
			});
			assert_eq!(names(&outcome), ["store 2"]);
		}
	}

	#[test]
	fn misses_become_not_found() {
		let outcome = workflow(IndexLayout::Combined).run(&SearchCommand::Name {
			name: "store 3".into(),
		});
		assert_eq!(
			outcome,
			SearchOutcome::NotFound {
				attribute: Attribute::Name,
			}
		);
	}

	#[test]
	fn stats_describe_every_index() {
		let outcome = workflow(IndexLayout::PerAttribute).run(&SearchCommand::Stats);
		let SearchOutcome::Stats {
			layout,
			documents,
			indexes,
		} = outcome
		else {
			panic!("expected stats");
		};
		assert_eq!(layout, IndexLayout::PerAttribute);
		assert_eq!(documents, 2);
		let labels: Vec<&str> = indexes.iter().map(|(label, _)| *label).collect();
		assert_eq!(labels, ["name", "geo", "categories"]);
	}

	#[test]
	fn unreadable_stores_file_fails_to_load() {
		let dir = tempdir().unwrap();
		let stores = dir.path().join("stores.json");
		fs::write(&stores, "{").unwrap();
		let config = ResolvedConfig {
			stores,
			options: SearcherOptions::default(),
			log_level: LevelFilter::Warn,
		};
		assert!(SearchWorkflow::from_config(config).is_err());
	}
}
