use bitsig_stores::IndexLayout;
use clap::ValueEnum;

/// Index layouts selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LayoutArg {
	Combined,
	#[clap(name = "per-attribute")]
	PerAttribute,
}

impl LayoutArg {
	/// Return the layout consumed by configuration loading.
	pub(crate) fn layout(self) -> IndexLayout {
		match self {
			LayoutArg::Combined => IndexLayout::Combined,
			LayoutArg::PerAttribute => IndexLayout::PerAttribute,
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
