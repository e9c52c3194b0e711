use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
	#[arg(value_enum, default_value_t = Scenario::All)]
	pub scenario: Scenario,
	#[arg(long)]
	pub json: bool,
	#[arg(short, long, env = "RUST_LOG", default_value = "info")]
	pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
	ClonePtr,
	Reset,
	Reconstruct,
	Reconstructor,
	Reconstructable,
	All,
}

impl Scenario {
	pub fn runs(self, other: Self) -> bool {
		matches!(self, Self::All) || self == other
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser as _;

	use super::{Args, Scenario};

	#[test]
	fn defaults_to_all() {
		let args = Args::try_parse_from(["reforge"]).unwrap();

		assert_eq!(args.scenario, Scenario::All);
		assert!(!args.json);
	}

	#[test]
	fn parses_scenario() {
		let args = Args::try_parse_from(["reforge", "clone-ptr", "--json"]).unwrap();

		assert_eq!(args.scenario, Scenario::ClonePtr);
		assert!(args.json);
	}

	#[test]
	fn all_runs_everything() {
		assert!(Scenario::All.runs(Scenario::Reset));
		assert!(Scenario::Reset.runs(Scenario::Reset));
		assert!(!Scenario::Reset.runs(Scenario::Reconstructable));
	}
}
