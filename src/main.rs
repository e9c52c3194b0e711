mod args;
mod payload;
mod scenarios;

use std::io;

use clap::Parser as _;
use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
	EnvFilter,
	fmt::{self, format::FmtSpan},
	prelude::*,
};

use self::{
	args::{Args, Scenario},
	payload::NonCopyable,
};

fn main() -> Result<()> {
	let args = match Args::try_parse() {
		Ok(a) => a,
		Err(e) => {
			eprintln!("{e}");
			return Ok(());
		}
	};

	install_tracing(&args)?;
	color_eyre::install()?;

	let scenario = args.scenario;

	if scenario.runs(Scenario::ClonePtr) {
		scenarios::clone_ptr();
	}

	if scenario.runs(Scenario::Reset) {
		scenarios::reset();
	}

	if scenario.runs(Scenario::Reconstruct) {
		scenarios::reconstruct_in_place();
	}

	if scenario.runs(Scenario::Reconstructor) {
		scenarios::reconstructor();
	}

	if scenario.runs(Scenario::Reconstructable) {
		scenarios::reconstructable();
	}

	Ok(())
}

fn install_tracing(args: &Args) -> Result<()> {
	let filter_layer = EnvFilter::try_new(&args.log_filter)?;

	let fmt_layer = (!args.json).then(|| {
		fmt::layer()
			.with_target(false)
			.with_writer(io::stderr)
	});

	let json_layer = args.json.then(|| {
		fmt::layer()
			.with_ansi(false)
			.json()
			.flatten_event(true)
			.with_span_events(FmtSpan::CLOSE)
			.with_writer(io::stderr)
	});

	tracing_subscriber::registry()
		.with(filter_layer)
		.with(fmt_layer)
		.with(json_layer)
		.with(ErrorLayer::default())
		.try_init()?;

	Ok(())
}
