use std::io::Write;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use seqblock_cli::SeqblockCli;
use seqblock_cli::render_report;
use seqblock_core::SeqConfig;
use seqblock_core::SeqError;
use seqblock_core::SeqResult;
use seqblock_core::process_file;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = SeqblockCli::parse();
	let no_color_env = std::env::var_os("NO_COLOR").is_some();

	init_logging(args.verbose);

	let config = args.load_config();
	let use_color = args.diagnostic_color(
		config.as_ref().ok().and_then(Option::as_ref),
		no_color_env,
	);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = config.and_then(|config| run(&args, config.as_ref(), no_color_env));
	if let Err(error) = result {
		match error {
			SeqError::Io(e) => {
				let prefix = "error:";
				if use_color {
					eprintln!("{} failed to process file: {e}", prefix.red());
				} else {
					eprintln!("{prefix} failed to process file: {e}");
				}
			}
			error => {
				let report: miette::Report = error.into();
				eprintln!("{report:?}");
			}
		}
		process::exit(1);
	}
}

fn init_logging(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();
}

fn run(args: &SeqblockCli, config: Option<&SeqConfig>, no_color_env: bool) -> SeqResult<()> {
	let settings = args.settings(config, no_color_env);
	tracing::debug!(
		input = %args.input.display(),
		format = %settings.format,
		color = settings.color,
		max_depth = settings.max_depth,
		"resolved settings"
	);

	let report = process_file(&args.input, settings.pass_options())?;
	let rendered = render_report(&report, settings.render_options());

	if let Some(output) = &args.output {
		std::fs::write(output, rendered).map_err(|e| {
			SeqError::WriteOutput {
				path: output.display().to_string(),
				reason: e.to_string(),
			}
		})?;
		println!("Output written to {}", output.display());
	} else {
		let mut stdout = std::io::stdout().lock();
		stdout.write_all(rendered.as_bytes())?;
		stdout.flush()?;
	}

	Ok(())
}
