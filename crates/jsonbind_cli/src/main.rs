#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "jsonbind", about = "Schema-driven JSON text codec tools")]
struct Cli {
	/// Log codec activity at debug level on stderr.
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Parse text into a value tree and print it.
	Parse(cmd::parse::Args),
	/// Deserialize text into one of the sample model types.
	Decode(cmd::decode::Args),
	/// Serialize a built-in sample instance.
	Encode(cmd::encode::Args),
	/// Serialize the sample model, then deserialize the bundled documents.
	Demo,
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> jsonbind::codec::Result<()> {
	match command {
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Demo => cmd::demo::run(),
	}
}

fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "warn" };
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
