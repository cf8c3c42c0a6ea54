pub mod extract;
pub mod scan;
pub mod schema;

use lens_config::LensConfig;
use lens_parser::ParseOptions;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Extract(args) => extract::handle(args, flags),
        Commands::Scan(args) => scan::handle(args, flags),
        Commands::Schema(args) => schema::handle(args, flags),
    }
}

/// Front-end options from config, with `--lenient` taking precedence.
fn parse_options(config: &LensConfig, flags: &GlobalFlags) -> ParseOptions {
    ParseOptions {
        strict: config.parser.strict && !flags.lenient,
    }
}
