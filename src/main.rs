use compose_topology::cli::{handle_generate, resolve_config, CliArgs};
use compose_topology::util::logging::parse_level;
use compose_topology::{init_logging, LoggingConfig, VERSION};

use clap::Parser;
use tracing::debug;

fn main() {
    let args = CliArgs::parse();
    let config = resolve_config(&args);

    init_logging(LoggingConfig {
        use_json: config.log_json,
        ..LoggingConfig::with_level(parse_level(&config.log_level))
    });

    debug!("compose-topology v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args, &config);
    std::process::exit(exit_code);
}
