use clap::Parser;
use std::path::PathBuf;

/// Generate a service topology document from docker-compose.yml
#[derive(Parser, Debug, Clone)]
#[command(
    name = "compose-topology",
    about = "Generate a service topology document from docker-compose.yml",
    version,
    long_about = "compose-topology reads docker-compose.yml, keeps the trading ecosystem \
                  application services, infers their type, category and endpoints, adds the \
                  known relationships between them and writes config/topology.json.\n\n\
                  Examples:\n  \
                  compose-topology\n  \
                  compose-topology --base-dir /srv/orchestrator\n  \
                  compose-topology --compose-file deploy/compose.yml -o /tmp/topology.json"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory containing docker-compose.yml (defaults to current directory)"
    )]
    pub base_dir: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Compose file to read (defaults to <base-dir>/docker-compose.yml)"
    )]
    pub compose_file: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Topology file to write (defaults to <base-dir>/config/topology.json)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress the summary and non-error logs"
    )]
    pub quiet: bool,
}
