//! Command handlers returning process exit codes

use super::commands::CliArgs;
use super::output::SummaryFormatter;
use crate::config::GeneratorConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::generator::TopologyGenerator;
use crate::TopologyError;
use tracing::{debug, error};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Environment configuration with command-line overrides applied
pub fn resolve_config(args: &CliArgs) -> GeneratorConfig {
    let mut config = GeneratorConfig::default();

    if let Some(base_dir) = &args.base_dir {
        config.base_dir = base_dir.clone();
    }
    if let Some(compose_file) = &args.compose_file {
        config.compose_file = Some(compose_file.clone());
    }
    if let Some(output) = &args.output {
        config.output_file = Some(output.clone());
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }

    config
}

pub fn handle_generate(args: &CliArgs, config: &GeneratorConfig) -> i32 {
    run_generate(RealFileSystem, config, args.quiet)
}

fn run_generate<F: FileSystem>(fs: F, config: &GeneratorConfig, quiet: bool) -> i32 {
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return EXIT_FAILURE;
    }
    debug!("{}", config);

    let compose_path = config.compose_path();
    let output_path = config.output_path();
    let generator = TopologyGenerator::new(fs);

    match generator.generate(&compose_path, &output_path) {
        Ok(document) => {
            if !quiet {
                print!("{}", SummaryFormatter::new(&document, &output_path));
            }
            EXIT_SUCCESS
        }
        Err(TopologyError::ComposeNotFound(path)) => {
            eprintln!("Error: {} not found", path.display());
            EXIT_FAILURE
        }
        Err(e) => {
            let message = format!("{:#}", anyhow::Error::from(e));
            error!(error = %message, "Topology generation failed");
            eprintln!("Error: {}", message);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;
    use clap::Parser;
    use serial_test::serial;
    use std::path::PathBuf;

    #[test]
    #[serial]
    fn test_cli_overrides_config() {
        let args = CliArgs::parse_from([
            "compose-topology",
            "--base-dir",
            "/srv/orchestrator",
            "-o",
            "/tmp/topology.json",
            "-v",
        ]);

        let config = resolve_config(&args);

        assert_eq!(config.base_dir, PathBuf::from("/srv/orchestrator"));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/topology.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_explicit_log_level_beats_verbose_flag() {
        let args = CliArgs::parse_from(["compose-topology", "--log-level", "WARN"]);
        assert_eq!(resolve_config(&args).log_level, "warn");
    }

    #[test]
    fn test_missing_compose_exit_code() {
        let config = GeneratorConfig::with_base_dir("/srv");
        assert_eq!(run_generate(MockFileSystem::new(), &config, true), EXIT_FAILURE);
    }

    #[test]
    fn test_success_exit_code() {
        let fs = MockFileSystem::new();
        fs.add_file("/srv/docker-compose.yml", "services:\n  exchange-okx: {}\n");
        let config = GeneratorConfig::with_base_dir("/srv");

        assert_eq!(run_generate(fs, &config, true), EXIT_SUCCESS);
    }

    #[test]
    fn test_invalid_config_exit_code() {
        let fs = MockFileSystem::new();
        fs.add_file("/srv/docker-compose.yml", "services: {}\n");
        let mut config = GeneratorConfig::with_base_dir("/srv");
        config.log_level = "chatty".to_string();

        assert_eq!(run_generate(fs, &config, true), EXIT_FAILURE);
    }
}
