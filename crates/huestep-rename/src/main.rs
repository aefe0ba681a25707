//! rename-calendar: rename calendar images in place.

mod cli;

use std::process::ExitCode;

use huestep_common::ConfigError;
use huestep_config::HuestepConfig;
use huestep_rename::{apply, plan_directory, PlanOptions};

use crate::cli::Args;

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match huestep_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("rename-calendar: {e}");
            return ExitCode::FAILURE;
        }
    };

    huestep_config::logging::init(args.log_level.as_deref(), config.logging.level);

    match run(&args, &config) {
        Ok(count) => {
            tracing::debug!(count, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("rename-calendar: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &HuestepConfig) -> huestep_common::Result<usize> {
    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let options = plan_options(args, config)?;
    tracing::info!(
        dir = %dir.display(),
        year = options.target_year,
        ext = %options.extension,
        "scanning for calendar images"
    );

    let plan = plan_directory(&dir, &options)?;
    let mut stdout = std::io::stdout().lock();
    Ok(apply(&plan, &mut stdout)?)
}

/// Config values with command-line overrides applied, validated together.
fn plan_options(args: &Args, config: &HuestepConfig) -> Result<PlanOptions, ConfigError> {
    let mut rename = config.rename.clone();
    if let Some(year) = args.year {
        rename.target_year = year;
    }
    if let Some(ext) = &args.ext {
        rename.extension = ext.clone();
    }

    let merged = HuestepConfig {
        rename,
        ..config.clone()
    };
    huestep_config::validation::validate(&merged)?;

    Ok(PlanOptions {
        target_year: merged.rename.target_year,
        extension: merged.rename.extension,
        large_size: merged.rename.large_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use huestep_common::{HuestepError, RenameError};

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn options_default_to_config() {
        let opts = plan_options(&args(&["rename-calendar"]), &HuestepConfig::default()).unwrap();
        assert_eq!(opts.target_year, 2014);
        assert_eq!(opts.extension, "jpg");
        assert_eq!(opts.large_size, "big");
    }

    #[test]
    fn flags_override_config() {
        let opts = plan_options(
            &args(&["rename-calendar", "--year", "2026", "--ext", "png"]),
            &HuestepConfig::default(),
        )
        .unwrap();
        assert_eq!(opts.target_year, 2026);
        assert_eq!(opts.extension, "png");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let err = plan_options(
            &args(&["rename-calendar", "--ext", ".jpg"]),
            &HuestepConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn run_renames_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("october-big.jpg"), b"").unwrap();
        std::fs::write(dir.path().join("october-small.jpg"), b"").unwrap();

        let dir_arg = dir.path().to_str().unwrap();
        let count = run(
            &args(&["rename-calendar", "--dir", dir_arg]),
            &HuestepConfig::default(),
        )
        .unwrap();

        assert_eq!(count, 2);
        assert!(dir.path().join("2014_10_top.jpg").exists());
        assert!(dir.path().join("2014_10_bottom.jpg").exists());
    }

    #[test]
    fn run_reports_unknown_month() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("brumaire-big.jpg"), b"").unwrap();

        let dir_arg = dir.path().to_str().unwrap();
        let err = run(
            &args(&["rename-calendar", "--dir", dir_arg]),
            &HuestepConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            HuestepError::Rename(RenameError::UnknownMonth(_))
        ));
    }
}
