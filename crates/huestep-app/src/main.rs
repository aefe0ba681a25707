//! color-steps: print a linear gradient between two hex colors.
//!
//! The whole sequence is computed before anything is written, so a bad
//! color or step count leaves stdout empty.

mod cli;

use std::io::Write;
use std::process::ExitCode;

use huestep_config::HuestepConfig;

use crate::cli::Args;

fn main() -> ExitCode {
    let args = cli::parse();

    let config = match huestep_config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("color-steps: {e}");
            return ExitCode::FAILURE;
        }
    };

    huestep_config::logging::init(args.log_level.as_deref(), config.logging.level);

    let mut stdout = std::io::stdout().lock();
    match run(&args, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "gradient failed");
            eprintln!("color-steps: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &HuestepConfig, out: &mut impl Write) -> huestep_common::Result<()> {
    let steps = huestep_gradient::step_count(args.steps)?;
    let hash_prefix = args.hash || config.output.hash_prefix;
    let include_endpoints = !args.no_endpoints && config.output.include_endpoints;

    let lines = huestep_gradient::gradient(
        &args.start_color,
        &args.end_color,
        steps,
        hash_prefix,
        include_endpoints,
    )?;
    tracing::info!(
        start = %args.start_color,
        end = %args.end_color,
        steps,
        "computed gradient"
    );

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use huestep_common::{GradientError, HuestepError};

    fn run_with(argv: &[&str], config: &HuestepConfig) -> huestep_common::Result<String> {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(&args, config, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_endpoints_around_steps() {
        let out = run_with(
            &["color-steps", "#000000", "#ffffff", "3"],
            &HuestepConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "#000000\n3f3f3f\n7f7f7f\nbfbfbf\n#ffffff\n");
    }

    #[test]
    fn zero_steps_prints_only_endpoints() {
        let out = run_with(&["color-steps", "c0b", "fff", "0"], &HuestepConfig::default()).unwrap();
        assert_eq!(out, "c0b\nfff\n");
    }

    #[test]
    fn hash_flag_prefixes_steps() {
        let out = run_with(
            &["color-steps", "--hash", "000", "fff", "1"],
            &HuestepConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "000\n#7f7f7f\nfff\n");
    }

    #[test]
    fn config_can_enable_hash_prefix() {
        let mut config = HuestepConfig::default();
        config.output.hash_prefix = true;
        let out = run_with(&["color-steps", "000", "fff", "1"], &config).unwrap();
        assert_eq!(out, "000\n#7f7f7f\nfff\n");
    }

    #[test]
    fn no_endpoints_flag_drops_start_and_end() {
        let out = run_with(
            &["color-steps", "--no-endpoints", "#ffffff", "#000000", "3"],
            &HuestepConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "bfbfbf\n7f7f7f\n3f3f3f\n");
    }

    #[test]
    fn negative_steps_are_rejected() {
        let err = run_with(&["color-steps", "#000", "#fff", "-2"], &HuestepConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            HuestepError::Gradient(GradientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_color_writes_nothing() {
        let args = Args::try_parse_from(["color-steps", "#12345", "#fff", "3"]).unwrap();
        let mut out = Vec::new();
        let err = run(&args, &HuestepConfig::default(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            HuestepError::Gradient(GradientError::InvalidFormat(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn non_integer_steps_fail_to_parse() {
        assert!(Args::try_parse_from(["color-steps", "#000", "#fff", "three"]).is_err());
    }

    #[test]
    fn missing_arguments_fail_to_parse() {
        assert!(Args::try_parse_from(["color-steps", "#000"]).is_err());
    }
}
