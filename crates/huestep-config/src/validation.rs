//! Full configuration validation.
//!
//! Every problem is collected so one run reports them all.

use crate::schema::HuestepConfig;
use huestep_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HuestepConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "rename.target_year",
        config.rename.target_year,
        1,
        9999,
    );

    let ext = &config.rename.extension;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push(format!(
            "rename.extension = {ext:?} must be non-empty and alphanumeric"
        ));
    }

    if config.rename.large_size.trim().is_empty() {
        errors.push("rename.large_size must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
