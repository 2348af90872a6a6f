//! Configuration semantic validation.

use globset::Glob;

use crate::config::Config;
use crate::{DocGuardError, Result};

/// Narrowest width that leaves room for the ` * ` prefix and one character.
pub const MIN_TEMPLATE_WIDTH: usize = 4;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the template width is too small, an extension is empty,
/// or an exclude pattern is not a valid glob.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.template.width < MIN_TEMPLATE_WIDTH {
        return Err(DocGuardError::Config(format!(
            "template.width must be at least {MIN_TEMPLATE_WIDTH}, got {}",
            config.template.width
        )));
    }

    if let Some(ext) = config
        .scanner
        .extensions
        .iter()
        .find(|ext| ext.trim_start_matches('.').is_empty())
    {
        return Err(DocGuardError::Config(format!(
            "scanner.extensions contains an empty extension: '{ext}'"
        )));
    }

    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|source| DocGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    Ok(())
}
