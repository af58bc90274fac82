//! Region precondition.
//!
//! `AWS_REGION` must be set before anything talks to the store. Its
//! `AWS_DEFAULT_REGION` counterpart is brought in line with it.

use tracing::{debug, warn};

use crate::core::constants::{DEFAULT_REGION_VAR, REGION_VAR};
use crate::core::env::Environment;
use crate::error::{ConfigError, Result};

/// Require the region variable and reconcile its default counterpart.
///
/// Returns the region in effect.
///
/// # Errors
///
/// Returns `ConfigError::MissingVar` if `AWS_REGION` is not set.
pub fn reconcile<E: Environment + ?Sized>(env: &mut E) -> Result<String> {
    let region = env
        .get(REGION_VAR)
        .ok_or(ConfigError::MissingVar(REGION_VAR))?;

    match env.get(DEFAULT_REGION_VAR) {
        None => {
            debug!(region = %region, "deriving {} from {}", DEFAULT_REGION_VAR, REGION_VAR);
            env.set(DEFAULT_REGION_VAR, &region)?;
        }
        Some(default) if default != region => {
            warn!(
                "{} ({}) and {} ({}) are in conflict. Resolving by setting both to {}",
                REGION_VAR, region, DEFAULT_REGION_VAR, default, region
            );
            env.set(DEFAULT_REGION_VAR, &region)?;
        }
        Some(_) => {}
    }

    Ok(region)
}
