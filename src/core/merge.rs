//! Environment merge.
//!
//! Writes fetched parameters into an [`Environment`] under a
//! [`DuplicatePolicy`]. The pass always runs to completion so the full set
//! of duplicate keys is known even when the policy is `Abort`; acting on
//! that set is left to the caller.

use tracing::{error, info, warn};

use crate::core::domain::{DuplicatePolicy, MergeResult, Parameter};
use crate::core::env::Environment;

/// Merge `parameters` into `env` in order.
///
/// A key already present in `env` (whether from the original environment or
/// from an earlier parameter in this pass) is recorded as a duplicate and
/// only replaced under `Overwrite`. Secret values are logged by length only.
pub fn merge<E: Environment + ?Sized>(
    parameters: &[Parameter],
    policy: DuplicatePolicy,
    env: &mut E,
) -> MergeResult {
    let mut result = MergeResult::default();

    for parameter in parameters {
        let key = parameter.key();

        if env.contains(key) {
            result.duplicate_keys.insert(key.to_string());

            if policy == DuplicatePolicy::Overwrite {
                warn!(
                    key,
                    parameter = parameter.name(),
                    "Will OVERWRITE existing environment variable"
                );
            } else {
                warn!(
                    key,
                    parameter = parameter.name(),
                    "Already in environment, skipping"
                );
                continue;
            }
        }

        if parameter.is_secret() {
            info!(
                "{} - setting value from ssm (SecureString, {} chars)",
                key,
                parameter.char_count()
            );
        } else {
            info!("{} - setting value from ssm: {}", key, parameter.value());
        }

        match env.set(key, parameter.value()) {
            Ok(()) => result.applied.push(key.to_string()),
            Err(e) => {
                error!(parameter = parameter.name(), error = %e, "Error processing parameter");
                result.failed += 1;
            }
        }
    }

    result
}
