//! Fan-out/fan-in of provider validation and reset
//!
//! Both operations visit every provider in the snapshot they are given.
//! A failing provider never prevents the others from running; the failure
//! is reported only once every provider has finished.

use form_observer_common::{ObserverError, ObserverResult, Vid};
use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::provider::ValidationResult;
use crate::registry::ProviderHandle;

/// Validate every provider concurrently and apply each result to its
/// provider as soon as it arrives.
///
/// Returns `Ok(true)` iff every provider reported a valid result. If any
/// provider's validation itself fails, the failure of the provider with the
/// smallest vid is returned after all other providers completed.
pub async fn validate_all(providers: &[ProviderHandle]) -> ObserverResult<bool> {
    info!("Validating {} provider(s)", providers.len());

    let runs = providers.iter().map(|provider| async move {
        let outcome = provider.validate().await;
        if let Ok(result) = &outcome {
            provider.apply_result(result).await;
            debug!(vid = %provider.vid(), valid = result.valid, "Validation result applied");
        }
        (provider.vid().clone(), outcome)
    });
    let outcomes: Vec<(Vid, ObserverResult<ValidationResult>)> = join_all(runs).await;

    let mut all_valid = true;
    let mut failures: Vec<(Vid, ObserverError)> = Vec::new();

    for (vid, outcome) in outcomes {
        match outcome {
            Ok(result) => all_valid &= result.valid,
            Err(e) => {
                warn!(vid = %vid, error = %e, "Provider validation failed");
                failures.push((vid, e));
            }
        }
    }

    match failures.into_iter().min_by(|a, b| a.0.cmp(&b.0)) {
        // Providers may already report their own `ProviderFailed`
        Some((_, err @ ObserverError::ProviderFailed { .. })) => Err(err),
        Some((vid, err)) => Err(ObserverError::provider_failed(vid, err.to_string())),
        None => {
            info!(valid = all_valid, "Validation finished");
            Ok(all_valid)
        }
    }
}

/// Reset every provider. Failures are collected, not short-circuited.
pub async fn reset_all(providers: &[ProviderHandle]) -> ObserverResult<()> {
    let mut failures = Vec::new();

    for provider in providers {
        if let Err(e) = provider.reset().await {
            warn!(vid = %provider.vid(), error = %e, "Provider reset failed");
            failures.push((provider.vid().clone(), e.to_string()));
        }
    }

    if failures.is_empty() {
        debug!("Reset {} provider(s)", providers.len());
        Ok(())
    } else {
        Err(ObserverError::ResetFailed { failures })
    }
}
