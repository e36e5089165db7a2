//! Parallel derivation of independent requests.

use autocrate_types::{CrateGeometry, DerivationRequest, DerivationResult};
use rayon::prelude::*;
use tracing::info;

use crate::config::DerivationConfig;
use crate::engine::derive_geometry;

/// Derive many requests in parallel.
///
/// Results are returned in request order; one failing request does not affect
/// the others.
///
/// # Example
///
/// ```
/// use autocrate_engine::{DerivationConfig, derive_batch};
/// use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
///
/// let requests: Vec<_> = [30.0, 60.0, -1.0]
///     .into_iter()
///     .map(|w| ProductSpec::new(800.0, 48.0, w, 30.0))
///     .map(|p| DerivationRequest::new(p, MaterialSpec::standard()))
///     .collect();
///
/// let results = derive_batch(&requests, &DerivationConfig::default());
/// assert!(results[0].is_ok());
/// assert!(results[1].is_ok());
/// assert!(results[2].is_err());
/// ```
#[must_use]
pub fn derive_batch(
    requests: &[DerivationRequest],
    config: &DerivationConfig,
) -> Vec<DerivationResult<CrateGeometry>> {
    info!(requests = requests.len(), "Deriving crate batch");

    let results: Vec<_> = requests
        .par_iter()
        .map(|request| derive_geometry(request, config))
        .collect();

    let failed = results.iter().filter(|r| r.is_err()).count();
    info!(requests = requests.len(), failed, "Crate batch complete");
    results
}
