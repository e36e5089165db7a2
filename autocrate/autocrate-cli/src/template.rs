//! `autocrate template`

use anyhow::Result;
use autocrate_engine::DerivationConfig;
use autocrate_types::{DerivationRequest, FeatureFlags, MaterialSpec, ProductSpec};

/// The starting values of the reference entry form.
pub fn default_request() -> DerivationRequest {
    DerivationRequest::new(
        ProductSpec::new(300.0, 100.0, 40.0, 50.0),
        MaterialSpec::standard(),
    )
    .with_flags(FeatureFlags::standard())
}

pub fn run(config: bool) -> Result<()> {
    let json = if config {
        serde_json::to_string_pretty(&DerivationConfig::default())?
    } else {
        serde_json::to_string_pretty(&default_request())?
    };
    println!("{json}");
    Ok(())
}
