//! Memoized derivations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use autocrate_types::{CrateGeometry, DerivationRequest, DerivationResult, FeatureFlags};
use hashbrown::HashMap;
use tracing::debug;

use crate::config::DerivationConfig;
use crate::engine::derive_geometry;

type Slot = Arc<OnceLock<DerivationResult<CrateGeometry>>>;

/// Exact identity of a request: the bit pattern of every number plus the flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RequestKey {
    bits: Vec<u64>,
    flags: FeatureFlags,
}

impl RequestKey {
    fn new(request: &DerivationRequest) -> Self {
        let p = &request.product;
        let m = &request.material;
        let scalars = [
            p.weight,
            p.length,
            p.width,
            p.height,
            p.side_clearance,
            p.above_clearance,
            m.sheathing_thickness,
            m.cleat_thickness,
            m.cleat_member_width,
            m.floorboard_thickness,
            m.min_custom_width,
            m.max_gap,
            m.ground_clearance,
        ];
        let bits = scalars
            .iter()
            .chain(&m.standard_widths)
            .map(|v| v.to_bits())
            .collect();
        Self {
            bits,
            flags: request.flags,
        }
    }
}

/// Derivation results memoized per distinct request under one configuration.
///
/// Each distinct request is computed at most once, also when several threads
/// ask for it at the same time; the others wait for the first result.
///
/// Entries are never evicted. The cache grows by one entry per distinct
/// request until [`clear`](Self::clear) is called.
///
/// # Example
///
/// ```
/// use autocrate_engine::{DerivationCache, DerivationConfig};
/// use autocrate_types::{DerivationRequest, MaterialSpec, ProductSpec};
///
/// let cache = DerivationCache::new(DerivationConfig::default()).unwrap();
/// let request = DerivationRequest::new(
///     ProductSpec::new(300.0, 100.0, 40.0, 50.0),
///     MaterialSpec::standard(),
/// );
///
/// let first = cache.derive(&request).unwrap();
/// let second = cache.derive(&request).unwrap();
/// assert_eq!(first, second);
/// assert_eq!(cache.computations(), 1);
/// ```
#[derive(Debug)]
pub struct DerivationCache {
    config: DerivationConfig,
    slots: Mutex<HashMap<RequestKey, Slot>>,
    computations: AtomicUsize,
}

impl DerivationCache {
    /// Create an empty cache for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DerivationError::InvalidConfig`](autocrate_types::DerivationError::InvalidConfig)
    /// if `config` fails validation.
    pub fn new(config: DerivationConfig) -> DerivationResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            slots: Mutex::new(HashMap::new()),
            computations: AtomicUsize::new(0),
        })
    }

    /// The configuration every cached result was derived with.
    #[must_use]
    pub const fn config(&self) -> &DerivationConfig {
        &self.config
    }

    /// Derive `request`, reusing an earlier result for an identical request.
    ///
    /// Errors are cached too: an invalid request fails the same way every time.
    ///
    /// # Errors
    ///
    /// Returns the error [`derive_geometry`] returned for this request.
    pub fn derive(&self, request: &DerivationRequest) -> DerivationResult<CrateGeometry> {
        let key = RequestKey::new(request);
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key).or_default())
        };

        slot.get_or_init(|| {
            self.computations.fetch_add(1, Ordering::Relaxed);
            derive_geometry(request, &self.config)
        })
        .clone()
    }

    /// Number of distinct requests seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if no request has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of derivations actually computed.
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations.load(Ordering::Relaxed)
    }

    /// Drop every cached result.
    pub fn clear(&self) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(entries = slots.len(), "Clearing derivation cache");
        slots.clear();
    }
}
