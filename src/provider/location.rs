//! Location provider trait and fetch options

use crate::core::Coordinate;
use crate::provider::{LocationError, LocationResult};
use serde::{Deserialize, Serialize};

/// Abstraction over the platform positioning service
///
/// One-shot contract: the controller checks permission, requests it if
/// missing, then fetches a single fix. No watch/subscription mode exists.
pub trait LocationProvider {
    /// Check whether location permission has already been granted
    fn check_permission(&mut self) -> LocationResult<bool>;

    /// Ask the platform to grant location permission
    /// Returns Ok(true) if the user granted it, Ok(false) if refused
    fn request_permission(&mut self) -> LocationResult<bool>;

    /// Fetch the current position
    fn fetch_position(&mut self, options: &FetchOptions) -> LocationResult<Coordinate>;
}

/// Coordinate reference requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrecisionMode {
    /// Raw WGS-84 coordinates
    Wgs84,
    /// GCJ-02 encrypted coordinates used by Chinese map surfaces
    Gcj02,
}

/// Options for a single position fetch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FetchOptions {
    pub precision: PrecisionMode,
    pub include_altitude: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            precision: PrecisionMode::Gcj02,
            include_altitude: true,
        }
    }
}

impl FetchOptions {
    pub fn validate(&self) -> LocationResult<()> {
        // Nothing to reject today; kept so the contract has a single
        // validation point when options grow.
        let _ = self;
        Ok(())
    }
}

/// Convenience helper: ensure permission is granted, requesting it once
/// if the check comes back negative.
pub fn ensure_permission(provider: &mut dyn LocationProvider) -> LocationResult<()> {
    if provider.check_permission()? {
        return Ok(());
    }

    if provider.request_permission()? {
        Ok(())
    } else {
        Err(LocationError::PermissionDenied)
    }
}
