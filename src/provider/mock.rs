//! Mock location provider for testing and development

use crate::core::Coordinate;
use crate::provider::{FetchOptions, LocationError, LocationProvider, LocationResult};
use std::collections::VecDeque;

/// Mock location provider for testing and development
pub struct MockLocationProvider {
    permission_granted: bool,
    grant_on_request: bool,
    fix_queue: VecDeque<Coordinate>,
    fail_next_fetch: Option<LocationError>,
    permission_checks: u32,
    permission_requests: u32,
    fetch_count: u32,
}

impl MockLocationProvider {
    /// Create a provider with permission already granted and no queued fixes
    pub fn new() -> Self {
        Self {
            permission_granted: true,
            grant_on_request: true,
            fix_queue: VecDeque::new(),
            fail_next_fetch: None,
            permission_checks: 0,
            permission_requests: 0,
            fetch_count: 0,
        }
    }

    /// Start without permission; `grant_on_request` decides whether the
    /// simulated user accepts the permission prompt
    pub fn without_permission(grant_on_request: bool) -> Self {
        Self {
            permission_granted: false,
            grant_on_request,
            ..Self::new()
        }
    }

    /// Queue a position fix to be returned by the next fetch
    pub fn add_fix(&mut self, coordinate: Coordinate) {
        self.fix_queue.push_back(coordinate);
    }

    /// Queue a fix at construction time
    pub fn with_fix(mut self, coordinate: Coordinate) -> Self {
        self.add_fix(coordinate);
        self
    }

    /// Force the next fetch to fail with the given error
    pub fn fail_next_fetch(&mut self, error: LocationError) {
        self.fail_next_fetch = Some(error);
    }

    pub fn queued_fix_count(&self) -> usize {
        self.fix_queue.len()
    }

    pub fn permission_checks(&self) -> u32 {
        self.permission_checks
    }

    pub fn permission_requests(&self) -> u32 {
        self.permission_requests
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }
}

impl Default for MockLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for MockLocationProvider {
    fn check_permission(&mut self) -> LocationResult<bool> {
        self.permission_checks += 1;
        Ok(self.permission_granted)
    }

    fn request_permission(&mut self) -> LocationResult<bool> {
        self.permission_requests += 1;
        if self.grant_on_request {
            self.permission_granted = true;
        }
        Ok(self.permission_granted)
    }

    fn fetch_position(&mut self, options: &FetchOptions) -> LocationResult<Coordinate> {
        options.validate()?;
        self.fetch_count += 1;

        if !self.permission_granted {
            return Err(LocationError::PermissionDenied);
        }

        if let Some(error) = self.fail_next_fetch.take() {
            return Err(error);
        }

        match self.fix_queue.pop_front() {
            Some(coordinate) => Ok(coordinate),
            None => Err(LocationError::PositionUnavailable {
                details: "no fix available".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queued_fix_is_returned() {
        let mut provider = MockLocationProvider::new().with_fix(Coordinate::new(39.91, 116.40));
        assert_eq!(provider.queued_fix_count(), 1);

        let fix = provider.fetch_position(&FetchOptions::default()).unwrap();
        assert_eq!(fix, Coordinate::new(39.91, 116.40));
        assert_eq!(provider.queued_fix_count(), 0);
        assert_eq!(provider.fetch_count(), 1);
    }

    #[test]
    fn test_empty_queue_is_unavailable() {
        let mut provider = MockLocationProvider::new();
        let result = provider.fetch_position(&FetchOptions::default());
        assert!(matches!(
            result,
            Err(LocationError::PositionUnavailable { .. })
        ));
    }

    #[test]
    fn test_permission_flow() {
        let mut provider = MockLocationProvider::without_permission(true);
        assert!(!provider.check_permission().unwrap());
        assert!(provider.request_permission().unwrap());
        assert!(provider.check_permission().unwrap());
        assert_eq!(provider.permission_requests(), 1);
    }

    #[test]
    fn test_permission_refused() {
        let mut provider = MockLocationProvider::without_permission(false);
        assert!(!provider.request_permission().unwrap());

        let result = provider.fetch_position(&FetchOptions::default());
        assert_eq!(result, Err(LocationError::PermissionDenied));
    }

    #[test]
    fn test_forced_fetch_failure_is_one_shot() {
        let mut provider = MockLocationProvider::new().with_fix(Coordinate::new(1.0, 2.0));
        provider.fail_next_fetch(LocationError::ProviderFailure {
            details: "service restart".to_string(),
        });

        assert!(provider.fetch_position(&FetchOptions::default()).is_err());
        // The queued fix survives the forced failure
        assert!(provider.fetch_position(&FetchOptions::default()).is_ok());
    }
}
