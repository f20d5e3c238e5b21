//! Device position acquisition with a timeout and a soft-failure policy.

use crate::errors::{AppError, AppResult};
use crate::models::location::{Coordinates, LocationCapture};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_position(&self) -> AppResult<Coordinates>;
}

/// Position given on the command line or in the config file.
/// No position configured reads as a denied permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(pub Option<Coordinates>);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> AppResult<Coordinates> {
        self.0.ok_or_else(|| {
            AppError::PermissionDenied(
                "no device position available (pass --lat/--lon or set latitude/longitude in the config)"
                    .to_string(),
            )
        })
    }
}

/// One pending acquisition bounded by `timeout`. Timeout and denial are not
/// fatal: the capture is `Unavailable`.
pub async fn acquire_location(provider: &dyn LocationProvider, timeout: Duration) -> LocationCapture {
    match tokio::time::timeout(timeout, provider.current_position()).await {
        Ok(Ok(coords)) => {
            debug!(lat = coords.latitude, lon = coords.longitude, "position acquired");
            LocationCapture::Located(coords)
        }
        Ok(Err(e)) => {
            warn!("location unavailable: {}", e);
            LocationCapture::Unavailable
        }
        Err(_) => {
            warn!("location unavailable: timed out after {:?}", timeout);
            LocationCapture::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stalled;

    #[async_trait]
    impl LocationProvider for Stalled {
        async fn current_position(&self) -> AppResult<Coordinates> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(Coordinates {
                latitude: 0.0,
                longitude: 0.0,
            })
        }
    }

    #[tokio::test]
    async fn fixed_position_is_returned() {
        let c = Coordinates::new(10.0, 20.0).unwrap();
        let got = acquire_location(&FixedLocation(Some(c)), Duration::from_secs(1)).await;
        assert_eq!(got, LocationCapture::Located(c));
    }

    #[tokio::test]
    async fn denial_is_soft() {
        let got = acquire_location(&FixedLocation(None), Duration::from_secs(1)).await;
        assert_eq!(got, LocationCapture::Unavailable);
    }

    #[tokio::test]
    async fn timeout_is_soft() {
        let got = acquire_location(&Stalled, Duration::from_millis(20)).await;
        assert_eq!(got, LocationCapture::Unavailable);
    }
}
