use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Map link recorded with attendance punches and status updates.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Outcome of one location acquisition. Failures are soft: the operation
/// goes on with `Unavailable`.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationCapture {
    Located(Coordinates),
    Unavailable,
}

impl LocationCapture {
    pub const UNAVAILABLE: &'static str = "Unavailable";

    /// The value sent to the API: a maps URL or the literal `Unavailable`.
    pub fn to_wire(&self) -> String {
        match self {
            LocationCapture::Located(c) => c.maps_url(),
            LocationCapture::Unavailable => Self::UNAVAILABLE.to_string(),
        }
    }

    pub fn url(&self) -> Option<String> {
        match self {
            LocationCapture::Located(c) => Some(c.maps_url()),
            LocationCapture::Unavailable => None,
        }
    }
}
