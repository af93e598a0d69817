use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Map viewport descriptor: center plus zoom deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Viewport padding for a camera fit, as fractions of the viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgePadding {
    /// Padding used when framing the delivery route. The bottom fraction is
    /// the largest so the route stays visible above the bottom info panel.
    pub fn route_overview() -> Self {
        Self {
            top: 1.0 / 8.0,
            right: 1.0 / 20.0,
            bottom: 1.0 / 4.0,
            left: 1.0 / 20.0,
        }
    }
}

/// Everything a delivery screen session tracks about the ride.
///
/// `has_fitted_map_once` is the whole state machine: it gates the one-time
/// camera fit and never transitions back.
#[derive(Debug, Clone)]
pub struct DeliveryState {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub region: Region,
    pub heading_degrees: f64,
    pub eta_minutes: f64,
    pub has_fitted_map_once: bool,
}
