use tracing::{debug, info};

use crate::models::{Coordinate, DeliveryState, EdgePadding, Region};

/// Region framing `origin` and `destination`: centered on their midpoint,
/// zoomed so both sit well inside the viewport.
pub fn compute_region(origin: Coordinate, destination: Coordinate) -> Region {
    Region {
        center: Coordinate {
            latitude: (origin.latitude + destination.latitude) / 2.0,
            longitude: (origin.longitude + destination.longitude) / 2.0,
        },
        latitude_delta: (origin.latitude - destination.latitude).abs() * 2.0,
        longitude_delta: (origin.longitude - destination.longitude).abs() * 2.0,
    }
}

/// Heading of travel from `a` to `b` in degrees, for rotating the courier
/// marker. Identical coordinates give 0.0 rather than a NaN.
pub fn compute_heading_degrees(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = b.latitude - a.latitude;
    let d_lon = b.longitude - a.longitude;

    if d_lat == 0.0 && d_lon == 0.0 {
        return 0.0;
    }

    d_lon.atan2(d_lat).to_degrees()
}

/// Seam to the map view's camera, so the tracker never talks to a concrete
/// renderer and tests can count fit requests.
pub trait MapCamera {
    /// Adjust the viewport once so every coordinate is visible inside the
    /// given padding.
    fn fit_to_coordinates(&mut self, coordinates: &[Coordinate], padding: EdgePadding);
}

/// Tracks one delivery session: courier position, heading, ETA and the
/// one-shot camera fit.
///
/// Fed by the external directions provider through
/// [`DeliveryTracker::on_route_ready`], which may fire repeatedly as the
/// provider streams updated routes.
pub struct DeliveryTracker {
    state: DeliveryState,
    camera: Box<dyn MapCamera>,
}

impl DeliveryTracker {
    pub fn new(
        origin: Coordinate,
        destination: Coordinate,
        camera: Box<dyn MapCamera>,
    ) -> Self {
        let state = DeliveryState {
            origin,
            destination,
            region: compute_region(origin, destination),
            heading_degrees: 0.0,
            eta_minutes: 0.0,
            has_fitted_map_once: false,
        };
        Self { state, camera }
    }

    pub fn state(&self) -> &DeliveryState {
        &self.state
    }

    /// Handles one route update from the directions provider.
    ///
    /// The ETA always updates. The camera fit fires on the first usable
    /// route only; later updates must not fight the user's pan/zoom. With
    /// at least two coordinates the courier snaps to the route start and
    /// the heading follows the first segment; with fewer, both stay as
    /// they were. An empty route is not an error.
    pub fn on_route_ready(&mut self, coordinates: &[Coordinate], duration_minutes: f64) {
        self.state.eta_minutes = duration_minutes;

        if !self.state.has_fitted_map_once && !coordinates.is_empty() {
            info!("Fitting camera to route ({} waypoints)", coordinates.len());
            self.camera
                .fit_to_coordinates(coordinates, EdgePadding::route_overview());
            self.state.has_fitted_map_once = true;
        }

        if coordinates.len() >= 2 {
            self.state.heading_degrees = compute_heading_degrees(coordinates[0], coordinates[1]);
            self.state.origin = coordinates[0];
            debug!(
                "Courier at ({:.6}, {:.6}), heading {:.1}°, ETA {:.1} min",
                self.state.origin.latitude,
                self.state.origin.longitude,
                self.state.heading_degrees,
                self.state.eta_minutes
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct RecordingCamera {
        fits: Rc<Cell<u32>>,
    }

    impl MapCamera for RecordingCamera {
        fn fit_to_coordinates(&mut self, _coordinates: &[Coordinate], _padding: EdgePadding) {
            self.fits.set(self.fits.get() + 1);
        }
    }

    fn tracker_with_counter() -> (DeliveryTracker, Rc<Cell<u32>>) {
        let fits = Rc::new(Cell::new(0));
        let camera = RecordingCamera { fits: fits.clone() };
        let tracker = DeliveryTracker::new(
            Coordinate::new(0.0, 0.0),
            Coordinate::new(2.0, 4.0),
            Box::new(camera),
        );
        (tracker, fits)
    }

    #[test]
    fn test_region_midpoint_and_deltas() {
        let region = compute_region(Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 4.0));
        assert_eq!(region.center, Coordinate::new(1.0, 2.0));
        assert_eq!(region.latitude_delta, 4.0);
        assert_eq!(region.longitude_delta, 8.0);
    }

    #[test]
    fn test_heading_northeast_is_45_degrees() {
        let heading =
            compute_heading_degrees(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0));
        assert!((heading - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_of_identical_coordinates_is_zero() {
        let here = Coordinate::new(1.5, 110.3);
        assert_eq!(compute_heading_degrees(here, here), 0.0);
    }

    #[test]
    fn test_fit_fires_exactly_once() {
        let (mut tracker, fits) = tracker_with_counter();
        let route = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 2.0),
            Coordinate::new(2.0, 4.0),
        ];

        tracker.on_route_ready(&route, 12.0);
        tracker.on_route_ready(&route, 10.0);

        assert_eq!(fits.get(), 1);
        assert_eq!(tracker.state().eta_minutes, 10.0);
        assert!(tracker.state().has_fitted_map_once);
    }

    #[test]
    fn test_empty_route_only_updates_eta() {
        let (mut tracker, fits) = tracker_with_counter();
        let origin_before = tracker.state().origin;

        tracker.on_route_ready(&[], 7.5);

        assert_eq!(fits.get(), 0);
        assert_eq!(tracker.state().eta_minutes, 7.5);
        assert_eq!(tracker.state().origin, origin_before);
        assert_eq!(tracker.state().heading_degrees, 0.0);
        assert!(!tracker.state().has_fitted_map_once);
    }

    #[test]
    fn test_short_route_keeps_origin_and_heading() {
        let (mut tracker, _fits) = tracker_with_counter();
        let route = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 1.0),
        ];
        tracker.on_route_ready(&route, 5.0);
        let heading_before = tracker.state().heading_degrees;

        tracker.on_route_ready(&[Coordinate::new(9.0, 9.0)], 4.0);

        assert_eq!(tracker.state().heading_degrees, heading_before);
        assert_eq!(tracker.state().origin, Coordinate::new(0.0, 0.0));
        assert_eq!(tracker.state().eta_minutes, 4.0);
    }

    #[test]
    fn test_courier_snaps_to_route_start() {
        let (mut tracker, _fits) = tracker_with_counter();
        let route = [Coordinate::new(0.5, 1.0), Coordinate::new(1.0, 2.0)];

        tracker.on_route_ready(&route, 6.0);

        assert_eq!(tracker.state().origin, Coordinate::new(0.5, 1.0));
    }
}
