use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Category, Coordinate, CurrentLocation, Restaurant};

/// Average courier speed assumed by the mock directions provider.
const COURIER_SPEED_KMH: f64 = 30.0;
/// Number of waypoints a planned route is sampled into.
const ROUTE_WAYPOINTS: usize = 12;
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Restaurant with id {0} not found")]
    UnknownRestaurant(u32),
}

#[derive(Debug, Deserialize)]
struct MockDataset {
    initial_location: CurrentLocation,
    categories: Vec<Category>,
    restaurants: Vec<Restaurant>,
}

lazy_static! {
    static ref DATASET: MockDataset =
        serde_json::from_str(include_str!("restaurants.json"))
            .expect("embedded restaurants.json is valid");
}

/// Snapshot of the browsable categories, as the home screen would fetch
/// them.
pub fn get_category_data() -> &'static [Category] {
    &DATASET.categories
}

/// The user's current location and street name.
pub fn get_initial_location() -> &'static CurrentLocation {
    &DATASET.initial_location
}

pub fn get_restaurant_data() -> &'static [Restaurant] {
    &DATASET.restaurants
}

pub fn restaurant_by_id(id: u32) -> Result<&'static Restaurant, DataError> {
    DATASET
        .restaurants
        .iter()
        .find(|restaurant| restaurant.id == id)
        .ok_or(DataError::UnknownRestaurant(id))
}

/// What the directions provider hands back for one route request.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub coordinates: Vec<Coordinate>,
    pub duration_minutes: f64,
}

/// Mock directions provider: samples a straight line between `origin` and
/// `destination` into [`ROUTE_WAYPOINTS`] coordinates and estimates the
/// ride time from the great-circle distance.
pub fn plan_route(origin: Coordinate, destination: Coordinate) -> RouteResult {
    let mut coordinates = Vec::with_capacity(ROUTE_WAYPOINTS);
    for step in 0..ROUTE_WAYPOINTS - 1 {
        let t = step as f64 / (ROUTE_WAYPOINTS - 1) as f64;
        coordinates.push(Coordinate {
            latitude: origin.latitude + (destination.latitude - origin.latitude) * t,
            longitude: origin.longitude + (destination.longitude - origin.longitude) * t,
        });
    }
    // The interpolation lands close to the endpoint; snap the last waypoint
    // onto it exactly.
    coordinates.push(destination);

    let distance_km = haversine_km(origin, destination);
    let duration_minutes = (distance_km / COURIER_SPEED_KMH * 60.0).max(1.0);

    debug!(
        "Planned route: {} waypoints, {:.2} km, {:.1} min",
        coordinates.len(),
        distance_km,
        duration_minutes
    );

    RouteResult {
        coordinates,
        duration_minutes,
    }
}

fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_parses_and_is_consistent() {
        let restaurants = get_restaurant_data();
        assert!(!restaurants.is_empty());
        assert!(!get_category_data().is_empty());

        for restaurant in restaurants {
            assert!(!restaurant.menu.is_empty());
            for item in &restaurant.menu {
                assert!(item.price >= 0.0);
                assert!(item.calories >= 0.0);
            }
        }
    }

    #[test]
    fn test_restaurant_lookup() {
        assert!(restaurant_by_id(1).is_ok());
        assert!(matches!(
            restaurant_by_id(999),
            Err(DataError::UnknownRestaurant(999))
        ));
    }

    #[test]
    fn test_planned_route_spans_endpoints() {
        let origin = Coordinate::new(1.5, 110.3);
        let destination = Coordinate::new(1.6, 110.4);
        let route = plan_route(origin, destination);

        assert_eq!(route.coordinates.len(), ROUTE_WAYPOINTS);
        assert_eq!(route.coordinates[0], origin);
        assert_eq!(*route.coordinates.last().unwrap(), destination);
        assert!(route.duration_minutes >= 1.0);
    }
}
