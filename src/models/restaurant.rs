use serde::{Deserialize, Serialize};

use crate::models::delivery::Coordinate;

/// A browsable food category shown on the home screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
}

/// The courier assigned to a restaurant's deliveries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    pub name: String,
    pub avatar: String,
}

/// Where the user currently is; the delivery destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentLocation {
    pub street_name: String,
    pub gps: Coordinate,
}

/// One dish on a restaurant's menu. Immutable mock data; prices and
/// calories are assumed valid (non-negative) by contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub menu_id: String,
    pub name: String,
    pub photo: String,
    pub description: String,
    pub calories: f64,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    pub rating: f64,
    /// Category tags this restaurant belongs to, e.g. "burgers".
    pub categories: Vec<String>,
    /// 1..=3, rendered as $, $$, $$$.
    pub price_rating: u8,
    pub photo: String,
    /// Advertised delivery window, e.g. "30-45 min".
    pub duration: String,
    pub location: Coordinate,
    pub courier: Courier,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn menu_item(&self, menu_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.menu_id == menu_id)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|tag| tag == category)
    }
}

impl std::fmt::Display for Restaurant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.1}★)", self.name, self.rating)
    }
}
