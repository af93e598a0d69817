use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Basket, Delta, OrderLine, Restaurant};

#[derive(Error, Debug)]
pub enum OrderServiceError {
    #[error("Menu item '{menu_id}' is not on the menu of '{restaurant}'")]
    UnknownMenuItem {
        menu_id: String,
        restaurant: String,
    },
}

/// One user's ordering session at one restaurant.
///
/// Owns the basket for the session and resolves unit prices from the
/// restaurant's menu, so callers only ever pass menu ids. Discarded when
/// the user leaves the restaurant; nothing is persisted.
pub struct OrderSession {
    restaurant: Restaurant,
    basket: Basket,
}

impl OrderSession {
    pub fn new(restaurant: Restaurant) -> Self {
        info!("Opening order session for '{}'", restaurant.name);
        Self {
            restaurant,
            basket: Basket::new(),
        }
    }

    pub fn restaurant(&self) -> &Restaurant {
        &self.restaurant
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// One "+" tap on the stepper for `menu_id`.
    pub fn add_item(&mut self, menu_id: &str) -> Result<&OrderLine, OrderServiceError> {
        let price = self.unit_price(menu_id)?;
        debug!("Adding '{}' at {:.2}", menu_id, price);
        Ok(self.basket.increment(menu_id, price))
    }

    /// One "−" tap on the stepper for `menu_id`. Clamps at zero; removing
    /// an item that was never added is a no-op.
    pub fn remove_item(&mut self, menu_id: &str) -> Result<u32, OrderServiceError> {
        let price = self.unit_price(menu_id)?;
        debug!("Removing '{}'", menu_id);
        let quantity = self
            .basket
            .apply_delta(menu_id, price, Delta::Decrement)
            .map(|line| line.quantity)
            .unwrap_or(0);
        Ok(quantity)
    }

    pub fn quantity(&self, menu_id: &str) -> u32 {
        self.basket.quantity(menu_id)
    }

    pub fn item_count(&self) -> u32 {
        self.basket.item_count()
    }

    pub fn total(&self) -> String {
        self.basket.total()
    }

    fn unit_price(&self, menu_id: &str) -> Result<f64, OrderServiceError> {
        self.restaurant
            .menu_item(menu_id)
            .map(|item| item.price)
            .ok_or_else(|| OrderServiceError::UnknownMenuItem {
                menu_id: menu_id.to_string(),
                restaurant: self.restaurant.name.clone(),
            })
    }
}

/// Restaurants whose category tags contain `category`. Pure; an unknown
/// category simply matches nothing.
pub fn filter_restaurants_by_category<'a>(
    restaurants: &'a [Restaurant],
    category: &str,
) -> Vec<&'a Restaurant> {
    restaurants
        .iter()
        .filter(|restaurant| restaurant.has_category(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Courier, MenuItem};

    fn restaurant(id: u32, name: &str, categories: &[&str]) -> Restaurant {
        Restaurant {
            id,
            name: name.to_string(),
            rating: 4.5,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            price_rating: 2,
            photo: String::new(),
            duration: "30 - 45 min".to_string(),
            location: Coordinate::new(0.0, 0.0),
            courier: Courier {
                name: "Amy".to_string(),
                avatar: String::new(),
            },
            menu: vec![
                MenuItem {
                    menu_id: "m1".to_string(),
                    name: "Crispy Chicken Burger".to_string(),
                    photo: String::new(),
                    description: String::new(),
                    calories: 200.0,
                    price: 5.0,
                },
                MenuItem {
                    menu_id: "m2".to_string(),
                    name: "Baked Fries".to_string(),
                    photo: String::new(),
                    description: String::new(),
                    calories: 194.0,
                    price: 3.0,
                },
            ],
        }
    }

    #[test]
    fn test_stepper_scenario() {
        // Three "+" taps then one "−" tap on the same item.
        let mut session = OrderSession::new(restaurant(1, "Burger Lab", &["Burgers"]));
        session.add_item("m1").unwrap();
        session.add_item("m1").unwrap();
        session.add_item("m1").unwrap();
        session.remove_item("m1").unwrap();

        assert_eq!(session.quantity("m1"), 2);
        assert_eq!(session.total(), "10.00");
        assert_eq!(session.item_count(), 2);
    }

    #[test]
    fn test_remove_on_empty_session_is_noop() {
        let mut session = OrderSession::new(restaurant(1, "Burger Lab", &["Burgers"]));
        assert_eq!(session.remove_item("m1").unwrap(), 0);
        assert_eq!(session.item_count(), 0);
        assert_eq!(session.total(), "0.00");
    }

    #[test]
    fn test_unknown_menu_item_is_rejected() {
        let mut session = OrderSession::new(restaurant(1, "Burger Lab", &["Burgers"]));
        assert!(matches!(
            session.add_item("m99"),
            Err(OrderServiceError::UnknownMenuItem { .. })
        ));
    }

    #[test]
    fn test_filter_by_category() {
        let restaurants = vec![
            restaurant(1, "Burger Lab", &["Burgers"]),
            restaurant(2, "Sushi Bento", &["Sushi", "Rice"]),
        ];

        let matched = filter_restaurants_by_category(&restaurants, "Sushi");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, 2);

        assert!(filter_restaurants_by_category(&restaurants, "Tacos").is_empty());
    }
}
