use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use console::{style, Emoji};
use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use tracing::info;

use crate::{
    cli::args::{Args, Commands},
    data::mock,
    models::{Coordinate, EdgePadding, Restaurant},
    services::{
        filter_restaurants_by_category, DeliveryTracker, MapCamera, OrderSession,
    },
    utils::{
        formatting::{
            format_basket_table, format_eta, format_menu_table, format_money,
            format_restaurant_table, heading_arrow,
        },
        Config,
    },
};

static CHECKMARK: Emoji<'_, '_> = Emoji("✅ ", "");
static BASKET: Emoji<'_, '_> = Emoji("🧺 ", "");
static SCOOTER: Emoji<'_, '_> = Emoji("🛵 ", "");
static PIN: Emoji<'_, '_> = Emoji("📍 ", "");

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn run(&self, args: Args) -> Result<()> {
        match args.command {
            Commands::Categories => self.handle_categories(),
            Commands::Restaurants { category } => self.handle_restaurants(category),
            Commands::Menu { restaurant_id } => self.handle_menu(restaurant_id),
            Commands::Order { restaurant_id } => self.handle_order(restaurant_id),
            Commands::Track {
                restaurant_id,
                ticks,
            } => self.handle_track(restaurant_id, ticks),
        }
    }

    fn handle_categories(&self) -> Result<()> {
        println!("{}", style("Food categories").bold());
        for category in mock::get_category_data() {
            println!("  {} {}", style(category.id).dim(), category.name);
        }
        Ok(())
    }

    fn handle_restaurants(&self, category: Option<String>) -> Result<()> {
        let restaurants = mock::get_restaurant_data();
        let location = mock::get_initial_location();

        println!(
            "{}Delivering to {}",
            PIN,
            style(&location.street_name).bold()
        );

        let selected: Vec<&Restaurant> = match &category {
            Some(tag) => filter_restaurants_by_category(restaurants, tag),
            None => restaurants.iter().collect(),
        };

        if selected.is_empty() {
            println!(
                "No restaurants found for category '{}'",
                category.unwrap_or_default()
            );
            return Ok(());
        }

        println!("{}", format_restaurant_table(&selected));
        Ok(())
    }

    fn handle_menu(&self, restaurant_id: u32) -> Result<()> {
        let restaurant = mock::restaurant_by_id(restaurant_id)
            .context("Cannot show menu for unknown restaurant")?;

        println!("{}", style(restaurant.to_string()).bold());
        println!("{}", format_menu_table(&restaurant.menu));
        Ok(())
    }

    fn handle_order(&self, restaurant_id: u32) -> Result<()> {
        let restaurant = mock::restaurant_by_id(restaurant_id)
            .context("Cannot open an order for unknown restaurant")?;
        let mut session = OrderSession::new(restaurant.clone());
        let theme = ColorfulTheme::default();

        println!(
            "{}Ordering from {}",
            BASKET,
            style(&restaurant.name).bold()
        );

        loop {
            let mut choices: Vec<String> = restaurant
                .menu
                .iter()
                .map(|item| {
                    format!(
                        "{} — {} (x{})",
                        item.name,
                        format_money(item.price),
                        session.quantity(&item.menu_id)
                    )
                })
                .collect();
            choices.push("Done".to_string());

            let picked = Select::with_theme(&theme)
                .with_prompt(format!(
                    "{} items in basket, total {}",
                    session.item_count(),
                    format_money(session.basket().subtotal())
                ))
                .items(&choices)
                .default(0)
                .interact()?;

            if picked == restaurant.menu.len() {
                break;
            }

            let menu_id = restaurant.menu[picked].menu_id.clone();
            let action = Select::with_theme(&theme)
                .with_prompt("Adjust quantity")
                .items(&["+ Add one", "− Remove one", "Back"])
                .default(0)
                .interact()?;

            match action {
                0 => {
                    session.add_item(&menu_id)?;
                }
                1 => {
                    session.remove_item(&menu_id)?;
                }
                _ => {}
            }
        }

        println!("{}", format_basket_table(session.basket()));

        if session.basket().is_empty() {
            return Ok(());
        }

        println!(
            "{} items — total {}",
            session.item_count(),
            style(format!("${}", session.total())).bold().green()
        );

        let place = Confirm::with_theme(&theme)
            .with_prompt("Place this order?")
            .default(true)
            .interact()?;

        if place {
            info!(
                "Order placed at '{}': {} items, total {}",
                restaurant.name,
                session.item_count(),
                session.total()
            );
            println!(
                "{}Order placed! {} will deliver in {}.",
                CHECKMARK, restaurant.courier.name, restaurant.duration
            );
        } else {
            println!("Order discarded.");
        }

        Ok(())
    }

    fn handle_track(&self, restaurant_id: u32, ticks: u32) -> Result<()> {
        let restaurant = mock::restaurant_by_id(restaurant_id)
            .context("Cannot track a delivery for unknown restaurant")?;
        let location = mock::get_initial_location();

        // Same orientation as the delivery screen: the marker starts at the
        // user's location and travels to the restaurant.
        let origin = location.gps;
        let destination = restaurant.location;

        println!(
            "{}Tracking {} from {}",
            SCOOTER,
            style(&restaurant.courier.name).bold(),
            restaurant.name
        );

        let mut tracker =
            DeliveryTracker::new(origin, destination, Box::new(TerminalCamera));
        let route = mock::plan_route(origin, destination);
        let total_legs = route.coordinates.len().saturating_sub(1).max(1);
        let mut arrived = false;

        for tick in 0..ticks as usize {
            let start = tick.min(route.coordinates.len() - 1);
            let remaining = &route.coordinates[start..];
            let legs_left = remaining.len().saturating_sub(1);
            let eta = route.duration_minutes * legs_left as f64 / total_legs as f64;

            tracker.on_route_ready(remaining, eta);

            let state = tracker.state();
            println!(
                "  {} heading {:>7.1}°  ETA {}  at ({:.5}, {:.5})",
                heading_arrow(state.heading_degrees),
                state.heading_degrees,
                format_eta(state.eta_minutes),
                state.origin.latitude,
                state.origin.longitude
            );

            if legs_left == 0 {
                arrived = true;
                break;
            }
            thread::sleep(Duration::from_millis(self.config.tick_ms));
        }

        if arrived {
            println!("{}{} has arrived!", CHECKMARK, restaurant.courier.name);
        } else {
            println!("{} is still on the way.", restaurant.courier.name);
        }

        Ok(())
    }
}

/// Camera that "frames" the route in the terminal instead of moving a real
/// map viewport.
struct TerminalCamera;

impl MapCamera for TerminalCamera {
    fn fit_to_coordinates(&mut self, coordinates: &[Coordinate], padding: EdgePadding) {
        let (mut min_lat, mut max_lat) = (f64::MAX, f64::MIN);
        let (mut min_lon, mut max_lon) = (f64::MAX, f64::MIN);
        for coordinate in coordinates {
            min_lat = min_lat.min(coordinate.latitude);
            max_lat = max_lat.max(coordinate.latitude);
            min_lon = min_lon.min(coordinate.longitude);
            max_lon = max_lon.max(coordinate.longitude);
        }

        println!(
            "  {} lat [{:.5}, {:.5}] lon [{:.5}, {:.5}] (bottom padding {:.0}%)",
            style("Map fitted to route:").dim(),
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            padding.bottom * 100.0
        );
    }
}
