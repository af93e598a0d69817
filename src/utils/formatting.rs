use chrono::{Duration, Local};
use console::style;
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::{Basket, MenuItem, Restaurant};

#[derive(Tabled)]
struct RestaurantTableRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Restaurant")]
    name: String,
    #[tabled(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Categories")]
    categories: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Delivery")]
    delivery: String,
}

pub fn format_restaurant_table(restaurants: &[&Restaurant]) -> String {
    if restaurants.is_empty() {
        return String::new();
    }

    let rows: Vec<RestaurantTableRow> = restaurants
        .iter()
        .map(|restaurant| RestaurantTableRow {
            id: restaurant.id,
            name: truncate(&restaurant.name, 30),
            rating: format!("{:.1}★", restaurant.rating),
            categories: restaurant.categories.join(", "),
            price: format_price_rating(restaurant.price_rating),
            delivery: restaurant.duration.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

#[derive(Tabled)]
struct MenuTableRow {
    #[tabled(rename = "ID")]
    menu_id: String,
    #[tabled(rename = "Item")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Calories")]
    calories: String,
    #[tabled(rename = "Price")]
    price: String,
}

pub fn format_menu_table(menu: &[MenuItem]) -> String {
    if menu.is_empty() {
        return String::new();
    }

    let rows: Vec<MenuTableRow> = menu
        .iter()
        .map(|item| MenuTableRow {
            menu_id: item.menu_id.clone(),
            name: truncate(&item.name, 30),
            description: truncate(&item.description, 40),
            calories: format!("{:.0} cal", item.calories),
            price: format_money(item.price),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

#[derive(Tabled)]
struct BasketTableRow {
    #[tabled(rename = "ID")]
    menu_id: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit")]
    unit_price: String,
    #[tabled(rename = "Subtotal")]
    line_total: String,
}

pub fn format_basket_table(basket: &Basket) -> String {
    let rows: Vec<BasketTableRow> = basket
        .lines()
        .into_iter()
        .map(|line| BasketTableRow {
            menu_id: line.menu_id.clone(),
            quantity: line.quantity,
            unit_price: format_money(line.unit_price),
            line_total: format_money(line.line_total),
        })
        .collect();

    if rows.is_empty() {
        return format!("{}", style("Your basket is empty").dim());
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_price_rating(rating: u8) -> String {
    "$".repeat(rating.clamp(1, 3) as usize)
}

/// "12 mins (around 18:42)" — ETA rounded up like the source's
/// `Math.ceil(duration)` readout.
pub fn format_eta(eta_minutes: f64) -> String {
    let minutes = eta_minutes.ceil() as i64;
    let arrival = Local::now() + Duration::minutes(minutes);
    format!("{} mins (around {})", minutes, arrival.format("%H:%M"))
}

/// Eight-wind compass arrow for a heading in degrees, so the courier's
/// direction reads at a glance in the terminal.
pub fn heading_arrow(heading_degrees: f64) -> &'static str {
    let normalized = heading_degrees.rem_euclid(360.0);
    match (normalized / 45.0).round() as u32 % 8 {
        0 => "↑",
        1 => "↗",
        2 => "→",
        3 => "↘",
        4 => "↓",
        5 => "↙",
        6 => "←",
        _ => "↖",
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() > max {
        format!("{}...", &text[..max - 3])
    } else {
        text.to_string()
    }
}
