use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "food-delivery-cli")]
#[command(about = "A food ordering and delivery tracking demo, in the terminal")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the browsable food categories
    Categories,
    /// Browse restaurants, optionally filtered by category
    Restaurants {
        /// Only show restaurants tagged with this category, e.g. "Burgers"
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show a restaurant's menu
    Menu {
        /// Restaurant id, as listed by `restaurants`
        restaurant_id: u32,
    },
    /// Build an order at a restaurant with an interactive stepper
    Order {
        /// Restaurant id, as listed by `restaurants`
        restaurant_id: u32,
    },
    /// Watch a simulated delivery for a restaurant
    Track {
        /// Restaurant id, as listed by `restaurants`
        restaurant_id: u32,
        /// Number of route updates to simulate
        #[arg(short, long, default_value_t = 10)]
        ticks: u32,
    },
}
