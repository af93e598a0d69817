use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Direction of a single stepper tap on a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Increment,
    Decrement,
}

/// One menu item's quantity and subtotal within a basket.
///
/// `line_total` is derived state: it is recomputed from
/// `quantity × unit_price` on every mutation and never drifts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub menu_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub line_total: f64,
}

impl OrderLine {
    fn new(menu_id: &str, unit_price: f64) -> Self {
        Self {
            menu_id: menu_id.to_string(),
            quantity: 1,
            unit_price,
            line_total: unit_price,
        }
    }

    fn recompute_total(&mut self) {
        self.line_total = self.unit_price * self.quantity as f64;
    }
}

/// In-memory collection of order lines for one restaurant session.
///
/// Created empty when a restaurant screen opens, mutated only through
/// [`Basket::apply_delta`], and discarded when the session ends. Lines are
/// keyed by menu id; insertion order carries no meaning.
#[derive(Debug, Default, Clone)]
pub struct Basket {
    lines: HashMap<String, OrderLine>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current quantity for `menu_id`, 0 when the item was never added.
    /// Read-only.
    pub fn quantity(&self, menu_id: &str) -> u32 {
        self.lines
            .get(menu_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    /// Applies one stepper tap.
    ///
    /// Increment creates the line at quantity 1 or bumps an existing one.
    /// Decrement clamps at 0 and keeps the line in the map, so the stepper
    /// keeps showing an explicit "0"; decrementing an id that was never
    /// added is a no-op and returns `None`.
    pub fn apply_delta(
        &mut self,
        menu_id: &str,
        unit_price: f64,
        delta: Delta,
    ) -> Option<&OrderLine> {
        match delta {
            Delta::Increment => Some(self.increment(menu_id, unit_price)),
            Delta::Decrement => self.decrement(menu_id),
        }
    }

    /// Like [`Basket::apply_delta`] with [`Delta::Increment`], but
    /// infallible since an increment always yields a line.
    pub fn increment(&mut self, menu_id: &str, unit_price: f64) -> &OrderLine {
        let line = self
            .lines
            .entry(menu_id.to_string())
            .and_modify(|line| line.quantity += 1)
            .or_insert_with(|| OrderLine::new(menu_id, unit_price));
        line.recompute_total();
        line
    }

    fn decrement(&mut self, menu_id: &str) -> Option<&OrderLine> {
        let line = self.lines.get_mut(menu_id)?;
        if line.quantity > 0 {
            line.quantity -= 1;
            line.recompute_total();
        }
        Some(line)
    }

    /// Total number of items across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.values().map(|line| line.quantity).sum()
    }

    /// Raw monetary sum of all line totals.
    pub fn subtotal(&self) -> f64 {
        self.lines.values().map(|line| line.line_total).sum()
    }

    /// Basket total formatted for display with two decimals, "0.00" when
    /// empty.
    pub fn total(&self) -> String {
        // `Sum<f64>` uses -0.0 as its identity on current std, so an empty
        // basket would otherwise render as "-0.00"; adding 0.0 normalizes
        // the sign and leaves every other value unchanged.
        format!("{:.2}", self.subtotal() + 0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Lines in menu-id order, for stable display.
    pub fn lines(&self) -> Vec<&OrderLine> {
        let mut lines: Vec<&OrderLine> = self.lines.values().collect();
        lines.sort_by(|a, b| a.menu_id.cmp(&b.menu_id));
        lines
    }
}
