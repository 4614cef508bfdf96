//! Cart

use tracing::debug;

use crate::{
    order::OrderSummary,
    pricing::{PricingError, Totals, totals},
};

/// A dish as handed to the cart by the menu screens, without a quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartLine {
    /// Stable dish identifier.
    pub id: String,

    /// Display name in the language active when the dish was added.
    pub name: String,

    /// Price of one unit in whole currency units.
    pub unit_price: u32,

    /// Optional image reference.
    pub image: Option<String>,
}

/// One distinct dish in the pending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    id: String,
    name: String,
    unit_price: u32,
    quantity: u32,
    image: Option<String>,
}

impl CartLine {
    fn from_new(line: NewCartLine, quantity: u32) -> Self {
        Self {
            id: line.id,
            name: line.name,
            unit_price: line.unit_price,
            quantity,
            image: line.image,
        }
    }

    /// Create a line directly, mostly useful for pricing.
    ///
    /// A zero quantity is clamped to one; the cart never stores empty lines.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: u32,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: quantity.max(1),
            image: None,
        }
    }

    /// Dish identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name captured at add time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in whole currency units.
    pub fn unit_price(&self) -> u32 {
        self.unit_price
    }

    /// Quantity, always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Image reference, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// `unit_price × quantity`, widened so it cannot overflow.
    pub fn line_total(&self) -> u64 {
        u64::from(self.unit_price) * u64::from(self.quantity)
    }
}

/// The user's pending order: distinct lines in first-added order plus a free-text comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    comment: String,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a dish.
    ///
    /// An existing line with the same id has its quantity bumped by one; otherwise a new
    /// line with quantity one is appended.
    pub fn add_item(&mut self, dish: NewCartLine) {
        self.add_items(dish, 1);
    }

    /// Add `count` units of a dish, the same as calling [`Cart::add_item`] `count` times.
    pub fn add_items(&mut self, dish: NewCartLine, count: u32) {
        if count == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == dish.id) {
            line.quantity = line.quantity.saturating_add(count);

            debug!(id = %line.id, quantity = line.quantity, "cart line incremented");
        } else {
            debug!(id = %dish.id, quantity = count, "cart line added");

            self.lines.push(CartLine::from_new(dish, count));
        }
    }

    /// Remove the line with this id. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.lines.len();

        self.lines.retain(|line| line.id != id);

        if self.lines.len() != before {
            debug!(id, "cart line removed");
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// Zero or negative quantities remove the line. Unknown ids are ignored, no line is created.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == id) {
            line.quantity = quantity;

            debug!(id, quantity, "cart line quantity updated");
        }
    }

    /// Replace the order comment.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Empty the cart and its comment.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.comment.clear();

        debug!("cart cleared");
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Order comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Look up a line by dish id.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Subtotal, service charge and total of the current lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the amounts overflow.
    pub fn totals(&self) -> Result<Totals, PricingError> {
        totals(&self.lines)
    }

    /// Snapshot the order and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the totals cannot be computed, in which case the cart is
    /// left untouched.
    pub fn checkout(&mut self) -> Result<OrderSummary, PricingError> {
        let totals = self.totals()?;
        let lines = std::mem::take(&mut self.lines);
        let comment = std::mem::take(&mut self.comment);

        debug!(lines = lines.len(), total = totals.total(), "cart checked out");

        Ok(OrderSummary::new(lines, comment, totals))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn dish(id: &str, price: u32) -> NewCartLine {
        NewCartLine {
            id: id.to_string(),
            name: format!("Dish {id}"),
            unit_price: price,
            image: None,
        }
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();

        cart.add_item(dish("borscht", 200));
        cart.add_item(dish("placinta", 150));
        cart.add_item(dish("borscht", 200));

        cart
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();

        for _ in 0..4 {
            cart.add_item(dish("mamaliga", 90));
        }

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("mamaliga").map(CartLine::quantity), Some(4));
    }

    #[test]
    fn lines_keep_first_added_order() {
        let cart = filled_cart();

        let ids: Vec<&str> = cart.lines().iter().map(CartLine::id).collect();

        assert_eq!(ids, ["borscht", "placinta"]);
    }

    #[test]
    fn add_keeps_name_captured_first() {
        let mut cart = Cart::new();

        cart.add_item(dish("soup", 100));
        cart.add_item(NewCartLine {
            name: "Soup".to_string(),
            ..dish("soup", 100)
        });

        assert_eq!(cart.get("soup").map(CartLine::name), Some("Dish soup"));
    }

    #[test]
    fn add_items_counts_each_unit() {
        let mut cart = Cart::new();

        cart.add_items(dish("tea", 40), 3);
        cart.add_items(dish("tea", 40), 2);
        cart.add_items(dish("coffee", 45), 0);

        assert_eq!(cart.get("tea").map(CartLine::quantity), Some(5));
        assert!(cart.get("coffee").is_none());
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut cart = filled_cart();
        let before = cart.clone();

        cart.remove_item("missing");

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_existing_line() {
        let mut cart = filled_cart();

        cart.remove_item("borscht");

        assert!(cart.get("borscht").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn non_positive_quantity_equals_removal() {
        let mut removed = filled_cart();
        removed.remove_item("borscht");

        let mut zero = filled_cart();
        zero.update_quantity("borscht", 0);

        let mut negative = filled_cart();
        negative.update_quantity("borscht", -5);

        assert_eq!(zero, removed);
        assert_eq!(negative, removed);
    }

    #[test]
    fn update_quantity_sets_value() {
        let mut cart = filled_cart();

        cart.update_quantity("placinta", 7);

        assert_eq!(cart.get("placinta").map(CartLine::quantity), Some(7));
    }

    #[test]
    fn update_quantity_never_creates_lines() {
        let mut cart = filled_cart();
        let before = cart.clone();

        cart.update_quantity("missing", 3);

        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_saturates_huge_values() {
        let mut cart = filled_cart();

        cart.update_quantity("placinta", i64::MAX);

        assert_eq!(cart.get("placinta").map(CartLine::quantity), Some(u32::MAX));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut cart = filled_cart();
        cart.set_comment("no onions");

        cart.clear();
        let once = cart.clone();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.comment(), "");
        assert_eq!(cart, once);
    }

    #[test]
    fn readd_after_remove_starts_fresh() {
        let mut cart = Cart::new();

        cart.add_item(dish("wine", 300));
        cart.add_item(dish("wine", 300));
        cart.remove_item("wine");
        cart.add_item(dish("wine", 300));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("wine").map(CartLine::quantity), Some(1));
    }

    #[test]
    fn set_comment_replaces_text() {
        let mut cart = Cart::new();

        cart.set_comment("first");
        cart.set_comment("");

        assert_eq!(cart.comment(), "");
    }

    #[test]
    fn item_count_sums_quantities() {
        let cart = filled_cart();

        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn checkout_snapshots_then_clears() -> TestResult {
        let mut cart = filled_cart();
        cart.set_comment("table by the window");
        let expected = cart.totals()?;

        let summary = cart.checkout()?;

        assert_eq!(summary.totals(), &expected);
        assert_eq!(summary.lines().len(), 2);
        assert_eq!(summary.comment(), "table by the window");
        assert!(cart.is_empty());
        assert_eq!(cart.comment(), "");

        Ok(())
    }
}
