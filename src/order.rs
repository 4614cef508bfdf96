//! Order

use std::io;

use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::{cart::CartLine, i18n::Catalog, pricing::Totals};

/// What the cart held at the moment it was checked out.
///
/// Order number, table and wait time belong to an order service this crate does not have,
/// so the summary only carries what the cart itself knew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    lines: SmallVec<[CartLine; 8]>,
    comment: String,
    totals: Totals,
}

impl OrderSummary {
    /// Create a new summary with the given details.
    pub fn new(lines: impl IntoIterator<Item = CartLine>, comment: String, totals: Totals) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            comment,
            totals,
        }
    }

    /// Lines as they were in the cart.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Order comment.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Totals at checkout time.
    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Number of units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Print the summary as a table followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write, catalog: &Catalog) -> io::Result<()> {
        let currency = &catalog.common.currency;
        let mut builder = Builder::default();

        for line in &self.lines {
            builder.push_record([
                line.name().to_string(),
                format!("×{}", line.quantity()),
                format!("{} {currency}", line.unit_price()),
                format!("{} {currency}", line.line_total()),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}")?;

        if !self.comment.is_empty() {
            writeln!(out, "{}", self.comment)?;
        }

        let strings = &catalog.cart;

        writeln!(out, "{}: {} {currency}", strings.subtotal, self.totals.subtotal())?;
        writeln!(out, "{}: {} {currency}", strings.service, self.totals.service_charge())?;
        writeln!(out, "{}: {} {currency}", strings.total, self.totals.total())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        i18n::{Catalogs, Language},
        pricing::totals,
    };

    use super::*;

    #[test]
    fn accessors_return_values_from_constructor() -> TestResult {
        let lines = vec![
            CartLine::new("zeama", "Zeamă", 85, 2),
            CartLine::new("compot", "Compot", 30, 3),
        ];
        let totals = totals(&lines)?;

        let summary = OrderSummary::new(lines, "extra bread".to_string(), totals);

        assert_eq!(summary.lines().len(), 2);
        assert_eq!(summary.comment(), "extra bread");
        assert_eq!(summary.totals().subtotal(), 260);
        assert_eq!(summary.totals().total(), 286);
        assert_eq!(summary.item_count(), 5);

        Ok(())
    }

    #[test]
    fn write_to_prints_lines_and_totals() -> TestResult {
        let catalogs = Catalogs::bundled()?;
        let lines = vec![
            CartLine::new("a", "Borscht with sour cream", 200, 2),
            CartLine::new("b", "Cheese placinta", 150, 1),
        ];
        let totals = totals(&lines)?;
        let summary = OrderSummary::new(lines, "no onions".to_string(), totals);

        let mut out = Vec::new();
        summary.write_to(&mut out, catalogs.get(Language::En))?;
        let printed = String::from_utf8(out)?;

        assert!(printed.contains("Borscht with sour cream"));
        assert!(printed.contains("400 MDL"));
        assert!(printed.contains("no onions"));
        assert!(printed.contains("Subtotal: 550 MDL"));
        assert!(printed.contains("Service (10%): 55 MDL"));
        assert!(printed.contains("Total: 605 MDL"));

        Ok(())
    }
}
