//! Derived-totals arithmetic for the invoice form.
//!
//! The form recomputes these values on every item add/edit/remove and on tax
//! change; the backend stores whatever the client computed. Keeping the
//! arithmetic here (rather than in the wasm crate) lets it run under plain
//! `cargo test` on the host.

use crate::model::invoice::InvoiceItem;

/// Amount of a single line: `qty * rate`.
pub fn line_amount(qty: i64, rate: f64) -> f64 {
    qty as f64 * rate
}

/// Refreshes every item's denormalized `amount` from its `qty` and `rate`.
pub fn recalculate(items: &mut [InvoiceItem]) {
    for item in items {
        item.amount = line_amount(item.qty, item.rate);
    }
}

/// Computes `(sub_total, total)` over the given items.
///
/// `sub_total` is the sum of the items' amounts; `total` adds `tax` percent
/// on top: `total = sub_total * (1 + tax / 100)`.
pub fn invoice_totals(items: &[InvoiceItem], tax: f64) -> (f64, f64) {
    let sub_total: f64 = items.iter().map(|item| item.amount).sum();
    let total = sub_total + sub_total * tax / 100.0;
    (sub_total, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: i64, rate: f64) -> InvoiceItem {
        InvoiceItem {
            qty,
            rate,
            amount: line_amount(qty, rate),
            ..Default::default()
        }
    }

    #[test]
    fn no_items_means_zero_totals() {
        let (sub_total, total) = invoice_totals(&[], 20.0);
        assert_eq!(sub_total, 0.0);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn single_item_with_tax() {
        // Worked example: one item qty=2 rate=50.00 at 20% tax.
        let items = vec![item(2, 50.0)];
        let (sub_total, total) = invoice_totals(&items, 20.0);
        assert_eq!(sub_total, 100.0);
        assert_eq!(total, 120.0);
    }

    #[test]
    fn subtotal_is_sum_of_line_amounts() {
        let items = vec![item(3, 12.5), item(1, 99.99), item(10, 0.4)];
        let (sub_total, total) = invoice_totals(&items, 0.0);
        assert!((sub_total - 141.49).abs() < 1e-9);
        assert_eq!(sub_total, total);
    }

    #[test]
    fn totals_accurate_to_the_cent() {
        let items = vec![item(7, 19.99)];
        let (sub_total, total) = invoice_totals(&items, 17.5);
        assert!((sub_total - 139.93).abs() < 0.005);
        assert!((total - 164.42).abs() < 0.005);
    }

    #[test]
    fn recalculate_refreshes_stale_amounts() {
        let mut items = vec![item(2, 50.0)];
        items[0].qty = 4;
        recalculate(&mut items);
        assert_eq!(items[0].amount, 200.0);

        let (sub_total, total) = invoice_totals(&items, 10.0);
        assert_eq!(sub_total, 200.0);
        assert_eq!(total, 220.0);
    }
}
