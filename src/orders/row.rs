//! Display rows for the order table.

use crate::catalog::domain::Order;
use crate::directory::{ProductDirectory, TechnicianDirectory, UserDirectory};
use serde::Serialize;

/// Label shown when an order has no technician.
pub const UNASSIGNED_LABEL: &str = "Not assigned";

/// One order with every reference resolved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    /// Order identifier.
    pub id: String,
    /// Customer name.
    pub customer: String,
    /// Package name.
    pub package: String,
    /// Installation address.
    pub address: String,
    /// Order date, formatted.
    pub order_date: String,
    /// Total price, formatted in rupiah.
    pub total_price: String,
    /// Lifecycle status.
    pub status: String,
    /// Technician name or [`UNASSIGNED_LABEL`].
    pub technician: String,
}

impl OrderRow {
    pub(crate) fn resolve(
        order: &Order,
        users: &UserDirectory,
        products: &ProductDirectory,
        technicians: &TechnicianDirectory,
    ) -> Self {
        let order_date = order.order_day().map_or_else(
            || order.order_date().unwrap_or("-").to_owned(),
            |day| day.format("%d %b %Y").to_string(),
        );
        Self {
            id: order.id().to_string(),
            customer: users.label(order.user_id()),
            package: products.label(order.package_id()),
            address: order.address().to_owned(),
            order_date,
            total_price: format_rupiah(order.total_price()),
            status: order.status().to_string(),
            technician: order
                .technician_id()
                .map_or_else(|| UNASSIGNED_LABEL.to_owned(), |id| technicians.label(id)),
        }
    }
}

/// Formats an amount as whole rupiah with dot thousands separators.
#[must_use]
pub fn format_rupiah(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs());
    let mut reversed = String::with_capacity(digits.len() * 2);
    let mut since_separator = 0_u8;
    for digit in digits.chars().rev() {
        if since_separator == 3 {
            reversed.push('.');
            since_separator = 0;
        }
        reversed.push(digit);
        since_separator += 1;
    }
    let grouped: String = reversed.chars().rev().collect();
    let sign = if amount < 0.0 && grouped.chars().any(|digit| matches!(digit, '1'..='9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}Rp {grouped}")
}

#[cfg(test)]
mod tests {
    use super::format_rupiah;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "Rp 0")]
    #[case(999.0, "Rp 999")]
    #[case(1_000.0, "Rp 1.000")]
    #[case(250_000.0, "Rp 250.000")]
    #[case(1_234_567.4, "Rp 1.234.567")]
    #[case(-15_000.0, "-Rp 15.000")]
    fn rupiah_groups_thousands(#[case] amount: f64, #[case] expected: &str) {
        assert_eq!(format_rupiah(amount), expected);
    }
}
