//! Display formatting shared by the form, the dialogs and the history view.
//! Single hard-coded currency (GBP), as shipped.

use num_format::{Locale, ToFormattedString};

/// Formats an amount as pounds with thousands separators and two decimals,
/// e.g. `£1,234.50`. Rounds to the nearest penny.
pub fn currency(amount: f64) -> String {
    let pennies = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && pennies > 0 { "-" } else { "" };
    format!(
        "{}£{}.{:02}",
        sign,
        (pennies / 100).to_formatted_string(&Locale::en),
        pennies % 100
    )
}

/// Converts a stored `yyyy-mm-dd` date to `dd-mm-yyyy` for display.
/// Anything not in the stored shape is passed through unchanged.
pub fn display_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() == 3 && parts[0].len() == 4 {
        format!("{}-{}-{}", parts[2], parts[1], parts[0])
    } else {
        date.to_string()
    }
}

/// Groups an account number in fours for display: `1234 5678`.
pub fn account_number(account: &str) -> String {
    group_digits(account, 4, " ")
}

/// Renders a sort code as `12-34-56`.
pub fn sort_code(code: &str) -> String {
    group_digits(code, 2, "-")
}

fn group_digits(value: &str, group: usize, separator: &str) -> String {
    value
        .chars()
        .collect::<Vec<_>>()
        .chunks(group)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_pennies() {
        assert_eq!(currency(0.0), "£0.00");
        assert_eq!(currency(120.0), "£120.00");
        assert_eq!(currency(1234.5), "£1,234.50");
        assert_eq!(currency(19.999), "£20.00");
    }

    #[test]
    fn display_date_flips_stored_dates_only() {
        assert_eq!(display_date("2025-01-31"), "31-01-2025");
        assert_eq!(display_date("31-01-2025"), "31-01-2025");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn bank_fields_group_for_display() {
        assert_eq!(account_number("12345678"), "1234 5678");
        assert_eq!(sort_code("123456"), "12-34-56");
        assert_eq!(account_number("123"), "123");
    }
}
