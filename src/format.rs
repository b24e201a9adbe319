//! Display helpers for listings.

/// Format a whole-dollar amount as US currency, e.g. `$4,850,000`
pub fn format_price(price: u64) -> String {
    format!("${}", group_thousands(&price.to_string()))
}

/// Like [`format_price`], but keeps any fractional part as entered
/// (`2.5` is `$2.5`, not `$3`)
pub fn format_amount(amount: f64) -> String {
    let text = amount.to_string();
    match text.split_once('.') {
        Some((whole, fraction)) => format!("${}.{}", group_thousands(whole), fraction),
        None => format!("${}", group_thousands(&text)),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// "1 property", "6 properties"
pub fn result_summary(count: usize) -> String {
    if count == 1 {
        "1 property".to_string()
    } else {
        format!("{} properties", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(1_000), "$1,000");
        assert_eq!(format_price(4_850_000), "$4,850,000");
        assert_eq!(format_price(12_500_000), "$12,500,000");
    }

    #[test]
    fn test_format_amount_keeps_fraction() {
        assert_eq!(format_amount(2.5), "$2.5");
        assert_eq!(format_amount(1_234_567.25), "$1,234,567.25");
        assert_eq!(format_amount(3_000_000.0), "$3,000,000");
        assert_eq!(format_amount(0.0), "$0");
    }

    #[test]
    fn test_result_summary() {
        assert_eq!(result_summary(0), "0 properties");
        assert_eq!(result_summary(1), "1 property");
        assert_eq!(result_summary(6), "6 properties");
    }
}
