//! Display formatting for monetary values, ratios and percentages.

/// Fixed two decimal places, the format used in tables and CSV cells.
pub fn format_decimal(value: f64) -> String {
    format!("{:.2}", value)
}

/// Brazilian currency display: `R$ 1.234,56`, sign in front.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (integer, decimal) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    // Thousands separators every three digits from the right.
    let mut grouped = String::new();
    for (i, ch) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let integer: String = grouped.chars().rev().collect();

    if negative {
        format!("-R$ {},{}", integer, decimal)
    } else {
        format!("R$ {},{}", integer, decimal)
    }
}

/// Percentage with two decimals, e.g. `40.00%`.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_decimal(value))
}

/// ROI multiplier, e.g. `2.00x`.
pub fn format_multiplier(value: f64) -> String {
    format!("{}x", format_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(150.0), "150.00");
        assert_eq!(format_decimal(150.456), "150.46");
        assert_eq!(format_decimal(0.0), "0.00");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(42.5), "R$ 42,50");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_brl(-1234.56), "-R$ 1.234,56");
    }

    #[test]
    fn test_format_percent_and_multiplier() {
        assert_eq!(format_percent(40.0), "40.00%");
        assert_eq!(format_multiplier(2.0), "2.00x");
    }
}
