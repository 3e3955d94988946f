//! Display helpers for prices.

/// Format a price for the product table: currency-prefixed, two decimals.
pub fn format_price(precio: f64) -> String {
    format!("${precio:.2}")
}

/// Format a price for an editable field: two decimals, no currency sign.
pub fn format_price_input(precio: f64) -> String {
    format!("{precio:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(10.0), "$10.00");
    }

    #[test]
    fn rounds_extra_precision() {
        assert_eq!(format_price(9.999), "$10.00");
        assert_eq!(format_price(2.004), "$2.00");
    }

    #[test]
    fn input_form_has_no_currency_sign() {
        assert_eq!(format_price_input(2.5), "2.50");
    }
}
