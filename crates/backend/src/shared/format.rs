/// Display symbol for a 3-letter currency code.
///
/// Codes without a dedicated symbol come back verbatim, so an unexpected
/// marketplace currency still renders something meaningful.
pub fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "GBP" => "£".to_string(),
        "EUR" => "€".to_string(),
        _ => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbol() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("CAD"), "CAD");
        assert_eq!(currency_symbol("JPY"), "JPY");
    }
}
