//! Currency catalog data model

use serde::Serialize;

/// A registered currency.
///
/// `code` is globally unique (uppercase alphanumeric, 3-5 chars).
/// `quantifier` is the number of decimal places used when rendering
/// amounts and rates in this currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub id: i64,
    pub code: String,
    pub quantifier: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_equality_by_value() {
        let a = Currency {
            id: 1,
            code: "USD".to_string(),
            quantifier: 2,
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
