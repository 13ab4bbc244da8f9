use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{
    error::ConfigError,
    ticket::{PurchaseRequest, TicketCategory},
};

/// Unit price per ticket category in the smallest currency unit.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PricingTable {
    adult: u64,
    child: u64,
    infant: u64,
}

impl PricingTable {
    pub fn new<I>(prices: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (TicketCategory, i64)>,
    {
        let prices: BTreeMap<TicketCategory, i64> = prices.into_iter().collect();
        let price_for = |category: TicketCategory| -> Result<u64, ConfigError> {
            let price = *prices
                .get(&category)
                .ok_or(ConfigError::MissingPrice(category))?;
            u64::try_from(price).map_err(|_| ConfigError::InvalidPrice {
                category,
                value: price.to_string(),
            })
        };
        Ok(Self {
            adult: price_for(TicketCategory::Adult)?,
            child: price_for(TicketCategory::Child)?,
            infant: price_for(TicketCategory::Infant)?,
        })
    }

    /// Builds the table from a decoded config document keyed by category name.
    pub fn from_document(
        prices: &BTreeMap<String, serde_json::Value>,
    ) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(prices.len());
        for (name, value) in prices {
            let category: TicketCategory = name
                .parse()
                .map_err(|_| ConfigError::UnknownCategory(name.clone()))?;
            let price = integer_price(value).ok_or_else(|| ConfigError::InvalidPrice {
                category,
                value: value.to_string(),
            })?;
            entries.push((category, price));
        }
        Self::new(entries)
    }

    pub fn price(&self, category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }

    pub fn highest_price(&self) -> u64 {
        self.adult.max(self.child).max(self.infant)
    }

    /// Sum of price × quantity. Saturates instead of wrapping; a service
    /// config bounds its inputs so that never happens there.
    pub fn total_price(&self, requests: &[PurchaseRequest]) -> u64 {
        requests.iter().fold(0u64, |total, request| {
            total.saturating_add(
                self.price(request.category())
                    .saturating_mul(u64::from(request.quantity())),
            )
        })
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            adult: 2000,
            child: 1000,
            infant: 0,
        }
    }
}

// Negative values are passed through so `new` can name the offending price.
fn integer_price(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Seats needed for a batch; infants do not take a seat.
pub fn seats_required(requests: &[PurchaseRequest]) -> u64 {
    requests
        .iter()
        .filter(|request| request.category().occupies_seat())
        .map(|request| u64::from(request.quantity()))
        .sum()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn requests(items: &[(TicketCategory, u32)]) -> Vec<PurchaseRequest> {
        items
            .iter()
            .map(|(c, q)| PurchaseRequest::new(*c, *q).unwrap())
            .collect()
    }

    fn document(value: serde_json::Value) -> BTreeMap<String, serde_json::Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_total_price_and_seats() {
        let batch = requests(&[
            (TicketCategory::Adult, 5),
            (TicketCategory::Child, 6),
            (TicketCategory::Infant, 3),
        ]);
        assert_eq!(16000, PricingTable::default().total_price(&batch));
        assert_eq!(11, seats_required(&batch));
    }

    #[test]
    fn test_infant_price_comes_from_table() {
        let pricing = PricingTable::new([
            (TicketCategory::Adult, 10),
            (TicketCategory::Child, 5),
            (TicketCategory::Infant, 2),
        ])
        .unwrap();
        let batch = requests(&[(TicketCategory::Adult, 1), (TicketCategory::Infant, 4)]);
        assert_eq!(18, pricing.total_price(&batch));
        assert_eq!(1, seats_required(&batch));
    }

    #[test]
    fn test_missing_price_is_rejected() {
        let result =
            PricingTable::new([(TicketCategory::Adult, 2000), (TicketCategory::Infant, 0)]);
        assert!(matches!(
            result,
            Err(ConfigError::MissingPrice(TicketCategory::Child))
        ));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = PricingTable::new([
            (TicketCategory::Adult, -200),
            (TicketCategory::Child, 0),
            (TicketCategory::Infant, 0),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPrice {
                category: TicketCategory::Adult,
                ..
            })
        ));
    }

    #[test]
    fn test_from_document() {
        let pricing = PricingTable::from_document(&document(
            json!({"ADULT": 2000, "CHILD": 1000, "INFANT": 0}),
        ))
        .unwrap();
        assert_eq!(PricingTable::default(), pricing);

        let result = PricingTable::from_document(&document(
            json!({"ADULT": 20.5, "CHILD": 1000, "INFANT": 0}),
        ));
        assert!(matches!(result, Err(ConfigError::InvalidPrice { .. })));

        let result = PricingTable::from_document(&document(
            json!({"ADULT": "2000", "CHILD": 1000, "INFANT": 0}),
        ));
        assert!(matches!(result, Err(ConfigError::InvalidPrice { .. })));

        let result = PricingTable::from_document(&document(
            json!({"ADULT": 1, "CHILD": 1, "INFANT": 0, "SENIOR": 1}),
        ));
        assert!(matches!(result, Err(ConfigError::UnknownCategory(c)) if c == "SENIOR"));

        let result = PricingTable::from_document(&document(json!({"ADULT": 1, "INFANT": 0})));
        assert!(matches!(
            result,
            Err(ConfigError::MissingPrice(TicketCategory::Child))
        ));
    }
}
