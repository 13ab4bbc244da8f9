use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::models::{error::ConfigError, ticket::TicketCategory};

use super::pricing::PricingTable;

pub const DEFAULT_MAX_TICKETS: u32 = 20;

/// Pricing and ticket cap for a [`TicketService`](crate::services::ticket_service::TicketService).
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pricing: PricingTable,
    max_tickets: u32,
}

#[derive(Deserialize)]
struct ConfigDocument {
    pricing: BTreeMap<String, serde_json::Value>,
    #[serde(default = "default_max_tickets")]
    max_tickets: u32,
}

fn default_max_tickets() -> u32 {
    DEFAULT_MAX_TICKETS
}

impl ServiceConfig {
    pub fn new(pricing: PricingTable, max_tickets: u32) -> Result<Self, ConfigError> {
        if max_tickets == 0 {
            return Err(ConfigError::InvalidMaxTickets);
        }
        // every price must survive a full basket of the dearest ticket
        if pricing
            .highest_price()
            .checked_mul(u64::from(max_tickets))
            .is_none()
        {
            let category = TicketCategory::ALL
                .into_iter()
                .max_by_key(|c| pricing.price(*c))
                .unwrap_or(TicketCategory::Adult);
            return Err(ConfigError::PriceOverflow {
                category,
                max_tickets,
            });
        }
        Ok(Self {
            pricing,
            max_tickets,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let document: ConfigDocument = serde_json::from_str(json)?;
        let pricing = PricingTable::from_document(&document.pricing)?;
        Self::new(pricing, document.max_tickets)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e,
        })?;
        Self::from_json(&json)
    }

    pub fn pricing(&self) -> &PricingTable {
        &self.pricing
    }

    pub fn max_tickets(&self) -> u32 {
        self.max_tickets
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            pricing: PricingTable::default(),
            max_tickets: DEFAULT_MAX_TICKETS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config = ServiceConfig::from_json(
            r#"{"pricing": {"ADULT": 2000, "CHILD": 1000, "INFANT": 0}, "max_tickets": 20}"#,
        )
        .unwrap();
        assert_eq!(ServiceConfig::default(), config);

        let config =
            ServiceConfig::from_json(r#"{"pricing": {"ADULT": 3, "CHILD": 2, "INFANT": 1}}"#)
                .unwrap();
        assert_eq!(DEFAULT_MAX_TICKETS, config.max_tickets());
        assert_eq!(1, config.pricing().price(TicketCategory::Infant));
    }

    #[test]
    fn test_from_json_errors() {
        let result = ServiceConfig::from_json("{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let result = ServiceConfig::from_json(
            r#"{"pricing": {"ADULT": 2000, "CHILD": 1000, "INFANT": 0}, "max_tickets": 0}"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidMaxTickets)));

        let result = ServiceConfig::from_json(r#"{"pricing": {"ADULT": 2000, "INFANT": 0}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::MissingPrice(TicketCategory::Child))
        ));
    }

    #[test]
    fn test_price_overflow_is_rejected() {
        let pricing = PricingTable::new([
            (TicketCategory::Adult, i64::MAX),
            (TicketCategory::Child, 1),
            (TicketCategory::Infant, 0),
        ])
        .unwrap();
        assert!(ServiceConfig::new(pricing, 1).is_ok());
        let result = ServiceConfig::new(pricing, 3);
        assert!(matches!(
            result,
            Err(ConfigError::PriceOverflow {
                category: TicketCategory::Adult,
                max_tickets: 3
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = ServiceConfig::from_file("/nonexistent/ticket-service.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
