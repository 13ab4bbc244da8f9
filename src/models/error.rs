use std::{error::Error, fmt, io};

use super::ticket::TicketCategory;

/// Rejected construction of a [`PurchaseRequest`](super::ticket::PurchaseRequest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    UnknownCategory(String),
    NonPositiveQuantity(i64),
    Malformed(String),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownCategory(c) => write!(
                f,
                "Invalid argument: type must be ADULT, CHILD, or INFANT, got {c:?}"
            ),
            Self::NonPositiveQuantity(q) => write!(
                f,
                "Invalid argument: quantity must be a positive integer, got {q}"
            ),
            Self::Malformed(v) => write!(f, "Invalid argument: not a ticket request: {v}"),
        }
    }
}

impl Error for InvalidArgument {}

/// Reasons a purchase is refused before any collaborator is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchase {
    NoTicketsProvided,
    InvalidTickets,
    TooManyTickets,
    MissingAdultTicket,
    InvalidAccountId,
}

impl InvalidPurchase {
    /// Stable machine-readable code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoTicketsProvided => "no-tickets-provided",
            Self::InvalidTickets => "invalid-tickets",
            Self::TooManyTickets => "too-many-tickets",
            Self::MissingAdultTicket => "missing-adult-ticket",
            Self::InvalidAccountId => "invalid-account-id",
        }
    }
}

impl fmt::Display for InvalidPurchase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ticket-service.{}", self.reason())
    }
}

impl Error for InvalidPurchase {}

#[derive(Debug)]
pub enum ConfigError {
    MissingPrice(TicketCategory),
    InvalidPrice {
        category: TicketCategory,
        value: String,
    },
    UnknownCategory(String),
    InvalidMaxTickets,
    PriceOverflow {
        category: TicketCategory,
        max_tickets: u32,
    },
    Parse(serde_json::Error),
    Io { path: String, error: io::Error },
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingPrice(c) => write!(f, "Invalid config: no pricing provided for {c}"),
            Self::InvalidPrice { category, value } => write!(
                f,
                "Invalid config: pricing for {category} must be a non-negative integer \
                 (provide it in pence/cents), got {value}"
            ),
            Self::UnknownCategory(c) => write!(f, "Invalid config: unknown ticket type {c:?}"),
            Self::InvalidMaxTickets => {
                write!(f, "Invalid config: max tickets must be a positive integer")
            }
            Self::PriceOverflow {
                category,
                max_tickets,
            } => write!(
                f,
                "Invalid config: {max_tickets} {category} tickets overflow the total price"
            ),
            Self::Parse(e) => write!(f, "Invalid config: {e}"),
            Self::Io { path, error } => {
                write!(f, "Invalid config: failed to read {path}: {error}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_purchase_display_is_prefixed_code() {
        assert_eq!(
            "ticket-service.too-many-tickets",
            InvalidPurchase::TooManyTickets.to_string()
        );
        assert_eq!(
            "missing-adult-ticket",
            InvalidPurchase::MissingAdultTicket.reason()
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let error = serde_json::from_str::<u32>("nope").unwrap_err();
        let config_error = ConfigError::from(error);
        assert!(matches!(config_error, ConfigError::Parse(_)));
        assert!(config_error.source().is_some());
    }
}
