use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::InvalidArgument;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    Adult,
    Child,
    Infant,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 3] = [Self::Adult, Self::Child, Self::Infant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }

    /// Infants sit on an adult's lap.
    pub fn occupies_seat(&self) -> bool {
        match self {
            Self::Adult | Self::Child => true,
            Self::Infant => false,
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketCategory {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InvalidArgument::UnknownCategory(s.to_string()))
    }
}

/// One line item of a purchase. Immutable once built.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRequest {
    category: TicketCategory,
    quantity: u32,
}

impl PurchaseRequest {
    pub fn new(category: TicketCategory, quantity: u32) -> Result<Self, InvalidArgument> {
        if quantity == 0 {
            return Err(InvalidArgument::NonPositiveQuantity(0));
        }
        Ok(Self { category, quantity })
    }

    /// Builds a request from untyped input such as a decoded purchase order.
    pub fn parse(category: &str, quantity: i64) -> Result<Self, InvalidArgument> {
        let category = category.parse()?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or(InvalidArgument::NonPositiveQuantity(quantity))?;
        Self::new(category, quantity)
    }

    pub fn category(&self) -> TicketCategory {
        self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl TryFrom<&RawTicketRequest> for PurchaseRequest {
    type Error = InvalidArgument;

    fn try_from(value: &RawTicketRequest) -> Result<Self, Self::Error> {
        Self::parse(&value.category, value.quantity)
    }
}

impl TryFrom<&TicketLine> for PurchaseRequest {
    type Error = InvalidArgument;

    fn try_from(value: &TicketLine) -> Result<Self, Self::Error> {
        match value {
            TicketLine::Request(request) => Self::try_from(request),
            TicketLine::Malformed(value) => Err(InvalidArgument::Malformed(value.to_string())),
        }
    }
}

/// Ticket line as it arrives in a purchase order, before validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RawTicketRequest {
    #[serde(rename = "type")]
    pub category: String,
    pub quantity: i64,
}

/// Any element of an order's ticket list; shapes that are not a ticket
/// request are kept so they can be rejected during validation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TicketLine {
    Request(RawTicketRequest),
    Malformed(serde_json::Value),
}

impl From<RawTicketRequest> for TicketLine {
    fn from(value: RawTicketRequest) -> Self {
        TicketLine::Request(value)
    }
}
