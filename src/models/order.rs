use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    account::{AccountId, RawAccountId},
    ticket::TicketLine,
};

pub type PurchaseId = Uuid;

/// Undecoded purchase as read from a JSON document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PurchaseOrder {
    #[serde(default)]
    pub account_id: RawAccountId,
    #[serde(default)]
    pub tickets: Vec<TicketLine>,
}

/// Outcome of validation and pricing, before any collaborator is called.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub account_id: AccountId,
    pub tickets: u64,
    pub total_price: u64,
    pub seats: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub account_id: AccountId,
    pub tickets: u64,
    pub total_price: u64,
    pub seats_reserved: u64,
}
