pub mod definitions;
pub mod models;
pub mod services;

pub use definitions::{config::ServiceConfig, pricing::PricingTable};
pub use models::{
    account::{AccountId, RawAccountId},
    error::{ConfigError, InvalidArgument, InvalidPurchase},
    order::{PurchaseOrder, PurchaseReceipt, Quote},
    ticket::{PurchaseRequest, RawTicketRequest, TicketCategory, TicketLine},
};
pub use services::{
    collaborator::{PaymentCollaborator, SeatCollaborator},
    ticket_service::TicketService,
};
