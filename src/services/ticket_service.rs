use uuid::Uuid;

use crate::{
    definitions::{
        config::ServiceConfig,
        pricing::{seats_required, PricingTable},
    },
    models::{
        account::{parse_account_id, RawAccountId},
        error::{ConfigError, InvalidPurchase},
        order::{PurchaseOrder, PurchaseReceipt, Quote},
        ticket::{PurchaseRequest, TicketCategory},
    },
};

use super::collaborator::{PaymentCollaborator, SeatCollaborator};

/// Validates ticket purchases, then charges and seats them.
///
/// Checks run in a fixed order: ticket count, adult presence, account id.
/// Only a purchase that passes all three reaches the payment collaborator,
/// and seats are reserved only after payment succeeded.
pub struct TicketService<P, S> {
    config: ServiceConfig,
    payment: P,
    seating: S,
}

impl<P, S> TicketService<P, S>
where
    P: PaymentCollaborator,
    S: SeatCollaborator,
{
    pub fn new(
        pricing: PricingTable,
        max_tickets: u32,
        payment: P,
        seating: S,
    ) -> Result<Self, ConfigError> {
        let config = ServiceConfig::new(pricing, max_tickets)?;
        Ok(Self::from_config(config, payment, seating))
    }

    pub fn from_config(config: ServiceConfig, payment: P, seating: S) -> Self {
        Self {
            config,
            payment,
            seating,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Runs every check and computes totals without side effects.
    pub fn quote(
        &self,
        account_id: impl Into<RawAccountId>,
        requests: &[PurchaseRequest],
    ) -> Result<Quote, InvalidPurchase> {
        let tickets = self.check_ticket_count(requests)?;
        check_adult_present(requests)?;
        let account_id = parse_account_id(&account_id.into())?;

        let total_price = self.config.pricing().total_price(requests);
        let seats = seats_required(requests);
        log::debug!(
            "quote for account {account_id}: {tickets} tickets, price {total_price}, seats {seats}"
        );
        Ok(Quote {
            account_id,
            tickets,
            total_price,
            seats,
        })
    }

    pub fn purchase_tickets<E>(
        &self,
        account_id: impl Into<RawAccountId>,
        requests: &[PurchaseRequest],
    ) -> Result<PurchaseReceipt, E>
    where
        E: From<InvalidPurchase> + From<P::Error> + From<S::Error>,
    {
        let purchase_id = Uuid::new_v4();
        log::trace!("purchase {purchase_id}: validating {} requests", requests.len());

        let quote = self.quote(account_id, requests).map_err(|e| {
            log::warn!("purchase {purchase_id} rejected: {e}");
            e
        })?;

        self.payment
            .make_payment(quote.account_id, quote.total_price)?;
        log::trace!("purchase {purchase_id}: payment taken");

        self.seating.reserve_seat(quote.account_id, quote.seats)?;
        log::info!(
            "purchase {purchase_id} completed for account {}: {} tickets, {} seats, price {}",
            quote.account_id,
            quote.tickets,
            quote.seats,
            quote.total_price
        );

        Ok(PurchaseReceipt {
            purchase_id,
            account_id: quote.account_id,
            tickets: quote.tickets,
            total_price: quote.total_price,
            seats_reserved: quote.seats,
        })
    }

    /// Purchase from an undecoded order; malformed ticket lines are `invalid-tickets`.
    pub fn purchase_raw<E>(&self, order: &PurchaseOrder) -> Result<PurchaseReceipt, E>
    where
        E: From<InvalidPurchase> + From<P::Error> + From<S::Error>,
    {
        if order.tickets.is_empty() {
            log::warn!("order for {:?} rejected: no tickets", order.account_id);
            return Err(InvalidPurchase::NoTicketsProvided.into());
        }
        let requests = order
            .tickets
            .iter()
            .map(PurchaseRequest::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                log::warn!("order for {:?} rejected: {e}", order.account_id);
                InvalidPurchase::InvalidTickets
            })?;
        self.purchase_tickets(order.account_id.clone(), &requests)
    }

    fn check_ticket_count(&self, requests: &[PurchaseRequest]) -> Result<u64, InvalidPurchase> {
        if requests.is_empty() {
            return Err(InvalidPurchase::NoTicketsProvided);
        }
        let total: u64 = requests.iter().map(|r| u64::from(r.quantity())).sum();
        if total > u64::from(self.config.max_tickets()) {
            return Err(InvalidPurchase::TooManyTickets);
        }
        if total == 0 {
            return Err(InvalidPurchase::NoTicketsProvided);
        }
        Ok(total)
    }
}

fn check_adult_present(requests: &[PurchaseRequest]) -> Result<(), InvalidPurchase> {
    if requests
        .iter()
        .any(|r| r.category() == TicketCategory::Adult)
    {
        Ok(())
    } else {
        Err(InvalidPurchase::MissingAdultTicket)
    }
}
