use std::{error::Error, fmt};

use crate::models::account::AccountId;

use super::collaborator::{PaymentCollaborator, SeatCollaborator};

/// Payment gateway stand-in that only logs what it would charge.
#[derive(Debug, Default, Clone)]
pub struct LoggingPaymentService {}

impl PaymentCollaborator for LoggingPaymentService {
    type Error = ExternalError;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), ExternalError> {
        log::info!("make_payment for account {account_id} amount {amount}");
        Ok(())
    }
}

/// Seat booking stand-in that only logs what it would reserve.
#[derive(Debug, Default, Clone)]
pub struct LoggingSeatReservationService {}

impl SeatCollaborator for LoggingSeatReservationService {
    type Error = ExternalError;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), ExternalError> {
        log::info!("reserve_seat for account {account_id} seats {seat_count}");
        Ok(())
    }
}

#[derive(Debug)]
pub struct ExternalError {
    pub service: &'static str,
    pub message: String,
}

impl fmt::Display for ExternalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ExternalError from {}: {}", self.service, self.message)
    }
}

impl Error for ExternalError {}

#[cfg(test)]
mod tests {
    use crate::{
        definitions::config::ServiceConfig,
        models::{
            order::PurchaseReceipt,
            ticket::{PurchaseRequest, TicketCategory},
        },
        services::ticket_service::TicketService,
    };

    use super::*;

    #[test]
    fn test_logging_services_accept_purchase() {
        let service = TicketService::from_config(
            ServiceConfig::default(),
            LoggingPaymentService::default(),
            LoggingSeatReservationService::default(),
        );
        let requests = [PurchaseRequest::new(TicketCategory::Adult, 2).unwrap()];
        let result: Result<PurchaseReceipt, Box<dyn Error>> =
            service.purchase_tickets("12", &requests);
        let receipt = result.unwrap();
        assert_eq!(12, receipt.account_id.get());
        assert_eq!(4000, receipt.total_price);
    }

    #[test]
    fn test_external_error_names_service() {
        let error = ExternalError {
            service: "payment-gateway",
            message: "card declined".to_string(),
        };
        assert_eq!(
            "ExternalError from payment-gateway: card declined",
            error.to_string()
        );
        let boxed: Box<dyn Error> = error.into();
        assert!(boxed.downcast_ref::<ExternalError>().is_some());
    }
}
