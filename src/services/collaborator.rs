use std::sync::Arc;

use crate::models::account::AccountId;

/// Captures payment for a purchase. Failures are returned to the purchaser untouched.
pub trait PaymentCollaborator {
    type Error: std::error::Error;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error>;
}

/// Reserves seats for a purchase. Failures are returned to the purchaser untouched.
pub trait SeatCollaborator {
    type Error: std::error::Error;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error>;
}

impl<T: PaymentCollaborator + ?Sized> PaymentCollaborator for &T {
    type Error = T::Error;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: PaymentCollaborator + ?Sized> PaymentCollaborator for Arc<T> {
    type Error = T::Error;

    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), Self::Error> {
        (**self).make_payment(account_id, amount)
    }
}

impl<T: SeatCollaborator + ?Sized> SeatCollaborator for &T {
    type Error = T::Error;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        (**self).reserve_seat(account_id, seat_count)
    }
}

impl<T: SeatCollaborator + ?Sized> SeatCollaborator for Arc<T> {
    type Error = T::Error;

    fn reserve_seat(&self, account_id: AccountId, seat_count: u64) -> Result<(), Self::Error> {
        (**self).reserve_seat(account_id, seat_count)
    }
}
