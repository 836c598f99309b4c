//! Funds sources
//!
//! A funds source is anything that can report a single current balance.
//! The balance checker only ever reads it.

/// Provides the current balance of something that holds money.
///
/// Balances are non-negative by convention, but nothing here enforces that;
/// a source reporting zero or a negative amount is taken at its word.
pub trait FundsSource {
    /// Returns the balance as of this call.
    fn current_balance(&self) -> f64;
}

impl<T: FundsSource + ?Sized> FundsSource for &T {
    fn current_balance(&self) -> f64 {
        (**self).current_balance()
    }
}

impl<T: FundsSource + ?Sized> FundsSource for Box<T> {
    fn current_balance(&self) -> f64 {
        (**self).current_balance()
    }
}

/// A source holding a fixed, caller-supplied balance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBalance(pub f64);

impl FundsSource for FixedBalance {
    fn current_balance(&self) -> f64 {
        self.0
    }
}
