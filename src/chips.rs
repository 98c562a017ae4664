use std::fmt;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChipsError {
    #[error("stack of {balance} cannot take {amount} more chips")]
    Overflow { balance: u64, amount: u64 },
}

/// A player's stack. Unsigned, so it can never go negative; withdrawals are
/// clamped to the balance (all-in) and deposits that would not fit are refused.
///
/// ```
/// use holdem_settle::chips::Chips;
///
/// let mut stack = Chips::new(300);
/// assert_eq!(stack.subtract(500), 300); // all-in for what is left
/// assert_eq!(stack.get(), 0);
/// stack.add(1200).unwrap();
/// assert_eq!(stack.get(), 1200);
/// assert!(stack.add(u64::MAX).is_err());
/// assert_eq!(stack.get(), 1200);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(u64);

impl Chips {
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Overwrite the balance (table setup, rebuys).
    pub fn set(&mut self, amount: u64) {
        self.0 = amount;
    }

    /// Remove up to `amount` chips and return how many were actually taken.
    pub fn subtract(&mut self, amount: u64) -> u64 {
        let taken = amount.min(self.0);
        self.0 -= taken;
        taken
    }

    /// Deposit `amount`; the stack is left unchanged if it would overflow.
    pub fn add(&mut self, amount: u64) -> Result<(), ChipsError> {
        self.0 = self.checked_add(amount)?;
        Ok(())
    }

    /// Balance after depositing `amount`, without changing the stack.
    pub fn checked_add(&self, amount: u64) -> Result<u64, ChipsError> {
        self.0.checked_add(amount).ok_or(ChipsError::Overflow { balance: self.0, amount })
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for Chips {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
