use crate::ids::{AccountNumber, CustomerId};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CustomerError {
    #[error("Invalid PIN: {0}, PINs are exactly four digits")]
    InvalidPin(u16),

    #[error("Incorrect PIN")]
    IncorrectPin,
}

/// Four-digit numeric PIN, held and compared in memory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(u16);

impl Pin {
    pub fn new(raw: u16) -> Result<Self, CustomerError> {
        if !(1000..=9999).contains(&raw) {
            return Err(CustomerError::InvalidPin(raw));
        }

        Ok(Self(raw))
    }

    pub fn matches(&self, candidate: u16) -> bool {
        self.0 == candidate
    }
}

/// Customer profile plus the numbers of the accounts they own. The accounts
/// themselves live in the bank's directory.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone: String,
    address: String,
    pin: Pin,
    accounts: Vec<AccountNumber>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        pin: u16,
    ) -> Result<Self, CustomerError> {
        Ok(Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            pin: Pin::new(pin)?,
            accounts: vec![],
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }

    pub fn validate_pin(&self, candidate: u16) -> bool {
        self.pin.matches(candidate)
    }

    pub fn change_pin(&mut self, old: u16, new: u16) -> Result<(), CustomerError> {
        if !self.pin.matches(old) {
            return Err(CustomerError::IncorrectPin);
        }

        self.pin = Pin::new(new)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_CUSTOMER_ID: CustomerId = CustomerId(1);

    fn build_customer() -> Customer {
        Customer::new(
            SOME_CUSTOMER_ID,
            "Tolu Ade",
            "toluade@example.com",
            "08012345678",
            "Lagos",
            2222,
        )
        .unwrap()
    }

    #[test]
    fn pin_must_be_four_digits() {
        assert_eq!(Pin::new(999), Err(CustomerError::InvalidPin(999)));
        assert_eq!(Pin::new(10000), Err(CustomerError::InvalidPin(10000)));
        assert!(Pin::new(1000).is_ok());
        assert!(Pin::new(9999).is_ok());
    }

    #[test]
    fn validate_pin() {
        let customer = build_customer();

        assert!(customer.validate_pin(2222));
        assert!(!customer.validate_pin(2223));
    }

    #[test]
    fn change_pin() {
        let mut customer = build_customer();

        customer.change_pin(2222, 4321).unwrap();
        assert!(customer.validate_pin(4321));
        assert!(!customer.validate_pin(2222));
    }

    #[test]
    fn change_pin_requires_the_old_pin() {
        let mut customer = build_customer();

        let res = customer.change_pin(1111, 4321);
        assert_eq!(res, Err(CustomerError::IncorrectPin));
        assert!(customer.validate_pin(2222));
    }

    #[test]
    fn change_pin_validates_the_new_pin() {
        let mut customer = build_customer();

        let res = customer.change_pin(2222, 12);
        assert_eq!(res, Err(CustomerError::InvalidPin(12)));
        assert!(customer.validate_pin(2222));
    }

    #[test]
    fn owned_accounts_are_tracked() {
        let mut customer = build_customer();

        customer.add_account(AccountNumber(1000000001));
        customer.add_account(AccountNumber(1000000002));

        assert_eq!(
            customer.accounts(),
            &[AccountNumber(1000000001), AccountNumber(1000000002)]
        );
    }
}
