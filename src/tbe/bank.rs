use crate::ids::{AccountNumber, CustomerId};
use crate::{
    Account, AccountError, AccountKind, AccountReport, Customer, CustomerError, Money, MoneyError,
};

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BankError {
    #[error("Target account not found: {0}")]
    NoTarget(AccountNumber),

    #[error("Account not found: {0}")]
    UnknownAccount(AccountNumber),

    #[error("Customer not found: {0}")]
    UnknownCustomer(CustomerId),

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Customer registry and account directory.
///
/// A `Bank` is an explicitly constructed value that callers pass around;
/// there is no process-wide instance. It is also the issuer of customer IDs
/// and account numbers, which it hands out from monotonic counters.
#[derive(Debug)]
pub struct Bank {
    customers: HashMap<CustomerId, Customer>,
    accounts: HashMap<AccountNumber, Account>,
    next_customer_id: u32,
    next_account_number: u64,
}

impl Bank {
    pub fn new() -> Self {
        Self {
            customers: HashMap::new(),
            accounts: HashMap::new(),
            next_customer_id: 1,
            next_account_number: 1000000001,
        }
    }

    pub fn register_customer(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        address: &str,
        pin: u16,
    ) -> Result<CustomerId, BankError> {
        let id = CustomerId(self.next_customer_id);
        let customer = Customer::new(id, name, email, phone, address, pin)?;

        self.customers.insert(id, customer);
        self.next_customer_id += 1;

        log::debug!("Registered customer {id}: {name}");

        Ok(id)
    }

    pub fn authenticate(&self, id: CustomerId, pin: u16) -> Result<(), BankError> {
        let customer = self
            .customers
            .get(&id)
            .ok_or(BankError::UnknownCustomer(id))?;

        if !customer.validate_pin(pin) {
            Err(CustomerError::IncorrectPin)?;
        }

        Ok(())
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.get(&id)
    }

    pub fn customer_mut(&mut self, id: CustomerId) -> Option<&mut Customer> {
        self.customers.get_mut(&id)
    }

    /// Opens an account for a registered customer, issuing the next account
    /// number. Nothing is issued when the opening fails validation.
    pub fn open_account(
        &mut self,
        customer_id: CustomerId,
        opening_balance: Money,
        kind: AccountKind,
    ) -> Result<AccountNumber, BankError> {
        let customer = self
            .customers
            .get_mut(&customer_id)
            .ok_or(BankError::UnknownCustomer(customer_id))?;

        let number = AccountNumber(self.next_account_number);
        let account = Account::open(number, customer.name(), opening_balance, kind)?;

        customer.add_account(number);
        self.accounts.insert(number, account);
        self.next_account_number += 1;

        log::debug!("Opened account {number} for customer {customer_id}");

        Ok(number)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    pub fn account_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.get_mut(&number)
    }

    /// Moves `amount` between two directory accounts. The target is resolved
    /// before the source is touched, so a missing target can never leave the
    /// source debited.
    pub fn transfer(
        &mut self,
        source_no: AccountNumber,
        target_no: AccountNumber,
        amount: Money,
    ) -> Result<(), BankError> {
        if !self.accounts.contains_key(&target_no) {
            return Err(BankError::NoTarget(target_no));
        }

        let source = self
            .accounts
            .get_mut(&source_no)
            .ok_or(BankError::UnknownAccount(source_no))?;

        source.transfer_out(target_no, amount)?;

        // Target presence was established before the debit, so this lookup
        // cannot miss.
        self.accounts
            .get_mut(&target_no)
            .unwrap()
            .transfer_in(source_no, amount)?;

        Ok(())
    }

    /// One report row per account owned by the customer.
    pub fn customer_balances(&self, id: CustomerId) -> Result<Vec<AccountReport>, BankError> {
        let customer = self
            .customers
            .get(&id)
            .ok_or(BankError::UnknownCustomer(id))?;

        let reports = customer
            .accounts()
            .iter()
            .filter_map(|number| self.accounts.get(number))
            .map(AccountReport::for_account)
            .collect();

        Ok(reports)
    }

    pub fn total_balance(&self, id: CustomerId) -> Result<Money, BankError> {
        let customer = self
            .customers
            .get(&id)
            .ok_or(BankError::UnknownCustomer(id))?;

        let mut total = Money::ZERO;
        for number in customer.accounts() {
            if let Some(account) = self.accounts.get(number) {
                total.add(&account.balance())?;
            }
        }

        Ok(total)
    }

    /// One report row per directory account, ordered by account number.
    pub fn build_report(&self) -> Vec<AccountReport> {
        let mut reports = self
            .accounts
            .values()
            .map(AccountReport::for_account)
            .collect::<Vec<AccountReport>>();

        reports.sort();

        reports
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}
