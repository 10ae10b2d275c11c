mod account_number;
mod customer_id;

pub use account_number::AccountNumber;
pub use customer_id::CustomerId;
