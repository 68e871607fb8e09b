pub mod errors;
pub mod customer;
