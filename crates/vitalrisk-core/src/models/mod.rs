pub mod account;
pub mod disease;
pub mod patient;
pub mod prediction;
