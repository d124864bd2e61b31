pub mod contract;
pub mod error;
pub mod rules;
pub mod validate;
