pub mod args;
pub mod controller;
pub mod ctx;
pub mod eligibility;
pub mod error;
pub mod store;
pub mod utils;
