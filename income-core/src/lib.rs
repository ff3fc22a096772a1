pub mod calculations;
pub mod distribution;
pub mod models;
pub mod scenarios;

pub use models::*;
