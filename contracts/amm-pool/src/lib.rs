pub mod contract;
pub mod error;
pub mod events;
pub mod execute;
pub mod messaging;
pub mod msg;
pub mod query;
pub mod reply;
pub mod state;
pub mod validation;

pub use crate::error::ContractError;
