pub mod calculations;
pub mod error;
pub mod pool;

pub use crate::calculations::MAX_FEE_BPS;
pub use crate::error::CurveError;
pub use crate::pool::{DepositResult, Pool, SwapResult, WithdrawResult};
