use cosmwasm_std::{ConversionOverflowError, DivideByZeroError, OverflowError};
use thiserror::Error;

/// Errors returned by the constant-product curve.
#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("{0}")]
    DivideByZeroError(#[from] DivideByZeroError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    ConversionOverflowError(#[from] ConversionOverflowError),

    /// A required input amount is zero.
    #[error("Amount must be greater than zero")]
    ZeroAmount {},

    /// The pool holds no liquidity to trade or withdraw against.
    #[error("No liquidity in pool")]
    NoLiquidityInPool {},

    /// Deposit needs more than the caller's maximum, or withdraw returns less than the minimum.
    #[error("Excessive slippage")]
    ExcessiveSlippage {},

    #[error("Slippage exceeded: output {amount_out} less than minimum {min_out}")]
    SlippageExceeded { amount_out: u64, min_out: u64 },

    /// More LP shares requested than the caller holds (or than are outstanding).
    #[error("Insufficient LP balance")]
    InsufficientBalance {},

    #[error("Invalid fee: {fee_bps} bps exceeds {max_bps} bps")]
    InvalidFee { fee_bps: u16, max_bps: u16 },

    #[error("Invalid precision: X has {decimals_x} decimals, Y has {decimals_y}")]
    InvalidPrecision { decimals_x: u8, decimals_y: u8 },

    /// A result does not fit the pool's 64-bit amount type.
    #[error("Amount overflows u64")]
    AmountOverflow {},
}
