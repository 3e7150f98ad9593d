use constant_product_curve::CurveError;
use cosmwasm_std::{Addr, StdError, Uint128};
use cw_utils::{ParseReplyError, PaymentError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Curve(#[from] CurveError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("No authority set")]
    NoAuthoritySet {},

    #[error("Denom X and Denom Y must be different")]
    IdenticalDenoms {},

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Pool is locked")]
    PoolLocked {},

    #[error("Pool is not initialized with LP token address yet")]
    NotInitialized {},

    #[error(
        "Unauthorized (expected LP token: {expected}) - Only own LP token can trigger withdraw"
    )]
    UnauthorizedLpToken { expected: Addr },

    #[error("Invalid CW20 hook message")]
    InvalidCw20HookMsg {},

    #[error("Invalid denom received: {denom}")]
    InvalidDenom { denom: String },

    #[error("Funds mismatch for {denom}: expected {expected}, received {received}")]
    FundsMismatch {
        denom: String,
        expected: Uint128,
        received: Uint128,
    },

    #[error("Amount {amount} does not fit the pool's 64-bit amounts")]
    AmountTooLarge { amount: Uint128 },

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Missing reply data")]
    MissingReplyData {},

    #[error("Error parsing instantiate reply: {0}")]
    ParseInstantiateReplyError(#[from] ParseReplyError),
}
