use crate::error::ContractError;
use crate::state::Config;
use cosmwasm_std::{Addr, Api, MessageInfo, Uint128};
use cw_utils::must_pay;

/// Converts a message amount into the pool's raw 64-bit amount.
pub(crate) fn to_pool_amount(amount: Uint128) -> Result<u64, ContractError> {
    u64::try_from(amount.u128()).map_err(|_| ContractError::AmountTooLarge { amount })
}

/// Converts a caller limit (minimum out, desired shares), saturating at `u64::MAX`.
pub(crate) fn to_pool_limit(amount: Uint128) -> u64 {
    u64::try_from(amount.u128()).unwrap_or(u64::MAX)
}

/// Validates the creation authority. A pool without one cannot be locked, so it is refused.
pub(crate) fn validate_authority(
    api: &dyn Api,
    authority: Option<String>,
) -> Result<Addr, ContractError> {
    let authority = authority.ok_or(ContractError::NoAuthoritySet {})?;
    Ok(api.addr_validate(&authority)?)
}

/// Errors unless the LP token exists and the pool is unlocked.
pub(crate) fn ensure_pool_open(cfg: &Config) -> Result<(), ContractError> {
    if !cfg.lp_token_ready() {
        return Err(ContractError::NotInitialized {});
    }
    if cfg.locked {
        return Err(ContractError::PoolLocked {});
    }
    Ok(())
}

/// Validates that the funds are exactly `max_x` of denom X and `max_y` of denom Y.
/// Errors on any other denom.
pub(crate) fn validate_deposit_funds(
    info: &MessageInfo,
    cfg: &Config,
    max_x: Uint128,
    max_y: Uint128,
) -> Result<(), ContractError> {
    let mut received_x = Uint128::zero();
    let mut received_y = Uint128::zero();
    for coin in info.funds.iter() {
        if coin.denom == cfg.denom_x {
            received_x += coin.amount;
        } else if coin.denom == cfg.denom_y {
            received_y += coin.amount;
        } else {
            return Err(ContractError::InvalidDenom {
                denom: coin.denom.clone(),
            });
        }
    }
    for (denom, expected, received) in [
        (&cfg.denom_x, max_x, received_x),
        (&cfg.denom_y, max_y, received_y),
    ] {
        if expected != received {
            return Err(ContractError::FundsMismatch {
                denom: denom.clone(),
                expected,
                received,
            });
        }
    }
    Ok(())
}

/// Validates that the funds are a single coin of `offer_denom` worth exactly `amount_in`.
pub(crate) fn validate_swap_funds(
    info: &MessageInfo,
    offer_denom: &str,
    amount_in: Uint128,
) -> Result<(), ContractError> {
    let received = must_pay(info, offer_denom)?;
    if received != amount_in {
        return Err(ContractError::FundsMismatch {
            denom: offer_denom.to_string(),
            expected: amount_in,
            received,
        });
    }
    Ok(())
}
