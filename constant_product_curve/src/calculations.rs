use crate::error::CurveError;
use cosmwasm_std::{Isqrt, Uint128, Uint256};

/// Fee denominator: 10_000 basis points is 100%.
pub const MAX_FEE_BPS: u16 = 10_000;

fn widen(value: u64) -> Uint256 {
    Uint256::from(Uint128::from(value))
}

fn narrow(value: Uint256) -> Result<u64, CurveError> {
    let value = Uint128::try_from(value)?;
    u64::try_from(value.u128()).map_err(|_| CurveError::AmountOverflow {})
}

/// `floor(a * b / denominator)` with a 256-bit intermediate.
fn mul_div_floor(a: u64, b: u64, denominator: Uint256) -> Result<u64, CurveError> {
    let product = Uint128::from(a).full_mul(b);
    narrow(product.checked_div(denominator)?)
}

/// `ceil(a * b / denominator)` with a 256-bit intermediate.
fn mul_div_ceil(a: u64, b: u64, denominator: Uint256) -> Result<u64, CurveError> {
    let product = Uint128::from(a).full_mul(b);
    let quotient = product.checked_div(denominator)?;
    if product.checked_rem(denominator)?.is_zero() {
        narrow(quotient)
    } else {
        narrow(quotient.checked_add(Uint256::one())?)
    }
}

pub(crate) fn checked_add(a: u64, b: u64) -> Result<u64, CurveError> {
    a.checked_add(b).ok_or(CurveError::AmountOverflow {})
}

/// Calculates the initial LP shares using the geometric mean: sqrt(x * y).
pub fn calculate_initial_lp_shares(amount_x: u64, amount_y: u64) -> Result<u64, CurveError> {
    if amount_x == 0 || amount_y == 0 {
        return Err(CurveError::ZeroAmount {});
    }
    let prod = Uint128::from(amount_x).full_mul(amount_y);
    narrow(prod.isqrt())
}

/// Amounts of X and Y required to mint `desired_lp` shares at the current ratio.
/// Rounds up so the pool is never under-collateralised.
pub fn calculate_deposit_amounts(
    desired_lp: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64), CurveError> {
    if lp_supply == 0 {
        return Err(CurveError::NoLiquidityInPool {});
    }
    let supply = widen(lp_supply);
    let deposit_x = mul_div_ceil(desired_lp, reserve_x, supply)?;
    let deposit_y = mul_div_ceil(desired_lp, reserve_y, supply)?;
    Ok((deposit_x, deposit_y))
}

/// Amounts of X and Y released by burning `lp_amount` shares. Rounds down,
/// leaving dust in the pool for the remaining LPs.
pub fn calculate_withdraw_amounts(
    lp_amount: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64), CurveError> {
    if lp_supply == 0 {
        return Err(CurveError::NoLiquidityInPool {});
    }
    let supply = widen(lp_supply);
    let withdraw_x = mul_div_floor(lp_amount, reserve_x, supply)?;
    let withdraw_y = mul_div_floor(lp_amount, reserve_y, supply)?;
    Ok((withdraw_x, withdraw_y))
}

/// Swap fee taken from the input: floor(amount_in * fee_bps / 10_000).
pub fn calculate_fee(amount_in: u64, fee_bps: u16) -> Result<u64, CurveError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(CurveError::InvalidFee {
            fee_bps,
            max_bps: MAX_FEE_BPS,
        });
    }
    mul_div_floor(amount_in, u64::from(fee_bps), widen(u64::from(MAX_FEE_BPS)))
}

/// Constant-product output for a fee-adjusted input:
/// floor(reserve_out * amount_in_net / (reserve_in + amount_in_net)).
pub fn calculate_swap_output(
    amount_in_net: u64,
    reserve_in: u64,
    reserve_out: u64,
) -> Result<u64, CurveError> {
    if reserve_in == 0 || reserve_out == 0 {
        return Err(CurveError::NoLiquidityInPool {});
    }
    let denominator = widen(reserve_in).checked_add(widen(amount_in_net))?;
    mul_div_floor(reserve_out, amount_in_net, denominator)
}
