use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::calculations::{
    calculate_deposit_amounts, calculate_fee, calculate_initial_lp_shares,
    calculate_swap_output, calculate_withdraw_amounts, checked_add, MAX_FEE_BPS,
};
use crate::error::CurveError;

/// A constant-product pool for one X/Y pair.
///
/// Reserves and LP supply are private: they only move through [`Pool::deposit`],
/// [`Pool::withdraw`] and [`Pool::swap`]. Each of those validates every
/// precondition before touching `self`, so an `Err` leaves the pool unchanged.
/// The pool is either fully empty or fully funded.
#[cw_serde]
pub struct Pool {
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
    fee_bps: u16,
    decimals: u8,
}

/// Amounts moved by a deposit.
#[cw_serde]
pub struct DepositResult {
    pub deposit_x: u64,
    pub deposit_y: u64,
    pub lp_out: u64,
}

/// Amounts moved by a withdraw.
#[cw_serde]
pub struct WithdrawResult {
    pub withdraw_x: u64,
    pub withdraw_y: u64,
    pub lp_burned: u64,
}

/// Amounts moved by a swap. `deposit` includes `fee`.
#[cw_serde]
pub struct SwapResult {
    pub deposit: u64,
    pub withdraw: u64,
    pub fee: u64,
}

impl Pool {
    /// Creates an empty pool. The fee and decimals are fixed for its lifetime.
    pub fn new(fee_bps: u16, decimals_x: u8, decimals_y: u8) -> Result<Self, CurveError> {
        if fee_bps > MAX_FEE_BPS {
            return Err(CurveError::InvalidFee {
                fee_bps,
                max_bps: MAX_FEE_BPS,
            });
        }
        if decimals_x != decimals_y {
            return Err(CurveError::InvalidPrecision {
                decimals_x,
                decimals_y,
            });
        }
        Ok(Self {
            reserve_x: 0,
            reserve_y: 0,
            lp_supply: 0,
            fee_bps,
            decimals: decimals_x,
        })
    }

    pub fn reserve_x(&self) -> u64 {
        self.reserve_x
    }

    pub fn reserve_y(&self) -> u64 {
        self.reserve_y
    }

    pub fn lp_supply(&self) -> u64 {
        self.lp_supply
    }

    pub fn fee_bps(&self) -> u16 {
        self.fee_bps
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_empty(&self) -> bool {
        self.lp_supply == 0
    }

    /// Replaces the share supply with the one the LP token actually reports.
    ///
    /// Shares burned outside the pool lower the supply without touching the
    /// reserves, so the remaining holders own those reserves. Once the supply
    /// reaches zero the pool is empty again and the next deposit bootstraps it
    /// on top of whatever reserves are left.
    pub fn sync_lp_supply(&mut self, lp_supply: u64) {
        self.lp_supply = lp_supply;
    }

    /// The constant product `reserve_x * reserve_y`.
    pub fn invariant(&self) -> Uint128 {
        Uint128::new(u128::from(self.reserve_x) * u128::from(self.reserve_y))
    }

    /// Adds liquidity.
    ///
    /// On an empty pool `max_x` and `max_y` are taken in full and
    /// `floor(sqrt(max_x * max_y))` shares are minted; `desired_lp` is ignored
    /// since there is no ratio to match yet. Otherwise exactly `desired_lp`
    /// shares are minted against the amounts the current ratio requires,
    /// which must not exceed `max_x` / `max_y`.
    pub fn deposit(
        &mut self,
        desired_lp: u64,
        max_x: u64,
        max_y: u64,
    ) -> Result<DepositResult, CurveError> {
        let result = if self.is_empty() {
            let lp_out = calculate_initial_lp_shares(max_x, max_y)?;
            DepositResult {
                deposit_x: max_x,
                deposit_y: max_y,
                lp_out,
            }
        } else {
            if desired_lp == 0 {
                return Err(CurveError::ZeroAmount {});
            }
            let (deposit_x, deposit_y) = calculate_deposit_amounts(
                desired_lp,
                self.reserve_x,
                self.reserve_y,
                self.lp_supply,
            )?;
            if deposit_x > max_x || deposit_y > max_y {
                return Err(CurveError::ExcessiveSlippage {});
            }
            DepositResult {
                deposit_x,
                deposit_y,
                lp_out: desired_lp,
            }
        };

        let reserve_x = checked_add(self.reserve_x, result.deposit_x)?;
        let reserve_y = checked_add(self.reserve_y, result.deposit_y)?;
        let lp_supply = checked_add(self.lp_supply, result.lp_out)?;

        self.reserve_x = reserve_x;
        self.reserve_y = reserve_y;
        self.lp_supply = lp_supply;
        Ok(result)
    }

    /// Removes liquidity by burning `lp_amount` shares for a pro-rata share of
    /// both reserves, rounded down.
    pub fn withdraw(
        &mut self,
        lp_amount: u64,
        min_x: u64,
        min_y: u64,
    ) -> Result<WithdrawResult, CurveError> {
        if self.is_empty() {
            return Err(CurveError::NoLiquidityInPool {});
        }
        if lp_amount == 0 {
            return Err(CurveError::ZeroAmount {});
        }
        if lp_amount > self.lp_supply {
            return Err(CurveError::InsufficientBalance {});
        }

        let (withdraw_x, withdraw_y) = calculate_withdraw_amounts(
            lp_amount,
            self.reserve_x,
            self.reserve_y,
            self.lp_supply,
        )?;
        if withdraw_x < min_x || withdraw_y < min_y {
            return Err(CurveError::ExcessiveSlippage {});
        }

        // withdraw_* <= reserve_* because lp_amount <= lp_supply.
        self.reserve_x -= withdraw_x;
        self.reserve_y -= withdraw_y;
        self.lp_supply -= lp_amount;
        Ok(WithdrawResult {
            withdraw_x,
            withdraw_y,
            lp_burned: lp_amount,
        })
    }

    /// Swaps `amount_in` of X for Y when `x_to_y`, otherwise Y for X.
    ///
    /// The fee is deducted from the input before pricing but the full
    /// `amount_in` lands in the reserves, so fees accrue to LPs and the
    /// product never decreases.
    pub fn swap(
        &mut self,
        x_to_y: bool,
        amount_in: u64,
        min_out: u64,
    ) -> Result<SwapResult, CurveError> {
        if self.is_empty() || self.reserve_x == 0 || self.reserve_y == 0 {
            return Err(CurveError::NoLiquidityInPool {});
        }
        if amount_in == 0 {
            return Err(CurveError::ZeroAmount {});
        }

        let (reserve_in, reserve_out) = if x_to_y {
            (self.reserve_x, self.reserve_y)
        } else {
            (self.reserve_y, self.reserve_x)
        };

        let fee = calculate_fee(amount_in, self.fee_bps)?;
        let amount_in_net = amount_in - fee;
        let amount_out = calculate_swap_output(amount_in_net, reserve_in, reserve_out)?;
        if amount_out < min_out {
            return Err(CurveError::SlippageExceeded {
                amount_out,
                min_out,
            });
        }

        let new_reserve_in = checked_add(reserve_in, amount_in)?;
        // amount_out < reserve_out for any non-empty input reserve.
        let new_reserve_out = reserve_out - amount_out;

        if x_to_y {
            self.reserve_x = new_reserve_in;
            self.reserve_y = new_reserve_out;
        } else {
            self.reserve_y = new_reserve_in;
            self.reserve_x = new_reserve_out;
        }
        Ok(SwapResult {
            deposit: amount_in,
            withdraw: amount_out,
            fee,
        })
    }
}
