use constant_product_curve::{DepositResult, Pool, SwapResult, WithdrawResult};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw20::Cw20ReceiveMsg;

/// Creates the pool. Fee and decimals are fixed from here on.
#[cw_serde]
pub struct InstantiateMsg {
    pub seed: u64,
    /// Swap fee in basis points, at most 10_000
    pub fee_bps: u16,
    /// Address allowed to lock/unlock the pool; required
    pub authority: Option<String>,
    pub denom_x: String,
    pub denom_y: String,
    /// Decimals of both denoms; must match
    pub decimals_x: u8,
    pub decimals_y: u8,
    pub lp_token_code_id: u64, // Code ID for the cw20 LP token this pool should use
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Funds must be exactly `max_x` of denom X and `max_y` of denom Y.
    /// Whatever the deposit does not use is refunded.
    Deposit {
        desired_lp: Uint128,
        max_x: Uint128,
        max_y: Uint128,
    },
    /// Burns `lp_amount` of the sender's LP tokens. The pool must have an
    /// allowance for at least `lp_amount`.
    Withdraw {
        lp_amount: Uint128,
        min_x: Uint128,
        min_y: Uint128,
    },
    /// Funds must be exactly `amount_in` of the input denom.
    Swap {
        x_to_y: bool,
        amount_in: Uint128,
        min_out: Uint128,
    },
    /// Withdraw by sending LP tokens to the pool.
    Receive(Cw20ReceiveMsg),
    Lock {},
    Unlock {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(PoolResponse)]
    Pool {},
    #[returns(DepositResponse)]
    SimulateDeposit {
        desired_lp: Uint128,
        max_x: Uint128,
        max_y: Uint128,
    },
    #[returns(WithdrawResponse)]
    SimulateWithdraw {
        lp_amount: Uint128,
        min_x: Uint128,
        min_y: Uint128,
    },
    #[returns(SwapResponse)]
    SimulateSwap {
        x_to_y: bool,
        amount_in: Uint128,
        min_out: Uint128,
    },
}

#[cw_serde]
pub struct ConfigResponse {
    pub seed: u64,
    pub authority: Addr,
    pub denom_x: String,
    pub denom_y: String,
    pub lp_token_address: Addr,
    pub locked: bool,
}

#[cw_serde]
pub struct PoolResponse {
    pub reserve_x: Uint128,
    pub reserve_y: Uint128,
    pub lp_supply: Uint128,
    pub fee_bps: u16,
    pub decimals: u8,
}

#[cw_serde]
pub struct DepositResponse {
    pub deposit_x: Uint128,
    pub deposit_y: Uint128,
    pub lp_out: Uint128,
}

#[cw_serde]
pub struct WithdrawResponse {
    pub withdraw_x: Uint128,
    pub withdraw_y: Uint128,
    pub lp_burned: Uint128,
}

#[cw_serde]
pub struct SwapResponse {
    pub deposit: Uint128,
    pub withdraw: Uint128,
    pub fee: Uint128,
}

// Hook message for receiving LP tokens
#[cw_serde]
pub enum Cw20HookMsg {
    Withdraw { min_x: Uint128, min_y: Uint128 },
}

impl From<DepositResult> for DepositResponse {
    fn from(val: DepositResult) -> Self {
        DepositResponse {
            deposit_x: val.deposit_x.into(),
            deposit_y: val.deposit_y.into(),
            lp_out: val.lp_out.into(),
        }
    }
}

impl From<WithdrawResult> for WithdrawResponse {
    fn from(val: WithdrawResult) -> Self {
        WithdrawResponse {
            withdraw_x: val.withdraw_x.into(),
            withdraw_y: val.withdraw_y.into(),
            lp_burned: val.lp_burned.into(),
        }
    }
}

impl From<SwapResult> for SwapResponse {
    fn from(val: SwapResult) -> Self {
        SwapResponse {
            deposit: val.deposit.into(),
            withdraw: val.withdraw.into(),
            fee: val.fee.into(),
        }
    }
}

impl From<&Pool> for PoolResponse {
    fn from(pool: &Pool) -> Self {
        PoolResponse {
            reserve_x: pool.reserve_x().into(),
            reserve_y: pool.reserve_y().into(),
            lp_supply: pool.lp_supply().into(),
            fee_bps: pool.fee_bps(),
            decimals: pool.decimals(),
        }
    }
}
