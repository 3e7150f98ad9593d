use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint128};

#[cw_serde]
pub struct LiquidityDepositedEvent {
    pub sender: Addr,
    pub deposit_x: Uint128,
    pub deposit_y: Uint128,
    pub lp_minted: Uint128,
}

impl From<LiquidityDepositedEvent> for Event {
    fn from(val: LiquidityDepositedEvent) -> Self {
        Event::new("liquidity_deposited")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("deposit_x", val.deposit_x.to_string())
            .add_attribute("deposit_y", val.deposit_y.to_string())
            .add_attribute("lp_minted", val.lp_minted.to_string())
    }
}

#[cw_serde]
pub struct LiquidityWithdrawnEvent {
    pub sender: Addr, // receives X and Y
    pub lp_token_contract: Addr,
    pub lp_burned: Uint128,
    pub withdraw_x: Uint128,
    pub withdraw_y: Uint128,
}

impl From<LiquidityWithdrawnEvent> for Event {
    fn from(val: LiquidityWithdrawnEvent) -> Self {
        Event::new("liquidity_withdrawn")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("lp_token_contract", val.lp_token_contract.into_string())
            .add_attribute("lp_burned", val.lp_burned.to_string())
            .add_attribute("withdraw_x", val.withdraw_x.to_string())
            .add_attribute("withdraw_y", val.withdraw_y.to_string())
    }
}

#[cw_serde]
pub struct SwapEvent {
    pub sender: Addr,
    pub offer_denom: String,
    pub ask_denom: String,
    pub offer_amount: Uint128,
    pub return_amount: Uint128,
    pub fee_amount: Uint128,
}

impl From<SwapEvent> for Event {
    fn from(val: SwapEvent) -> Self {
        Event::new("swap")
            .add_attribute("sender", val.sender.into_string())
            .add_attribute("offer_denom", val.offer_denom)
            .add_attribute("ask_denom", val.ask_denom)
            .add_attribute("offer_amount", val.offer_amount.to_string())
            .add_attribute("return_amount", val.return_amount.to_string())
            .add_attribute("fee_amount", val.fee_amount.to_string())
    }
}

#[cw_serde]
pub struct PoolLockChangedEvent {
    pub authority: Addr,
    pub locked: bool,
}

impl From<PoolLockChangedEvent> for Event {
    fn from(val: PoolLockChangedEvent) -> Self {
        Event::new("pool_lock_changed")
            .add_attribute("authority", val.authority.into_string())
            .add_attribute("locked", val.locked.to_string())
    }
}
