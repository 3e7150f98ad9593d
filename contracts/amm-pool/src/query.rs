use constant_product_curve::Pool;
use cosmwasm_std::{to_json_binary, Deps, QueryRequest, StdResult, Uint128, WasmQuery};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::msg::{ConfigResponse, DepositResponse, PoolResponse, SwapResponse, WithdrawResponse};
use crate::state::{Config, CONFIG, POOL};
use crate::validation::{to_pool_amount, to_pool_limit};
use crate::ContractError;

pub(crate) fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        seed: cfg.seed,
        authority: cfg.authority,
        denom_x: cfg.denom_x,
        denom_y: cfg.denom_y,
        lp_token_address: cfg.lp_token_addr,
        locked: cfg.locked,
    })
}

pub(crate) fn query_pool(deps: Deps) -> Result<PoolResponse, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let pool = load_synced_pool(deps, &cfg)?;
    Ok(PoolResponse::from(&pool))
}

// Simulations run against a copy of the stored pool; nothing is saved.

pub(crate) fn query_simulate_deposit(
    deps: Deps,
    desired_lp: Uint128,
    max_x: Uint128,
    max_y: Uint128,
) -> Result<DepositResponse, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let mut pool = load_synced_pool(deps, &cfg)?;
    let result = pool.deposit(
        to_pool_limit(desired_lp),
        to_pool_amount(max_x)?,
        to_pool_amount(max_y)?,
    )?;
    Ok(result.into())
}

pub(crate) fn query_simulate_withdraw(
    deps: Deps,
    lp_amount: Uint128,
    min_x: Uint128,
    min_y: Uint128,
) -> Result<WithdrawResponse, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let mut pool = load_synced_pool(deps, &cfg)?;
    let result = pool.withdraw(
        to_pool_amount(lp_amount)?,
        to_pool_limit(min_x),
        to_pool_limit(min_y),
    )?;
    Ok(result.into())
}

pub(crate) fn query_simulate_swap(
    deps: Deps,
    x_to_y: bool,
    amount_in: Uint128,
    min_out: Uint128,
) -> Result<SwapResponse, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let mut pool = load_synced_pool(deps, &cfg)?;
    let result = pool.swap(x_to_y, to_pool_amount(amount_in)?, to_pool_limit(min_out))?;
    Ok(result.into())
}

// --- Internal Helpers ---

/// Loads the stored pool with its share supply taken from the LP token.
/// Holders can burn LP directly on the token, so the token is the source of truth.
pub(crate) fn load_synced_pool(deps: Deps, cfg: &Config) -> Result<Pool, ContractError> {
    let mut pool = POOL.load(deps.storage)?;
    if cfg.lp_token_ready() {
        let total_supply = query_cw20_total_supply(deps, cfg)?;
        pool.sync_lp_supply(to_pool_amount(total_supply)?);
    }
    Ok(pool)
}

fn query_cw20_total_supply(deps: Deps, cfg: &Config) -> StdResult<Uint128> {
    let token_info: TokenInfoResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr: cfg.lp_token_addr.to_string(),
            msg: to_json_binary(&Cw20QueryMsg::TokenInfo {})?,
        }))?;
    Ok(token_info.total_supply)
}
