use crate::state::INSTANTIATE_LP_REPLY_ID;
use cosmwasm_std::{
    coin, to_json_binary, Addr, BankMsg, CosmosMsg, Env, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, MinterResponse};

fn lp_token_execute(lp_token_addr: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: lp_token_addr.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }
    .into())
}

/// Mints `amount` LP tokens to `recipient`.
pub(crate) fn create_mint_message(
    lp_token_addr: &Addr,
    recipient: String,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    lp_token_execute(lp_token_addr, &Cw20ExecuteMsg::Mint { recipient, amount })
}

/// Burns LP tokens the pool itself holds (received through the cw20 hook).
pub(crate) fn create_burn_message(lp_token_addr: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    lp_token_execute(lp_token_addr, &Cw20ExecuteMsg::Burn { amount })
}

/// Burns LP tokens from `owner` using the allowance granted to the pool.
pub(crate) fn create_burn_from_message(
    lp_token_addr: &Addr,
    owner: String,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    lp_token_execute(lp_token_addr, &Cw20ExecuteMsg::BurnFrom { owner, amount })
}

/// Sends the non-zero amounts to `recipient`. Returns `None` when nothing is left to send.
pub(crate) fn create_payout_message(
    recipient: &str,
    amounts: &[(&str, Uint128)],
) -> Option<CosmosMsg> {
    let coins: Vec<_> = amounts
        .iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(denom, amount)| coin(amount.u128(), *denom))
        .collect();
    if coins.is_empty() {
        return None;
    }
    Some(
        BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins,
        }
        .into(),
    )
}

fn format_token_symbol(denom: &str) -> String {
    let cleaned = denom.trim_start_matches('u');
    cleaned
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(4)
        .collect::<String>()
        .to_uppercase()
}

/// Instantiates the pool's LP token. The pool is its only minter.
pub(crate) fn create_lp_instantiate_submsg(
    lp_token_code_id: u64,
    env: &Env,
    denom_x: &str,
    denom_y: &str,
    decimals: u8,
    seed: u64,
) -> StdResult<SubMsg> {
    let lp_instantiate_msg = cw20_base::msg::InstantiateMsg {
        name: format!("{}-{} LP", denom_x, denom_y),
        symbol: format!(
            "LP-{}-{}",
            format_token_symbol(denom_x),
            format_token_symbol(denom_y)
        ),
        decimals,
        initial_balances: vec![],
        mint: Some(MinterResponse {
            minter: env.contract.address.to_string(),
            cap: None,
        }),
        marketing: None,
    };
    let instantiate = WasmMsg::Instantiate {
        admin: Some(env.contract.address.to_string()),
        code_id: lp_token_code_id,
        msg: to_json_binary(&lp_instantiate_msg)?,
        funds: vec![],
        label: format!("AMM LP {}-{} #{}", denom_x, denom_y, seed),
    };
    Ok(SubMsg::reply_on_success(instantiate, INSTANTIATE_LP_REPLY_ID))
}
