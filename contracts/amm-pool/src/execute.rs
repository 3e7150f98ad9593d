use constant_product_curve::{CurveError, Pool};
use cosmwasm_std::{
    from_json, to_json_binary, Addr, CosmosMsg, Deps, DepsMut, Env, MessageInfo, QueryRequest,
    Response, StdResult, Uint128, WasmQuery,
};
use cw20::{BalanceResponse, Cw20QueryMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::events::{
    LiquidityDepositedEvent, LiquidityWithdrawnEvent, PoolLockChangedEvent, SwapEvent,
};
use crate::messaging::*;
use crate::msg::{Cw20HookMsg, InstantiateMsg, WithdrawResponse};
use crate::query::load_synced_pool;
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, POOL};
use crate::validation::*;

pub(crate) fn execute_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let authority = validate_authority(deps.api, msg.authority)?;
    if msg.denom_x == msg.denom_y {
        return Err(ContractError::IdenticalDenoms {});
    }
    let pool = Pool::new(msg.fee_bps, msg.decimals_x, msg.decimals_y)?;

    let sub_msg = create_lp_instantiate_submsg(
        msg.lp_token_code_id,
        &env,
        &msg.denom_x,
        &msg.denom_y,
        pool.decimals(),
        msg.seed,
    )?;

    let cfg = Config {
        seed: msg.seed,
        authority: authority.clone(),
        denom_x: msg.denom_x,
        denom_y: msg.denom_y,
        lp_token_addr: Addr::unchecked(""),
        locked: false,
    };
    CONFIG.save(deps.storage, &cfg)?;
    POOL.save(deps.storage, &pool)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_submessage(sub_msg)
        .add_attribute("action", "instantiate_pool")
        .add_attribute("seed", cfg.seed.to_string())
        .add_attribute("authority", authority)
        .add_attribute("denom_x", cfg.denom_x)
        .add_attribute("denom_y", cfg.denom_y)
        .add_attribute("fee_bps", pool.fee_bps().to_string())
        .add_attribute("lp_token_code_id", msg.lp_token_code_id.to_string()))
}

pub(crate) fn execute_deposit(
    deps: DepsMut,
    info: MessageInfo,
    desired_lp: Uint128,
    max_x: Uint128,
    max_y: Uint128,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_pool_open(&cfg)?;

    let mut pool = load_synced_pool(deps.as_ref(), &cfg)?;
    let result = pool.deposit(
        to_pool_limit(desired_lp),
        to_pool_amount(max_x)?,
        to_pool_amount(max_y)?,
    )?;
    validate_deposit_funds(&info, &cfg, max_x, max_y)?;
    POOL.save(deps.storage, &pool)?;

    let deposit_x = Uint128::from(result.deposit_x);
    let deposit_y = Uint128::from(result.deposit_y);
    let lp_out = Uint128::from(result.lp_out);

    let mint_msg = create_mint_message(&cfg.lp_token_addr, info.sender.to_string(), lp_out)?;
    let refund_msg = create_payout_message(
        info.sender.as_str(),
        &[
            (cfg.denom_x.as_str(), max_x - deposit_x),
            (cfg.denom_y.as_str(), max_y - deposit_y),
        ],
    );

    let event = LiquidityDepositedEvent {
        sender: info.sender.clone(),
        deposit_x,
        deposit_y,
        lp_minted: lp_out,
    };
    Ok(Response::new()
        .add_message(mint_msg)
        .add_messages(refund_msg)
        .add_event(event)
        .add_attribute("action", "deposit")
        .add_attribute("sender", info.sender)
        .add_attribute("lp_minted", lp_out.to_string()))
}

pub(crate) fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    lp_amount: Uint128,
    min_x: Uint128,
    min_y: Uint128,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_pool_open(&cfg)?;

    let mut pool = load_synced_pool(deps.as_ref(), &cfg)?;
    let result = pool.withdraw(
        to_pool_amount(lp_amount)?,
        to_pool_limit(min_x),
        to_pool_limit(min_y),
    )?;
    let balance = query_lp_balance(deps.as_ref(), &cfg.lp_token_addr, &info.sender)?;
    if balance < lp_amount {
        return Err(CurveError::InsufficientBalance {}.into());
    }
    POOL.save(deps.storage, &pool)?;

    let burn_msg =
        create_burn_from_message(&cfg.lp_token_addr, info.sender.to_string(), lp_amount)?;
    withdraw_response(&cfg, info.sender, burn_msg, result.into())
}

pub(crate) fn execute_cw20_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_pool_open(&cfg)?;
    if info.sender != cfg.lp_token_addr {
        return Err(ContractError::UnauthorizedLpToken {
            expected: cfg.lp_token_addr,
        });
    }

    let hook: Cw20HookMsg =
        from_json(&cw20_msg.msg).map_err(|_| ContractError::InvalidCw20HookMsg {})?;
    match hook {
        Cw20HookMsg::Withdraw { min_x, min_y } => {
            let mut pool = load_synced_pool(deps.as_ref(), &cfg)?;
            let result = pool.withdraw(
                to_pool_amount(cw20_msg.amount)?,
                to_pool_limit(min_x),
                to_pool_limit(min_y),
            )?;
            POOL.save(deps.storage, &pool)?;

            let recipient = deps.api.addr_validate(&cw20_msg.sender)?;
            let burn_msg = create_burn_message(&cfg.lp_token_addr, cw20_msg.amount)?;
            withdraw_response(&cfg, recipient, burn_msg, result.into())
        }
    }
}

fn withdraw_response(
    cfg: &Config,
    recipient: Addr,
    burn_msg: CosmosMsg,
    result: WithdrawResponse,
) -> Result<Response, ContractError> {
    let payout_msg = create_payout_message(
        recipient.as_str(),
        &[
            (cfg.denom_x.as_str(), result.withdraw_x),
            (cfg.denom_y.as_str(), result.withdraw_y),
        ],
    );
    let event = LiquidityWithdrawnEvent {
        sender: recipient.clone(),
        lp_token_contract: cfg.lp_token_addr.clone(),
        lp_burned: result.lp_burned,
        withdraw_x: result.withdraw_x,
        withdraw_y: result.withdraw_y,
    };
    Ok(Response::new()
        .add_message(burn_msg)
        .add_messages(payout_msg)
        .add_event(event)
        .add_attribute("action", "withdraw")
        .add_attribute("sender", recipient)
        .add_attribute("lp_burned", result.lp_burned.to_string()))
}

pub(crate) fn execute_swap(
    deps: DepsMut,
    info: MessageInfo,
    x_to_y: bool,
    amount_in: Uint128,
    min_out: Uint128,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_pool_open(&cfg)?;

    let (offer_denom, ask_denom) = if x_to_y {
        (cfg.denom_x.clone(), cfg.denom_y.clone())
    } else {
        (cfg.denom_y.clone(), cfg.denom_x.clone())
    };

    let mut pool = load_synced_pool(deps.as_ref(), &cfg)?;
    let result = pool.swap(x_to_y, to_pool_amount(amount_in)?, to_pool_limit(min_out))?;
    validate_swap_funds(&info, &offer_denom, amount_in)?;
    POOL.save(deps.storage, &pool)?;

    let return_amount = Uint128::from(result.withdraw);
    let return_msg =
        create_payout_message(info.sender.as_str(), &[(ask_denom.as_str(), return_amount)]);

    let event = SwapEvent {
        sender: info.sender.clone(),
        offer_denom,
        ask_denom,
        offer_amount: amount_in,
        return_amount,
        fee_amount: Uint128::from(result.fee),
    };
    Ok(Response::new()
        .add_messages(return_msg)
        .add_event(event)
        .add_attribute("action", "swap")
        .add_attribute("sender", info.sender)
        .add_attribute("return_amount", return_amount.to_string()))
}

pub(crate) fn execute_set_locked(
    deps: DepsMut,
    info: MessageInfo,
    locked: bool,
) -> Result<Response, ContractError> {
    let mut cfg = CONFIG.load(deps.storage)?;
    if info.sender != cfg.authority {
        return Err(ContractError::Unauthorized {});
    }
    cfg.locked = locked;
    CONFIG.save(deps.storage, &cfg)?;

    let action = if locked { "lock" } else { "unlock" };
    Ok(Response::new()
        .add_event(PoolLockChangedEvent {
            authority: info.sender,
            locked,
        })
        .add_attribute("action", action))
}

// --- Internal Helpers ---

fn query_lp_balance(deps: Deps, token_addr: &Addr, owner: &Addr) -> StdResult<Uint128> {
    let res: BalanceResponse = deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: token_addr.to_string(),
        msg: to_json_binary(&Cw20QueryMsg::Balance {
            address: owner.to_string(),
        })?,
    }))?;
    Ok(res.balance)
}
