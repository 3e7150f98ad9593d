use crate::execute::{
    execute_cw20_receive, execute_deposit, execute_instantiate, execute_set_locked,
    execute_swap, execute_withdraw,
};
use crate::query::{
    query_config, query_pool, query_simulate_deposit, query_simulate_swap,
    query_simulate_withdraw,
};
use crate::reply::handle_lp_instantiate_reply;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    execute_instantiate(deps, env, info, msg)
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            desired_lp,
            max_x,
            max_y,
        } => execute_deposit(deps, info, desired_lp, max_x, max_y),
        ExecuteMsg::Withdraw {
            lp_amount,
            min_x,
            min_y,
        } => execute_withdraw(deps, info, lp_amount, min_x, min_y),
        ExecuteMsg::Swap {
            x_to_y,
            amount_in,
            min_out,
        } => execute_swap(deps, info, x_to_y, amount_in, min_out),
        ExecuteMsg::Receive(cw20_msg) => execute_cw20_receive(deps, info, cw20_msg),
        ExecuteMsg::Lock {} => execute_set_locked(deps, info, true),
        ExecuteMsg::Unlock {} => execute_set_locked(deps, info, false),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pool {} => to_json_binary(&query_pool(deps).map_err(into_std)?),
        QueryMsg::SimulateDeposit {
            desired_lp,
            max_x,
            max_y,
        } => to_json_binary(
            &query_simulate_deposit(deps, desired_lp, max_x, max_y).map_err(into_std)?,
        ),
        QueryMsg::SimulateWithdraw {
            lp_amount,
            min_x,
            min_y,
        } => to_json_binary(
            &query_simulate_withdraw(deps, lp_amount, min_x, min_y).map_err(into_std)?,
        ),
        QueryMsg::SimulateSwap {
            x_to_y,
            amount_in,
            min_out,
        } => to_json_binary(
            &query_simulate_swap(deps, x_to_y, amount_in, min_out).map_err(into_std)?,
        ),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_lp_instantiate_reply(deps, msg)
}

// Queries can only fail with StdError; keep the engine's message.
fn into_std(err: ContractError) -> StdError {
    match err {
        ContractError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    }
}
