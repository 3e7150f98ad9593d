use cosmwasm_std::{DepsMut, Reply, Response, StdError, StdResult};
use cw_utils::parse_instantiate_response_data;

use crate::error::ContractError;
use crate::state::{CONFIG, INSTANTIATE_LP_REPLY_ID};

pub fn handle_lp_instantiate_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != INSTANTIATE_LP_REPLY_ID {
        return Err(ContractError::UnknownReplyId { id: msg.id });
    }

    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    #[allow(deprecated)]
    let data = result.data.ok_or(ContractError::MissingReplyData {})?;
    let res = parse_instantiate_response_data(&data)?;

    deps.api.debug(&format!(
        "amm-pool: LP token instantiated at {}",
        res.contract_address
    ));
    let lp_token_addr = deps.api.addr_validate(&res.contract_address)?;

    CONFIG.update(deps.storage, |mut cfg| -> StdResult<_> {
        if cfg.lp_token_ready() {
            return Err(StdError::generic_err("LP token address already set"));
        }
        cfg.lp_token_addr = lp_token_addr.clone();
        Ok(cfg)
    })?;

    Ok(Response::new()
        .add_attribute("action", "lp_token_instantiated")
        .add_attribute("lp_token_address", lp_token_addr))
}
