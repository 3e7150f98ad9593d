use constant_product_curve::Pool;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

#[cw_serde]
pub struct Config {
    /// Caller-chosen seed distinguishing pools over the same pair
    pub seed: u64,
    /// Address allowed to lock and unlock the pool
    pub authority: Addr,
    pub denom_x: String,
    pub denom_y: String,
    pub lp_token_addr: Addr,
    pub locked: bool,
}

impl Config {
    pub fn lp_token_ready(&self) -> bool {
        self.lp_token_addr != Addr::unchecked("")
    }
}

pub const CONFIG: Item<Config> = Item::new("config");
// Reserves, LP supply, fee and decimals
pub const POOL: Item<Pool> = Item::new("pool");

pub const INSTANTIATE_LP_REPLY_ID: u64 = 1;

pub const CONTRACT_NAME: &str = "crates.io:cw-amm-pool";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
