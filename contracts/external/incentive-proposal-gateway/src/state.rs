use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;
use incentive_proposals::{ProposalRegistry, ValidationConfig};

#[cw_serde]
pub struct Config {
    /// Governance contract validated proposals are submitted to.
    pub governance: Addr,
    pub validation: ValidationConfig,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Proposal types and codecs registered at instantiation.
pub const REGISTRY: Item<ProposalRegistry> = Item::new("registry");
