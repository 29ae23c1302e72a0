use cosmwasm_schema::{cw_serde, QueryResponses};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};
use incentive_proposals::{CodecEntry, IncentiveProposal, ProposalEnvelope, ValidationConfig};

#[cw_serde]
pub struct InstantiateMsg {
    /// May update the validation config. If None, the config can
    /// not be changed.
    pub owner: Option<String>,
    /// Governance contract validated proposals are submitted to.
    pub governance: String,
    pub validation: ValidationConfig,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Validates PROPOSAL and submits it to governance. Funds sent
    /// with this message are forwarded as the proposal deposit.
    Propose { proposal: IncentiveProposal },
    /// Replaces the validation config. Only callable by the owner.
    UpdateConfig { validation: ValidationConfig },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    /// Lists the registered proposal types.
    #[returns(ProposalTypesResponse)]
    ProposalTypes {},
    /// Lists the registered codecs.
    #[returns(CodecsResponse)]
    Codecs {},
    /// Runs the checks `Propose` would run, without submitting
    /// anything.
    #[returns(ValidateProposalResponse)]
    ValidateProposal { proposal: IncentiveProposal },
    #[returns(IncentiveProposal)]
    DecodeProposal { envelope: ProposalEnvelope },
}

#[cw_serde]
pub struct ProposalTypesResponse {
    pub proposal_types: Vec<String>,
}

#[cw_serde]
pub struct CodecsResponse {
    pub codecs: Vec<CodecEntry>,
}

#[cw_serde]
pub struct ValidateProposalResponse {
    pub route: String,
    pub proposal_type: String,
    /// The first check the proposal failed, if any.
    pub error: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}
