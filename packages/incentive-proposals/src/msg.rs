use cosmwasm_schema::cw_serde;

use crate::registry::ProposalEnvelope;

/// Messages a governance pipeline must accept for validated proposals
/// to enter its deposit and voting lifecycle.
#[cw_serde]
pub enum GovernanceExecuteMsg {
    /// Submits CONTENT on behalf of PROPOSER. Funds attached to this
    /// message are the proposer's deposit.
    SubmitProposal {
        content: ProposalEnvelope,
        proposer: String,
    },
}
