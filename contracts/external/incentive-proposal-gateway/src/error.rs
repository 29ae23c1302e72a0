use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use incentive_proposals::ProposalError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Proposal(#[from] ProposalError),

    #[error(transparent)]
    Ownership(#[from] cw_ownable::OwnershipError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error("max title and description lengths must be greater than zero")]
    InvalidContentLimits {},
}
