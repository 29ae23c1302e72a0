use cosmwasm_std::{Decimal, StdError};
use cw_denom::DenomError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ProposalError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    InvalidContent(#[from] ContentError),

    #[error("invalid contract address ({address}): {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid denom ({denom}) in allocation: {err}")]
    InvalidDenom { denom: String, err: DenomError },

    #[error("invalid amount for allocation: {amount}. must be greater than 0 and not greater than 1")]
    InvalidAllocationAmount { amount: Decimal },

    #[error("invalid epochs ({epochs}). epochs cannot be 0")]
    InvalidEpochs { epochs: u32 },

    #[error("denom ({denom}) appears in more than one allocation")]
    DuplicateAllocationDenom { denom: String },

    #[error("allocations sum to {total}, which is greater than 1")]
    AllocationsExceedOne { total: Decimal },

    #[error("proposal type ({proposal_type}) is already registered")]
    ProposalTypeAlreadyRegistered { proposal_type: String },

    #[error("codec ({name}) is already registered")]
    CodecAlreadyRegistered { name: String },

    #[error("no codec registered under ({name})")]
    UnregisteredCodec { name: String },
}

/// Errors from the title / description / proposal type check every
/// governance content must pass.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("proposal title cannot be blank")]
    BlankTitle {},

    #[error("proposal title is longer than max length of {max}")]
    TitleTooLong { max: u64 },

    #[error("proposal description cannot be blank")]
    BlankDescription {},

    #[error("proposal description is longer than max length of {max}")]
    DescriptionTooLong { max: u64 },

    #[error("invalid proposal type: {proposal_type}")]
    UnregisteredProposalType { proposal_type: String },
}
