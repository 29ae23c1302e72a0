#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod config;
pub mod content;
pub mod error;
pub mod msg;
pub mod proposal;
pub mod registry;
pub mod validation;

pub use config::{AddressScheme, ContentLimits, ValidationConfig};
pub use content::{validate_abstract, Content};
pub use error::{ContentError, ProposalError};
pub use proposal::{
    Allocation, CancelIncentiveProposal, IncentiveProposal, RegisterIncentiveProposal,
    PROPOSAL_TYPE_CANCEL_INCENTIVE, PROPOSAL_TYPE_REGISTER_INCENTIVE, ROUTER_KEY,
};
pub use registry::{
    register_incentive_proposals, CodecEntry, ProposalEnvelope, ProposalRegistry,
    CANCEL_INCENTIVE_CODEC, REGISTER_INCENTIVE_CODEC,
};
pub use validation::{AddressValidator, HexAddress, NativeAddress, ValidationContext};
