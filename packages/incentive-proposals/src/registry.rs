use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary};

use crate::{
    content::Content,
    error::ProposalError,
    proposal::{
        CancelIncentiveProposal, IncentiveProposal, RegisterIncentiveProposal,
        PROPOSAL_TYPE_CANCEL_INCENTIVE, PROPOSAL_TYPE_REGISTER_INCENTIVE,
    },
};

pub const REGISTER_INCENTIVE_CODEC: &str = "incentives/RegisterIncentiveProposal";
pub const CANCEL_INCENTIVE_CODEC: &str = "incentives/CancelIncentiveProposal";

/// Proposal types a governance pipeline accepts, and the codecs it
/// decodes their content with. Populated once at startup.
#[cw_serde]
#[derive(Default)]
pub struct ProposalRegistry {
    proposal_types: BTreeSet<String>,
    /// Codec name -> proposal type it decodes.
    codecs: BTreeMap<String, String>,
}

#[cw_serde]
pub struct CodecEntry {
    pub name: String,
    pub proposal_type: String,
}

/// Serialized proposal content, tagged the way the governance
/// pipeline routes and decodes it.
#[cw_serde]
pub struct ProposalEnvelope {
    pub route: String,
    pub proposal_type: String,
    pub codec: String,
    pub value: Binary,
}

impl ProposalRegistry {
    pub fn register_proposal_type(&mut self, proposal_type: &str) -> Result<(), ProposalError> {
        if !self.proposal_types.insert(proposal_type.to_string()) {
            return Err(ProposalError::ProposalTypeAlreadyRegistered {
                proposal_type: proposal_type.to_string(),
            });
        }
        Ok(())
    }

    pub fn register_codec(&mut self, name: &str, proposal_type: &str) -> Result<(), ProposalError> {
        if self.codecs.contains_key(name) {
            return Err(ProposalError::CodecAlreadyRegistered {
                name: name.to_string(),
            });
        }
        self.codecs.insert(name.to_string(), proposal_type.to_string());
        Ok(())
    }

    pub fn is_registered(&self, proposal_type: &str) -> bool {
        self.proposal_types.contains(proposal_type)
    }

    pub fn proposal_types(&self) -> Vec<String> {
        self.proposal_types.iter().cloned().collect()
    }

    pub fn codecs(&self) -> Vec<CodecEntry> {
        self.codecs
            .iter()
            .map(|(name, proposal_type)| CodecEntry {
                name: name.clone(),
                proposal_type: proposal_type.clone(),
            })
            .collect()
    }

    /// Serializes PROPOSAL with its registered codec.
    pub fn encode(&self, proposal: &IncentiveProposal) -> Result<ProposalEnvelope, ProposalError> {
        let (codec, value) = match proposal {
            IncentiveProposal::RegisterIncentive(p) => {
                (REGISTER_INCENTIVE_CODEC, to_json_binary(p)?)
            }
            IncentiveProposal::CancelIncentive(p) => (CANCEL_INCENTIVE_CODEC, to_json_binary(p)?),
        };
        if !self.codecs.contains_key(codec) {
            return Err(ProposalError::UnregisteredCodec {
                name: codec.to_string(),
            });
        }
        Ok(ProposalEnvelope {
            route: proposal.route().to_string(),
            proposal_type: proposal.proposal_type().to_string(),
            codec: codec.to_string(),
            value,
        })
    }

    /// Deserializes the content of ENVELOPE. Dispatch happens on the
    /// codec name alone; the envelope's proposal type is not trusted.
    pub fn decode(&self, envelope: &ProposalEnvelope) -> Result<IncentiveProposal, ProposalError> {
        let proposal_type = self.codecs.get(&envelope.codec).ok_or_else(|| {
            ProposalError::UnregisteredCodec {
                name: envelope.codec.clone(),
            }
        })?;
        match proposal_type.as_str() {
            PROPOSAL_TYPE_REGISTER_INCENTIVE => Ok(IncentiveProposal::RegisterIncentive(
                from_json::<RegisterIncentiveProposal>(&envelope.value)?,
            )),
            PROPOSAL_TYPE_CANCEL_INCENTIVE => Ok(IncentiveProposal::CancelIncentive(
                from_json::<CancelIncentiveProposal>(&envelope.value)?,
            )),
            _ => Err(ProposalError::UnregisteredCodec {
                name: envelope.codec.clone(),
            }),
        }
    }
}

/// Registers both incentive proposal types and their codecs. Call
/// once while setting up the registry; a second call fails.
pub fn register_incentive_proposals(registry: &mut ProposalRegistry) -> Result<(), ProposalError> {
    registry.register_proposal_type(PROPOSAL_TYPE_REGISTER_INCENTIVE)?;
    registry.register_proposal_type(PROPOSAL_TYPE_CANCEL_INCENTIVE)?;
    registry.register_codec(REGISTER_INCENTIVE_CODEC, PROPOSAL_TYPE_REGISTER_INCENTIVE)?;
    registry.register_codec(CANCEL_INCENTIVE_CODEC, PROPOSAL_TYPE_CANCEL_INCENTIVE)?;
    Ok(())
}
