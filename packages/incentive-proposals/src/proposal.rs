use cosmwasm_schema::cw_serde;
use cosmwasm_std::Decimal;

use crate::{
    content::{validate_abstract, Content},
    error::ProposalError,
    validation::{validate_allocations, validate_epochs, ValidationContext},
};

/// Routes passed incentive proposals to the incentives module.
pub const ROUTER_KEY: &str = "incentives";

pub const PROPOSAL_TYPE_REGISTER_INCENTIVE: &str = "RegisterIncentive";
pub const PROPOSAL_TYPE_CANCEL_INCENTIVE: &str = "CancelIncentive";

/// The share of a denom's per-epoch emissions streamed to an
/// incentive program.
#[cw_serde]
pub struct Allocation {
    pub denom: String,
    /// Fraction of emissions, in (0, 1].
    pub amount: Decimal,
}

/// Proposes streaming ALLOCATIONS to CONTRACT for EPOCHS epochs.
#[cw_serde]
pub struct RegisterIncentiveProposal {
    pub title: String,
    pub description: String,
    /// Address of the contract receiving incentives.
    pub contract: String,
    pub allocations: Vec<Allocation>,
    /// Number of epochs the program runs for.
    pub epochs: u32,
}

/// Proposes cancelling the incentive program of CONTRACT.
#[cw_serde]
pub struct CancelIncentiveProposal {
    pub title: String,
    pub description: String,
    pub contract: String,
}

#[cw_serde]
pub enum IncentiveProposal {
    RegisterIncentive(RegisterIncentiveProposal),
    CancelIncentive(CancelIncentiveProposal),
}

impl RegisterIncentiveProposal {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        contract: impl Into<String>,
        allocations: Vec<Allocation>,
        epochs: u32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            contract: contract.into(),
            allocations,
            epochs,
        }
    }
}

impl CancelIncentiveProposal {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        contract: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            contract: contract.into(),
        }
    }
}

impl Content for RegisterIncentiveProposal {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_REGISTER_INCENTIVE
    }

    fn validate_basic(&self, ctx: &ValidationContext) -> Result<(), ProposalError> {
        ctx.address.validate_address(&self.contract)?;
        validate_allocations(&self.allocations, ctx.config.strict_allocations)?;
        validate_epochs(self.epochs)?;
        Ok(validate_abstract(self, ctx.registry, &ctx.config.limits)?)
    }
}

impl Content for CancelIncentiveProposal {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_CANCEL_INCENTIVE
    }

    fn validate_basic(&self, ctx: &ValidationContext) -> Result<(), ProposalError> {
        ctx.address.validate_address(&self.contract)?;
        Ok(validate_abstract(self, ctx.registry, &ctx.config.limits)?)
    }
}

impl IncentiveProposal {
    fn inner(&self) -> &dyn Content {
        match self {
            IncentiveProposal::RegisterIncentive(p) => p,
            IncentiveProposal::CancelIncentive(p) => p,
        }
    }

    /// Address of the contract whose incentive program this proposal
    /// concerns.
    pub fn contract(&self) -> &str {
        match self {
            IncentiveProposal::RegisterIncentive(p) => &p.contract,
            IncentiveProposal::CancelIncentive(p) => &p.contract,
        }
    }
}

impl Content for IncentiveProposal {
    fn title(&self) -> &str {
        self.inner().title()
    }

    fn description(&self) -> &str {
        self.inner().description()
    }

    fn route(&self) -> &'static str {
        self.inner().route()
    }

    fn proposal_type(&self) -> &'static str {
        self.inner().proposal_type()
    }

    fn validate_basic(&self, ctx: &ValidationContext) -> Result<(), ProposalError> {
        self.inner().validate_basic(ctx)
    }
}

impl From<RegisterIncentiveProposal> for IncentiveProposal {
    fn from(p: RegisterIncentiveProposal) -> Self {
        IncentiveProposal::RegisterIncentive(p)
    }
}

impl From<CancelIncentiveProposal> for IncentiveProposal {
    fn from(p: CancelIncentiveProposal) -> Self {
        IncentiveProposal::CancelIncentive(p)
    }
}
