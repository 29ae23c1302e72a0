use crate::{
    config::ContentLimits,
    error::{ContentError, ProposalError},
    registry::ProposalRegistry,
    validation::ValidationContext,
};

/// The capabilities a proposal payload must have for a governance
/// pipeline to store it, vote on it, and dispatch it once passed.
pub trait Content {
    fn title(&self) -> &str;
    fn description(&self) -> &str;

    /// Key of the module that handles this proposal once it passes.
    fn route(&self) -> &'static str;

    /// Fixed tag used for codec dispatch and display.
    fn proposal_type(&self) -> &'static str;

    /// Stateless check of the proposal's fields. Returns the first
    /// violation found.
    fn validate_basic(&self, ctx: &ValidationContext) -> Result<(), ProposalError>;
}

/// Checks the parts of CONTENT every governance proposal shares:
/// a non-blank title and description within LIMITS and a proposal
/// type known to REGISTRY.
pub fn validate_abstract(
    content: &(impl Content + ?Sized),
    registry: &ProposalRegistry,
    limits: &ContentLimits,
) -> Result<(), ContentError> {
    let title = content.title();
    if title.trim().is_empty() {
        return Err(ContentError::BlankTitle {});
    }
    if title.len() as u64 > limits.max_title_length {
        return Err(ContentError::TitleTooLong {
            max: limits.max_title_length,
        });
    }

    let description = content.description();
    if description.is_empty() {
        return Err(ContentError::BlankDescription {});
    }
    if description.len() as u64 > limits.max_description_length {
        return Err(ContentError::DescriptionTooLong {
            max: limits.max_description_length,
        });
    }

    if !registry.is_registered(content.proposal_type()) {
        return Err(ContentError::UnregisteredProposalType {
            proposal_type: content.proposal_type().to_string(),
        });
    }

    Ok(())
}
