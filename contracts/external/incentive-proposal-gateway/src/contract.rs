#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    WasmMsg,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use incentive_proposals::{
    msg::GovernanceExecuteMsg, register_incentive_proposals, Content, IncentiveProposal,
    ProposalEnvelope, ProposalError, ProposalRegistry, ValidationConfig, ValidationContext,
};

use crate::error::ContractError;
use crate::msg::{
    CodecsResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, ProposalTypesResponse, QueryMsg,
    ValidateProposalResponse,
};
use crate::state::{Config, CONFIG, REGISTRY};

pub(crate) const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    cw_ownable::initialize_owner(deps.storage, deps.api, msg.owner.as_deref())?;

    let governance = deps.api.addr_validate(&msg.governance)?;
    if !msg.validation.limits.is_valid() {
        return Err(ContractError::InvalidContentLimits {});
    }
    CONFIG.save(
        deps.storage,
        &Config {
            governance: governance.clone(),
            validation: msg.validation,
        },
    )?;

    // Proposal types and codecs are registered here and nowhere
    // else. Proposals can't be validated or decoded before this.
    let mut registry = ProposalRegistry::default();
    register_incentive_proposals(&mut registry)?;
    REGISTRY.save(deps.storage, &registry)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("governance", governance)
        .add_attribute("owner", msg.owner.unwrap_or_else(|| "None".to_string())))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Propose { proposal } => execute_propose(deps.as_ref(), info, proposal),
        ExecuteMsg::UpdateConfig { validation } => execute_update_config(deps, info, validation),
        ExecuteMsg::UpdateOwnership(action) => execute_update_ownership(deps, env, info, action),
    }
}

/// Runs PROPOSAL's `validate_basic` with the configured address
/// scheme, limits, and allocation strictness.
fn validate_proposal(
    deps: Deps,
    config: &Config,
    registry: &ProposalRegistry,
    proposal: &IncentiveProposal,
) -> Result<(), ProposalError> {
    let address = config.validation.address_scheme.validator(deps.api);
    proposal.validate_basic(&ValidationContext::new(
        &*address,
        registry,
        &config.validation,
    ))
}

pub fn execute_propose(
    deps: Deps,
    info: MessageInfo,
    proposal: IncentiveProposal,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let registry = REGISTRY.load(deps.storage)?;

    validate_proposal(deps, &config, &registry, &proposal)?;
    let envelope = registry.encode(&proposal)?;

    let response = Response::default()
        .add_attribute("action", "propose")
        .add_attribute("route", &envelope.route)
        .add_attribute("proposal_type", &envelope.proposal_type)
        .add_attribute("codec", &envelope.codec)
        .add_attribute("contract", proposal.contract())
        .add_attribute("proposer", info.sender.as_str());

    // The deposit belongs to governance from here on.
    let msg = WasmMsg::Execute {
        contract_addr: config.governance.into_string(),
        msg: to_json_binary(&GovernanceExecuteMsg::SubmitProposal {
            content: envelope,
            proposer: info.sender.into_string(),
        })?,
        funds: info.funds,
    };

    Ok(response.add_message(msg))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    validation: ValidationConfig,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    if !validation.limits.is_valid() {
        return Err(ContractError::InvalidContentLimits {});
    }

    let config = CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.validation = validation;
        Ok(config)
    })?;

    Ok(Response::default()
        .add_attribute("action", "update_config")
        .add_attribute(
            "address_scheme",
            config.validation.address_scheme.to_string(),
        )
        .add_attribute(
            "max_title_length",
            config.validation.limits.max_title_length.to_string(),
        )
        .add_attribute(
            "max_description_length",
            config.validation.limits.max_description_length.to_string(),
        )
        .add_attribute(
            "strict_allocations",
            config.validation.strict_allocations.to_string(),
        ))
}

pub fn execute_update_ownership(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    action: cw_ownable::Action,
) -> Result<Response, ContractError> {
    let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;

    Ok(Response::default()
        .add_attribute("action", "update_ownership")
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::ProposalTypes {} => query_proposal_types(deps),
        QueryMsg::Codecs {} => query_codecs(deps),
        QueryMsg::ValidateProposal { proposal } => query_validate_proposal(deps, proposal),
        QueryMsg::DecodeProposal { envelope } => query_decode_proposal(deps, envelope),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

pub fn query_proposal_types(deps: Deps) -> StdResult<Binary> {
    let registry = REGISTRY.load(deps.storage)?;
    to_json_binary(&ProposalTypesResponse {
        proposal_types: registry.proposal_types(),
    })
}

pub fn query_codecs(deps: Deps) -> StdResult<Binary> {
    let registry = REGISTRY.load(deps.storage)?;
    to_json_binary(&CodecsResponse {
        codecs: registry.codecs(),
    })
}

pub fn query_validate_proposal(deps: Deps, proposal: IncentiveProposal) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let registry = REGISTRY.load(deps.storage)?;

    let error = validate_proposal(deps, &config, &registry, &proposal)
        .err()
        .map(|err| err.to_string());

    to_json_binary(&ValidateProposalResponse {
        route: proposal.route().to_string(),
        proposal_type: proposal.proposal_type().to_string(),
        error,
    })
}

pub fn query_decode_proposal(deps: Deps, envelope: ProposalEnvelope) -> StdResult<Binary> {
    let registry = REGISTRY.load(deps.storage)?;
    let proposal = registry.decode(&envelope).map_err(|err| match err {
        ProposalError::Std(err) => err,
        err => StdError::generic_err(err.to_string()),
    })?;
    to_json_binary(&proposal)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
