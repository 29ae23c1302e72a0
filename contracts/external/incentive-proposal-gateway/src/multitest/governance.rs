//! A stand-in governance pipeline that records every submission.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Coin, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;
use incentive_proposals::{msg::GovernanceExecuteMsg, ProposalEnvelope};

#[cw_serde]
pub struct Submission {
    pub content: ProposalEnvelope,
    pub proposer: String,
    pub deposit: Vec<Coin>,
}

#[cw_serde]
pub enum QueryMsg {
    Submissions {},
}

const SUBMISSIONS: Item<Vec<Submission>> = Item::new("submissions");

fn instantiate(deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
    SUBMISSIONS.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: GovernanceExecuteMsg,
) -> StdResult<Response> {
    match msg {
        GovernanceExecuteMsg::SubmitProposal { content, proposer } => {
            SUBMISSIONS.update(deps.storage, |mut submissions| -> StdResult<_> {
                submissions.push(Submission {
                    content,
                    proposer,
                    deposit: info.funds,
                });
                Ok(submissions)
            })?;
            Ok(Response::new().add_attribute("action", "submit_proposal"))
        }
    }
}

fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Submissions {} => to_json_binary(&SUBMISSIONS.load(deps.storage)?),
    }
}

pub fn governance_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
