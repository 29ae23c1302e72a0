use anyhow::Result as AnyResult;
use cosmwasm_std::{Addr, Coin, Empty, StdResult, Uint128};
use cw_multi_test::{App, AppBuilder, AppResponse, ContractWrapper, Executor};
use incentive_proposals::{IncentiveProposal, ProposalEnvelope, ValidationConfig};

use super::governance::{governance_contract, QueryMsg as GovernanceQueryMsg, Submission};
use crate::{
    msg::{
        CodecsResponse, ExecuteMsg, InstantiateMsg, ProposalTypesResponse, QueryMsg,
        ValidateProposalResponse,
    },
    state::Config,
};

fn store_gateway(app: &mut App) -> u64 {
    let contract = Box::new(
        ContractWrapper::new_with_empty(
            crate::contract::execute,
            crate::contract::instantiate,
            crate::contract::query,
        )
        .with_migrate(crate::contract::migrate),
    );

    app.store_code(contract)
}

#[derive(Debug)]
pub struct SuiteBuilder {
    owner: Option<String>,
    validation: ValidationConfig,
    funds: Vec<(Addr, Vec<Coin>)>,
}

impl SuiteBuilder {
    pub fn new() -> Self {
        Self {
            owner: Some("owner".to_string()),
            validation: ValidationConfig::default(),
            funds: vec![],
        }
    }

    pub fn with_validation(mut self, validation: ValidationConfig) -> Self {
        self.validation = validation;
        self
    }

    pub fn without_owner(mut self) -> Self {
        self.owner = None;
        self
    }

    pub fn with_funds(mut self, addr: &str, funds: &[Coin]) -> Self {
        self.funds.push((Addr::unchecked(addr), funds.to_vec()));
        self
    }

    #[track_caller]
    pub fn build(self) -> Suite {
        let funds = self.funds;
        let mut app = AppBuilder::default().build(|router, _, storage| {
            for (addr, coins) in funds {
                router.bank.init_balance(storage, &addr, coins).unwrap();
            }
        });
        let admin = Addr::unchecked("admin");

        let governance_code_id = app.store_code(governance_contract());
        let governance = app
            .instantiate_contract(
                governance_code_id,
                admin.clone(),
                &Empty {},
                &[],
                "governance",
                None,
            )
            .unwrap();

        let gateway_code_id = store_gateway(&mut app);
        let gateway = app
            .instantiate_contract(
                gateway_code_id,
                admin.clone(),
                &InstantiateMsg {
                    owner: self.owner,
                    governance: governance.to_string(),
                    validation: self.validation,
                },
                &[],
                "incentive proposal gateway",
                Some(admin.to_string()),
            )
            .unwrap();

        Suite {
            app,
            owner: Addr::unchecked("owner"),
            governance,
            gateway,
        }
    }
}

pub struct Suite {
    pub app: App,
    pub owner: Addr,
    pub governance: Addr,
    pub gateway: Addr,
}

impl Suite {
    pub fn propose(
        &mut self,
        sender: &str,
        proposal: impl Into<IncentiveProposal>,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.gateway.clone(),
            &ExecuteMsg::Propose {
                proposal: proposal.into(),
            },
            funds,
        )
    }

    pub fn update_config(
        &mut self,
        sender: &str,
        validation: ValidationConfig,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.gateway.clone(),
            &ExecuteMsg::UpdateConfig { validation },
            funds,
        )
    }

    pub fn update_ownership(
        &mut self,
        sender: &str,
        action: cw_ownable::Action,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.gateway.clone(),
            &ExecuteMsg::UpdateOwnership(action),
            &[],
        )
    }

    pub fn query_config(&self) -> StdResult<Config> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::Config {})
    }

    pub fn query_proposal_types(&self) -> StdResult<Vec<String>> {
        let res: ProposalTypesResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::ProposalTypes {})?;
        Ok(res.proposal_types)
    }

    pub fn query_codecs(&self) -> StdResult<CodecsResponse> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::Codecs {})
    }

    pub fn query_validate(
        &self,
        proposal: impl Into<IncentiveProposal>,
    ) -> StdResult<ValidateProposalResponse> {
        self.app.wrap().query_wasm_smart(
            &self.gateway,
            &QueryMsg::ValidateProposal {
                proposal: proposal.into(),
            },
        )
    }

    pub fn query_decode(&self, envelope: ProposalEnvelope) -> StdResult<IncentiveProposal> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::DecodeProposal { envelope })
    }

    pub fn query_ownership(&self) -> StdResult<cw_ownable::Ownership<String>> {
        self.app
            .wrap()
            .query_wasm_smart(&self.gateway, &QueryMsg::Ownership {})
    }

    pub fn query_submissions(&self) -> StdResult<Vec<Submission>> {
        self.app
            .wrap()
            .query_wasm_smart(&self.governance, &GovernanceQueryMsg::Submissions {})
    }

    pub fn balance(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.app.wrap().query_balance(addr, denom).unwrap().amount
    }
}
