use std::collections::BTreeSet;

use cosmwasm_std::{Api, Decimal};
use cw_denom::validate_native_denom;

use crate::{
    config::ValidationConfig,
    error::ProposalError,
    proposal::Allocation,
    registry::ProposalRegistry,
};

/// Structural check of a chain address.
pub trait AddressValidator {
    fn validate_address(&self, address: &str) -> Result<(), ProposalError>;
}

/// Accepts Ethereum style hex addresses, with or without a `0x`
/// prefix.
pub struct HexAddress;

impl AddressValidator for HexAddress {
    fn validate_address(&self, address: &str) -> Result<(), ProposalError> {
        let digits = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);
        if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ProposalError::InvalidAddress {
                address: address.to_string(),
                reason: "not a valid ethereum hex address".to_string(),
            });
        }
        Ok(())
    }
}

/// Accepts whatever the chain's API accepts.
pub struct NativeAddress<'a>(pub &'a dyn Api);

impl AddressValidator for NativeAddress<'_> {
    fn validate_address(&self, address: &str) -> Result<(), ProposalError> {
        self.0
            .addr_validate(address)
            .map(|_| ())
            .map_err(|err| ProposalError::InvalidAddress {
                address: address.to_string(),
                reason: err.to_string(),
            })
    }
}

/// Everything `validate_basic` needs besides the proposal itself.
pub struct ValidationContext<'a> {
    pub address: &'a dyn AddressValidator,
    pub registry: &'a ProposalRegistry,
    pub config: &'a ValidationConfig,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        address: &'a dyn AddressValidator,
        registry: &'a ProposalRegistry,
        config: &'a ValidationConfig,
    ) -> Self {
        Self {
            address,
            registry,
            config,
        }
    }
}

/// Checks that every allocation has a valid native denom (SDK rules,
/// `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`) and an amount in (0, 1]. When
/// STRICT is set the allocations are also checked as a set.
pub fn validate_allocations(allocations: &[Allocation], strict: bool) -> Result<(), ProposalError> {
    for allocation in allocations {
        validate_native_denom(allocation.denom.clone()).map_err(|err| {
            ProposalError::InvalidDenom {
                denom: allocation.denom.clone(),
                err,
            }
        })?;
        validate_amount(allocation.amount)?;
    }
    if strict {
        validate_allocation_set(allocations)?;
    }
    Ok(())
}

pub fn validate_amount(amount: Decimal) -> Result<(), ProposalError> {
    if amount.is_zero() || amount > Decimal::one() {
        return Err(ProposalError::InvalidAllocationAmount { amount });
    }
    Ok(())
}

pub fn validate_epochs(epochs: u32) -> Result<(), ProposalError> {
    if epochs == 0 {
        return Err(ProposalError::InvalidEpochs { epochs });
    }
    Ok(())
}

// Amounts have already been checked to be <= 1 so the sum can't
// overflow.
fn validate_allocation_set(allocations: &[Allocation]) -> Result<(), ProposalError> {
    let mut seen = BTreeSet::new();
    let mut total = Decimal::zero();
    for allocation in allocations {
        if !seen.insert(allocation.denom.as_str()) {
            return Err(ProposalError::DuplicateAllocationDenom {
                denom: allocation.denom.clone(),
            });
        }
        total += allocation.amount;
    }
    if total > Decimal::one() {
        return Err(ProposalError::AllocationsExceedOne { total });
    }
    Ok(())
}
