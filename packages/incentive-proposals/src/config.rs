use cosmwasm_schema::cw_serde;
use cosmwasm_std::Api;

use crate::validation::{AddressValidator, HexAddress, NativeAddress};

/// Max title length, in bytes, of governance content.
pub const DEFAULT_MAX_TITLE_LENGTH: u64 = 140;
/// Max description length, in bytes, of governance content.
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: u64 = 5000;

/// How the `contract` field of a proposal is checked.
#[cw_serde]
#[derive(Copy, Default)]
pub enum AddressScheme {
    /// Ethereum style hex addresses: an optional `0x` prefix followed
    /// by 40 hex digits.
    #[default]
    Hex,
    /// Addresses accepted by the chain's `Api::addr_validate`.
    Native,
}

impl AddressScheme {
    /// Gets the address validator for this scheme. API is only used
    /// by the native scheme.
    pub fn validator<'a>(&self, api: &'a dyn Api) -> Box<dyn AddressValidator + 'a> {
        match self {
            AddressScheme::Hex => Box::new(HexAddress),
            AddressScheme::Native => Box::new(NativeAddress(api)),
        }
    }
}

impl std::fmt::Display for AddressScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressScheme::Hex => write!(f, "hex"),
            AddressScheme::Native => write!(f, "native"),
        }
    }
}

/// Length limits for proposal titles and descriptions.
#[cw_serde]
#[derive(Copy)]
pub struct ContentLimits {
    pub max_title_length: u64,
    pub max_description_length: u64,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ContentLimits {
    /// Limits of zero would reject every proposal.
    pub fn is_valid(&self) -> bool {
        self.max_title_length != 0 && self.max_description_length != 0
    }
}

#[cw_serde]
#[derive(Default)]
pub struct ValidationConfig {
    pub address_scheme: AddressScheme,
    pub limits: ContentLimits,
    /// If set, register proposals are rejected when a denom appears
    /// in more than one allocation or when their allocations sum to
    /// more than one.
    pub strict_allocations: bool,
}
