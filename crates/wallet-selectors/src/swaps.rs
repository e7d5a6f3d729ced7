//! Swaps accessors.

use serde::Serialize;
use wallet_model::{Account, AppState};

use crate::constants::{SWAPS_CHAINID_DEFAULT_TOKEN_MAP, SwapsTokenObject};
use crate::error::{Result, SelectorError};
use crate::network::current_chain_id;
use crate::units::{Denomination, hex_to_decimal, wei_hex_to_denomination};

/// Fractional digits shown for the native balance in the swaps form.
const SWAPS_BALANCE_DECIMALS: u32 = 4;

/// The native asset of the current chain, with the selected account's
/// balance attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapsDefaultToken {
    /// Static descriptor; absent on chains without swaps support.
    #[serde(flatten)]
    pub token: Option<SwapsTokenObject>,
    /// Balance in wei, base 10.
    pub balance: String,
    /// Balance in ether, at most four decimals.
    pub string: String,
}

pub fn swaps_default_token_object(state: &AppState) -> Option<&'static SwapsTokenObject> {
    SWAPS_CHAINID_DEFAULT_TOKEN_MAP.get(current_chain_id(state).as_str())
}

pub fn build_swaps_default_token(
    token: Option<&SwapsTokenObject>,
    selected: Option<&Account>,
) -> Result<SwapsDefaultToken> {
    let account = selected.ok_or(SelectorError::MissingSelectedAccount)?;
    let balance = account
        .balance
        .as_deref()
        .ok_or_else(|| SelectorError::MissingBalance {
            address: account.address.clone(),
        })?;
    Ok(SwapsDefaultToken {
        token: token.copied(),
        balance: hex_to_decimal(balance)?,
        string: wei_hex_to_denomination(balance, Denomination::Eth, SWAPS_BALANCE_DECIMALS)?,
    })
}
