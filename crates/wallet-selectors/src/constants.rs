//! Static chain and keyring tables.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

// ============================================================================
// Chain ids
// ============================================================================

pub const MAINNET_CHAIN_ID: &str = "0x1";
pub const ROPSTEN_CHAIN_ID: &str = "0x3";
pub const RINKEBY_CHAIN_ID: &str = "0x4";
pub const GOERLI_CHAIN_ID: &str = "0x5";
pub const KOVAN_CHAIN_ID: &str = "0x2a";
pub const LOCALHOST_CHAIN_ID: &str = "0x539";
pub const BSC_CHAIN_ID: &str = "0x38";
pub const OPTIMISM_CHAIN_ID: &str = "0xa";
pub const OPTIMISM_TESTNET_CHAIN_ID: &str = "0x45";
pub const POLYGON_CHAIN_ID: &str = "0x89";
pub const AVALANCHE_CHAIN_ID: &str = "0xa86a";
pub const FANTOM_CHAIN_ID: &str = "0xfa";
pub const CELO_CHAIN_ID: &str = "0xa4ec";

/// Chains treated as test networks.
pub const TEST_CHAINS: &[&str] = &[
    ROPSTEN_CHAIN_ID,
    RINKEBY_CHAIN_ID,
    GOERLI_CHAIN_ID,
    KOVAN_CHAIN_ID,
    LOCALHOST_CHAIN_ID,
];

/// Chains served by the built-in Infura endpoints. Anything else is a
/// user-added network.
pub const BUILT_IN_CHAINS: &[&str] = &[
    MAINNET_CHAIN_ID,
    ROPSTEN_CHAIN_ID,
    RINKEBY_CHAIN_ID,
    GOERLI_CHAIN_ID,
    KOVAN_CHAIN_ID,
    LOCALHOST_CHAIN_ID,
];

/// Chains where an L1 data fee is charged on top of L2 execution.
pub const MULTI_LAYER_FEE_CHAINS: &[&str] = &[OPTIMISM_CHAIN_ID, OPTIMISM_TESTNET_CHAIN_ID];

/// Chains with a dynamic token list and automatic token detection.
pub const TOKEN_DETECTION_CHAINS: &[&str] = &[
    MAINNET_CHAIN_ID,
    BSC_CHAIN_ID,
    POLYGON_CHAIN_ID,
    AVALANCHE_CHAIN_ID,
];

/// Chains with a fiat on-ramp.
pub const BUYABLE_CHAINS: &[&str] = &[
    MAINNET_CHAIN_ID,
    ROPSTEN_CHAIN_ID,
    RINKEBY_CHAIN_ID,
    GOERLI_CHAIN_ID,
    KOVAN_CHAIN_ID,
    BSC_CHAIN_ID,
    POLYGON_CHAIN_ID,
    AVALANCHE_CHAIN_ID,
    FANTOM_CHAIN_ID,
    CELO_CHAIN_ID,
];

/// Chains the swaps feature is enabled on.
pub const ALLOWED_SWAPS_CHAINS: &[&str] = &[
    MAINNET_CHAIN_ID,
    LOCALHOST_CHAIN_ID,
    BSC_CHAIN_ID,
    POLYGON_CHAIN_ID,
    RINKEBY_CHAIN_ID,
    AVALANCHE_CHAIN_ID,
];

// ============================================================================
// Keyrings and hardware transports
// ============================================================================

pub const KEYRING_TYPE_IMPORTED: &str = "Simple Key Pair";
pub const KEYRING_TYPE_TREZOR: &str = "Trezor Hardware";
pub const KEYRING_TYPE_LEDGER: &str = "Ledger Hardware";
pub const KEYRING_TYPE_LATTICE: &str = "Lattice Hardware";
pub const KEYRING_TYPE_QR: &str = "QR Hardware Wallet Device";

/// Marker substring shared by every hardware keyring type.
pub const HARDWARE_KEYRING_MARKER: &str = "Hardware";

// ============================================================================
// Approvals
// ============================================================================

pub const MESSAGE_TYPE_ADD_ETHEREUM_CHAIN: &str = "wallet_addEthereumChain";
pub const MESSAGE_TYPE_SWITCH_ETHEREUM_CHAIN: &str = "wallet_switchEthereumChain";

/// Approval types rendered through the templated confirmation page.
pub const TEMPLATED_CONFIRMATION_MESSAGE_TYPES: &[&str] = &[
    MESSAGE_TYPE_ADD_ETHEREUM_CHAIN,
    MESSAGE_TYPE_SWITCH_ETHEREUM_CHAIN,
];

// ============================================================================
// Reminders
// ============================================================================

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

// ============================================================================
// Swaps default tokens
// ============================================================================

pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Native asset descriptor used as the default "from" token in swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapsTokenObject {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
    pub decimals: u8,
    pub icon_url: &'static str,
}

const ETH_SWAPS_TOKEN: SwapsTokenObject = SwapsTokenObject {
    symbol: "ETH",
    name: "Ether",
    address: ZERO_ADDRESS,
    decimals: 18,
    icon_url: "./images/black-eth-logo.svg",
};

const BNB_SWAPS_TOKEN: SwapsTokenObject = SwapsTokenObject {
    symbol: "BNB",
    name: "Binance Coin",
    address: ZERO_ADDRESS,
    decimals: 18,
    icon_url: "./images/bnb.png",
};

const MATIC_SWAPS_TOKEN: SwapsTokenObject = SwapsTokenObject {
    symbol: "MATIC",
    name: "Matic",
    address: ZERO_ADDRESS,
    decimals: 18,
    icon_url: "./images/matic-token.png",
};

const AVAX_SWAPS_TOKEN: SwapsTokenObject = SwapsTokenObject {
    symbol: "AVAX",
    name: "Avalanche",
    address: ZERO_ADDRESS,
    decimals: 18,
    icon_url: "./images/avax-token.png",
};

/// Default swaps token per chain id.
pub static SWAPS_CHAINID_DEFAULT_TOKEN_MAP: LazyLock<HashMap<&'static str, SwapsTokenObject>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        map.insert(MAINNET_CHAIN_ID, ETH_SWAPS_TOKEN);
        map.insert(BSC_CHAIN_ID, BNB_SWAPS_TOKEN);
        map.insert(POLYGON_CHAIN_ID, MATIC_SWAPS_TOKEN);
        map.insert(AVALANCHE_CHAIN_ID, AVAX_SWAPS_TOKEN);
        // Test networks swap test ETH with the mainnet descriptor.
        map.insert(RINKEBY_CHAIN_ID, ETH_SWAPS_TOKEN);
        map.insert(LOCALHOST_CHAIN_ID, ETH_SWAPS_TOKEN);
        map
    });

/// Token image by native currency symbol (upper case).
pub static NATIVE_CURRENCY_TOKEN_IMAGE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        map.insert("ETH", "./images/eth_logo.svg");
        map.insert("TESTETH", "./images/eth_logo.svg");
        map.insert("BNB", "./images/bnb.png");
        map.insert("MATIC", "./images/matic-token.png");
        map.insert("AVAX", "./images/avax-token.png");
        map
    });
