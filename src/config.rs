//! Deployment constants for the wave portal frontend.

/// Address of the deployed `WavePortal` contract.
pub const CONTRACT_ADDRESS: &str = "0xF9Ee871eAd2Af973EDFfC795cCCfDc14454bb659";

/// Hardhat artifact holding the contract's ABI under the `abi` key.
pub const CONTRACT_ARTIFACT: &str = include_str!("../assets/WavePortal.json");

/// Gas ceiling attached to every `submitMessage` transaction.
pub const GAS_LIMIT: u64 = 300_000;

/// Toasts dismiss themselves after this many milliseconds.
pub const TOAST_DURATION_MS: u32 = 6_000;

/// `localStorage` key for the light/dark preference.
pub const THEME_STORAGE_KEY: &str = "mode";

/// Delay between `eth_getTransactionReceipt` polls while waiting for a block.
pub const RECEIPT_POLL_MS: u32 = 2_000;

/// Delay between `eth_getLogs` polls for new message events.
pub const EVENT_POLL_MS: u32 = 4_000;

pub const LIST_MESSAGES_FN: &str = "getListOfMessages";
pub const SUBMIT_MESSAGE_FN: &str = "submitMessage";
pub const NEW_MESSAGE_EVENT: &str = "NewMessage";

/// Widest block range requested in one `eth_getLogs` call. Hosted RPC backends cap the range.
pub const MAX_LOG_RANGE: u64 = 1_000;
