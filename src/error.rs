use thiserror::Error;
use wasm_bindgen::JsValue;

/// EIP-1193 code for a request the user declined in the wallet.
const USER_REJECTED_CODE: f64 = 4001.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("No Ethereum wallet found. Install MetaMask and reload the page.")]
    ProviderNotFound,
    #[error("Request was rejected in the wallet.")]
    UserRejected,
    #[error("{0}")]
    CallFailed(String),
    #[error("Transaction {0} reverted.")]
    Reverted(String),
    #[error("Connect a wallet before sending a message.")]
    NoAccount,
    #[error("Enter a message first.")]
    EmptyMessage,
    #[error("contract interface: {0}")]
    Abi(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl Error {
    /// Text shown in an error toast. Provider failures without a message get a generic line.
    pub fn user_message(&self) -> String {
        match self {
            Error::CallFailed(message) if message.trim().is_empty() => {
                "Something went wrong. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Maps a rejected provider promise onto the error taxonomy.
    pub fn from_js(value: JsValue) -> Self {
        let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64());
        let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
            .or_else(|| value.as_string());
        Error::from_rpc(code, message)
    }

    /// Classifies a provider error by its EIP-1193 `code` and `message`.
    pub fn from_rpc(code: Option<f64>, message: Option<String>) -> Self {
        if code == Some(USER_REJECTED_CODE) {
            return Error::UserRejected;
        }
        Error::CallFailed(message.unwrap_or_default())
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::from_js(value)
    }
}

impl From<serde_wasm_bindgen::Error> for Error {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Abi(err.to_string())
    }
}

impl From<alloy_dyn_abi::Error> for Error {
    fn from(err: alloy_dyn_abi::Error) -> Self {
        Error::Abi(err.to_string())
    }
}
