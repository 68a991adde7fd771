//! The wallet-injected `window.ethereum` object (EIP-1193).

use crate::{error::Error, provider::WalletProvider};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Clone)]
pub struct Eip1193 {
    ethereum: JsValue,
}

impl Eip1193 {
    /// Looks up `window.ethereum`; `None` when no wallet extension injected one.
    pub fn detect() -> Option<Eip1193> {
        let ethereum = web_sys::window()?.get("ethereum")?;
        log::debug!("We have the ethereum object");
        Some(Eip1193 {
            ethereum: ethereum.into(),
        })
    }

    /// Sends one JSON-RPC request through the provider's `request` method.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, Error> {
        let request: js_sys::Function =
            js_sys::Reflect::get(&self.ethereum, &JsValue::from_str("request"))?
                .dyn_into()
                .map_err(|_| Error::ProviderNotFound)?;

        let args = RpcRequest { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        log::debug!("{} {:?}", method, args);

        let promise = js_sys::Promise::resolve(&request.call1(&self.ethereum, &args)?);
        let result = wasm_bindgen_futures::JsFuture::from(promise).await?;
        Ok(serde_wasm_bindgen::from_value(result)?)
    }
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193 {
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        self.request("eth_requestAccounts", serde_json::json!([])).await
    }

    async fn authorized_accounts(&self) -> Result<Vec<String>, Error> {
        self.request("eth_accounts", serde_json::json!([])).await
    }
}
