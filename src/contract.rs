//! Contract binding built from a JSON ABI, talking to the chain through the injected provider.

use crate::{
    config::{
        CONTRACT_ADDRESS, CONTRACT_ARTIFACT, EVENT_POLL_MS, LIST_MESSAGES_FN, MAX_LOG_RANGE,
        NEW_MESSAGE_EVENT, RECEIPT_POLL_MS, SUBMIT_MESSAGE_FN,
    },
    eip1193::Eip1193,
    error::Error,
    message::RawMessage,
    provider::{MessageBoard, MessageHandler, PendingTransaction, Subscription},
};
use alloy_dyn_abi::{DynSolValue, EventExt, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Event, Function, JsonAbi};
use alloy_primitives::{Address, Bytes, B256, U64};
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::json;
use std::{cell::Cell, rc::Rc};

/// Compiler artifact as bundled with the page; only the ABI is used.
#[derive(Deserialize)]
struct Artifact {
    abi: JsonAbi,
}

pub fn parse_artifact(artifact: &str) -> Result<JsonAbi, Error> {
    let Artifact { abi } = serde_json::from_str(artifact)?;
    Ok(abi)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Receipt {
    status: Option<U64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RpcLog {
    topics: Vec<B256>,
    data: Bytes,
}

/// A deployed contract: its address, its ABI and the provider used to reach it.
pub struct Contract {
    address: Address,
    abi: JsonAbi,
    provider: Eip1193,
}

impl Contract {
    pub fn new(address: Address, abi: JsonAbi, provider: Eip1193) -> Self {
        Contract {
            address,
            abi,
            provider,
        }
    }

    fn function(&self, name: &str) -> Result<&Function, Error> {
        self.abi
            .function(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| Error::Abi(format!("no function `{}`", name)))
    }

    fn event(&self, name: &str) -> Result<&Event, Error> {
        self.abi
            .event(name)
            .and_then(|overloads| overloads.first())
            .ok_or_else(|| Error::Abi(format!("no event `{}`", name)))
    }

    /// Read-only call against the latest block.
    pub async fn call(&self, name: &str, args: &[DynSolValue]) -> Result<Vec<DynSolValue>, Error> {
        let function = self.function(name)?;
        let data = Bytes::from(function.abi_encode_input(args)?);
        let output: Bytes = self
            .provider
            .request("eth_call", json!([{ "to": self.address, "data": data }, "latest"]))
            .await?;
        Ok(function.abi_decode_output(&output)?)
    }

    /// Asks the wallet to sign and broadcast a transaction from the connected account.
    pub async fn send(
        &self,
        name: &str,
        args: &[DynSolValue],
        gas_limit: u64,
    ) -> Result<B256, Error> {
        let function = self.function(name)?;
        let data = Bytes::from(function.abi_encode_input(args)?);
        let accounts: Vec<Address> = self.provider.request("eth_accounts", json!([])).await?;
        let from = accounts.first().ok_or(Error::NoAccount)?;
        self.provider
            .request(
                "eth_sendTransaction",
                json!([{
                    "from": from,
                    "to": self.address,
                    "data": data,
                    "gas": format!("{:#x}", gas_limit),
                }]),
            )
            .await
    }

    pub async fn block_number(&self) -> Result<u64, Error> {
        let block: U64 = self.provider.request("eth_blockNumber", json!([])).await?;
        Ok(block.to::<u64>())
    }

    /// Decoded fields of every `name` event emitted by this contract in `from_block..=to_block`.
    pub async fn events(
        &self,
        name: &str,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<Vec<DynSolValue>>, Error> {
        let event = self.event(name)?;
        let logs: Vec<RpcLog> = self
            .provider
            .request(
                "eth_getLogs",
                json!([{
                    "address": self.address,
                    "topics": [event.selector()],
                    "fromBlock": format!("{:#x}", from_block),
                    "toBlock": format!("{:#x}", to_block),
                }]),
            )
            .await?;
        logs.into_iter()
            .map(|log| -> Result<Vec<DynSolValue>, Error> {
                let decoded = event.decode_log_parts(log.topics, &log.data)?;
                Ok(decoded.indexed.into_iter().chain(decoded.body).collect())
            })
            .collect()
    }
}

/// Builds a message record from decoded ABI values, matching fields by type.
pub fn raw_message(fields: impl IntoIterator<Item = DynSolValue>) -> Result<RawMessage, Error> {
    let (mut sender, mut timestamp, mut text) = (None, None, None);
    for field in fields {
        match field {
            DynSolValue::Address(address) => sender = Some(address.to_string()),
            DynSolValue::Uint(value, _) => {
                let secs = u64::try_from(value)
                    .map_err(|_| Error::Decode("timestamp does not fit in u64".to_string()))?;
                timestamp = Some(secs);
            }
            DynSolValue::String(value) => text = Some(value),
            other => return Err(Error::Decode(format!("unexpected field {:?}", other))),
        }
    }
    match (sender, timestamp, text) {
        (Some(sender), Some(timestamp), Some(text)) => Ok(RawMessage {
            sender,
            timestamp,
            text,
        }),
        _ => Err(Error::Decode("incomplete message record".to_string())),
    }
}

/// Unpacks the single `tuple[]` returned by `getListOfMessages`.
pub fn raw_messages(output: Vec<DynSolValue>) -> Result<Vec<RawMessage>, Error> {
    match output.into_iter().next() {
        Some(DynSolValue::Array(records)) => records
            .into_iter()
            .map(|record| match record {
                DynSolValue::Tuple(fields) => raw_message(fields),
                other => Err(Error::Decode(format!("expected tuple, got {:?}", other))),
            })
            .collect(),
        other => Err(Error::Decode(format!("expected message array, got {:?}", other))),
    }
}

/// Inclusive block range for the next log poll, or `None` until `head` reaches `next_block`.
///
/// A poller that fell behind catches up `MAX_LOG_RANGE` blocks at a time.
fn poll_window(next_block: u64, head: u64) -> Option<(u64, u64)> {
    if head < next_block {
        return None;
    }
    Some((next_block, head.min(next_block + MAX_LOG_RANGE - 1)))
}

/// What an `eth_getTransactionReceipt` result means for a transaction.
///
/// `None` while the transaction is still pending. A receipt with status `0` reverted; receipts
/// without a status field come from pre-Byzantium chains and count as mined.
fn receipt_outcome(receipt: Option<Receipt>, hash: &str) -> Option<Result<(), Error>> {
    match receipt? {
        Receipt {
            status: Some(status),
        } if status == U64::ZERO => Some(Err(Error::Reverted(hash.to_string()))),
        Receipt { .. } => Some(Ok(())),
    }
}

/// The wave portal contract as a [`MessageBoard`].
pub struct WavePortal {
    contract: Rc<Contract>,
}

impl WavePortal {
    pub fn new(provider: Eip1193) -> Result<Self, Error> {
        let address: Address = CONTRACT_ADDRESS
            .parse()
            .map_err(|err| Error::Abi(format!("bad contract address: {}", err)))?;
        let abi = parse_artifact(CONTRACT_ARTIFACT)?;
        Ok(WavePortal {
            contract: Rc::new(Contract::new(address, abi, provider)),
        })
    }
}

struct PendingWave {
    hash: B256,
    provider: Eip1193,
}

#[async_trait(?Send)]
impl PendingTransaction for PendingWave {
    fn hash(&self) -> String {
        self.hash.to_string()
    }

    async fn wait(&self) -> Result<(), Error> {
        loop {
            let receipt: Option<Receipt> = self
                .provider
                .request("eth_getTransactionReceipt", json!([self.hash]))
                .await?;
            match receipt_outcome(receipt, &self.hash()) {
                Some(outcome) => return outcome,
                None => TimeoutFuture::new(RECEIPT_POLL_MS).await,
            }
        }
    }
}

#[async_trait(?Send)]
impl MessageBoard for WavePortal {
    async fn list_messages(&self) -> Result<Vec<RawMessage>, Error> {
        raw_messages(self.contract.call(LIST_MESSAGES_FN, &[]).await?)
    }

    async fn submit_message(
        &self,
        text: &str,
        gas_limit: u64,
    ) -> Result<Box<dyn PendingTransaction>, Error> {
        let args = [DynSolValue::String(text.to_string())];
        let hash = self.contract.send(SUBMIT_MESSAGE_FN, &args, gas_limit).await?;
        Ok(Box::new(PendingWave {
            hash,
            provider: self.contract.provider.clone(),
        }))
    }

    fn subscribe(&self, handler: MessageHandler) -> Subscription {
        let active = Rc::new(Cell::new(true));
        let running = active.clone();
        let contract = self.contract.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let mut next_block = match contract.block_number().await {
                Ok(block) => block + 1,
                Err(err) => {
                    log::error!("could not start {} subscription: {}", NEW_MESSAGE_EVENT, err);
                    return;
                }
            };
            while running.get() {
                TimeoutFuture::new(EVENT_POLL_MS).await;
                if !running.get() {
                    break;
                }
                let head = match contract.block_number().await {
                    Ok(head) => head,
                    Err(err) => {
                        log::warn!("reading block number failed: {}", err);
                        continue;
                    }
                };
                let Some((from, to)) = poll_window(next_block, head) else {
                    continue;
                };
                let events = match contract.events(NEW_MESSAGE_EVENT, from, to).await {
                    Ok(events) => events,
                    Err(err) => {
                        log::warn!(
                            "polling {} in blocks {}..={} failed: {}",
                            NEW_MESSAGE_EVENT,
                            from,
                            to,
                            err
                        );
                        continue;
                    }
                };
                next_block = to + 1;
                for fields in events {
                    match raw_message(fields) {
                        Ok(raw) => handler(raw),
                        Err(err) => log::warn!("skipping malformed {}: {}", NEW_MESSAGE_EVENT, err),
                    }
                }
            }
            log::debug!("{} subscription closed", NEW_MESSAGE_EVENT);
        });

        Subscription::new(move || active.set(false))
    }
}
