//! Capabilities the page needs from the outside world.
//!
//! The browser implementations live in [`crate::eip1193`] and [`crate::contract`]; tests drive the
//! same operations through in-memory fakes.

use crate::{error::Error, message::RawMessage};
use async_trait::async_trait;

/// Account access granted by an injected wallet.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Prompts the user to grant access and returns the granted accounts.
    async fn request_accounts(&self) -> Result<Vec<String>, Error>;
    /// Returns accounts the user already granted, without prompting.
    async fn authorized_accounts(&self) -> Result<Vec<String>, Error>;
}

/// A write that has been submitted but not yet included in a block.
#[async_trait(?Send)]
pub trait PendingTransaction {
    fn hash(&self) -> String;
    /// Resolves once the transaction is mined, or fails if it reverted.
    async fn wait(&self) -> Result<(), Error>;
}

pub type MessageHandler = Box<dyn Fn(RawMessage)>;

/// The on-chain message board.
#[async_trait(?Send)]
pub trait MessageBoard {
    /// Every message ever submitted, oldest first.
    async fn list_messages(&self) -> Result<Vec<RawMessage>, Error>;
    async fn submit_message(
        &self,
        text: &str,
        gas_limit: u64,
    ) -> Result<Box<dyn PendingTransaction>, Error>;
    /// Calls `handler` for every new message event until the returned handle is dropped.
    fn subscribe(&self, handler: MessageHandler) -> Subscription;
}

/// Keeps an event subscription alive. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Subscription {
            teardown: Some(Box::new(teardown)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}
