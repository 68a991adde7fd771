//! In-memory stand-ins for the browser, wallet and contract.

use crate::{
    error::Error,
    message::RawMessage,
    provider::{MessageBoard, MessageHandler, PendingTransaction, Subscription, WalletProvider},
    store::{Action, AppState, Store},
    theme::ThemeStorage,
};
use async_trait::async_trait;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

pub struct MemoryStore {
    state: RefCell<Rc<AppState>>,
    pub log: RefCell<Vec<Action>>,
}

impl MemoryStore {
    pub fn new(state: AppState) -> Self {
        MemoryStore {
            state: RefCell::new(Rc::new(state)),
            log: RefCell::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new(AppState::default())
    }
}

impl Store for MemoryStore {
    fn snapshot(&self) -> Rc<AppState> {
        self.state.borrow().clone()
    }

    fn dispatch(&self, action: Action) {
        self.log.borrow_mut().push(action.clone());
        let mut next = (**self.state.borrow()).clone();
        next.reduce(action);
        *self.state.borrow_mut() = Rc::new(next);
    }
}

#[derive(Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn with(value: &str) -> Self {
        MemoryStorage {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

pub struct FakeWallet {
    pub authorized: Result<Vec<String>, Error>,
    pub requested: Result<Vec<String>, Error>,
    pub prompts: Cell<usize>,
}

impl FakeWallet {
    pub fn authorized(accounts: &[&str]) -> Self {
        FakeWallet {
            authorized: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            requested: Ok(Vec::new()),
            prompts: Cell::new(0),
        }
    }

    pub fn granting(accounts: &[&str]) -> Self {
        FakeWallet {
            authorized: Ok(Vec::new()),
            requested: Ok(accounts.iter().map(|a| a.to_string()).collect()),
            prompts: Cell::new(0),
        }
    }

    pub fn rejecting() -> Self {
        FakeWallet {
            authorized: Ok(Vec::new()),
            requested: Err(Error::UserRejected),
            prompts: Cell::new(0),
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for FakeWallet {
    async fn request_accounts(&self) -> Result<Vec<String>, Error> {
        self.prompts.set(self.prompts.get() + 1);
        self.requested.clone()
    }

    async fn authorized_accounts(&self) -> Result<Vec<String>, Error> {
        self.authorized.clone()
    }
}

pub struct FakePending {
    outcome: Result<(), Error>,
}

#[async_trait(?Send)]
impl PendingTransaction for FakePending {
    fn hash(&self) -> String {
        "0xfeed".to_string()
    }

    async fn wait(&self) -> Result<(), Error> {
        self.outcome.clone()
    }
}

type SendHook = Box<dyn Fn()>;

pub struct FakeBoard {
    pub messages: Result<Vec<RawMessage>, Error>,
    /// Outcome of sending; `Ok` holds the outcome of waiting for the block.
    pub send: Result<Result<(), Error>, Error>,
    pub sent: RefCell<Vec<(String, u64)>>,
    pub reads: Cell<usize>,
    /// Runs inside `submit_message`, before it resolves.
    pub on_send: RefCell<Option<SendHook>>,
    pub handlers: Rc<RefCell<Vec<Option<MessageHandler>>>>,
}

impl FakeBoard {
    pub fn with_messages(messages: Vec<RawMessage>) -> Self {
        FakeBoard {
            messages: Ok(messages),
            send: Ok(Ok(())),
            sent: RefCell::new(Vec::new()),
            reads: Cell::new(0),
            on_send: RefCell::new(None),
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn failing_send(err: Error) -> Self {
        FakeBoard {
            send: Err(err),
            ..FakeBoard::with_messages(Vec::new())
        }
    }

    pub fn reverting() -> Self {
        FakeBoard {
            send: Ok(Err(Error::Reverted("0xfeed".to_string()))),
            ..FakeBoard::with_messages(Vec::new())
        }
    }

    pub fn emit(&self, raw: RawMessage) {
        for handler in self.handlers.borrow().iter().flatten() {
            handler(raw.clone());
        }
    }

    pub fn active_subscriptions(&self) -> usize {
        self.handlers.borrow().iter().flatten().count()
    }
}

#[async_trait(?Send)]
impl MessageBoard for FakeBoard {
    async fn list_messages(&self) -> Result<Vec<RawMessage>, Error> {
        self.reads.set(self.reads.get() + 1);
        self.messages.clone()
    }

    async fn submit_message(
        &self,
        text: &str,
        gas_limit: u64,
    ) -> Result<Box<dyn PendingTransaction>, Error> {
        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook();
        }
        self.sent.borrow_mut().push((text.to_string(), gas_limit));
        let outcome = self.send.clone()?;
        Ok(Box::new(FakePending { outcome }))
    }

    fn subscribe(&self, handler: MessageHandler) -> Subscription {
        let mut handlers = self.handlers.borrow_mut();
        let slot = handlers.len();
        handlers.push(Some(handler));
        let handlers = self.handlers.clone();
        Subscription::new(move || handlers.borrow_mut()[slot] = None)
    }
}

pub fn raw(sender: &str, timestamp: u64, text: &str) -> RawMessage {
    RawMessage {
        sender: sender.to_string(),
        timestamp,
        text: text.to_string(),
    }
}
