//! Prepends messages announced by the contract's `NewMessage` event.

use crate::{
    message::Message,
    provider::{MessageBoard, Subscription},
    store::{Action, Store},
};

/// Starts forwarding new message events into the store until the handle is dropped.
///
/// Events are not checked against the initially fetched list; a message mined while the first
/// read is in flight can show up twice.
pub fn listen<S>(store: S, board: &dyn MessageBoard) -> Subscription
where
    S: Store + 'static,
{
    board.subscribe(Box::new(move |raw| {
        log::info!("NewMessage from {} at {}", raw.sender, raw.timestamp);
        store.dispatch(Action::MessageReceived(Message::from(raw)));
    }))
}
