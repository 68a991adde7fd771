//! Validates and sends a new message, then waits for it to be mined.

use crate::{
    config::GAS_LIMIT,
    error::Error,
    provider::MessageBoard,
    store::{Action, Store},
};

pub async fn submit(store: &impl Store, board: Option<&dyn MessageBoard>, text: &str) {
    if text.trim().is_empty() {
        store.dispatch(Action::EmptyMessageRejected);
        return;
    }
    if store.snapshot().loading {
        log::debug!("submit ignored, another request is in flight");
        return;
    }
    let Some(board) = board else {
        store.notify_error(&Error::ProviderNotFound);
        return;
    };

    store.dispatch(Action::SubmitStarted);
    match send_and_confirm(board, text).await {
        Ok(()) => {
            store.dispatch(Action::SubmitSucceeded);
            store.notify_success("Message sent!");
        }
        Err(err) => {
            log::error!("submitting message failed: {}", err);
            store.dispatch(Action::SubmitFailed);
            store.notify_error(&err);
        }
    }
}

async fn send_and_confirm(board: &dyn MessageBoard, text: &str) -> Result<(), Error> {
    let pending = board.submit_message(text, GAS_LIMIT).await?;
    log::info!("Mining... {}", pending.hash());
    pending.wait().await?;
    log::info!("Mined -- {}", pending.hash());
    Ok(())
}
