//! Reads the full message list from the contract.

use crate::{
    error::Error,
    message::into_display_order,
    provider::MessageBoard,
    store::{Action, Store},
};

pub async fn fetch_all(store: &impl Store, board: Option<&dyn MessageBoard>) {
    let Some(board) = board else {
        log::warn!("No ethereum object found");
        store.notify_error(&Error::ProviderNotFound);
        return;
    };

    store.dispatch(Action::FetchStarted);
    match board.list_messages().await {
        Ok(raw) => {
            log::debug!("fetched {} messages", raw.len());
            store.dispatch(Action::MessagesLoaded(into_display_order(raw)));
        }
        Err(err) => {
            log::error!("could not read messages: {}", err);
            store.dispatch(Action::FetchFailed);
            store.notify_error(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        store::ToastKind,
        testing::{raw, FakeBoard, MemoryStore},
    };
    use futures::executor::block_on;

    #[test]
    fn loads_most_recent_first() {
        let store = MemoryStore::default();
        let board = FakeBoard::with_messages(vec![
            raw("0x1", 10, "oldest"),
            raw("0x2", 20, "middle"),
            raw("0x3", 30, "newest"),
        ]);
        block_on(fetch_all(&store, Some(&board)));

        let state = store.snapshot();
        let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["newest", "middle", "oldest"]);
        assert_eq!(state.messages[0].submitted_at.timestamp(), 30);
        assert!(!state.fetching);
    }

    #[test]
    fn fetching_flag_is_raised_then_cleared() {
        let store = MemoryStore::default();
        block_on(fetch_all(&store, Some(&FakeBoard::with_messages(Vec::new()))));
        let log = store.log.borrow();
        assert_eq!(log[0], Action::FetchStarted);
        assert!(matches!(log[1], Action::MessagesLoaded(ref m) if m.is_empty()));
        assert!(!store.snapshot().fetching);
    }

    #[test]
    fn failure_keeps_list_and_clears_flag() {
        let store = MemoryStore::default();
        block_on(fetch_all(&store, Some(&FakeBoard::with_messages(vec![raw("0x1", 1, "kept")]))));

        let failing = FakeBoard {
            messages: Err(Error::CallFailed("network down".to_string())),
            ..FakeBoard::with_messages(Vec::new())
        };
        block_on(fetch_all(&store, Some(&failing)));

        let state = store.snapshot();
        assert!(!state.fetching);
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.toasts.last().map(|t| t.text.as_str()), Some("network down"));
    }

    #[test]
    fn missing_provider_reports_and_leaves_list() {
        let store = MemoryStore::default();
        block_on(fetch_all(&store, None));
        let state = store.snapshot();
        assert!(state.messages.is_empty());
        assert!(!state.fetching);
        assert_eq!(state.toasts[0].kind, ToastKind::Error);
    }
}
