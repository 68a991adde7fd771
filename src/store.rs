use crate::{config::TOAST_DURATION_MS, error::Error, message::Message};
use std::rc::Rc;
use sycamore::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub account: Option<String>,
    pub messages: Vec<Message>,
    pub draft: String,
    /// A connection or submission is in flight.
    pub loading: bool,
    /// The message list is being read.
    pub fetching: bool,
    pub no_message_entered: bool,
    pub submitted: bool,
    pub theme: Theme,
    pub toasts: Vec<Toast>,
    next_toast_id: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ConnectStarted,
    AccountConnected(String),
    ConnectFailed,
    FetchStarted,
    MessagesLoaded(Vec<Message>),
    FetchFailed,
    DraftChanged(String),
    EmptyMessageRejected,
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed,
    MessageReceived(Message),
    ThemeToggled,
    Notify(ToastKind, String),
    ToastDismissed(u32),
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        AppState {
            theme,
            ..AppState::default()
        }
    }

    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::ConnectStarted => self.loading = true,
            Action::AccountConnected(account) => {
                self.account = Some(account);
                self.loading = false;
            }
            Action::ConnectFailed => self.loading = false,
            Action::FetchStarted => self.fetching = true,
            Action::MessagesLoaded(messages) => {
                self.messages = messages;
                self.fetching = false;
            }
            Action::FetchFailed => self.fetching = false,
            Action::DraftChanged(draft) => {
                self.draft = draft;
                self.no_message_entered = false;
            }
            Action::EmptyMessageRejected => self.no_message_entered = true,
            Action::SubmitStarted => {
                self.loading = true;
                self.submitted = false;
                self.no_message_entered = false;
            }
            Action::SubmitSucceeded => {
                self.loading = false;
                self.submitted = true;
                self.draft.clear();
            }
            Action::SubmitFailed => self.loading = false,
            Action::MessageReceived(message) => self.messages.insert(0, message),
            Action::ThemeToggled => self.theme = self.theme.toggled(),
            Action::Notify(kind, text) => {
                self.next_toast_id += 1;
                self.toasts.push(Toast {
                    id: self.next_toast_id,
                    kind,
                    text,
                });
            }
            Action::ToastDismissed(id) => self.toasts.retain(|toast| toast.id != id),
        }
    }
}

/// Anything that holds an [`AppState`] and applies [`Action`]s to it.
pub trait Store {
    fn snapshot(&self) -> Rc<AppState>;
    fn dispatch(&self, action: Action);

    fn notify_success(&self, text: &str) {
        self.dispatch(Action::Notify(ToastKind::Success, text.to_string()));
    }

    fn notify_error(&self, err: &Error) {
        self.dispatch(Action::Notify(ToastKind::Error, err.user_message()));
    }
}

impl<S: Store + ?Sized> Store for Rc<S> {
    fn snapshot(&self) -> Rc<AppState> {
        (**self).snapshot()
    }

    fn dispatch(&self, action: Action) {
        (**self).dispatch(action)
    }
}

/// The page's store: a reactive signal shared through context. Toasts dismiss themselves.
#[derive(Clone)]
pub struct UiStore {
    state: RcSignal<AppState>,
}

impl UiStore {
    pub fn state(&self) -> &RcSignal<AppState> {
        &self.state
    }
}

impl Store for UiStore {
    fn snapshot(&self) -> Rc<AppState> {
        self.state.get_untracked()
    }

    fn dispatch(&self, action: Action) {
        let shows_toast = matches!(action, Action::Notify(..));
        let mut next = (*self.state.get_untracked()).clone();
        next.reduce(action);
        let new_toast = next.toasts.last().map(|toast| toast.id).filter(|_| shows_toast);
        self.state.set(next);

        if let Some(id) = new_toast {
            let store = self.clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
                store.dispatch(Action::ToastDismissed(id));
            });
        }
    }
}

pub fn initialize_store(cx: Scope, theme: Theme) {
    provide_context(
        cx,
        UiStore {
            state: create_rc_signal(AppState::new(theme)),
        },
    );
}

pub fn use_store(cx: Scope) -> UiStore {
    use_context::<UiStore>(cx).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn message(text: &str) -> Message {
        Message {
            sender: "0xabc".to_string(),
            text: text.to_string(),
            submitted_at: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    #[test]
    fn connect_clears_loading_on_both_paths() {
        let mut state = AppState::default();
        state.reduce(Action::ConnectStarted);
        assert!(state.loading);
        state.reduce(Action::ConnectFailed);
        assert!(!state.loading);
        assert_eq!(state.account, None);

        state.reduce(Action::ConnectStarted);
        state.reduce(Action::AccountConnected("0xabc".to_string()));
        assert!(!state.loading);
        assert_eq!(state.account.as_deref(), Some("0xabc"));
    }

    #[test]
    fn received_message_goes_to_the_head() {
        let mut state = AppState::default();
        state.reduce(Action::MessagesLoaded(vec![message("b"), message("a")]));
        state.reduce(Action::MessageReceived(message("c")));
        let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["c", "b", "a"]);
    }

    #[test]
    fn failed_fetch_keeps_previous_snapshot() {
        let mut state = AppState::default();
        state.reduce(Action::MessagesLoaded(vec![message("a")]));
        state.reduce(Action::FetchStarted);
        state.reduce(Action::FetchFailed);
        assert!(!state.fetching);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn submit_failure_keeps_draft_success_clears_it() {
        let mut state = AppState::default();
        state.reduce(Action::DraftChanged("hello".to_string()));
        state.reduce(Action::SubmitStarted);
        state.reduce(Action::SubmitFailed);
        assert_eq!(state.draft, "hello");
        assert!(!state.submitted);

        state.reduce(Action::SubmitStarted);
        state.reduce(Action::SubmitSucceeded);
        assert_eq!(state.draft, "");
        assert!(state.submitted);
        assert!(!state.loading);
    }

    #[test]
    fn editing_clears_validation_flag() {
        let mut state = AppState::default();
        state.reduce(Action::EmptyMessageRejected);
        assert!(state.no_message_entered);
        state.reduce(Action::DraftChanged("h".to_string()));
        assert!(!state.no_message_entered);
    }

    #[test]
    fn toasts_get_distinct_ids_and_dismiss_individually() {
        let mut state = AppState::default();
        state.reduce(Action::Notify(ToastKind::Success, "one".to_string()));
        state.reduce(Action::Notify(ToastKind::Error, "two".to_string()));
        let ids: Vec<_> = state.toasts.iter().map(|t| t.id).collect();
        assert_ne!(ids[0], ids[1]);

        state.reduce(Action::ToastDismissed(ids[0]));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].text, "two");
    }

    #[test]
    fn theme_round_trips_through_its_storage_name() {
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
