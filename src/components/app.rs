use crate::{
    components::{
        notifications::Notifications, theme_toggle::ThemeToggle, wallet::Wallet,
        wave_form::WaveForm, wave_list::WaveList, Services,
    },
    ledger::fetch_all,
    live::listen,
    session::check_existing_authorization,
    store::{initialize_store, use_store},
    theme::initial_theme,
};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

#[component]
pub fn App<G: Html>(cx: Scope) -> View<G> {
    let services = Services::browser();
    initialize_store(cx, initial_theme(services.storage.as_ref()));
    let services = provide_context(cx, services);
    let store = use_store(cx);

    let startup = store.clone();
    spawn_local_scoped(cx, async move {
        check_existing_authorization(&startup, services.wallet()).await;
        if services.board().is_some() {
            fetch_all(&startup, services.board()).await;
        }
    });

    if let Some(board) = services.board() {
        let subscription = listen(store.clone(), board);
        on_cleanup(cx, move || drop(subscription));
    }

    let state = store.state().clone();
    view! { cx,
        div(class=format!("min-h-screen main {}", state.get().theme.as_str())) {
            Notifications {}
            section(class="flex justify-end p-4") {
                ThemeToggle {}
            }
            section(class="container mx-auto max-w-2xl space-y-6 px-4") {
                header(class="text-3xl font-bold") {
                    "👋 Hey there!"
                }
                p {
                    "Connect your Ethereum wallet, say something nice in the box and send it to the chain."
                }
                WaveForm {}
                Wallet {}
                WaveList {}
            }
        }
    }
}
