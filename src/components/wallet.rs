use crate::{
    components::Services, message::short_address, session::request_connection, store::use_store,
};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;

const BUTTON_CLASS: &str = "px-5 py-3 rounded-lg shadow-lg bg-indigo-700 hover:bg-indigo-600 \
    active:bg-indigo-800 disabled:opacity-50 focus:outline-none text-sm text-slate-200 uppercase \
    tracking-wider font-semibold sm:text-base";

#[component]
pub fn Wallet<G: Html>(cx: Scope) -> View<G> {
    let services = use_context::<Services>(cx);
    let store = use_store(cx);
    let state = store.state().clone();

    view! { cx,
        div(id="wallet") {
            (match state.get().account.clone() {
                Some(account) => view! { cx,
                    p(class="text-sm text-slate-500") {
                        "Connected as " (short_address(&account))
                    }
                },
                None => {
                    let store = store.clone();
                    let loading = state.get().loading;
                    view! { cx,
                        button(
                            class=BUTTON_CLASS,
                            prop:disabled=loading,
                            on:click=move |_| {
                                let store = store.clone();
                                spawn_local_scoped(cx, async move {
                                    request_connection(&store, services.wallet()).await;
                                });
                            }
                        ) { "Connect Wallet" }
                    }
                }
            })
        }
    }
}
