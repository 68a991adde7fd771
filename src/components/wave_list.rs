use crate::{
    components::Services,
    ledger::fetch_all,
    message::{short_address, Message},
    store::use_store,
};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event;

#[component]
pub fn WaveList<G: Html>(cx: Scope) -> View<G> {
    let services = use_context::<Services>(cx);
    let store = use_store(cx);
    let state = store.state().clone();

    let messages = create_memo(cx, {
        let state = state.clone();
        move || state.get().messages.clone()
    });
    let fetching = create_memo(cx, move || state.get().fetching);

    let on_refresh = move |_: Event| {
        let store = store.clone();
        spawn_local_scoped(cx, async move {
            fetch_all(&store, services.board()).await;
        });
    };

    view! { cx,
        div(class="space-y-4") {
            div(class="flex items-center justify-between") {
                h2(class="text-xl font-semibold") {
                    (format!("{} messages", messages.get().len()))
                }
                button(class="text-sm text-indigo-600 hover:underline", on:click=on_refresh) {
                    "Refresh"
                }
            }
            (if *fetching.get() {
                view! { cx, p(class="text-slate-500") { "Loading messages..." } }
            } else {
                View::empty()
            })
            div(class="overflow-hidden rounded-lg") {
                ul(class="divide-y divide-slate-700") {
                    Indexed(
                        iterable=messages,
                        view=|cx, message: Message| {
                            let sender = short_address(&message.sender);
                            let time = message.display_time();
                            view! { cx,
                                li(class="bg-slate-600 py-4 px-6") {
                                    p(class="font-medium text-white") { (message.text.clone()) }
                                    p(class="text-sm text-slate-200") { (sender.clone()) " · " (time.clone()) }
                                }
                            }
                        }
                    )
                }
            }
        }
    }
}
