use crate::{
    components::Services,
    error::Error,
    store::{use_store, Action, Store},
    submission::submit,
};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlTextAreaElement};

#[component]
pub fn WaveForm<G: Html>(cx: Scope) -> View<G> {
    let services = use_context::<Services>(cx);
    let store = use_store(cx);
    let state = store.state().clone();

    let draft = create_memo(cx, {
        let state = state.clone();
        move || state.get().draft.clone()
    });
    let loading = create_memo(cx, {
        let state = state.clone();
        move || state.get().loading
    });
    let empty = create_memo(cx, {
        let state = state.clone();
        move || state.get().no_message_entered
    });
    let submitted = create_memo(cx, move || state.get().submitted);

    let on_input = {
        let store = store.clone();
        move |event: Event| {
            if let Some(target) = event.target() {
                let area: HtmlTextAreaElement = target.unchecked_into();
                store.dispatch(Action::DraftChanged(area.value()));
            }
        }
    };
    let on_send = move |_: Event| {
        let store = store.clone();
        spawn_local_scoped(cx, async move {
            let text = store.snapshot().draft.clone();
            submit(&store, services.board(), &text).await;
        });
    };

    view! { cx,
        div(class="space-y-2") {
            textarea(
                class="w-full rounded-lg border border-slate-300 p-3 text-slate-900",
                placeholder="Say something nice",
                prop:value=(*draft.get()).clone(),
                on:input=on_input
            )
            (if *empty.get() {
                view! { cx, p(class="text-sm text-red-600") { (Error::EmptyMessage.user_message()) } }
            } else {
                View::empty()
            })
            (if *submitted.get() {
                view! { cx, p(class="text-sm text-green-600") { "Thanks for the wave!" } }
            } else {
                View::empty()
            })
            button(
                class="px-5 py-3 rounded-lg shadow-lg bg-indigo-700 hover:bg-indigo-600 active:bg-indigo-800 disabled:opacity-50 text-sm text-slate-200 uppercase tracking-wider font-semibold",
                prop:disabled=*loading.get(),
                on:click=on_send
            ) {
                (if *loading.get() { "Mining..." } else { "Send message" })
            }
        }
    }
}
