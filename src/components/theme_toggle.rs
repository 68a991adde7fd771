use crate::{
    components::Services,
    store::{use_store, Theme},
    theme::toggle_theme,
};
use sycamore::prelude::*;
use web_sys::Event;

#[component]
pub fn ThemeToggle<G: Html>(cx: Scope) -> View<G> {
    let services = use_context::<Services>(cx);
    let store = use_store(cx);
    let state = store.state().clone();

    view! { cx,
        button(
            class="changeMode rounded-full p-2",
            on:click=move |_: Event| toggle_theme(&store, services.storage.as_ref())
        ) {
            (if state.get().theme == Theme::Dark { "☀️" } else { "🌙" })
        }
    }
}
