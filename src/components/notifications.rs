use crate::store::{use_store, Action, Store, Toast, ToastKind};
use sycamore::prelude::*;
use web_sys::Event;

#[component]
pub fn Notifications<G: Html>(cx: Scope) -> View<G> {
    let store = use_store(cx);
    let state = store.state().clone();
    let toasts = create_memo(cx, move || state.get().toasts.clone());

    view! { cx,
        div(class="fixed top-4 right-4 z-50 space-y-2") {
            Indexed(
                iterable=toasts,
                view=move |cx, toast: Toast| {
                    let store = store.clone();
                    let (class, icon) = match toast.kind {
                        ToastKind::Success => ("alert__cont alert__success", "✓"),
                        ToastKind::Error => ("alert__cont alert__error", "✕"),
                    };
                    let id = toast.id;
                    view! { cx,
                        div(class=class) {
                            span(class="alert__icon-cont") { (icon) }
                            span { (toast.text.clone()) }
                            button(
                                class="ml-4",
                                on:click=move |_: Event| store.dispatch(Action::ToastDismissed(id))
                            ) { "×" }
                        }
                    }
                }
            )
        }
    }
}
