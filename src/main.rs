mod components;
mod config;
mod contract;
mod eip1193;
mod error;
mod ledger;
mod live;
mod message;
mod provider;
mod session;
mod store;
mod submission;
mod theme;

#[cfg(test)]
mod testing;

use components::app::App;
use sycamore::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger already set: {}", err).into());
    }

    sycamore::render(|cx| {
        view! { cx,
            App {}
        }
    });
}
