mod api;
mod app;
mod components;
mod config;
mod containers;
mod error;
mod mock;
mod models;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod session_test;

use app::App;
use yew::Renderer;
use yew::{function_component, html, Html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting GPAS4 dashboard".into());

    Renderer::<Root>::new().render();
}
