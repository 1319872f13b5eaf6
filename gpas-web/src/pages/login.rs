use crate::{models::app_state::AppState, routes::MainRoute, session::SessionStore};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();
    let session = use_context::<SessionStore>();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        let dispatch = dispatch;
        let session = session;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match session.login(&email_value, &password_value).await {
                    Ok(user) => {
                        dispatch.reduce_mut(|state| state.user = Some(user));
                        if let Some(nav) = navigator_handle {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => error_ref.set(Some(err.to_string())),
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Sign in to GPAS4"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"No account yet? "}
                        <Link<MainRoute> to={MainRoute::Register} classes="link link-primary">
                            {"Create one"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
