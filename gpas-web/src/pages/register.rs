use crate::{models::app_state::AppState, routes::MainRoute, session::SessionStore};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<AppState>();
    let session = use_context::<SessionStore>();

    let onsubmit = {
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let confirm_handle = confirm.clone();
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
            error_handle.set(None);
            if *password_handle != *confirm_handle {
                error_handle.set(Some("Passwords do not match".to_string()));
                return;
            }
            let name_value = (*name_handle).clone();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match session
                    .register(&name_value, &email_value, &password_value)
                    .await
                {
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

    let bind_input = |handle: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                handle.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit =
        (*name).is_empty() || (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your GPAS4 account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*name).clone()}
                            oninput={bind_input(name.clone())}
                        />
                    </div>
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
                            oninput={bind_input(email.clone())}
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
                            oninput={bind_input(password.clone())}
                        />
                        <span class="label-text-alt opacity-60 mt-1">
                            {"At least 6 characters"}
                        </span>
                    </div>
                    <div class="form-control">
                        <label class="label" for="confirm">
                            <span class="label-text">{"Confirm password"}</span>
                        </label>
                        <input
                            id="confirm"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*confirm).clone()}
                            oninput={bind_input(confirm.clone())}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Create account" }}
                        </button>
                    </div>
                    <p class="text-sm text-center mt-2">
                        {"Already registered? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign in"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
