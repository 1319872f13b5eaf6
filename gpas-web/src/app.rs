use crate::api::GpasClient;
use crate::components::Loading;
use crate::config::ApiConfig;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use crate::session::SessionStore;
use yew::{function_component, html, use_effect_with, use_memo, Callback, ContextProvider, Html};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Application root: owns the session store and API client, hydrates the
/// session from durable storage once, then hands routing off to the
/// switch. Children reach the store and client through context.
#[function_component(App)]
pub fn app() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    let session = use_memo((), |_| {
        let config = ApiConfig::new();
        SessionStore::new(config.base_url())
    });
    let client = use_memo(session.clone(), |session| {
        let config = ApiConfig::new();
        GpasClient::new(config.base_url(), (**session).clone())
    });

    {
        let session = session.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            session.initialize();
            dispatch.set(AppState {
                ready: true,
                user: session.user(),
            });
            || ()
        });
    }

    let logout_callback = {
        let session = session.clone();
        let dispatch = dispatch;
        Callback::from(move |()| {
            session.logout();
            dispatch.set(AppState {
                ready: true,
                user: None,
            });
        })
    };

    if !state.ready {
        return html! { <Loading /> };
    }

    html! {
        <ContextProvider<SessionStore> context={(*session).clone()}>
            <ContextProvider<GpasClient> context={(*client).clone()}>
                <BrowserRouter>
                    <Switch<MainRoute>
                        render={move |route| crate::routes::switch_with_logout(route, logout_callback.clone())}
                    />
                </BrowserRouter>
            </ContextProvider<GpasClient>>
        </ContextProvider<SessionStore>>
    }
}
