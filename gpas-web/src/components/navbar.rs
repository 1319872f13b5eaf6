use crate::models::app_state::AppState;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

/// Top bar of the authenticated shell: account badge and logout.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());

    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(callback) = &on_logout {
                callback.emit(());
            }
        })
    };

    html! {
        <nav class="navbar justify-between bg-base-300 border-b border-base-content/10">
            <div class="flex items-center gap-2 px-2">
                <div class="w-3 h-3 bg-success rounded-full animate-pulse"></div>
                <span class="text-success text-sm font-semibold">{"AI Active"}</span>
            </div>
            <div class="flex items-center gap-3 px-2">
                if let Some(user) = (*user).clone() {
                    <div class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5" />
                        <div class="text-sm">
                            <div class="font-semibold">{ user.name }</div>
                            <div class="opacity-60 text-xs">{ user.subscription_tier.to_string() }</div>
                        </div>
                    </div>
                }
                <button class="btn btn-ghost btn-sm" onclick={on_logout_click}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-5 h-5" />
                    {"Sign out"}
                </button>
            </div>
        </nav>
    }
}
