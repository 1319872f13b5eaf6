use crate::routes::MainRoute;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Navigation rail listing the authenticated dashboard views.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    html! {
        <aside class="w-56 min-h-screen bg-base-300 border-r border-base-content/10">
            <div class="p-4 text-lg font-bold">
                <Link<MainRoute> to={MainRoute::Dashboard}>{"GPAS4"}</Link<MainRoute>>
            </div>
            <ul class="menu p-2 gap-1">
                { for MainRoute::iter().filter(MainRoute::is_protected).map(|route| {
                    let active = props.current_route.as_ref() == Some(&route);
                    html! {
                        <li>
                            <Link<MainRoute>
                                to={route.clone()}
                                classes={classes!(active.then_some("active"))}
                            >
                                <Icon icon_id={route.icon()} class="w-5 h-5" />
                                { route.title() }
                            </Link<MainRoute>>
                        </li>
                    }
                }) }
            </ul>
        </aside>
    }
}
