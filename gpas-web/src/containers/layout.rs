use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{
    classes, function_component, html, use_effect_with, Callback, Children, Html, Properties,
};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    #[prop_or_default]
    pub on_logout: Option<Callback<()>>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // Adds data-theme attribute to html tag for theme support
    use_effect_with((), |_| {
        if let Some(window) = window() {
            if let Some(document) = window.document() {
                if let Some(html_element) = document.document_element() {
                    html_element
                        .set_attribute("data-theme", "dark")
                        .unwrap_or_default();
                }
            }
        }
        || {}
    });

    html! {
        <div class="flex min-h-screen bg-base-100">
            <Sidebar current_route={props.current_route.clone()} />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Navbar on_logout={props.on_logout.clone()} />
                <main class={classes!("flex-grow", "overflow-auto")}>
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}
