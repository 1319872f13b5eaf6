use crate::{containers::layout::Layout, models::app_state::AppState, pages::*};
use strum::EnumIter;
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/scanner")]
    Scanner,
    #[at("/ai-assistant")]
    Assistant,
    #[at("/transactions")]
    Transactions,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Whether the route requires an authenticated session.
    #[must_use]
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Scanner | Self::Assistant | Self::Transactions | Self::Settings
        )
    }

    /// Sidebar label for protected routes.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "GPAS4",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::Scanner => "Arbitrage Scanner",
            Self::Assistant => "AI Assistant",
            Self::Transactions => "Transactions",
            Self::Settings => "Settings",
            Self::NotFound => "Not found",
        }
    }

    /// Sidebar icon for protected routes.
    #[must_use]
    pub fn icon(&self) -> IconId {
        match self {
            Self::Dashboard => IconId::HeroiconsOutlineHome,
            Self::Scanner => IconId::HeroiconsOutlineMagnifyingGlass,
            Self::Assistant => IconId::HeroiconsOutlineChatBubbleLeftRight,
            Self::Transactions => IconId::HeroiconsOutlineListBullet,
            Self::Settings => IconId::HeroiconsOutlineCog6Tooth,
            _ => IconId::HeroiconsOutlineQuestionMarkCircle,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
    pub on_logout: Callback<()>,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = user.is_some();
    let on_logout = props.on_logout.clone();

    if props.route.is_protected() && !is_authenticated {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }

    match props.route.clone() {
        MainRoute::Landing => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <LandingPage /> }
            }
        }
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Register => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        route @ (MainRoute::Dashboard
        | MainRoute::Scanner
        | MainRoute::Assistant
        | MainRoute::Transactions
        | MainRoute::Settings) => {
            let page = match route {
                MainRoute::Scanner => html! { <ScannerPage /> },
                MainRoute::Assistant => html! { <AssistantPage /> },
                MainRoute::Transactions => html! { <TransactionsPage /> },
                MainRoute::Settings => html! { <SettingsPage /> },
                _ => html! { <DashboardPage /> },
            };
            html! {
                <Layout current_route={route} on_logout={Some(on_logout)}>
                    { page }
                </Layout>
            }
        }
        MainRoute::NotFound => {
            if is_authenticated {
                html! {
                    <Layout current_route={MainRoute::NotFound} on_logout={Some(on_logout)}>
                        <ErrorPage />
                    </Layout>
                }
            } else {
                html! { <ErrorPage /> }
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch_with_logout(route: MainRoute, on_logout: Callback<()>) -> Html {
    html! { <MainRouteView {route} {on_logout} /> }
}
