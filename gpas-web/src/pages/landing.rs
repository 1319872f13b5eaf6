use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

struct Feature {
    icon: IconId,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: IconId::HeroiconsOutlineMagnifyingGlass,
        title: "24/7 market scanning",
        description: "The AI watches global marketplaces around the clock and surfaces \
                      price gaps the moment they open.",
    },
    Feature {
        icon: IconId::HeroiconsOutlineBolt,
        title: "One-click execution",
        description: "Buy low and list high in a single step, or let auto trading handle \
                      the whole cycle within your daily budget.",
    },
    Feature {
        icon: IconId::HeroiconsOutlineArrowTrendingUp,
        title: "Profit analytics",
        description: "Every transaction is tracked with fees, net profit and ROI so you \
                      always know what is working.",
    },
];

/// Public marketing page shown to anonymous visitors.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <div class="hero py-24">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-5xl font-bold">{"Global Product Arbitrage, on autopilot"}</h1>
                        <p class="py-6 opacity-80">
                            {"GPAS4 finds products selling cheap on one marketplace and in demand \
                              on another, then executes the trade for you. You set the budget and \
                              the risk level; the AI does the rest."}
                        </p>
                        <div class="flex justify-center gap-4">
                            <Link<MainRoute> to={MainRoute::Register} classes="btn btn-primary">
                                {"Get started"}
                            </Link<MainRoute>>
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-outline">
                                {"Sign in"}
                            </Link<MainRoute>>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 px-8 pb-24 max-w-5xl mx-auto">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">
                                <Icon icon_id={feature.icon} class="w-6 h-6 text-primary" />
                                { feature.title }
                            </h2>
                            <p class="opacity-80">{ feature.description }</p>
                        </div>
                    </div>
                }) }
            </div>

            <footer class="footer footer-center p-4 border-t border-base-300">
                <div>
                    <p>{"© 2025 GPAS4 · Powered by Rust and Yew"}</p>
                </div>
            </footer>
        </div>
    }
}
