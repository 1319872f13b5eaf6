use crate::api::GpasClient;
use crate::components::StatCard;
use crate::mock;
use crate::routes::MainRoute;
use shared::{DashboardStats, OpportunityStatus};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(|| None::<DashboardStats>);
    let client = use_context::<GpasClient>();

    {
        let stats_handle = stats.clone();
        use_effect_with((), move |_| {
            if let Some(client) = client {
                spawn_local(async move {
                    match client.dashboard_stats().await {
                        Ok(data) => stats_handle.set(Some(data)),
                        Err(err) => {
                            log(&format!("dashboard stats unavailable: {err}, using samples"));
                            stats_handle.set(Some(mock::sample_dashboard_stats()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let Some(data) = (*stats).clone() else {
        return html! {
            <div class="p-6 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for (0..4).map(|_| html! {
                    <div class="card bg-base-200 animate-pulse h-32"></div>
                }) }
            </div>
        };
    };

    let trading = &data.stats;
    let budget_pct = (trading.budget_used_fraction() * 100.0).round();

    html! {
        <div class="p-6 space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold">
                        { format!("Welcome back, {}!", data.user.name) }
                    </h1>
                    <p class="opacity-70">{"Your AI is working 24/7 to maximize your profits"}</p>
                </div>
                <Link<MainRoute> to={MainRoute::Assistant} classes="btn btn-primary mt-4 md:mt-0">
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4 mr-2" />
                    {"Talk to the AI"}
                </Link<MainRoute>>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <StatCard
                    title="Total profit"
                    value={format!("€{:.2}", trading.total_profit)}
                    change={Some("+23.5%".to_string())}
                    icon={IconId::HeroiconsOutlineCurrencyEuro}
                />
                <StatCard
                    title="Average ROI"
                    value={format!("{:.0}%", trading.average_roi)}
                    change={Some("+12.3%".to_string())}
                    icon={IconId::HeroiconsOutlineArrowTrendingUp}
                />
                <StatCard
                    title="Opportunities"
                    value={trading.pending_transactions.to_string()}
                    change={Some("+45".to_string())}
                    icon={IconId::HeroiconsOutlineBolt}
                />
                <StatCard
                    title="Success rate"
                    value={format!("{:.1}%", trading.success_rate)}
                    change={Some("+2.1%".to_string())}
                    icon={IconId::HeroiconsOutlineStar}
                />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body space-y-4">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCpuChip} class="w-5 h-5 text-primary" />
                            {"AI status"}
                        </h2>
                        <div class="flex items-center justify-between">
                            <span class="opacity-70">{"Auto trading"}</span>
                            <span class={classes!(
                                "text-sm",
                                if data.user.auto_trading_enabled { "text-success" } else { "text-warning" }
                            )}>
                                { if data.user.auto_trading_enabled { "Active" } else { "Paused" } }
                            </span>
                        </div>
                        <div class="flex items-center justify-between">
                            <span class="opacity-70">{"Monitoring"}</span>
                            <span class="text-success text-sm">{"24/7"}</span>
                        </div>
                        <div class="flex items-center justify-between">
                            <span class="opacity-70">{"Daily budget"}</span>
                            <span>
                                { format!("€{:.0} / €{:.0}", trading.daily_budget_used, trading.daily_budget_total) }
                            </span>
                        </div>
                        <progress
                            class="progress progress-primary w-full"
                            value={budget_pct.to_string()}
                            max="100"
                        />
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title justify-between">
                            <div class="flex items-center">
                                <Icon icon_id={IconId::HeroiconsOutlineBolt} class="w-5 h-5 mr-2 text-warning" />
                                {"Recent opportunities"}
                            </div>
                            <Link<MainRoute> to={MainRoute::Scanner} classes="btn btn-sm btn-outline">
                                {"See all"}
                            </Link<MainRoute>>
                        </h2>
                        <div class="space-y-4">
                            { for mock::sample_recent_opportunities().iter().map(|opportunity| {
                                let badge = match opportunity.status {
                                    OpportunityStatus::Executing => "badge-success",
                                    OpportunityStatus::Analyzing => "badge-warning",
                                    _ => "badge-info",
                                };
                                html! {
                                    <div class="flex items-center justify-between p-4 bg-base-100 rounded-lg">
                                        <div class="flex-1">
                                            <h4 class="font-semibold">{ opportunity.product.clone() }</h4>
                                            <p class="opacity-60 text-sm">
                                                { format!("{} → {}", opportunity.source, opportunity.target) }
                                            </p>
                                        </div>
                                        <div class="text-right mr-4">
                                            <p class="text-success font-bold">{ format!("€{:.0}", opportunity.profit) }</p>
                                            <p class="opacity-60 text-sm">{ format!("{:.0}% ROI", opportunity.roi) }</p>
                                        </div>
                                        <span class={classes!("badge", badge)}>
                                            { opportunity.status.to_string() }
                                        </span>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Quick actions"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                        <Link<MainRoute> to={MainRoute::Scanner} classes="btn btn-primary h-12">
                            <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 mr-2" />
                            {"AI scan"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Assistant} classes="btn btn-outline h-12">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4 mr-2" />
                            {"Assistant"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Transactions} classes="btn btn-outline h-12">
                            <Icon icon_id={IconId::HeroiconsOutlineListBullet} class="w-4 h-4 mr-2" />
                            {"History"}
                        </Link<MainRoute>>
                        <Link<MainRoute> to={MainRoute::Settings} classes="btn btn-outline h-12">
                            <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="w-4 h-4 mr-2" />
                            {"Settings"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
