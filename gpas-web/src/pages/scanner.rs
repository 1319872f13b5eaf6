use crate::api::GpasClient;
use crate::mock;
use shared::{Opportunity, OpportunityStatus};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

fn matches_filters(opportunity: &Opportunity, min_roi: f64, max_price: f64, category: &str) -> bool {
    opportunity.roi >= min_roi
        && opportunity.source_price <= max_price
        && (category == "all" || opportunity.category.eq_ignore_ascii_case(category))
}

/// Arbitrage scanner page: trigger scans, filter locally, execute per row.
#[function_component(ScannerPage)]
pub fn scanner_page() -> Html {
    let opportunities = use_state(mock::sample_opportunities);
    let scanning = use_state(|| false);
    let min_roi = use_state(|| "25".to_string());
    let max_price = use_state(|| "1000".to_string());
    let category = use_state(|| "all".to_string());
    let notice = use_state(|| None::<Result<String, String>>);
    let client = use_context::<GpasClient>();

    let start_scan = {
        let opportunities = opportunities.clone();
        let scanning = scanning.clone();
        let client = client.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(client) = client.clone() else {
                return;
            };
            let opportunities = opportunities.clone();
            let scanning_ref = scanning.clone();
            scanning_ref.set(true);
            spawn_local(async move {
                match client.scan_opportunities().await {
                    Ok(result) if !result.opportunities.is_empty() => {
                        opportunities.set(result.opportunities);
                    }
                    Ok(_) => log("scan returned no opportunities, keeping samples"),
                    Err(err) => {
                        log(&format!("scan failed: {err}, keeping samples"));
                        opportunities.set(mock::sample_opportunities());
                    }
                }
                scanning_ref.set(false);
            });
        })
    };

    let execute = {
        let notice = notice.clone();
        let client = client;
        Callback::from(move |opportunity: Opportunity| {
            let Some(client) = client.clone() else {
                return;
            };
            let notice = notice.clone();
            spawn_local(async move {
                // Write path: errors are surfaced, never papered over with samples.
                match client.execute_purchase(&opportunity).await {
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| format!("Purchase of {} started", opportunity.product));
                        notice.set(Some(Ok(message)));
                    }
                    Err(err) => notice.set(Some(Err(err.to_string()))),
                }
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

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category.set(select.value());
            }
        })
    };

    let min_roi_value = min_roi.parse::<f64>().unwrap_or(0.0);
    let max_price_value = max_price.parse::<f64>().unwrap_or(f64::MAX);
    let visible: Vec<Opportunity> = opportunities
        .iter()
        .filter(|opportunity| matches_filters(opportunity, min_roi_value, max_price_value, &category))
        .cloned()
        .collect();

    html! {
        <div class="p-6 space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold">{"Arbitrage Scanner"}</h1>
                    <p class="opacity-70">{"Find profit opportunities in real time"}</p>
                </div>
                <button class="btn btn-primary" onclick={start_scan} disabled={*scanning}>
                    if *scanning {
                        <span class="loading loading-spinner loading-sm mr-2"></span>
                        {"Scanning..."}
                    } else {
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 mr-2" />
                        {"Start scan"}
                    }
                </button>
            </div>

            if let Some(result) = &*notice {
                { match result {
                    Ok(message) => html! {
                        <div class="alert alert-success"><span>{ message.clone() }</span></div>
                    },
                    Err(message) => html! {
                        <div class="alert alert-error"><span>{ message.clone() }</span></div>
                    },
                } }
            }

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Scan filters"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="form-control">
                            <label class="label" for="min-roi">
                                <span class="label-text">{"Minimum ROI (%)"}</span>
                            </label>
                            <input
                                id="min-roi"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                max="1000"
                                value={(*min_roi).clone()}
                                oninput={bind_input(min_roi.clone())}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="max-price">
                                <span class="label-text">{"Maximum price (€)"}</span>
                            </label>
                            <input
                                id="max-price"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                value={(*max_price).clone()}
                                oninput={bind_input(max_price.clone())}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="category">
                                <span class="label-text">{"Category"}</span>
                            </label>
                            <select
                                id="category"
                                class="select select-bordered"
                                onchange={on_category_change}
                            >
                                <option value="all" selected={*category == "all"}>{"All"}</option>
                                <option value="electronics" selected={*category == "electronics"}>{"Electronics"}</option>
                                <option value="audio" selected={*category == "audio"}>{"Audio"}</option>
                                <option value="fashion" selected={*category == "fashion"}>{"Fashion"}</option>
                                <option value="home" selected={*category == "home"}>{"Home"}</option>
                                <option value="sports" selected={*category == "sports"}>{"Sports"}</option>
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="grid gap-4">
                { for visible.into_iter().map(|opportunity| {
                    let on_execute = {
                        let execute = execute.clone();
                        let opportunity = opportunity.clone();
                        Callback::from(move |_: MouseEvent| execute.emit(opportunity.clone()))
                    };
                    let available = opportunity.status == OpportunityStatus::Available;
                    html! {
                        <div class="card bg-base-200 shadow-xl">
                            <div class="card-body flex-row items-center justify-between p-6">
                                <div class="flex items-center gap-4">
                                    <div class="w-16 h-16 bg-base-100 rounded-lg flex items-center justify-center">
                                        <Icon icon_id={IconId::HeroiconsOutlineArrowTrendingUp} class="w-8 h-8 text-primary" />
                                    </div>
                                    <div>
                                        <h3 class="font-semibold">{ opportunity.product.clone() }</h3>
                                        <p class="text-sm opacity-60">
                                            { format!("{} → {}", opportunity.source, opportunity.target) }
                                        </p>
                                        <span class="badge badge-outline badge-sm mt-1">
                                            { opportunity.category.clone() }
                                        </span>
                                    </div>
                                </div>
                                <div class="flex items-center gap-6">
                                    <div class="text-right">
                                        <div class="text-sm opacity-60">{"Source price"}</div>
                                        <div class="font-semibold">{ format!("€{:.2}", opportunity.source_price) }</div>
                                    </div>
                                    <div class="text-right">
                                        <div class="text-sm opacity-60">{"Target price"}</div>
                                        <div class="font-semibold">{ format!("€{:.2}", opportunity.target_price) }</div>
                                    </div>
                                    <div class="text-right">
                                        <div class="text-sm opacity-60">{"Profit"}</div>
                                        <div class="font-semibold text-success">{ format!("€{:.2}", opportunity.profit) }</div>
                                    </div>
                                    <div class="text-right">
                                        <div class="text-sm opacity-60">{"ROI"}</div>
                                        <div class="font-semibold text-success">{ format!("{:.1}%", opportunity.roi) }</div>
                                    </div>
                                    <div class="flex flex-col gap-2">
                                        <span class={classes!("badge", if available { "badge-success" } else { "badge-warning" })}>
                                            { opportunity.status.to_string() }
                                        </span>
                                        <button class="btn btn-sm btn-primary" onclick={on_execute}>
                                            {"Execute"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::matches_filters;
    use crate::mock;

    #[test]
    fn test_filters_apply_client_side() {
        let all = mock::sample_opportunities();
        assert_eq!(
            all.iter()
                .filter(|o| matches_filters(o, 0.0, f64::MAX, "all"))
                .count(),
            3
        );
        // Min ROI cuts the iPhone (53.7%).
        assert_eq!(
            all.iter()
                .filter(|o| matches_filters(o, 100.0, f64::MAX, "all"))
                .count(),
            2
        );
        // Price cap cuts everything above €100.
        assert_eq!(
            all.iter()
                .filter(|o| matches_filters(o, 0.0, 100.0, "all"))
                .count(),
            2
        );
        // Category match is case-insensitive.
        assert_eq!(
            all.iter()
                .filter(|o| matches_filters(o, 0.0, f64::MAX, "audio"))
                .count(),
            1
        );
    }
}
