use crate::api::GpasClient;
use crate::components::StatCard;
use crate::mock;
use shared::{Transaction, TransactionStatus};
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

fn matches(transaction: &Transaction, search: &str, status: &str) -> bool {
    let needle = search.to_lowercase();
    let matches_search = needle.is_empty()
        || transaction.product.to_lowercase().contains(&needle)
        || transaction.source.to_lowercase().contains(&needle)
        || transaction.target.to_lowercase().contains(&needle);
    let matches_status = status == "all" || transaction.status.as_str() == status;
    matches_search && matches_status
}

struct Totals {
    profit: f64,
    completed: u32,
    average_roi: f64,
    success_rate: f64,
}

fn totals(transactions: &[Transaction]) -> Totals {
    let mut profit = 0.0;
    let mut completed = 0u32;
    let mut roi_sum = 0.0;
    for transaction in transactions {
        if transaction.status == TransactionStatus::Completed {
            profit += transaction.net_profit;
            roi_sum += transaction.roi;
            completed += 1;
        }
    }
    let average_roi = if completed > 0 {
        roi_sum / f64::from(completed)
    } else {
        0.0
    };
    let success_rate = if transactions.is_empty() {
        0.0
    } else {
        f64::from(completed) / transactions.len() as f64 * 100.0
    };
    Totals {
        profit,
        completed,
        average_roi,
        success_rate,
    }
}

fn status_badge(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "badge-success",
        TransactionStatus::Pending => "badge-warning",
        TransactionStatus::Processing => "badge-info",
        TransactionStatus::Failed => "badge-error",
    }
}

/// Transaction history page with client-side search and status filtering.
#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let search = use_state(String::new);
    let status_filter = use_state(|| "all".to_string());
    let client = use_context::<GpasClient>();

    let load = {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let client = client;
        Callback::from(move |()| {
            let Some(client) = client.clone() else {
                return;
            };
            let transactions = transactions.clone();
            let loading_ref = loading.clone();
            loading_ref.set(true);
            spawn_local(async move {
                match client.transactions().await {
                    Ok(result) if !result.transactions.is_empty() => {
                        transactions.set(result.transactions);
                    }
                    Ok(_) | Err(_) => {
                        log("transaction history unavailable, using samples");
                        transactions.set(mock::sample_transactions());
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with((), move |_| {
            load.emit(());
            || ()
        });
    }

    let on_refresh = {
        let load = load;
        Callback::from(move |_: MouseEvent| load.emit(()))
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                status_filter.set(select.value());
            }
        })
    };

    let sums = totals(&transactions);
    let visible: Vec<Transaction> = transactions
        .iter()
        .filter(|transaction| matches(transaction, &search, &status_filter))
        .cloned()
        .collect();

    html! {
        <div class="p-6 space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold">{"Transactions"}</h1>
                    <p class="opacity-70">{"Complete history of arbitrage operations"}</p>
                </div>
                <button class="btn btn-outline" onclick={on_refresh}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-4 h-4 mr-2" />
                    {"Refresh"}
                </button>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <StatCard
                    title="Total profit"
                    value={format!("€{:.2}", sums.profit)}
                    icon={IconId::HeroiconsOutlineCurrencyEuro}
                />
                <StatCard
                    title="Completed"
                    value={sums.completed.to_string()}
                    icon={IconId::HeroiconsOutlineCheck}
                />
                <StatCard
                    title="Average ROI"
                    value={format!("{:.1}%", sums.average_roi)}
                    icon={IconId::HeroiconsOutlineArrowTrendingUp}
                />
                <StatCard
                    title="Success rate"
                    value={format!("{:.1}%", sums.success_rate)}
                    icon={IconId::HeroiconsOutlineStar}
                />
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body flex-row flex-wrap gap-4 items-center">
                    <div class="flex items-center gap-2">
                        <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-4 h-4 opacity-60" />
                        <input
                            class="input input-bordered w-64"
                            type="text"
                            placeholder="Search transactions..."
                            value={(*search).clone()}
                            oninput={on_search}
                        />
                    </div>
                    <select class="select select-bordered w-48" onchange={on_status_change}>
                        <option value="all" selected={*status_filter == "all"}>{"All statuses"}</option>
                        <option value="completed" selected={*status_filter == "completed"}>{"Completed"}</option>
                        <option value="pending" selected={*status_filter == "pending"}>{"Pending"}</option>
                        <option value="processing" selected={*status_filter == "processing"}>{"Processing"}</option>
                        <option value="failed" selected={*status_filter == "failed"}>{"Failed"}</option>
                    </select>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"History"}</h2>
                    if *loading {
                        <div class="flex items-center justify-center h-64">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>{"ID"}</th>
                                        <th>{"Product"}</th>
                                        <th>{"Route"}</th>
                                        <th>{"Buy"}</th>
                                        <th>{"Sell"}</th>
                                        <th>{"Net profit"}</th>
                                        <th>{"ROI"}</th>
                                        <th>{"Status"}</th>
                                        <th>{"Date"}</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for visible.iter().map(|transaction| html! {
                                        <tr key={transaction.id.clone()}>
                                            <td class="text-sm opacity-70">{ transaction.id.clone() }</td>
                                            <td>
                                                <div class="text-sm font-medium">{ transaction.product.clone() }</div>
                                                <div class="text-xs opacity-60">{ format!("Qty: {}", transaction.quantity) }</div>
                                            </td>
                                            <td class="text-sm">
                                                { format!("{} → {}", transaction.source, transaction.target) }
                                            </td>
                                            <td class="text-sm">{ format!("€{:.2}", transaction.buy_price) }</td>
                                            <td class="text-sm">{ format!("€{:.2}", transaction.sell_price) }</td>
                                            <td>
                                                <div class="text-sm font-medium text-success">
                                                    { format!("€{:.2}", transaction.net_profit) }
                                                </div>
                                                <div class="text-xs opacity-60">
                                                    { format!("Fees: €{:.2}", transaction.fees) }
                                                </div>
                                            </td>
                                            <td class="text-sm text-success">{ format!("{:.1}%", transaction.roi) }</td>
                                            <td>
                                                <span class={classes!("badge", status_badge(transaction.status))}>
                                                    { transaction.status.to_string() }
                                                </span>
                                            </td>
                                            <td class="text-sm">
                                                { transaction.date.format("%Y-%m-%d").to_string() }
                                            </td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{matches, totals};
    use crate::mock;

    #[test]
    fn test_search_matches_product_and_route() {
        let transactions = mock::sample_transactions();
        assert!(matches(&transactions[0], "iphone", "all"));
        assert!(matches(&transactions[0], "aliexpress", "all"));
        assert!(matches(&transactions[0], "amazon", "all"));
        assert!(!matches(&transactions[0], "macbook", "all"));
    }

    #[test]
    fn test_status_filter() {
        let transactions = mock::sample_transactions();
        let completed = transactions
            .iter()
            .filter(|t| matches(t, "", "completed"))
            .count();
        assert_eq!(completed, 2);
        let all = transactions.iter().filter(|t| matches(t, "", "all")).count();
        assert_eq!(all, 5);
    }

    #[test]
    fn test_totals_only_count_completed() {
        let transactions = mock::sample_transactions();
        let sums = totals(&transactions);
        assert_eq!(sums.completed, 2);
        assert!((sums.profit - (303.50 + 240.60)).abs() < 1e-9);
        assert!((sums.average_roi - (53.7 + 239.3) / 2.0).abs() < 1e-9);
        assert!((sums.success_rate - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_totals_on_empty_history() {
        let sums = totals(&[]);
        assert_eq!(sums.completed, 0);
        assert_eq!(sums.average_roi, 0.0);
        assert_eq!(sums.success_rate, 0.0);
    }
}
