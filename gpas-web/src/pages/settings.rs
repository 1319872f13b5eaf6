use crate::api::GpasClient;
use crate::session::SessionStore;
use shared::{RiskLevel, TradingHours, UserSettings};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

fn text_edit(
    settings: UseStateHandle<UserSettings>,
    apply: fn(&mut UserSettings, String),
) -> Callback<InputEvent> {
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*settings).clone();
            apply(&mut next, input.value());
            settings.set(next);
        }
    })
}

fn toggle_edit(
    settings: UseStateHandle<UserSettings>,
    apply: fn(&mut UserSettings, bool),
) -> Callback<Event> {
    Callback::from(move |event: Event| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*settings).clone();
            apply(&mut next, input.checked());
            settings.set(next);
        }
    })
}

/// Settings page: the full record is edited locally and sent in one
/// `PUT /api/settings/update`. Save errors are surfaced inline, never
/// swallowed.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_state(UserSettings::default);
    let saving = use_state(|| false);
    let notice = use_state(|| None::<Result<String, String>>);
    let session = use_context::<SessionStore>();
    let client = use_context::<GpasClient>();

    {
        let settings = settings.clone();
        use_effect_with((), move |_| {
            if let Some(user) = session.and_then(|session| session.user()) {
                let mut seeded = (*settings).clone();
                seeded.name = user.name;
                seeded.email = user.email;
                seeded.auto_trading = user.auto_trading_enabled;
                settings.set(seeded);
            }
            || ()
        });
    }

    let on_save = {
        let settings = settings.clone();
        let saving = saving.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(client) = client.clone() else {
                return;
            };
            let payload = (*settings).clone();
            let saving_ref = saving.clone();
            let notice = notice.clone();
            saving_ref.set(true);
            spawn_local(async move {
                match client.update_settings(&payload).await {
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Settings saved".to_string());
                        notice.set(Some(Ok(message)));
                    }
                    Err(err) => notice.set(Some(Err(err.to_string()))),
                }
                saving_ref.set(false);
            });
        })
    };

    let on_risk_change = {
        let settings = settings.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*settings).clone();
                next.risk_level = match select.value().as_str() {
                    "low" => RiskLevel::Low,
                    "high" => RiskLevel::High,
                    _ => RiskLevel::Medium,
                };
                settings.set(next);
            }
        })
    };

    let on_hours_change = {
        let settings = settings.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*settings).clone();
                next.trading_hours = match select.value().as_str() {
                    "business_hours" => TradingHours::BusinessHours,
                    "custom" => TradingHours::Custom,
                    _ => TradingHours::Always,
                };
                settings.set(next);
            }
        })
    };

    let on_min_roi = {
        let settings = settings.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*settings).clone();
                next.min_roi = input.value().parse().unwrap_or(next.min_roi);
                settings.set(next);
            }
        })
    };

    let on_max_investment = {
        let settings = settings.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*settings).clone();
                next.max_investment = input.value().parse().unwrap_or(next.max_investment);
                settings.set(next);
            }
        })
    };

    let on_retention = {
        let settings = settings.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*settings).clone();
                next.data_retention = input.value().parse().unwrap_or(next.data_retention);
                settings.set(next);
            }
        })
    };

    let current = (*settings).clone();

    html! {
        <div class="p-6 space-y-6 max-w-4xl">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold">{"Settings"}</h1>
                    <p class="opacity-70">{"Configure your account and trading preferences"}</p>
                </div>
                <button class="btn btn-primary" onclick={on_save} disabled={*saving}>
                    if *saving {
                        <span class="loading loading-spinner loading-sm mr-2"></span>
                        {"Saving..."}
                    } else {
                        <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-4 h-4 mr-2" />
                        {"Save changes"}
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
                    <h2 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-5 h-5" />
                        {"Profile"}
                    </h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="settings-name">
                                <span class="label-text">{"Name"}</span>
                            </label>
                            <input
                                id="settings-name"
                                class="input input-bordered"
                                type="text"
                                value={current.name.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.name = v)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-email">
                                <span class="label-text">{"Email"}</span>
                            </label>
                            <input
                                id="settings-email"
                                class="input input-bordered"
                                type="email"
                                value={current.email.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.email = v)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-phone">
                                <span class="label-text">{"Phone"}</span>
                            </label>
                            <input
                                id="settings-phone"
                                class="input input-bordered"
                                type="tel"
                                value={current.phone.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.phone = v)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-country">
                                <span class="label-text">{"Country"}</span>
                            </label>
                            <input
                                id="settings-country"
                                class="input input-bordered"
                                type="text"
                                value={current.country.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.country = v)}
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineCpuChip} class="w-5 h-5" />
                        {"Trading"}
                    </h2>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle toggle-primary"
                            checked={current.auto_trading}
                            onchange={toggle_edit(settings.clone(), |s, v| s.auto_trading = v)}
                        />
                        <span class="label-text">{"Automatic trading"}</span>
                    </label>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label class="label" for="settings-min-roi">
                                <span class="label-text">{"Minimum ROI (%)"}</span>
                            </label>
                            <input
                                id="settings-min-roi"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                value={current.min_roi.to_string()}
                                oninput={on_min_roi}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-max-investment">
                                <span class="label-text">{"Maximum investment (€)"}</span>
                            </label>
                            <input
                                id="settings-max-investment"
                                class="input input-bordered"
                                type="number"
                                min="0"
                                value={format!("{:.0}", current.max_investment)}
                                oninput={on_max_investment}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-risk">
                                <span class="label-text">{"Risk level"}</span>
                            </label>
                            <select id="settings-risk" class="select select-bordered" onchange={on_risk_change}>
                                <option value="low" selected={current.risk_level == RiskLevel::Low}>{"Low"}</option>
                                <option value="medium" selected={current.risk_level == RiskLevel::Medium}>{"Medium"}</option>
                                <option value="high" selected={current.risk_level == RiskLevel::High}>{"High"}</option>
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-hours">
                                <span class="label-text">{"Trading hours"}</span>
                            </label>
                            <select id="settings-hours" class="select select-bordered" onchange={on_hours_change}>
                                <option value="always" selected={current.trading_hours == TradingHours::Always}>{"Always (24/7)"}</option>
                                <option value="business_hours" selected={current.trading_hours == TradingHours::BusinessHours}>{"Business hours"}</option>
                                <option value="custom" selected={current.trading_hours == TradingHours::Custom}>{"Custom"}</option>
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineBell} class="w-5 h-5" />
                        {"Notifications"}
                    </h2>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.email_notifications}
                            onchange={toggle_edit(settings.clone(), |s, v| s.email_notifications = v)}
                        />
                        <span class="label-text">{"Email notifications"}</span>
                    </label>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.push_notifications}
                            onchange={toggle_edit(settings.clone(), |s, v| s.push_notifications = v)}
                        />
                        <span class="label-text">{"Push notifications"}</span>
                    </label>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.opportunity_alerts}
                            onchange={toggle_edit(settings.clone(), |s, v| s.opportunity_alerts = v)}
                        />
                        <span class="label-text">{"New opportunity alerts"}</span>
                    </label>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.profit_alerts}
                            onchange={toggle_edit(settings.clone(), |s, v| s.profit_alerts = v)}
                        />
                        <span class="label-text">{"Profit alerts"}</span>
                    </label>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.risk_alerts}
                            onchange={toggle_edit(settings.clone(), |s, v| s.risk_alerts = v)}
                        />
                        <span class="label-text">{"Risk alerts"}</span>
                    </label>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineKey} class="w-5 h-5" />
                        {"Marketplace API keys"}
                    </h2>
                    <div class="grid grid-cols-1 gap-4">
                        <div class="form-control">
                            <label class="label" for="settings-aliexpress">
                                <span class="label-text">{"AliExpress"}</span>
                            </label>
                            <input
                                id="settings-aliexpress"
                                class="input input-bordered"
                                type="password"
                                placeholder="API key"
                                value={current.aliexpress_key.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.aliexpress_key = v)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-amazon">
                                <span class="label-text">{"Amazon"}</span>
                            </label>
                            <input
                                id="settings-amazon"
                                class="input input-bordered"
                                type="password"
                                placeholder="API key"
                                value={current.amazon_key.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.amazon_key = v)}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="settings-ebay">
                                <span class="label-text">{"eBay"}</span>
                            </label>
                            <input
                                id="settings-ebay"
                                class="input input-bordered"
                                type="password"
                                placeholder="API key"
                                value={current.ebay_key.clone()}
                                oninput={text_edit(settings.clone(), |s, v| s.ebay_key = v)}
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card bg-base-200 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineCog6Tooth} class="w-5 h-5" />
                        {"Advanced"}
                    </h2>
                    <div class="form-control">
                        <label class="label" for="settings-webhook">
                            <span class="label-text">{"Webhook URL"}</span>
                        </label>
                        <input
                            id="settings-webhook"
                            class="input input-bordered"
                            type="url"
                            placeholder="https://"
                            value={current.webhook_url.clone()}
                            oninput={text_edit(settings.clone(), |s, v| s.webhook_url = v)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="settings-retention">
                            <span class="label-text">{"Data retention (days)"}</span>
                        </label>
                        <input
                            id="settings-retention"
                            class="input input-bordered"
                            type="number"
                            min="1"
                            value={current.data_retention.to_string()}
                            oninput={on_retention}
                        />
                    </div>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.api_access}
                            onchange={toggle_edit(settings.clone(), |s, v| s.api_access = v)}
                        />
                        <span class="label-text">{"API access"}</span>
                    </label>
                    <label class="label cursor-pointer justify-start gap-4">
                        <input
                            type="checkbox"
                            class="toggle"
                            checked={current.two_factor_auth}
                            onchange={toggle_edit(settings.clone(), |s, v| s.two_factor_auth = v)}
                        />
                        <span class="label-text">{"Two-factor authentication"}</span>
                    </label>
                </div>
            </div>
        </div>
    }
}
