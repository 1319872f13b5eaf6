use crate::api::GpasClient;
use crate::mock;
use shared::Prediction;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[derive(Clone, PartialEq)]
struct ChatMessage {
    id: u64,
    from_ai: bool,
    content: String,
}

/// AI assistant page: chat transcript plus the current forecasts.
#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let messages = use_state(|| {
        vec![ChatMessage {
            id: 0,
            from_ai: true,
            content: mock::WELCOME_MESSAGE.to_string(),
        }]
    });
    let next_id = use_state(|| 1_u64);
    let input = use_state(String::new);
    let is_typing = use_state(|| false);
    let predictions = use_state(Vec::<Prediction>::new);
    let client = use_context::<GpasClient>();

    {
        let predictions = predictions.clone();
        let client = client.clone();
        use_effect_with((), move |_| {
            if let Some(client) = client {
                spawn_local(async move {
                    match client.ai_predictions().await {
                        Ok(result) if !result.predictions.is_empty() => {
                            predictions.set(result.predictions);
                        }
                        Ok(_) | Err(_) => {
                            log("predictions unavailable, using samples");
                            predictions.set(mock::sample_predictions());
                        }
                    }
                });
            }
            || ()
        });
    }

    let send = {
        let messages = messages.clone();
        let next_id = next_id.clone();
        let input = input.clone();
        let is_typing = is_typing.clone();
        let client = client;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let text = (*input).trim().to_string();
            if text.is_empty() || *is_typing {
                return;
            }
            let Some(client) = client.clone() else {
                return;
            };

            let mut transcript = (*messages).clone();
            let user_id = *next_id;
            transcript.push(ChatMessage {
                id: user_id,
                from_ai: false,
                content: text.clone(),
            });
            messages.set(transcript.clone());
            next_id.set(user_id + 2);
            input.set(String::new());
            is_typing.set(true);

            let messages = messages.clone();
            let is_typing_ref = is_typing.clone();
            spawn_local(async move {
                let reply = match client.chat(&text).await {
                    Ok(response) => response
                        .message
                        .unwrap_or_else(|| mock::canned_reply(&text)),
                    Err(err) => {
                        log(&format!("chat failed: {err}, using canned reply"));
                        mock::canned_reply(&text)
                    }
                };
                transcript.push(ChatMessage {
                    id: user_id + 1,
                    from_ai: true,
                    content: reply,
                });
                messages.set(transcript);
                is_typing_ref.set(false);
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(element) = event.target_dyn_into::<HtmlInputElement>() {
                input.set(element.value());
            }
        })
    };

    html! {
        <div class="p-6 space-y-6">
            <div class="flex justify-between items-center">
                <div>
                    <h1 class="text-3xl font-bold">{"AI Assistant"}</h1>
                    <p class="opacity-70">{"Your intelligent partner for global arbitrage"}</p>
                </div>
                <div class="flex items-center gap-2">
                    <div class="w-3 h-3 bg-success rounded-full animate-pulse"></div>
                    <span class="text-sm text-success">{"AI online"}</span>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl lg:col-span-2">
                    <div class="card-body">
                        <div class="space-y-4 max-h-[50vh] overflow-y-auto">
                            { for messages.iter().map(|message| {
                                let bubble = if message.from_ai { "chat chat-start" } else { "chat chat-end" };
                                let icon = if message.from_ai {
                                    IconId::HeroiconsOutlineCpuChip
                                } else {
                                    IconId::HeroiconsOutlineUser
                                };
                                html! {
                                    <div key={message.id.to_string()} class={bubble}>
                                        <div class="chat-image">
                                            <Icon icon_id={icon} class="w-6 h-6" />
                                        </div>
                                        <div class="chat-bubble">{ message.content.clone() }</div>
                                    </div>
                                }
                            }) }
                            if *is_typing {
                                <div class="chat chat-start">
                                    <div class="chat-bubble">
                                        <span class="loading loading-dots loading-sm"></span>
                                    </div>
                                </div>
                            }
                        </div>
                        <form class="flex gap-2 mt-4" onsubmit={send}>
                            <input
                                class="input input-bordered flex-1"
                                type="text"
                                placeholder="Ask about markets, products or risk..."
                                value={(*input).clone()}
                                oninput={on_input}
                            />
                            <button class="btn btn-primary" type="submit" disabled={*is_typing}>
                                <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="w-4 h-4" />
                            </button>
                        </form>
                    </div>
                </div>

                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineBolt} class="w-5 h-5 text-warning" />
                            {"AI predictions"}
                        </h2>
                        <div class="space-y-4">
                            { for predictions.iter().map(|prediction| html! {
                                <div key={prediction.id.to_string()} class="p-4 bg-base-100 rounded-lg">
                                    <div class="flex justify-between items-center">
                                        <h4 class="font-semibold">{ prediction.product.clone() }</h4>
                                        <span class="badge badge-success">
                                            { format!("{:.0}%", prediction.confidence) }
                                        </span>
                                    </div>
                                    <p class="text-sm opacity-60 mt-1">{ prediction.reason.clone() }</p>
                                    <div class="flex justify-between mt-2 text-sm">
                                        <span class="text-success">
                                            { format!("ROI {:.0}%", prediction.expected_roi) }
                                        </span>
                                        <span class="opacity-60">{ prediction.timeframe.clone() }</span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
