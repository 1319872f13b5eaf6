use yew::{function_component, html, Html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="flex flex-col items-center gap-3">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="text-sm opacity-70">{"Loading GPAS4"}</span>
            </div>
        </div>
    }
}
