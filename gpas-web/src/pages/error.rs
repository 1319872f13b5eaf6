use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Not-found page.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] gap-4">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="opacity-70">{"This page does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Landing} classes="btn btn-primary">
                {"Back to start"}
            </Link<MainRoute>>
        </div>
    }
}
