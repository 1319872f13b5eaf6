use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    #[prop_or_default]
    pub change: Option<String>,
    pub icon: IconId,
}

/// One metric card for the dashboard and transactions pages.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-sm opacity-70">{ props.title.clone() }</p>
                        <p class="text-2xl font-bold mt-1">{ props.value.clone() }</p>
                        if let Some(change) = &props.change {
                            <div class="flex items-center mt-2 text-success text-sm font-semibold">
                                <Icon icon_id={IconId::HeroiconsOutlineArrowUp} class="w-4 h-4 mr-1" />
                                { change.clone() }
                            </div>
                        }
                    </div>
                    <div class="w-12 h-12 rounded-lg bg-primary/20 flex items-center justify-center">
                        <Icon icon_id={props.icon} class="w-6 h-6 text-primary" />
                    </div>
                </div>
            </div>
        </div>
    }
}
