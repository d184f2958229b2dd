pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use crate::pages::prize_wheel::PrizeWheel;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class={styles::CONTAINER}>
            <div class="mx-auto">
                <PrizeWheel />
            </div>
        </div>
    }
}
