use yew::prelude::*;
use wasm_bindgen::prelude::*;
use gloo_timers::callback::Timeout;
use serde_json::json;
use shared::shared_prize_wheel::{format_currency, PrizeSummary};
use crate::styles;

#[wasm_bindgen]
extern "C" {
    // Provided by the canvas-confetti script on the host page
    #[wasm_bindgen(catch, js_name = confetti)]
    fn confetti(options: &JsValue) -> Result<JsValue, JsValue>;
}

fn confetti_burst(options: serde_json::Value) {
    let options = match js_sys::JSON::parse(&options.to_string()) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("Error building confetti options: {:?}", e);
            return;
        }
    };
    if let Err(e) = confetti(&options) {
        log::warn!("Celebration unavailable: {:?}", e);
    }
}

/// Two bursts, the second one lower and in the accent colours.
pub fn fire_celebration() {
    confetti_burst(json!({
        "particleCount": 150,
        "spread": 90,
        "origin": { "y": 0.6 }
    }));

    Timeout::new(300, || {
        confetti_burst(json!({
            "particleCount": 100,
            "spread": 120,
            "origin": { "x": 0.5, "y": 0.8 },
            "colors": ["#00BFFF", "#FFFFFF", "#A0A0A0"]
        }));
    })
    .forget();
}

#[derive(Clone, PartialEq, Debug)]
pub struct WheelMessage {
    pub text: String,
    pub is_error: bool,
}

impl WheelMessage {
    pub fn result(text: &str) -> Self {
        Self { text: text.to_string(), is_error: false }
    }

    pub fn error(text: &str) -> Self {
        Self { text: text.to_string(), is_error: true }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: Option<WheelMessage>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    let class = if message.is_error { styles::CARD_ERROR } else { styles::CARD_SUCCESS };
    html! {
        <div class="mt-8 mb-4">
            <p class={class}>{&message.text}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub enabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let (text, class) = if props.enabled {
        ("SPIN", styles::BUTTON_SPIN)
    } else {
        ("Spinning...", styles::BUTTON_SPIN_DISABLED)
    };

    html! {
        <div class="w-full max-w-[300px]">
            <button
                onclick={props.onclick.clone()}
                disabled={!props.enabled}
                class={class}
            >
                {text}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrizeSummaryBarProps {
    pub summary: PrizeSummary,
}

#[function_component(PrizeSummaryBar)]
pub fn prize_summary_bar(props: &PrizeSummaryBarProps) -> Html {
    let summary = props.summary;
    html! {
        <div class="flex justify-center gap-3 mb-6">
            <div class={styles::STAT}>
                <span class={styles::STAT_VALUE}>{summary.prize_amounts.to_string()}</span>
                <span class={styles::TEXT_SMALL}>{"Prize amounts"}</span>
            </div>
            <div class={styles::STAT}>
                <span class={styles::STAT_VALUE}>{summary.total_prizes.to_string()}</span>
                <span class={styles::TEXT_SMALL}>{"Prizes left"}</span>
            </div>
            <div class={styles::STAT}>
                <span class={styles::STAT_VALUE}>{format_currency(summary.total_prize_pool)}</span>
                <span class={styles::TEXT_SMALL}>{"Prize pool"}</span>
            </div>
        </div>
    }
}
