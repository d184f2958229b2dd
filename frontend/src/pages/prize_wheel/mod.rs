mod wheel_canvas;
mod wheel_host;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use shared::constants::NO_PRIZES_LEFT;
use shared::error::WheelError;
use shared::shared_prize_wheel::{run_spin, OutcomeCoordinator, PrizeSummary, Sector};
use crate::config::{get_spin_url, load_page_data};
use crate::styles;

use wheel_canvas::WheelCanvas;
use wheel_host::{AnimationFrames, HttpOutcomeSource, WheelPresenter};
use wheel_utils::{PrizeSummaryBar, ResultDisplay, SpinButton, WheelMessage};

/// Everything derived once from the page data.
struct WheelSetup {
    coordinator: Rc<RefCell<OutcomeCoordinator>>,
    // Snapshot for drawing, so rendering never borrows the coordinator mid-spin
    sectors: Vec<Sector>,
    summary: PrizeSummary,
    pointer_angle: f64,
}

fn build_wheel() -> Result<WheelSetup, String> {
    let data = load_page_data()?;
    let summary = PrizeSummary::from_prizes(&data.prizes);

    let coordinator = OutcomeCoordinator::new(data.prizes, data.config).map_err(|e| match e {
        WheelError::EmptyWheel => NO_PRIZES_LEFT.to_string(),
        other => other.to_string(),
    })?;
    let sectors = coordinator.state().sectors.sectors().to_vec();
    let pointer_angle = coordinator.config().pointer_angle;

    Ok(WheelSetup {
        coordinator: Rc::new(RefCell::new(coordinator)),
        sectors,
        summary,
        pointer_angle,
    })
}

#[function_component(PrizeWheel)]
pub fn prize_wheel() -> Html {
    let setup = use_memo((), |_| {
        build_wheel().map_err(|e| {
            log::warn!("Wheel unavailable: {}", e);
            e
        })
    });

    let rotation = use_state(|| 0.0_f64);
    let controls_enabled = use_state(|| true);
    let message = use_state(|| None::<WheelMessage>);

    let on_spin = {
        let setup = setup.clone();
        let rotation = rotation.clone();
        let controls_enabled = controls_enabled.clone();
        let message = message.clone();

        Callback::from(move |_: MouseEvent| {
            let Ok(wheel) = &*setup else {
                return;
            };
            // A spin in flight holds the coordinator between frames
            let idle = wheel
                .coordinator
                .try_borrow()
                .map(|c| c.can_spin())
                .unwrap_or(false);
            if !idle {
                return;
            }

            message.set(None);
            let coordinator = wheel.coordinator.clone();
            let mut presenter = WheelPresenter {
                rotation: rotation.clone(),
                controls_enabled: controls_enabled.clone(),
                message: message.clone(),
            };

            spawn_local(async move {
                let source = HttpOutcomeSource::new(get_spin_url());
                let mut frames = AnimationFrames;
                match run_spin(&coordinator, &source, &mut frames, &mut presenter).await {
                    Ok(prize) => log::info!("Spin finished with prize {}", prize),
                    Err(e) => log::debug!("Spin ended without a result: {}", e),
                }
            });
        })
    };

    html! {
        <div class="container mx-auto px-4 py-8">
            <h1 class={styles::TEXT_H1}>
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-sky-400 to-blue-500">{"Prize Wheel"}</span>
            </h1>

            <div class={styles::CARD}>
                {
                    match &*setup {
                        Ok(wheel) => html! {
                            <>
                                <PrizeSummaryBar summary={wheel.summary} />
                                <div class="relative mx-auto mb-8 flex justify-center items-center">
                                    <div class="w-full max-w-[450px] mx-auto">
                                        <WheelCanvas
                                            rotation={*rotation}
                                            sectors={wheel.sectors.clone()}
                                            pointer_angle={wheel.pointer_angle}
                                        />
                                    </div>
                                </div>
                                <div class="flex justify-center mt-4">
                                    <SpinButton enabled={*controls_enabled} onclick={on_spin} />
                                </div>
                                <ResultDisplay message={(*message).clone()} />
                            </>
                        },
                        Err(e) => html! {
                            <p class={styles::CARD_ERROR}>{e.clone()}</p>
                        },
                    }
                }
            </div>
        </div>
    }
}
