use futures::channel::oneshot;
use gloo_net::http::Request;
use gloo_render::request_animation_frame;
use yew::prelude::UseStateHandle;
use shared::error::OutcomeError;
use shared::shared_prize_wheel::{parse_spin_response, FrameSource, OutcomeSource, SpinPresenter};
use super::wheel_utils::{fire_celebration, WheelMessage};

/// Asks the server for the prize with `POST /spin`.
pub struct HttpOutcomeSource {
    url: String,
}

impl HttpOutcomeSource {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl OutcomeSource for HttpOutcomeSource {
    async fn request_outcome(&self) -> Result<u64, OutcomeError> {
        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| OutcomeError::Request(format!("Network error: {:?}", e)))?;

        // Declines may come back with any status, so the body decides
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| OutcomeError::Request(format!("Error reading response ({}): {:?}", status, e)))?;

        parse_spin_response(&body)
    }
}

/// One timestamp per `requestAnimationFrame` callback.
pub struct AnimationFrames;

impl FrameSource for AnimationFrames {
    async fn next_frame(&mut self) -> f64 {
        let (sender, receiver) = oneshot::channel();
        // Dropping the handle cancels the request, so it stays alive until the frame fires
        let _frame = request_animation_frame(move |timestamp| {
            let _ = sender.send(timestamp);
        });

        match receiver.await {
            Ok(timestamp) => timestamp,
            Err(_) => web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or_default(),
        }
    }
}

/// Pushes coordinator output into component state.
pub struct WheelPresenter {
    pub rotation: UseStateHandle<f64>,
    pub controls_enabled: UseStateHandle<bool>,
    pub message: UseStateHandle<Option<WheelMessage>>,
}

impl SpinPresenter for WheelPresenter {
    fn draw_frame(&mut self, rotation: f64) {
        self.rotation.set(rotation);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled.set(enabled);
    }

    fn reveal_result(&mut self, text: &str) {
        self.message.set(Some(WheelMessage::result(text)));
    }

    fn show_error(&mut self, message: &str) {
        self.message.set(Some(WheelMessage::error(message)));
    }

    fn fire_celebration(&mut self) {
        fire_celebration();
    }
}
