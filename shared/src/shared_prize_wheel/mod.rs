mod animation;
mod coordinator;
mod painter;
mod planner;
mod presentation;
mod sectors;

use serde::{Deserialize, Serialize};

use crate::constants::{FULL_SPINS, POINTER_ANGLE, SPIN_DURATION_MS};
use crate::error::OutcomeError;

pub use animation::{ease_out_cubic, AnimationScheduler, Frame, FrameSource, SpinAnimation};
pub use coordinator::{run_spin, OutcomeCoordinator, SpinPhase, SpinState};
pub use painter::{RenderSurface, TextAlign, WheelPainter};
pub use planner::{normalize_angle, sector_under_pointer, RotationPlan, RotationPlanner};
pub use presentation::{format_currency, result_text, PrizeSummary, SpinPresenter};
pub use sectors::{Sector, SectorMap};

/// One prize value and how many wheel units it occupies.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PrizeSpec {
    pub amount: u64,
    pub quantity: u32,
}

impl PrizeSpec {
    pub fn new(amount: u64, quantity: u32) -> Self {
        Self { amount, quantity }
    }
}

/// Tunables for a wheel. Every field may be omitted by the host page.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WheelConfig {
    pub spin_duration_ms: f64,
    /// Extra whole turns added to every spin. Only affects how the spin feels.
    pub full_spins: u32,
    pub pointer_angle: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            full_spins: FULL_SPINS,
            pointer_angle: POINTER_ANGLE,
        }
    }
}

// === API Types ===

/// Body of a `POST /spin` response.
///
/// `Declined` is listed first so that a body carrying `error` is never read as a prize.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpinResponse {
    Declined { error: String },
    Prize { prize: u64 },
}

impl SpinResponse {
    pub fn into_outcome(self) -> Result<u64, OutcomeError> {
        match self {
            SpinResponse::Prize { prize } => Ok(prize),
            SpinResponse::Declined { error } => Err(OutcomeError::Declined(error)),
        }
    }
}

pub fn parse_spin_response(body: &str) -> Result<u64, OutcomeError> {
    serde_json::from_str::<SpinResponse>(body)
        .map_err(|e| OutcomeError::Request(format!("malformed spin response: {}", e)))?
        .into_outcome()
}

/// The seam to whatever decides the prize. Implementations resolve exactly once per call.
#[allow(async_fn_in_trait)]
pub trait OutcomeSource {
    async fn request_outcome(&self) -> Result<u64, OutcomeError>;
}

/// Data the host page embeds for the wheel.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelPageData {
    pub prizes: Vec<PrizeSpec>,
    #[serde(default)]
    pub config: WheelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prize() {
        assert_eq!(parse_spin_response(r#"{"prize": 1500}"#), Ok(1500));
    }

    #[test]
    fn test_parse_declined() {
        assert_eq!(
            parse_spin_response(r#"{"error": "No prizes left"}"#),
            Err(OutcomeError::Declined("No prizes left".to_string()))
        );
    }

    #[test]
    fn test_error_wins_over_prize() {
        assert_eq!(
            parse_spin_response(r#"{"error": "User has already spun.", "prize": 10}"#),
            Err(OutcomeError::Declined("User has already spun.".to_string()))
        );
    }

    #[test]
    fn test_malformed_body_is_transport_failure() {
        for body in ["<html>502</html>", "{}", r#"{"prize": -5}"#, ""] {
            match parse_spin_response(body) {
                Err(OutcomeError::Request(_)) => {}
                other => panic!("expected transport failure for {:?}, got {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_page_data_config_defaults() {
        let data: WheelPageData = serde_json::from_str(
            r#"{"prizes": [{"amount": 1000, "quantity": 10}], "config": {"full_spins": 3}}"#,
        )
        .unwrap();
        assert_eq!(data.prizes, vec![PrizeSpec::new(1000, 10)]);
        assert_eq!(data.config.full_spins, 3);
        assert_eq!(data.config.spin_duration_ms, SPIN_DURATION_MS);
        assert_eq!(data.config.pointer_angle, POINTER_ANGLE);

        let bare: WheelPageData = serde_json::from_str(r#"{"prizes": []}"#).unwrap();
        assert_eq!(bare.config, WheelConfig::default());
    }
}
