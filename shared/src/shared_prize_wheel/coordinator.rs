use std::cell::RefCell;

use log::{error, info, warn};

use super::{
    result_text, sector_under_pointer, AnimationScheduler, Frame, FrameSource, OutcomeSource,
    PrizeSpec, RotationPlan, RotationPlanner, SectorMap, SpinPresenter, WheelConfig,
};
use crate::error::{OutcomeError, WheelError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    Idle,
    Requesting,
    Animating,
    Presenting,
}

/// Session-long wheel state. Rotation accumulates across spins.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinState {
    pub current_rotation: f64,
    pub is_animating: bool,
    pub pending_prize: Option<u64>,
    /// Frozen from the moment a spin is requested until the wheel is idle again.
    pub sectors: SectorMap,
}

/// Owns the spin lifecycle: `Idle -> Requesting -> Animating -> Presenting -> Idle`.
#[derive(Debug)]
pub struct OutcomeCoordinator {
    prizes: Vec<PrizeSpec>,
    config: WheelConfig,
    planner: RotationPlanner,
    scheduler: AnimationScheduler,
    state: SpinState,
    phase: SpinPhase,
}

impl OutcomeCoordinator {
    pub fn new(prizes: Vec<PrizeSpec>, config: WheelConfig) -> Result<Self, WheelError> {
        let sectors = SectorMap::build(&prizes)?;
        Ok(Self {
            prizes,
            config,
            planner: RotationPlanner::new(&config),
            scheduler: AnimationScheduler::new(),
            state: SpinState {
                current_rotation: 0.0,
                is_animating: false,
                pending_prize: None,
                sectors,
            },
            phase: SpinPhase::Idle,
        })
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn prizes(&self) -> &[PrizeSpec] {
        &self.prizes
    }

    pub fn can_spin(&self) -> bool {
        self.phase == SpinPhase::Idle && !self.state.is_animating
    }

    /// Swaps the prize list. Only allowed while idle so a running spin keeps its sectors.
    pub fn replace_prizes(&mut self, prizes: Vec<PrizeSpec>) -> Result<(), WheelError> {
        if !self.can_spin() {
            return Err(WheelError::SpinInProgress);
        }
        self.state.sectors = SectorMap::build(&prizes)?;
        self.prizes = prizes;
        Ok(())
    }

    /// `Idle -> Requesting`. Rebuilds and freezes the sectors for this spin.
    pub fn request_spin<P: SpinPresenter>(&mut self, presenter: &mut P) -> Result<(), WheelError> {
        if !self.can_spin() {
            warn!("Spin requested while {:?}; ignoring", self.phase);
            return Err(WheelError::SpinInProgress);
        }

        self.state.sectors = SectorMap::build(&self.prizes).map_err(|e| {
            warn!("Refusing to spin: {}", e);
            e
        })?;
        presenter.set_controls_enabled(false);
        self.phase = SpinPhase::Requesting;
        Ok(())
    }

    /// `Requesting -> Animating`, or back to `Idle` when the outcome cannot be shown.
    pub fn outcome_received<P: SpinPresenter>(
        &mut self,
        outcome: Result<u64, OutcomeError>,
        presenter: &mut P,
    ) -> Result<RotationPlan, WheelError> {
        if self.phase != SpinPhase::Requesting {
            warn!("Outcome arrived while {:?}; ignoring", self.phase);
            return Err(WheelError::SpinInProgress);
        }

        match self.start_animation(outcome) {
            Ok(plan) => Ok(plan),
            Err(err) => {
                presenter.show_error(&err.user_message());
                self.state.pending_prize = None;
                self.become_idle(presenter);
                Err(err)
            }
        }
    }

    fn start_animation(&mut self, outcome: Result<u64, OutcomeError>) -> Result<RotationPlan, WheelError> {
        let prize = outcome.map_err(|e| {
            match &e {
                OutcomeError::Request(reason) => error!("Spin request failed: {}", reason),
                OutcomeError::Declined(message) => warn!("Spin declined: {}", message),
            }
            WheelError::from(e)
        })?;
        self.state.pending_prize = Some(prize);

        let plan = self.planner.plan_target(&self.state.sectors, prize)?;
        let from = self.state.current_rotation;
        let to = plan.target_from(from);
        self.scheduler.start(from, to, self.config.spin_duration_ms)?;

        info!("Spinning to prize {} on sector {}", prize, plan.sector_index);
        self.state.is_animating = true;
        self.phase = SpinPhase::Animating;
        Ok(plan)
    }

    /// Applies one display frame. Returns whether another frame is wanted.
    pub fn frame<P: SpinPresenter>(&mut self, now: f64, presenter: &mut P) -> bool {
        if self.phase != SpinPhase::Animating {
            return false;
        }

        match self.scheduler.on_frame(now) {
            Some(Frame::Running(rotation)) => {
                self.state.current_rotation = rotation;
                presenter.draw_frame(rotation);
                true
            }
            Some(Frame::Finished(rotation)) => {
                self.state.current_rotation = rotation;
                presenter.draw_frame(rotation);
                self.state.is_animating = false;
                self.present(presenter);
                false
            }
            None => {
                self.state.is_animating = false;
                self.become_idle(presenter);
                false
            }
        }
    }

    /// `Animating -> Presenting -> Idle`.
    fn present<P: SpinPresenter>(&mut self, presenter: &mut P) {
        self.phase = SpinPhase::Presenting;

        if let Some(prize) = self.state.pending_prize.take() {
            let landed = sector_under_pointer(
                &self.state.sectors,
                self.state.current_rotation,
                self.config.pointer_angle,
            )
            .map(|sector| sector.prize_amount);
            if landed != Some(prize) {
                warn!("Wheel rests on {:?} but the outcome is {}", landed, prize);
            }

            info!("Spin complete: prize {}", prize);
            presenter.reveal_result(&result_text(prize));
            presenter.fire_celebration();
        }

        self.become_idle(presenter);
    }

    fn become_idle<P: SpinPresenter>(&mut self, presenter: &mut P) {
        self.phase = SpinPhase::Idle;
        presenter.set_controls_enabled(true);
    }
}

/// Runs one full spin: request, await the outcome, animate, present.
///
/// The coordinator is only borrowed between suspension points, never across them.
pub async fn run_spin<O, F, P>(
    coordinator: &RefCell<OutcomeCoordinator>,
    source: &O,
    frames: &mut F,
    presenter: &mut P,
) -> Result<u64, WheelError>
where
    O: OutcomeSource,
    F: FrameSource,
    P: SpinPresenter,
{
    coordinator.borrow_mut().request_spin(presenter)?;

    let outcome = source.request_outcome().await;
    let plan = coordinator.borrow_mut().outcome_received(outcome, presenter)?;

    loop {
        let now = frames.next_frame().await;
        if !coordinator.borrow_mut().frame(now, presenter) {
            break;
        }
    }
    Ok(plan.prize)
}
