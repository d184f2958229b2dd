use log::debug;

use crate::error::WheelError;

/// Cubic ease-out: fast start, smooth decelerating stop.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Yields one monotonic timestamp (milliseconds) per display refresh.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    async fn next_frame(&mut self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Running(f64),
    Finished(f64),
}

impl Frame {
    pub fn rotation(&self) -> f64 {
        match self {
            Frame::Running(rotation) | Frame::Finished(rotation) => *rotation,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Frame::Finished(_))
    }
}

/// Interpolation state for a single run. The first frame's timestamp is the run's origin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl SpinAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            started_at: None,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn progress(&self, now: f64) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Advances to `now`. Once finished, keeps reporting the target without moving.
    pub fn tick(&mut self, now: f64) -> Frame {
        if self.finished {
            return Frame::Finished(self.to);
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let progress = self.progress(now);
        if progress >= 1.0 {
            self.finished = true;
            return Frame::Finished(self.to);
        }
        Frame::Running(self.from + ease_out_cubic(progress) * (self.to - self.from))
    }
}

/// Holds at most one active run.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    active: Option<SpinAnimation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn start(&mut self, from: f64, to: f64, duration_ms: f64) -> Result<(), WheelError> {
        if self.active.is_some() {
            return Err(WheelError::AnimationInProgress);
        }
        debug!("Starting spin animation {:.4} -> {:.4} over {}ms", from, to, duration_ms);
        self.active = Some(SpinAnimation::new(from, to, duration_ms));
        Ok(())
    }

    /// Advances the active run. Returns `None` when nothing is running.
    pub fn on_frame(&mut self, now: f64) -> Option<Frame> {
        let frame = self.active.as_mut()?.tick(now);
        if frame.is_finished() {
            self.active = None;
        }
        Some(frame)
    }

    /// Drives one run to completion, one frame per `frames` tick.
    ///
    /// `on_frame` sees every rotation including the final one; `on_complete` fires exactly once.
    pub async fn run<F, R, C>(
        &mut self,
        from: f64,
        to: f64,
        duration_ms: f64,
        frames: &mut F,
        mut on_frame: R,
        on_complete: C,
    ) -> Result<f64, WheelError>
    where
        F: FrameSource,
        R: FnMut(f64),
        C: FnOnce(),
    {
        self.start(from, to, duration_ms)?;
        loop {
            let now = frames.next_frame().await;
            match self.on_frame(now) {
                Some(Frame::Running(rotation)) => on_frame(rotation),
                Some(Frame::Finished(rotation)) => {
                    on_frame(rotation);
                    on_complete();
                    return Ok(rotation);
                }
                None => return Ok(to),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;

    /// Fixed-step clock standing in for the display refresh.
    pub(crate) struct SteppedFrames {
        pub now: f64,
        pub step: f64,
        pub ticks: usize,
    }

    impl SteppedFrames {
        pub fn new(start: f64, step: f64) -> Self {
            Self { now: start, step, ticks: 0 }
        }
    }

    impl FrameSource for SteppedFrames {
        async fn next_frame(&mut self) -> f64 {
            let now = self.now;
            self.now += self.step;
            self.ticks += 1;
            now
        }
    }

    #[test]
    fn test_ease_out_cubic_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        let mut previous = 0.0;
        for i in 1..=100 {
            let eased = ease_out_cubic(i as f64 / 100.0);
            assert!(eased >= previous);
            previous = eased;
        }
    }

    #[test]
    fn test_tick_interpolates_from_first_frame() {
        let mut animation = SpinAnimation::new(10.0, 20.0, 1000.0);
        assert_eq!(animation.tick(500.0), Frame::Running(10.0));
        assert_eq!(animation.progress(1000.0), 0.5);
        assert_eq!(animation.tick(1000.0), Frame::Running(10.0 + 0.875 * 10.0));
        assert_eq!(animation.tick(1500.0), Frame::Finished(20.0));
        assert!(animation.is_finished());
        assert_eq!(animation.tick(9000.0), Frame::Finished(20.0));
    }

    #[test]
    fn test_progress_clamps_out_of_order_time() {
        let mut animation = SpinAnimation::new(0.0, 1.0, 100.0);
        animation.tick(50.0);
        assert_eq!(animation.progress(10.0), 0.0);
        assert_eq!(animation.progress(1e9), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_frame() {
        let mut animation = SpinAnimation::new(0.0, 3.0, 0.0);
        assert_eq!(animation.tick(42.0), Frame::Finished(3.0));
    }

    #[test]
    fn test_scheduler_rejects_reentry() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.start(0.0, 1.0, 100.0).unwrap();
        assert_eq!(scheduler.start(0.0, 2.0, 100.0), Err(WheelError::AnimationInProgress));
        assert!(scheduler.is_animating());

        scheduler.on_frame(0.0);
        assert_eq!(scheduler.on_frame(100.0), Some(Frame::Finished(1.0)));
        assert!(!scheduler.is_animating());
        assert_eq!(scheduler.on_frame(200.0), None);
        assert!(scheduler.start(1.0, 2.0, 100.0).is_ok());
    }

    #[test]
    fn test_run_is_monotonic_and_completes_once() {
        let mut scheduler = AnimationScheduler::new();
        let mut frames = SteppedFrames::new(1_000.0, 16.0);
        let mut rotations = Vec::new();
        let mut completions = 0;

        let rest = block_on(scheduler.run(
            2.0,
            40.0,
            6000.0,
            &mut frames,
            |rotation| rotations.push(rotation),
            || completions += 1,
        ))
        .unwrap();

        assert_eq!(rest, 40.0);
        assert_eq!(completions, 1);
        assert_eq!(rotations.first().copied(), Some(2.0));
        assert_eq!(rotations.last().copied(), Some(40.0));
        assert!(rotations.windows(2).all(|w| w[1] >= w[0]));
        // 6000ms at 16ms per frame, plus the origin frame.
        assert_eq!(frames.ticks, 376);
        assert!(!scheduler.is_animating());
    }
}
