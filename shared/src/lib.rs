pub mod constants;
pub mod error;
pub mod shared_prize_wheel;

pub use error::{OutcomeError, WheelError};
