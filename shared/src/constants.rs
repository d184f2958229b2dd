use std::f64::consts::PI;

pub const SPIN_ENDPOINT: &str = "/spin";

pub const SPIN_DURATION_MS: f64 = 6000.0;
pub const FULL_SPINS: u32 = 5;
/// Top of the wheel in canvas coordinates (y grows downward).
pub const POINTER_ANGLE: f64 = 1.5 * PI;

pub const CANVAS_SIZE: u32 = 450;
pub const RIM_MARGIN: f64 = 10.0;
pub const HUB_RADIUS: f64 = 30.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.9;
pub const LABEL_FONT: &str = "bold 16px monospace";

pub const SECTOR_COLORS: [&str; 2] = ["#2C333F", "#363E4A"];
pub const LABEL_COLOR: &str = "#E0E0E0";
pub const DIVIDER_COLOR: &str = "#FFFFFF";
pub const HUB_COLOR: &str = "#A0A0A0";
pub const ACCENT_COLOR: &str = "#00BFFF";
pub const POINTER_COLOR: &str = "#F59E0B";

pub const NETWORK_ERROR: &str = "A network error occurred. Try again.";
pub const WHEEL_OUT_OF_DATE_ERROR: &str = "The wheel is out of date. Please refresh and try again.";
pub const NO_PRIZES_LEFT: &str = "No prizes left";
