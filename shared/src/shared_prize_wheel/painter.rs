use std::f64::consts::TAU;

use super::{format_currency, Sector};
use crate::constants::{
    ACCENT_COLOR, DIVIDER_COLOR, HUB_COLOR, HUB_RADIUS, LABEL_COLOR, LABEL_FONT, LABEL_RADIUS_RATIO,
    POINTER_COLOR, RIM_MARGIN, SECTOR_COLORS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// 2D drawing primitives supplied by the host.
pub trait RenderSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn close_path(&mut self);
    fn fill(&mut self, color: &str);
    fn stroke(&mut self, color: &str, line_width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPainter {
    pub width: f64,
    pub height: f64,
    pub pointer_angle: f64,
}

impl WheelPainter {
    pub fn new(width: f64, height: f64, pointer_angle: f64) -> Self {
        Self { width, height, pointer_angle }
    }

    fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2.0 - RIM_MARGIN).max(0.0)
    }

    pub fn paint<S: RenderSurface>(&self, surface: &mut S, sectors: &[Sector], rotation: f64) {
        let (cx, cy) = self.center();
        let radius = self.radius();

        surface.clear(self.width, self.height);

        surface.save();
        surface.translate(cx, cy);
        surface.rotate(rotation);
        surface.translate(-cx, -cy);

        for (index, sector) in sectors.iter().enumerate() {
            surface.begin_path();
            surface.arc(cx, cy, radius, sector.start_angle, sector.end_angle);
            surface.line_to(cx, cy);
            surface.close_path();
            surface.fill(SECTOR_COLORS[index % SECTOR_COLORS.len()]);

            surface.save();
            surface.translate(cx, cy);
            surface.rotate(sector.mid_angle);
            surface.fill_text(
                &format_currency(sector.prize_amount),
                radius * LABEL_RADIUS_RATIO,
                0.0,
                LABEL_FONT,
                TextAlign::Right,
                LABEL_COLOR,
            );
            surface.restore();

            surface.begin_path();
            surface.move_to(cx, cy);
            surface.line_to(
                cx + radius * sector.start_angle.cos(),
                cy + radius * sector.start_angle.sin(),
            );
            surface.stroke(DIVIDER_COLOR, 1.0);
        }

        surface.begin_path();
        surface.arc(cx, cy, HUB_RADIUS, 0.0, TAU);
        surface.fill(HUB_COLOR);
        surface.stroke(DIVIDER_COLOR, 3.0);

        surface.begin_path();
        surface.arc(cx, cy, radius, 0.0, TAU);
        surface.stroke(ACCENT_COLOR, 4.0);

        surface.restore();

        self.paint_pointer(surface);
    }

    /// Fixed indicator on the rim; never rotates with the wheel.
    fn paint_pointer<S: RenderSurface>(&self, surface: &mut S) {
        let (cx, cy) = self.center();
        let radius = self.radius();
        let (sin, cos) = self.pointer_angle.sin_cos();
        let tip = (cx + (radius - 15.0) * cos, cy + (radius - 15.0) * sin);
        let back = (cx + (radius + 5.0) * cos, cy + (radius + 5.0) * sin);
        let half_width = 10.0;

        surface.begin_path();
        surface.move_to(tip.0, tip.1);
        surface.line_to(back.0 - half_width * sin, back.1 + half_width * cos);
        surface.line_to(back.0 + half_width * sin, back.1 - half_width * cos);
        surface.close_path();
        surface.fill(POINTER_COLOR);
    }
}
