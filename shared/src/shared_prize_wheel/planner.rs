use std::f64::consts::TAU;

use log::{debug, error};

use super::{Sector, SectorMap, WheelConfig};
use crate::error::WheelError;

/// Maps any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = ((angle % TAU) + TAU) % TAU;
    // Tiny negative inputs round up to exactly 2π.
    if normalized >= TAU {
        0.0
    } else {
        normalized
    }
}

/// Sector resting under the pointer once the wheel has been rotated by `rotation`.
pub fn sector_under_pointer(sectors: &SectorMap, rotation: f64, pointer_angle: f64) -> Option<&Sector> {
    let local = normalize_angle(pointer_angle - rotation);
    sectors.sectors().iter().find(|sector| sector.contains(local))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub sector_index: usize,
    pub prize: u64,
    /// Rotation within one turn that brings the sector's mid-angle to the pointer.
    pub alignment: f64,
    /// `full_spins * 2π + alignment`, measured from a rotation origin of 0.
    pub total_rotation: f64,
}

impl RotationPlan {
    /// Absolute rest rotation for a spin that starts at `current_rotation`.
    ///
    /// The plan is laid on top of the start of the current turn, so the result keeps the
    /// alignment exact and always lies ahead of `current_rotation`.
    pub fn target_from(&self, current_rotation: f64) -> f64 {
        let base = (current_rotation / TAU).floor() * TAU;
        base + self.total_rotation
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlanner {
    pub pointer_angle: f64,
    pub full_spins: u32,
}

impl RotationPlanner {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            pointer_angle: config.pointer_angle,
            // At least one turn keeps every target strictly ahead of the current rotation.
            full_spins: config.full_spins.max(1),
        }
    }

    /// Plans a rest position for the first sector in build order that carries `target_prize`.
    pub fn plan_target(&self, sectors: &SectorMap, target_prize: u64) -> Result<RotationPlan, WheelError> {
        let (sector_index, sector) = sectors.first_matching(target_prize).ok_or_else(|| {
            error!("Target prize {} not found among {} sectors", target_prize, sectors.len());
            WheelError::PrizeNotFound { prize: target_prize }
        })?;

        let alignment = normalize_angle(self.pointer_angle - sector.mid_angle);
        let total_rotation = f64::from(self.full_spins) * TAU + alignment;

        debug!(
            "Planned prize {} on sector {} (alignment {:.4} rad, total {:.4} rad)",
            target_prize, sector_index, alignment, total_rotation
        );

        Ok(RotationPlan {
            sector_index,
            prize: target_prize,
            alignment,
            total_rotation,
        })
    }
}
