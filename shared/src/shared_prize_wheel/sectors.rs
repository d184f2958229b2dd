use std::f64::consts::TAU;

use log::debug;

use super::PrizeSpec;
use crate::error::WheelError;

/// One angular slice of the wheel, worth one prize unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub prize_amount: u64,
}

impl Sector {
    pub fn width(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Contiguous partition of a full turn, one equal-width sector per prize unit, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorMap {
    sectors: Vec<Sector>,
}

impl SectorMap {
    pub fn build(prizes: &[PrizeSpec]) -> Result<Self, WheelError> {
        let total_units: u64 = prizes.iter().map(|p| u64::from(p.quantity)).sum();
        if total_units == 0 {
            return Err(WheelError::EmptyWheel);
        }

        let width = TAU / total_units as f64;
        let mut sectors = Vec::with_capacity(total_units as usize);
        let mut index: u64 = 0;

        for prize in prizes {
            for _ in 0..prize.quantity {
                // Angles come from the unit index, not a running sum, so they never drift.
                let start_angle = width * index as f64;
                let end_angle = if index + 1 == total_units {
                    TAU
                } else {
                    width * (index + 1) as f64
                };
                sectors.push(Sector {
                    start_angle,
                    end_angle,
                    mid_angle: start_angle + (end_angle - start_angle) / 2.0,
                    prize_amount: prize.amount,
                });
                index += 1;
            }
        }

        debug!("Built {} sectors from {} prize entries", sectors.len(), prizes.len());
        Ok(Self { sectors })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// First sector in build order carrying `prize`.
    pub fn first_matching(&self, prize: u64) -> Option<(usize, &Sector)> {
        self.sectors
            .iter()
            .enumerate()
            .find(|(_, sector)| sector.prize_amount == prize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn scenario_a() -> Vec<PrizeSpec> {
        vec![PrizeSpec::new(100, 1), PrizeSpec::new(50, 3)]
    }

    #[test]
    fn test_scenario_a_layout() {
        let map = SectorMap::build(&scenario_a()).unwrap();
        assert_eq!(map.len(), 4);

        let sectors = map.sectors();
        for sector in sectors {
            assert!((sector.width() - FRAC_PI_2).abs() < 1e-12);
        }
        assert_eq!(sectors[0].start_angle, 0.0);
        assert_eq!(sectors[0].end_angle, FRAC_PI_2);
        assert_eq!(sectors[0].prize_amount, 100);
        assert_eq!(sectors[1].start_angle, FRAC_PI_2);
        assert_eq!(sectors[3].end_angle, TAU);
        assert!(sectors[1..].iter().all(|s| s.prize_amount == 50));
    }

    #[test]
    fn test_partition_and_count_laws() {
        let lists = vec![
            vec![PrizeSpec::new(7, 1)],
            scenario_a(),
            vec![
                PrizeSpec::new(1000, 10),
                PrizeSpec::new(1500, 8),
                PrizeSpec::new(2000, 5),
                PrizeSpec::new(2500, 4),
                PrizeSpec::new(3000, 3),
                PrizeSpec::new(4000, 1),
                PrizeSpec::new(5000, 1),
            ],
            vec![PrizeSpec::new(1, 0), PrizeSpec::new(2, 13), PrizeSpec::new(3, 0)],
        ];

        for prizes in lists {
            let map = SectorMap::build(&prizes).unwrap();
            let units: u32 = prizes.iter().map(|p| p.quantity).sum();
            assert_eq!(map.len(), units as usize);

            let total: f64 = map.sectors().iter().map(Sector::width).sum();
            assert!((total - TAU).abs() < 1e-9);

            let sectors = map.sectors();
            assert_eq!(sectors[0].start_angle, 0.0);
            assert_eq!(sectors[sectors.len() - 1].end_angle, TAU);
            for pair in sectors.windows(2) {
                assert_eq!(pair[0].end_angle, pair[1].start_angle);
            }
            for sector in sectors {
                assert_eq!(
                    sector.mid_angle,
                    sector.start_angle + (sector.end_angle - sector.start_angle) / 2.0
                );
            }
        }
    }

    #[test]
    fn test_units_expand_in_input_order() {
        let map = SectorMap::build(&[
            PrizeSpec::new(10, 2),
            PrizeSpec::new(20, 1),
            PrizeSpec::new(10, 1),
        ])
        .unwrap();
        let amounts: Vec<u64> = map.sectors().iter().map(|s| s.prize_amount).collect();
        assert_eq!(amounts, vec![10, 10, 20, 10]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let prizes = vec![PrizeSpec::new(3, 7), PrizeSpec::new(9, 11)];
        let a = SectorMap::build(&prizes).unwrap();
        let b = SectorMap::build(&prizes).unwrap();
        for (x, y) in a.sectors().iter().zip(b.sectors()) {
            assert_eq!(x.start_angle.to_bits(), y.start_angle.to_bits());
            assert_eq!(x.end_angle.to_bits(), y.end_angle.to_bits());
            assert_eq!(x.mid_angle.to_bits(), y.mid_angle.to_bits());
        }
    }

    #[test]
    fn test_empty_wheel() {
        assert_eq!(SectorMap::build(&[]), Err(WheelError::EmptyWheel));
        assert_eq!(
            SectorMap::build(&[PrizeSpec::new(100, 0), PrizeSpec::new(50, 0)]),
            Err(WheelError::EmptyWheel)
        );
    }

    #[test]
    fn test_first_matching_prefers_build_order() {
        let map = SectorMap::build(&scenario_a()).unwrap();
        assert_eq!(map.first_matching(50).map(|(i, _)| i), Some(1));
        assert_eq!(map.first_matching(100).map(|(i, _)| i), Some(0));
        assert!(map.first_matching(999).is_none());
    }
}
