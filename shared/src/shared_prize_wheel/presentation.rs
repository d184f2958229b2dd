use super::PrizeSpec;

/// Host-side collaborators the coordinator reports to.
pub trait SpinPresenter {
    fn draw_frame(&mut self, rotation: f64);
    fn set_controls_enabled(&mut self, enabled: bool);
    fn reveal_result(&mut self, text: &str);
    fn show_error(&mut self, message: &str);
    /// Fire-and-forget. Called once per completed spin, after the result is revealed.
    fn fire_celebration(&mut self);
}

/// Whole US dollars with thousands grouping, e.g. `$35,500`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn result_text(prize: u64) -> String {
    format!("CONGRATULATIONS! You Won {}!", format_currency(prize))
}

/// Headline numbers shown next to the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrizeSummary {
    pub prize_amounts: usize,
    pub total_prizes: u64,
    pub total_prize_pool: u64,
}

impl PrizeSummary {
    pub fn from_prizes(prizes: &[PrizeSpec]) -> Self {
        prizes.iter().fold(
            Self { prize_amounts: prizes.len(), ..Self::default() },
            |mut summary, prize| {
                summary.total_prizes += u64::from(prize.quantity);
                summary.total_prize_pool = summary
                    .total_prize_pool
                    .saturating_add(prize.amount.saturating_mul(u64::from(prize.quantity)));
                summary
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1000), "$1,000");
        assert_eq!(format_currency(35500), "$35,500");
        assert_eq!(format_currency(1234567), "$1,234,567");
    }

    #[test]
    fn test_result_text_uses_literal_prize() {
        assert_eq!(result_text(1500), "CONGRATULATIONS! You Won $1,500!");
    }

    #[test]
    fn test_summary() {
        let summary = PrizeSummary::from_prizes(&[
            PrizeSpec::new(1000, 10),
            PrizeSpec::new(1500, 8),
            PrizeSpec::new(5000, 1),
        ]);
        assert_eq!(summary.prize_amounts, 3);
        assert_eq!(summary.total_prizes, 19);
        assert_eq!(summary.total_prize_pool, 27_000);
    }
}
