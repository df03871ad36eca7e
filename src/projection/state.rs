//! Payback tracking across the projection horizon

use super::year::{ProgramYear, HORIZON_MONTHS, MONTHS_PER_YEAR};

/// Running state of the month-by-month payback search
///
/// Each year's net profit is spread evenly over its 12 months. The first month
/// at which cumulative profit reaches zero is the payback month. Once found,
/// later months are no longer accumulated, so `cumulative_profit` stays at
/// its value on the crossing month.
#[derive(Debug, Clone, Default)]
pub struct ProjectionState {
    /// Cumulative monthly profit up to the crossing month (or the last month walked)
    pub cumulative_profit: f64,

    /// First month (1-based) with non-negative cumulative profit
    pub payback_month: Option<u32>,
}

impl ProjectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the 12 months of `year` with its net profit
    pub fn record_year(&mut self, year: ProgramYear, net_profit: f64) {
        let monthly_profit = net_profit / MONTHS_PER_YEAR as f64;

        for month_in_year in 1..=MONTHS_PER_YEAR {
            if self.payback_month.is_some() {
                break;
            }
            self.cumulative_profit += monthly_profit;
            if self.cumulative_profit >= 0.0 {
                self.payback_month = Some(year.projection_month(month_in_year));
            }
        }
    }

    /// Payback month, or the full horizon if profit never turned non-negative
    pub fn payback_months(&self) -> u32 {
        self.payback_month.unwrap_or(HORIZON_MONTHS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profitable_first_month() {
        let mut state = ProjectionState::new();
        state.record_year(ProgramYear::First, 1200.0);

        assert_eq!(state.payback_month, Some(1));
        assert_eq!(state.payback_months(), 1);
    }

    #[test]
    fn test_crossing_in_second_year() {
        let mut state = ProjectionState::new();
        state.record_year(ProgramYear::First, -1200.0);
        assert_eq!(state.payback_month, None);
        assert_eq!(state.cumulative_profit, -1200.0);

        // 200/month recovers -1200 after 6 months
        state.record_year(ProgramYear::Second, 2400.0);
        assert_eq!(state.payback_months(), 18);
    }

    #[test]
    fn test_cumulative_profit_freezes_after_crossing() {
        let mut state = ProjectionState::new();
        state.record_year(ProgramYear::First, -1200.0);
        state.record_year(ProgramYear::Second, 2400.0);
        state.record_year(ProgramYear::Third, 1_000_000.0);

        assert_eq!(state.payback_months(), 18);
        assert_eq!(state.cumulative_profit, 0.0);
    }

    #[test]
    fn test_never_pays_back_defaults_to_horizon() {
        let mut state = ProjectionState::new();
        for year in ProgramYear::ALL {
            state.record_year(year, -500.0);
        }

        assert_eq!(state.payback_month, None);
        assert_eq!(state.payback_months(), 36);
    }

    #[test]
    fn test_nan_profit_never_pays_back() {
        let mut state = ProjectionState::new();
        state.record_year(ProgramYear::First, f64::NAN);
        assert_eq!(state.payback_months(), 36);
    }

    #[test]
    fn test_zero_profit_pays_back_immediately() {
        let mut state = ProjectionState::new();
        state.record_year(ProgramYear::First, 0.0);
        assert_eq!(state.payback_months(), 1);
    }
}
