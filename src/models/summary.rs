use super::candle::Candle;

/// Day-over-day movement of the latest close.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeStats {
    pub absolute: f64,
    pub percent: f64,
}

/// Latest session of a price series plus its change against the previous
/// close, when one exists in the range.
#[derive(Debug, Clone)]
pub struct DaySummary {
    pub latest: Candle,
    pub change: Option<ChangeStats>,
}

impl DaySummary {
    /// Summarize a series ordered ascending by date. Returns `None` for an
    /// empty series. `change` is `None` when the series holds a single
    /// session, or when the previous close is zero.
    pub fn from_series(candles: &[Candle]) -> Option<Self> {
        let latest = candles.last()?.clone();

        let change = if candles.len() >= 2 {
            let prev_close = candles[candles.len() - 2].close;
            if prev_close != 0.0 {
                let absolute = latest.close - prev_close;
                Some(ChangeStats {
                    absolute,
                    percent: absolute / prev_close * 100.0,
                })
            } else {
                None
            }
        } else {
            None
        };

        Some(Self { latest, change })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn candle(day: u32, close: f64) -> Candle {
        Candle {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            open: close - 1.0,
            high: close + 2.0,
            low: close - 2.0,
            close,
        }
    }

    #[test]
    fn test_change_against_previous_close() {
        let series = vec![candle(2, 100.00), candle(3, 105.25)];
        let summary = DaySummary::from_series(&series).unwrap();

        assert_eq!(summary.latest.close, 105.25);
        let change = summary.change.unwrap();
        assert!((change.absolute - 5.25).abs() < 1e-9);
        assert!((change.percent - 5.25).abs() < 1e-9);
    }

    #[test]
    fn test_latest_is_last_record() {
        let series = vec![candle(2, 90.0), candle(3, 95.0), candle(6, 92.0)];
        let summary = DaySummary::from_series(&series).unwrap();

        assert_eq!(summary.latest.date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let change = summary.change.unwrap();
        assert!((change.absolute - (-3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_single_session_has_no_change() {
        let series = vec![candle(2, 100.0)];
        let summary = DaySummary::from_series(&series).unwrap();
        assert!(summary.change.is_none());
    }

    #[test]
    fn test_zero_previous_close_has_no_change() {
        let series = vec![candle(2, 0.0), candle(3, 10.0)];
        let summary = DaySummary::from_series(&series).unwrap();
        assert!(summary.change.is_none());
    }

    #[test]
    fn test_empty_series() {
        assert!(DaySummary::from_series(&[]).is_none());
    }
}
