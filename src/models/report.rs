use super::summary::DaySummary;

/// Everything one command invocation produces: the formatted figures and
/// the rendered chart, ready to be sent back to the channel.
#[derive(Debug)]
pub struct StockReport {
    pub ticker: String,
    pub name: String,
    pub summary: DaySummary,
    pub analysis: String,
    pub chart_png: Vec<u8>,
}

impl StockReport {
    /// Render the text half of the reply. The attachment is sent
    /// separately by the command.
    pub fn to_message_text(&self) -> String {
        let latest = &self.summary.latest;

        let change_line = match &self.summary.change {
            Some(c) => format!("{:+.2} ({:+.2}%)", c.absolute, c.percent),
            None => "n/a (no prior close in range)".to_string(),
        };

        format!(
            "📈 {} ({})\n\
             Open: {:.2}\n\
             Close: {:.2}\n\
             High: {:.2}\n\
             Low: {:.2}\n\
             Change: {}\n\n\
             💬 Analysis:\n{}",
            self.name, self.ticker, latest.open, latest.close, latest.high, latest.low,
            change_line, self.analysis,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candle::Candle;
    use crate::models::summary::ChangeStats;
    use chrono::NaiveDate;

    fn report(change: Option<ChangeStats>) -> StockReport {
        StockReport {
            ticker: "2330".to_string(),
            name: "Taiwan Semiconductor".to_string(),
            summary: DaySummary {
                latest: Candle {
                    date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
                    open: 1000.0,
                    high: 1017.5,
                    low: 995.0,
                    close: 1005.25,
                },
                change,
            },
            analysis: "Uptrend intact above the 50-day average.".to_string(),
            chart_png: Vec::new(),
        }
    }

    #[test]
    fn test_message_contains_name_ticker_and_two_decimal_figures() {
        let text = report(Some(ChangeStats { absolute: 5.25, percent: 0.525 })).to_message_text();

        assert!(text.contains("Taiwan Semiconductor"));
        assert!(text.contains("(2330)"));
        assert!(text.contains("Open: 1000.00"));
        assert!(text.contains("Close: 1005.25"));
        assert!(text.contains("High: 1017.50"));
        assert!(text.contains("Low: 995.00"));
    }

    #[test]
    fn test_change_is_signed() {
        let up = report(Some(ChangeStats { absolute: 5.25, percent: 0.525 })).to_message_text();
        assert!(up.contains("+5.25 (+0.53%)"));

        let down = report(Some(ChangeStats { absolute: -5.25, percent: -0.525 })).to_message_text();
        assert!(down.contains("-5.25 (-0.53%)"));
    }

    #[test]
    fn test_missing_change_prints_na() {
        let text = report(None).to_message_text();
        assert!(text.contains("Change: n/a"));
    }

    #[test]
    fn test_analysis_is_appended_verbatim() {
        let text = report(None).to_message_text();
        assert!(text.ends_with("Uptrend intact above the 50-day average."));
    }
}
