use chrono::{DateTime, Duration, Utc};
use core_types::TimeWindow;
use serde_json::Value;

/// The fields a report reads from an inbound request.
///
/// Parsing never fails: a missing or malformed field means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
    /// Trader group mask; empty selects every group.
    pub group: String,
    /// Inclusive lower bound, epoch seconds.
    pub from: Option<i64>,
    /// Inclusive upper bound, epoch seconds.
    pub to: Option<i64>,
}

impl ReportRequest {
    pub fn new(group: impl Into<String>, from: Option<i64>, to: Option<i64>) -> Self {
        Self {
            group: group.into(),
            from,
            to,
        }
    }

    pub fn from_json(request: &Value) -> Self {
        let group = request
            .get("group")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self {
            group,
            from: request.get("from").and_then(epoch_seconds),
            to: request.get("to").and_then(epoch_seconds),
        }
    }

    /// The window trades are fetched for. The lower bound is pulled back by
    /// `lookback_days` so the daily charts show the days leading up to `from`.
    /// A bound that cannot be represented is dropped.
    pub fn fetch_window(&self, lookback_days: i64) -> TimeWindow {
        let lookback = Duration::try_days(lookback_days).unwrap_or_else(Duration::zero);
        let from = self
            .from
            .and_then(to_instant)
            .and_then(|from| from.checked_sub_signed(lookback));
        TimeWindow::new(from, self.to.and_then(to_instant))
    }
}

fn epoch_seconds(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|secs| secs.is_finite() && secs.abs() < i64::MAX as f64)
            .map(|secs| secs.trunc() as i64)
    })
}

fn to_instant(secs: i64) -> Option<DateTime<Utc>> {
    let instant = DateTime::<Utc>::from_timestamp(secs, 0);
    if instant.is_none() {
        tracing::warn!(secs, "Ignoring out-of-range request timestamp.");
    }
    instant
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_request_is_read() {
        let request = ReportRequest::from_json(&json!({
            "group": "real*",
            "from": 1_762_905_600,
            "to": 1_762_991_999
        }));
        assert_eq!(request, ReportRequest::new("real*", Some(1_762_905_600), Some(1_762_991_999)));
    }

    #[test]
    fn missing_or_malformed_fields_mean_no_filter() {
        let request = ReportRequest::from_json(&json!({"group": 7, "from": "yesterday"}));
        assert_eq!(request, ReportRequest::default());

        let request = ReportRequest::from_json(&json!(null));
        assert_eq!(request.fetch_window(14), TimeWindow::unbounded());
    }

    #[test]
    fn fractional_seconds_are_truncated() {
        let request = ReportRequest::from_json(&json!({"to": 1_000.9}));
        assert_eq!(request.to, Some(1_000));
    }

    #[test]
    fn lookback_only_moves_the_lower_bound() {
        let request = ReportRequest::new("", Some(2_000_000), Some(3_000_000));
        let window = request.fetch_window(14);
        assert_eq!(window.from.unwrap().timestamp(), 2_000_000 - 14 * 86_400);
        assert_eq!(window.to.unwrap().timestamp(), 3_000_000);

        let without_from = ReportRequest::new("", None, Some(3_000_000)).fetch_window(14);
        assert!(without_from.from.is_none());
    }

    #[test]
    fn unrepresentable_bound_is_dropped() {
        let window = ReportRequest::new("", Some(i64::MAX), None).fetch_window(0);
        assert_eq!(window, TimeWindow::unbounded());
    }
}
