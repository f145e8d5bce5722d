use serde::Serialize;

/// Identification a host shows in its report catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportInfo {
    pub version: u32,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub report_type: &'static str,
}

impl ReportInfo {
    pub fn daily_trades() -> Self {
        Self {
            version: 1,
            name: "Daily Trades report",
            description: "Trading operations of selected trader groups for the selected day. \
                Includes profit and loss graphs and detailed information about all performed \
                deals and open positions.",
            report_type: "daily_group",
        }
    }
}
