use backend::{BackendError, InMemoryBackend, TradingBackend};
use configuration::ReportSettings;
use core_types::{AccountRecord, GroupRecord, TimeWindow, TradeRecord, TradeSide};
use reports::{DailyTradesReport, ReportInfo, ReportRequest};
use rust_decimal::Decimal;
use serde_json::{Value, json};

const DATASET: &str = r#"{
    "trades": [
        {"order": 10, "login": 1, "symbol": "EURUSD", "side": "buy", "volume": 100,
         "open_price": 1.07, "close_price": 1.08, "profit": 100,
         "open_time": 1762905600, "close_time": 1762912800},
        {"order": 11, "login": 2, "symbol": "EURUSD", "side": "sell", "volume": 100,
         "open_price": 1.08, "close_price": 1.09, "profit": -50,
         "open_time": 1762905600, "close_time": 1762916400},
        {"order": 12, "login": 1, "symbol": "EURUSD", "side": "buy", "volume": 100,
         "open_price": 1.07, "close_price": 1.09, "profit": 30,
         "open_time": 1762995600, "close_time": 1762999200},
        {"order": 20, "login": 1, "symbol": "XAUUSD", "side": "buy", "volume": 10,
         "open_price": 2650, "close_price": 2700, "profit": 500,
         "open_time": 1762990000},
        {"order": 21, "login": 2, "symbol": "XAUUSD", "side": "sell", "volume": 10,
         "open_price": 2650, "close_price": 2660, "profit": -100,
         "open_time": 1762990000},
        {"order": 22, "login": 3, "symbol": "XAUUSD", "side": "sell", "volume": 10,
         "open_price": 2650, "close_price": 2660, "profit": -100,
         "open_time": 1762990000}
    ],
    "accounts": [
        {"login": 1, "name": "Alice", "group": "real\\usd"},
        {"login": 2, "name": "Bob", "group": "real\\usd"},
        {"login": 3, "name": "Carol", "group": "demo\\usd"}
    ],
    "groups": [
        {"group": "real\\usd", "currency": "USD"},
        {"group": "demo\\usd", "currency": "USD"}
    ]
}"#;

fn settings() -> ReportSettings {
    ReportSettings {
        utc_offset_minutes: Some(0),
        ..ReportSettings::default()
    }
}

fn backend() -> InMemoryBackend {
    InMemoryBackend::from_json_str(DATASET).unwrap()
}

fn content(envelope: &Value) -> &Value {
    &envelope["ui"]["modal"]["content"][0]["children"]
}

fn chart_data(chart: &Value) -> &Value {
    &chart["children"][0]["props"]["data"]
}

/// A backend whose record sets are all unavailable.
struct OfflineBackend;

impl TradingBackend for OfflineBackend {
    fn fetch_close_trades(&self, _: &str, _: &TimeWindow) -> Result<Vec<TradeRecord>, BackendError> {
        Err(BackendError::Unavailable("connection refused".into()))
    }

    fn fetch_open_trades(&self, _: &str, _: &TimeWindow) -> Result<Vec<TradeRecord>, BackendError> {
        Err(BackendError::Unavailable("connection refused".into()))
    }

    fn fetch_all_groups(&self) -> Result<Vec<GroupRecord>, BackendError> {
        Err(BackendError::Unavailable("connection refused".into()))
    }

    fn fetch_account_by_login(&self, login: u64) -> Result<AccountRecord, BackendError> {
        Err(BackendError::AccountNotFound(login))
    }

    fn convert_rate(&self, from: &str, to: &str, _: TradeSide) -> Result<Decimal, BackendError> {
        Err(BackendError::RateUnavailable {
            from: from.into(),
            to: to.into(),
        })
    }
}

#[test]
fn envelope_wraps_content_in_a_modal() {
    let envelope = DailyTradesReport::new(settings())
        .generate(&backend(), &ReportRequest::default())
        .unwrap()
        .to_value()
        .unwrap();

    let modal = &envelope["ui"]["modal"];
    assert_eq!(modal["size"], "xxxl");
    assert_eq!(
        modal["headerContent"],
        json!([{"type": "Space", "children": [{"type": "#text", "props": {"value": "Daily Trades report"}}]}])
    );
    assert_eq!(modal["footerContent"][0]["children"][0]["type"], "Button");
    assert_eq!(modal["content"].as_array().unwrap().len(), 1);
    assert_eq!(modal["content"][0]["type"], "div");
}

#[test]
fn daily_charts_carry_rounded_values() {
    let envelope = DailyTradesReport::new(settings())
        .generate(&backend(), &ReportRequest::default())
        .unwrap()
        .to_value()
        .unwrap();
    let content = content(&envelope);

    assert_eq!(
        chart_data(&content[2]),
        &json!([
            {"day": "2025.11.12", "profit": 100.0, "loss": -50.0, "profit/loss": 50.0},
            {"day": "2025.11.13", "profit": 30.0, "loss": 0.0, "profit/loss": 30.0}
        ])
    );
    assert_eq!(
        chart_data(&content[4]),
        &json!([
            {"day": "2025.11.12", "profit": 1, "loss": 1},
            {"day": "2025.11.13", "profit": 1, "loss": 0}
        ])
    );
}

#[test]
fn open_positions_split_into_profit_and_loss_shares() {
    let envelope = DailyTradesReport::new(settings())
        .generate(&backend(), &ReportRequest::default())
        .unwrap()
        .to_value()
        .unwrap();
    let pie = &content(&envelope)[10]["children"][0]["children"][2];

    assert_eq!(pie["type"], "Pie");
    let data = pie["props"]["data"].as_array().unwrap();
    assert_eq!(data[0]["name"], "Profit");
    assert!((data[0]["value"].as_f64().unwrap() - 71.43).abs() < 1e-9);
    assert_eq!(data[1]["name"], "Loss");
    assert!((data[1]["value"].as_f64().unwrap() - 28.57).abs() < 1e-9);
    assert_eq!(pie["children"].as_array().unwrap().len(), 2);
}

#[test]
fn group_mask_narrows_every_section() {
    let request = ReportRequest::new("demo\\*", None, None);
    let envelope = DailyTradesReport::new(settings())
        .generate(&backend(), &request)
        .unwrap()
        .to_value()
        .unwrap();
    let content = content(&envelope);

    assert_eq!(chart_data(&content[2]), &json!([]));
    let worst_open = &content[14]["props"]["rows"];
    assert_eq!(worst_open.as_array().unwrap().len(), 1);
    assert_eq!(worst_open[0]["name"], "Carol");
    assert_eq!(worst_open[0]["group"], "demo\\usd");
}

#[test]
fn window_comes_from_the_request_body() {
    // Only order 12 closes after this instant; the lookback is disabled.
    let request = ReportRequest::from_json(&json!({"group": "", "from": 1762990000}));
    let settings = ReportSettings {
        lookback_days: 0,
        ..settings()
    };
    let data = DailyTradesReport::new(settings).collect(&backend(), &request);

    let orders: Vec<u64> = data.close_trades.iter().map(|t| t.order).collect();
    assert_eq!(orders, vec![12]);
}

#[test]
fn lookback_reaches_days_before_from() {
    let request = ReportRequest::from_json(&json!({"from": 1762990000}));
    let data = DailyTradesReport::new(settings()).collect(&backend(), &request);

    assert_eq!(data.close_trades.len(), 3);
}

#[test]
fn unavailable_backend_yields_an_empty_report() {
    let report = DailyTradesReport::new(settings());
    let data = report.collect(&OfflineBackend, &ReportRequest::default());
    assert!(data.close_trades.is_empty());
    assert!(data.open_trades.is_empty());
    assert!(data.distribution.is_empty());

    let envelope = report.render(&data).unwrap().to_value().unwrap();
    let content = content(&envelope);
    assert_eq!(content.as_array().unwrap().len(), 15);
    assert_eq!(chart_data(&content[2]), &json!([]));
    assert_eq!(content[6]["props"]["rows"], json!([]));
}

#[test]
fn about_describes_the_report() {
    let about = serde_json::to_value(ReportInfo::daily_trades()).unwrap();
    assert_eq!(about["version"], 1);
    assert_eq!(about["type"], "daily_group");
}
