//! Chart subtrees: the daily profit/loss lines, the daily trade counts and the
//! open-position pie.

use analytics::format::{MONEY_DECIMALS, round_half_up};
use analytics::{CountBucket, DailyBucket, DistributionSlice};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};
use ui_tree::elements::{
    cell, legend, line, line_chart, pie, pie_chart, responsive_container, tooltip, x_axis, y_axis,
};
use ui_tree::{Props, UiNode};

const PROFIT_COLOR: &str = "#4A90E2";
const LOSS_COLOR: &str = "#7ED321";
const NET_COLOR: &str = "#F5A623";
const CHART_HEIGHT: f64 = 300.0;

/// Money as a JSON number, rounded by the report policy.
fn money(value: Decimal) -> Value {
    round_half_up(value, MONEY_DECIMALS)
        .to_f64()
        .map(Value::from)
        .unwrap_or(Value::Null)
}

pub fn pnl_chart_data(series: &[DailyBucket]) -> Value {
    Value::Array(
        series
            .iter()
            .map(|bucket| {
                json!({
                    "day": bucket.day,
                    "profit": money(bucket.profit),
                    "loss": money(bucket.loss),
                    "profit/loss": money(bucket.total),
                })
            })
            .collect(),
    )
}

pub fn trade_count_chart_data(series: &[CountBucket]) -> Value {
    Value::Array(
        series
            .iter()
            .map(|bucket| json!({ "day": bucket.day, "profit": bucket.profit, "loss": bucket.loss }))
            .collect(),
    )
}

pub fn distribution_chart_data(slices: &[DistributionSlice]) -> Value {
    Value::Array(
        slices
            .iter()
            .map(|slice| json!({ "name": slice.label(), "value": money(slice.percentage) }))
            .collect(),
    )
}

fn series_line(data_key: &str, color: &str) -> UiNode {
    line(
        Props::new()
            .with("type", "monotone")
            .with("dataKey", data_key)
            .with("stroke", color),
    )
}

fn full_width(children: Vec<UiNode>) -> UiNode {
    responsive_container(
        children,
        Props::new().with("width", "100%").with("height", CHART_HEIGHT),
    )
}

/// Daily profit, loss and net result as three lines.
pub fn pnl_chart(series: &[DailyBucket]) -> UiNode {
    full_width(vec![line_chart(
        vec![
            x_axis(Props::new().with("dataKey", "day")),
            y_axis(),
            tooltip(),
            legend(),
            series_line("profit", PROFIT_COLOR),
            series_line("loss", LOSS_COLOR),
            series_line("profit/loss", NET_COLOR),
        ],
        Props::new().with("data", pnl_chart_data(series)),
    )])
}

/// Daily number of winning and losing trades.
pub fn trade_count_chart(series: &[CountBucket]) -> UiNode {
    full_width(vec![line_chart(
        vec![
            x_axis(Props::new().with("dataKey", "day")),
            y_axis(),
            tooltip(),
            legend(),
            series_line("profit", PROFIT_COLOR),
            series_line("loss", LOSS_COLOR),
        ],
        Props::new().with("data", trade_count_chart_data(series)),
    )])
}

/// Share of open profit versus open loss.
pub fn distribution_pie(slices: &[DistributionSlice]) -> UiNode {
    let cells = slices
        .iter()
        .map(|slice| {
            let color = match slice.kind {
                analytics::PoolKind::Profit => PROFIT_COLOR,
                analytics::PoolKind::Loss => LOSS_COLOR,
            };
            cell(Props::new().with("fill", color))
        })
        .collect();

    full_width(vec![pie_chart(
        vec![
            tooltip(),
            legend(),
            pie(
                cells,
                Props::new()
                    .with("dataKey", "value")
                    .with("nameKey", "name")
                    .with("data", distribution_chart_data(slices))
                    .with("cx", "50%")
                    .with("cy", "50%")
                    .with("outerRadius", 100.0)
                    .with("label", true),
            ),
        ],
        Props::new(),
    )])
}
