//! Best/worst trade tables for closed deals and open positions.

use analytics::RankedTrade;
use analytics::format::format_money;
use core_types::{AccountRecord, TradeRecord};
use std::collections::HashMap;
use ui_tree::{SortDirection, TableBuilder, TableError, TableRow, UiNode};

/// Which trades a table lists and how they were ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeTable {
    TopCloseProfit,
    TopCloseLoss,
    TopOpenProfit,
    TopOpenLoss,
}

impl TradeTable {
    fn name(&self) -> &'static str {
        match self {
            TradeTable::TopCloseProfit => "TopCloseProfitOrders",
            TradeTable::TopCloseLoss => "TopCloseLossOrders",
            TradeTable::TopOpenProfit => "TopOpenProfitOrders",
            TradeTable::TopOpenLoss => "TopOpenLossOrders",
        }
    }

    fn is_open(&self) -> bool {
        matches!(self, TradeTable::TopOpenProfit | TradeTable::TopOpenLoss)
    }

    /// Best trades sort by profit descending, worst ascending.
    fn direction(&self) -> SortDirection {
        match self {
            TradeTable::TopCloseProfit | TradeTable::TopOpenProfit => SortDirection::Desc,
            TradeTable::TopCloseLoss | TradeTable::TopOpenLoss => SortDirection::Asc,
        }
    }
}

const CLOSE_COLUMNS: &[(&str, &str)] = &[
    ("order", "ORDER"),
    ("login", "LOGIN"),
    ("name", "NAME"),
    ("symbol", "SYMBOL"),
    ("group", "GROUP"),
    ("type", "TYPE"),
    ("volume", "VOLUME"),
    ("close_price", "CLOSE_PRICE"),
    ("storage", "SWAP"),
    ("profit", "AMOUNT"),
];

const OPEN_COLUMNS: &[(&str, &str)] = &[
    ("order", "ORDER"),
    ("login", "LOGIN"),
    ("name", "NAME"),
    ("symbol", "SYMBOL"),
    ("group", "GROUP"),
    ("type", "TYPE"),
    ("volume", "VOLUME"),
    ("open_price", "OPEN_PRICE"),
    ("sl", "S/L"),
    ("tp", "T/P"),
    ("market_price", "MARKET_PRICE"),
    ("storage", "SWAP"),
    ("commission", "COMMISSION"),
    ("profit", "AMOUNT"),
];

/// Cells shared by closed and open trade rows. An unknown account leaves the
/// name and group cells empty rather than dropping the row.
fn common_cells(trade: &TradeRecord, account: Option<&AccountRecord>) -> TableRow {
    TableRow::new()
        .cell("order", trade.order.to_string())
        .cell("login", trade.login.to_string())
        .cell("name", account.map(|a| a.name.as_str()).unwrap_or_default())
        .cell("symbol", trade.symbol.as_str())
        .cell("group", account.map(|a| a.group.as_str()).unwrap_or_default())
        .cell("type", trade.side.as_str())
        .cell("volume", trade.volume.to_string())
}

fn close_row(trade: &TradeRecord, account: Option<&AccountRecord>) -> TableRow {
    common_cells(trade, account)
        .cell("close_price", format_money(trade.close_price))
        .cell("storage", format_money(trade.storage))
        .cell("profit", format_money(trade.profit))
}

/// For a running position the backend's close price is the current market price.
fn open_row(trade: &TradeRecord, account: Option<&AccountRecord>) -> TableRow {
    common_cells(trade, account)
        .cell("open_price", format_money(trade.open_price))
        .cell("sl", format_money(trade.stop_loss))
        .cell("tp", format_money(trade.take_profit))
        .cell("market_price", format_money(trade.close_price))
        .cell("storage", format_money(trade.storage))
        .cell("commission", format_money(trade.commission))
        .cell("profit", format_money(trade.profit))
}

/// Builds one ranked trade table as a `Table` node.
pub fn trade_table(
    table: TradeTable,
    ranked: &[RankedTrade<'_>],
    accounts: &HashMap<u64, AccountRecord>,
) -> Result<UiNode, TableError> {
    let mut builder = TableBuilder::new(table.name());
    builder
        .set_id_column("order")
        .set_order_by("profit", table.direction())
        .enable_refresh_button(false)
        .enable_bookmarks_button(false)
        .enable_export_button(true);

    let columns = if table.is_open() { OPEN_COLUMNS } else { CLOSE_COLUMNS };
    for (key, label) in columns {
        builder.add_column(*key, *label);
    }

    for ranked_trade in ranked {
        let trade = ranked_trade.trade;
        let account = accounts.get(&trade.login);
        let row = if table.is_open() {
            open_row(trade, account)
        } else {
            close_row(trade, account)
        };
        builder.add_row(row);
    }

    Ok(builder.build()?.into_node())
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::RankingSelector;
    use chrono::{TimeZone, Utc};
    use core_types::TradeSide;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use ui_tree::serializer::to_value;

    fn trade(order: u64, login: u64, profit: Decimal, open: bool) -> TradeRecord {
        TradeRecord {
            order,
            login,
            symbol: "EURUSD".to_string(),
            side: TradeSide::Sell,
            volume: 150,
            open_price: dec!(1.08456),
            close_price: dec!(1.08001),
            stop_loss: dec!(1.1),
            take_profit: Decimal::ZERO,
            profit,
            commission: dec!(-3.5),
            storage: dec!(-0.125),
            open_time: Utc.with_ymd_and_hms(2025, 11, 12, 9, 0, 0).unwrap(),
            close_time: (!open).then(|| Utc.with_ymd_and_hms(2025, 11, 12, 10, 0, 0).unwrap()),
        }
    }

    fn accounts() -> HashMap<u64, AccountRecord> {
        HashMap::from([(
            10,
            AccountRecord { login: 10, name: "Alice".into(), group: "real-eur".into() },
        )])
    }

    #[test]
    fn close_table_formats_cells() {
        let trades = vec![trade(5, 10, dec!(12.5), false)];
        let ranked = RankingSelector::default().top_profit(&trades);
        let node = trade_table(TradeTable::TopCloseProfit, &ranked, &accounts()).unwrap();
        let props = to_value(&node).unwrap()["props"].clone();

        assert_eq!(props["orderBy"], json!({"column": "profit", "direction": "DESC"}));
        assert_eq!(props["columns"].as_array().unwrap().len(), CLOSE_COLUMNS.len());
        assert_eq!(
            props["rows"][0],
            json!({
                "order": "5",
                "login": "10",
                "name": "Alice",
                "symbol": "EURUSD",
                "group": "real-eur",
                "type": "sell",
                "volume": "150",
                "close_price": "1.08",
                "storage": "-0.13",
                "profit": "12.50"
            })
        );
    }

    #[test]
    fn open_table_has_position_columns_and_blank_unknown_account() {
        let trades = vec![trade(8, 77, dec!(-40), true)];
        let ranked = RankingSelector::default().top_loss(&trades);
        let node = trade_table(TradeTable::TopOpenLoss, &ranked, &accounts()).unwrap();
        let props = to_value(&node).unwrap()["props"].clone();

        assert_eq!(props["orderBy"]["direction"], json!("ASC"));
        let row = &props["rows"][0];
        assert_eq!(row["name"], json!(""));
        assert_eq!(row["group"], json!(""));
        assert_eq!(row["sl"], json!("1.10"));
        assert_eq!(row["market_price"], json!("1.08"));
        assert_eq!(row["commission"], json!("-3.50"));
        assert_eq!(props["columns"][13], json!({"key": "profit", "label": "AMOUNT", "order": 14}));
    }

    #[test]
    fn empty_ranking_gives_empty_rows() {
        let node = trade_table(TradeTable::TopCloseLoss, &[], &HashMap::new()).unwrap();
        assert_eq!(to_value(&node).unwrap()["props"]["rows"], json!([]));
    }
}
