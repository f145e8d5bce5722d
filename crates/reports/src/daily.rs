use crate::charts;
use crate::error::ReportError;
use crate::layout;
use crate::request::ReportRequest;
use crate::tables::{TradeTable, trade_table};
use analytics::{
    CountBucket, CurrencyNormalizer, DailyBucket, DayBoundary, DistributionCalculator,
    DistributionSlice, RankingSelector, SkippedTrade, TimeSeriesAggregator,
};
use backend::{BackendError, TradingBackend};
use configuration::ReportSettings;
use core_types::{AccountRecord, TradeRecord, TradeSide};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use ui_tree::ReportEnvelope;
use ui_tree::elements::div;

/// Everything a daily trades report shows, gathered from the backend.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub close_trades: Vec<TradeRecord>,
    pub open_trades: Vec<TradeRecord>,
    pub pnl_series: Vec<DailyBucket>,
    pub count_series: Vec<CountBucket>,
    pub distribution: Vec<DistributionSlice>,
    /// Trades left out of the money aggregates, closed and open alike.
    pub skipped: Vec<SkippedTrade>,
    /// Accounts resolved while normalising, keyed by login.
    pub accounts: HashMap<u64, AccountRecord>,
}

/// Resolves each login at most once per report.
#[derive(Default)]
struct AccountDirectory {
    resolved: HashMap<u64, Option<AccountRecord>>,
}

impl AccountDirectory {
    fn resolve(
        &mut self,
        backend: &dyn TradingBackend,
        login: u64,
    ) -> Result<AccountRecord, BackendError> {
        match self.resolved.entry(login) {
            Entry::Occupied(entry) => entry
                .get()
                .clone()
                .ok_or(BackendError::AccountNotFound(login)),
            Entry::Vacant(entry) => {
                let result = backend.fetch_account_by_login(login);
                entry.insert(result.as_ref().ok().cloned());
                result
            }
        }
    }

    fn into_accounts(self) -> HashMap<u64, AccountRecord> {
        self.resolved
            .into_iter()
            .filter_map(|(login, account)| account.map(|a| (login, a)))
            .collect()
    }
}

/// Fetches a whole record set, degrading to an empty set on failure.
fn fetch_or_empty<T>(what: &str, result: Result<Vec<T>, BackendError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to fetch {what}; continuing without them.");
        Vec::new()
    })
}

/// The daily trades report: P/L and trade-count charts for the window, best and
/// worst closed deals, and the profit/loss picture of open positions.
#[derive(Debug, Clone)]
pub struct DailyTradesReport {
    settings: ReportSettings,
}

impl DailyTradesReport {
    pub fn new(settings: ReportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    fn day_boundary(&self) -> DayBoundary {
        self.settings
            .utc_offset_minutes
            .and_then(DayBoundary::from_offset_minutes)
            .unwrap_or_default()
    }

    /// Fetches and aggregates. Per-record and per-set backend failures are
    /// logged and leave the affected data out; this step cannot fail.
    pub fn collect(&self, backend: &dyn TradingBackend, request: &ReportRequest) -> ReportData {
        let window = request.fetch_window(self.settings.lookback_days);
        let mask = request.group.as_str();

        let close_trades = fetch_or_empty("closed trades", backend.fetch_close_trades(mask, &window));
        let open_trades = fetch_or_empty("open trades", backend.fetch_open_trades(mask, &window));
        let groups = fetch_or_empty("groups", backend.fetch_all_groups());

        let normalizer = CurrencyNormalizer::new(self.settings.reporting_currency.as_str(), &groups);
        let mut directory = AccountDirectory::default();
        let rate = |from: &str, to: &str, side: TradeSide| backend.convert_rate(from, to, side);

        let closed = normalizer.normalize_all(
            &close_trades,
            |login| directory.resolve(backend, login),
            rate,
        );
        let open = normalizer.normalize_all(
            &open_trades,
            |login| directory.resolve(backend, login),
            rate,
        );

        let aggregator = TimeSeriesAggregator::new(self.day_boundary());
        let pnl_series = aggregator.build_pnl_series(&closed.normalized);
        let count_series = aggregator.build_count_series(&closed.normalized);
        let distribution = DistributionCalculator::new().calculate(&open.normalized);

        let mut skipped = closed.skipped;
        skipped.extend(open.skipped);

        tracing::info!(
            group = mask,
            close_trades = close_trades.len(),
            open_trades = open_trades.len(),
            skipped = skipped.len(),
            days = pnl_series.len(),
            "Collected daily trades report data."
        );

        ReportData {
            close_trades,
            open_trades,
            pnl_series,
            count_series,
            distribution,
            skipped,
            accounts: directory.into_accounts(),
        }
    }

    /// Lays collected data out as the report envelope.
    pub fn render(&self, data: &ReportData) -> Result<ReportEnvelope, ReportError> {
        let selector = RankingSelector::new(self.settings.top_n);

        let top_close_profit = trade_table(
            TradeTable::TopCloseProfit,
            &selector.top_profit(&data.close_trades),
            &data.accounts,
        )?;
        let top_close_loss = trade_table(
            TradeTable::TopCloseLoss,
            &selector.top_loss(&data.close_trades),
            &data.accounts,
        )?;
        let top_open_profit = trade_table(
            TradeTable::TopOpenProfit,
            &selector.top_profit(&data.open_trades),
            &data.accounts,
        )?;
        let top_open_loss = trade_table(
            TradeTable::TopOpenLoss,
            &selector.top_loss(&data.open_trades),
            &data.accounts,
        )?;

        let currency = &self.settings.reporting_currency;
        let root = div(vec![
            layout::title("Daily Trades Report"),
            layout::section(&format!("Profit and Loss of Clients, {currency}")),
            charts::pnl_chart(&data.pnl_series),
            layout::section("Client Trades Count"),
            charts::trade_count_chart(&data.count_series),
            layout::section("Top Close Profit Orders"),
            top_close_profit,
            layout::section("Top Close Loss Orders"),
            top_close_loss,
            layout::section(&format!(
                "Total Profit/Loss of Current Client Positions, {currency} (%)"
            )),
            charts::distribution_pie(&data.distribution),
            layout::section("Top Open Profit Orders"),
            top_open_profit,
            layout::section("Top Open Loss Orders"),
            top_open_loss,
        ]);

        Ok(ReportEnvelope::wrap_sized(
            self.settings.modal_size.as_str(),
            root,
            layout::header(&self.settings.title),
            layout::footer(),
        ))
    }

    /// Collects and renders in one go.
    pub fn generate(
        &self,
        backend: &dyn TradingBackend,
        request: &ReportRequest,
    ) -> Result<ReportEnvelope, ReportError> {
        let data = self.collect(backend, request);
        self.render(&data)
    }
}
