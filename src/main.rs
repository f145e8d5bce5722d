use analytics::format::format_money;
use backend::InMemoryBackend;
use clap::{Args, Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::Config;
use core_types::TimeWindow;
use reports::{DailyTradesReport, ReportData, ReportRequest};
use std::path::PathBuf;

/// The main entry point for the trade reports application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only carries optional APP_* overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => configuration::load_config_from(path)?,
        None => configuration::load_config()?,
    };
    let _guard = configuration::init_tracing(&config.logging)?;

    match cli.command {
        Commands::Render(args) => handle_render(args, config),
        Commands::Summary(args) => handle_summary(args, config),
        Commands::Serve => web_server::run_server(config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Daily trading reports over a trading dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to `report.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the daily trades report envelope as JSON.
    Render(RenderArgs),
    /// Print the daily profit/loss and trade counts as tables.
    Summary(ReportArgs),
    /// Serve reports over HTTP.
    Serve,
}

#[derive(Args)]
struct ReportArgs {
    /// Dataset file to read (defaults to the configured `server.dataset_path`).
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Trader group mask, e.g. "real*,!real\\test". Empty selects every group.
    #[arg(long, default_value = "")]
    group: String,

    /// Lower bound of the window, epoch seconds.
    #[arg(long)]
    from: Option<i64>,

    /// Upper bound of the window, epoch seconds.
    #[arg(long)]
    to: Option<i64>,
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    report: ReportArgs,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl ReportArgs {
    fn load_backend(&self, config: &Config) -> anyhow::Result<InMemoryBackend> {
        let path = self
            .dataset
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.server.dataset_path));
        Ok(InMemoryBackend::from_path(&path)?)
    }

    /// Unlike the HTTP body, bounds given on the command line must be valid.
    fn request(&self) -> anyhow::Result<ReportRequest> {
        TimeWindow::from_epoch_seconds(self.from, self.to)?;
        Ok(ReportRequest::new(self.group.as_str(), self.from, self.to))
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_render(args: RenderArgs, config: Config) -> anyhow::Result<()> {
    let backend = args.report.load_backend(&config)?;
    let report = DailyTradesReport::new(config.report);
    let envelope = report.generate(&backend, &args.report.request()?)?;

    let json = if args.pretty {
        ui_tree::serializer::to_json_pretty(&envelope)?
    } else {
        envelope.to_json_string()?
    };
    println!("{json}");
    Ok(())
}

fn handle_summary(args: ReportArgs, config: Config) -> anyhow::Result<()> {
    let backend = args.load_backend(&config)?;
    let currency = config.report.reporting_currency.clone();
    let report = DailyTradesReport::new(config.report);
    let data = report.collect(&backend, &args.request()?);

    println!("{}", daily_table(&data, &currency));
    println!(
        "{} closed trades, {} open positions, {} skipped.",
        data.close_trades.len(),
        data.open_trades.len(),
        data.skipped.len()
    );
    for skipped in &data.skipped {
        println!("  order {} (login {}): {}", skipped.order, skipped.login, skipped.reason);
    }
    Ok(())
}

/// One row per day: money from the profit/loss series, counts from the count
/// series. Both are keyed by the same day strings.
fn daily_table(data: &ReportData, currency: &str) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Day".to_string(),
        format!("Profit, {currency}"),
        format!("Loss, {currency}"),
        format!("Total, {currency}"),
        "Winning".to_string(),
        "Losing".to_string(),
    ]);

    for counts in &data.count_series {
        let money = data.pnl_series.iter().find(|b| b.day == counts.day);
        let cell = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            counts.day.clone(),
            cell(money.map(|b| format_money(b.profit))),
            cell(money.map(|b| format_money(b.loss))),
            cell(money.map(|b| format_money(b.total))),
            counts.profit.to_string(),
            counts.loss.to_string(),
        ]);
    }
    table
}
