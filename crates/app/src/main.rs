use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::shared::config::load_config;
use app::shared::export::{export_daily_entries, export_monthly_summary, ExportError};
use app::shared::state::AppState;
use app::shared::supabase::SupabaseClient;
use contracts::shared::format::{format_brl, format_multiplier};
use contracts::shared::metrics::net_profit;
use contracts::shared::period::Period;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let client = SupabaseClient::new(&config.supabase);

    let mut state = AppState::new();
    if let Err(error) = state.reload(&client).await {
        // A failed fetch is never fatal: the process stays up with empty
        // state and the failure is reported once.
        tracing::error!("{}", error.friendly());
    }

    let totals = state.totals();
    tracing::info!(
        entries = state.entries().len(),
        "faturamento: {} | gasto ads: {} | lucro: {} | ROI: {}",
        format_brl(totals.sales_value),
        format_brl(totals.ad_spend),
        format_brl(totals.profit),
        format_multiplier(totals.roi),
    );

    let recent = state.totals_in(&Period::LastDays(30));
    tracing::info!(
        "últimos 30 dias | faturamento: {} | gasto ads: {} | lucro: {} | ROI: {}",
        format_brl(recent.sales_value),
        format_brl(recent.ad_spend),
        format_brl(recent.profit),
        format_multiplier(recent.roi),
    );

    let pro_labores = state.pro_labore_by_month();
    for summary in state.monthly() {
        let draw = pro_labores.get(&summary.month).copied().unwrap_or(0.0);
        tracing::info!(
            "{} | faturamento: {} | lucro bruto: {} | pró-labore: {} | lucro líquido: {} | ROI: {}",
            summary.month,
            format_brl(summary.totals.sales_value),
            format_brl(summary.totals.profit),
            format_brl(draw),
            format_brl(net_profit(summary.totals.profit, draw)),
            format_multiplier(summary.totals.roi),
        );
    }

    if std::env::args().any(|arg| arg == "--export") {
        let dir = std::env::current_dir()?;
        report_export(export_daily_entries(state.entries(), &dir));
        report_export(export_monthly_summary(&state.monthly(), &pro_labores, &dir));
    }

    Ok(())
}

fn report_export(result: Result<std::path::PathBuf, ExportError>) {
    match result {
        Ok(path) => tracing::info!("exportado: {}", path.display()),
        Err(ExportError::Empty) => tracing::warn!("{}", ExportError::Empty),
        Err(error) => tracing::error!("falha na exportação: {}", error),
    }
}
