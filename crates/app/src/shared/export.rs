//! CSV export of daily entries and monthly summaries.
//!
//! Output is UTF-8 with a BOM prefix so spreadsheet tools detect the
//! encoding, comma-delimited, header row first, every monetary/ratio cell
//! formatted to exactly two decimals. An empty collection is a user-facing
//! notice, not a failure: no file is produced.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use contracts::domain::daily_entry::DailyEntry;
use contracts::shared::format::format_decimal;
use contracts::shared::metrics::{conversion_rate, daily_metrics, net_profit, MonthlySummary};

/// UTF-8 byte-order marker expected by Excel and friends.
const BOM: &[u8] = "\u{FEFF}".as_bytes();

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The empty-input guard. Shown to the user as a blocking notice.
    #[error("Não há dados para exportar")]
    Empty,

    #[error("erro de escrita do arquivo: {0}")]
    Io(#[from] std::io::Error),

    #[error("erro ao gerar CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A value that renders as one CSV row.
pub trait CsvRecord {
    fn headers() -> Vec<&'static str>;
    fn record(&self) -> Vec<String>;
}

impl CsvRecord for DailyEntry {
    fn headers() -> Vec<&'static str> {
        vec![
            "Data",
            "Gasto em Ads (R$)",
            "Valor em Vendas (R$)",
            "Qtd Leads",
            "Qtd Vendas",
            "CPL (R$)",
            "CPA (R$)",
            "Ticket Médio (R$)",
            "ROI",
            "Lucro (R$)",
            "Taxa Conversão (%)",
        ]
    }

    fn record(&self) -> Vec<String> {
        let metrics = daily_metrics(self);
        vec![
            self.date.to_string(),
            format_decimal(self.ad_spend),
            format_decimal(self.sales_value),
            self.lead_count.to_string(),
            self.sale_count.to_string(),
            format_decimal(metrics.cpl),
            format_decimal(metrics.cpa),
            format_decimal(metrics.average_ticket),
            format_decimal(metrics.roi),
            format_decimal(metrics.profit),
            format_decimal(conversion_rate(self.lead_count, self.sale_count)),
        ]
    }
}

/// One monthly summary joined with the month's compensation draw.
pub struct MonthlyReportRow {
    pub summary: MonthlySummary,
    pub pro_labore: f64,
}

impl CsvRecord for MonthlyReportRow {
    fn headers() -> Vec<&'static str> {
        vec![
            "Mês",
            "Faturamento (R$)",
            "Gasto Ads (R$)",
            "Lucro Bruto (R$)",
            "Pró-Labore (R$)",
            "Lucro Líquido (R$)",
            "ROI",
            "Total Leads",
            "Total Vendas",
            "CPL (R$)",
            "CPA (R$)",
            "Ticket Médio (R$)",
            "Taxa Conversão (%)",
        ]
    }

    fn record(&self) -> Vec<String> {
        let totals = &self.summary.totals;
        vec![
            self.summary.month.clone(),
            format_decimal(totals.sales_value),
            format_decimal(totals.ad_spend),
            format_decimal(totals.profit),
            format_decimal(self.pro_labore),
            format_decimal(net_profit(totals.profit, self.pro_labore)),
            format_decimal(totals.roi),
            totals.lead_count.to_string(),
            totals.sale_count.to_string(),
            format_decimal(totals.cpl),
            format_decimal(totals.cpa),
            format_decimal(totals.average_ticket),
            format_decimal(conversion_rate(totals.lead_count, totals.sale_count)),
        ]
    }
}

/// Export raw daily entries to `lancamentos_<date>.csv` inside `dir`.
pub fn export_daily_entries(entries: &[DailyEntry], dir: &Path) -> Result<PathBuf, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = dir.join(dated_filename("lancamentos"));
    write_csv(entries, &path)?;
    Ok(path)
}

/// Export monthly aggregates joined with the pro-labore lookup to
/// `resumo_mensal_<date>.csv` inside `dir`.
pub fn export_monthly_summary(
    summaries: &[MonthlySummary],
    pro_labores: &HashMap<String, f64>,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    if summaries.is_empty() {
        return Err(ExportError::Empty);
    }

    let rows: Vec<MonthlyReportRow> = summaries
        .iter()
        .map(|summary| MonthlyReportRow {
            summary: summary.clone(),
            pro_labore: pro_labores.get(&summary.month).copied().unwrap_or(0.0),
        })
        .collect();

    let path = dir.join(dated_filename("resumo_mensal"));
    write_csv(&rows, &path)?;
    Ok(path)
}

/// `<kind>_<ISO date of export>.csv`
fn dated_filename(kind: &str) -> String {
    format!("{}_{}.csv", kind, chrono::Local::now().date_naive())
}

fn write_csv<T: CsvRecord>(records: &[T], path: &Path) -> Result<(), ExportError> {
    let mut buffer = Vec::new();
    buffer.write_all(BOM)?;
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(T::headers())?;
        for record in records {
            writer.write_record(record.record())?;
        }
        writer.flush()?;
    }
    std::fs::write(path, buffer)?;
    Ok(())
}
