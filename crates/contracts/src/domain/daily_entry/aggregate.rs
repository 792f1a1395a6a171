use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily marketing entry, one row per calendar date (table `lancamentos`).
///
/// The backend enforces uniqueness on `data`; the application only ever
/// holds a read-only copy refreshed after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    pub id: i64,

    /// Calendar day, identity key. A plain calendar date is deliberate:
    /// there is no time component that a time-zone offset could shift
    /// across a month boundary.
    #[serde(rename = "data")]
    pub date: NaiveDate,

    /// Ad spend for the day, in currency units.
    #[serde(rename = "gasto_ads")]
    pub ad_spend: f64,

    /// Sales value for the day, in currency units.
    #[serde(rename = "valor_vendas")]
    pub sales_value: f64,

    #[serde(rename = "qtd_leads")]
    pub lead_count: i64,

    #[serde(rename = "qtd_vendas")]
    pub sale_count: i64,
}

impl DailyEntry {
    /// Month grouping key, `YYYY-MM`. Lexicographic order on these keys
    /// matches calendar order.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Insert/update payload for `lancamentos` (the backend assigns `id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntryDto {
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "gasto_ads")]
    pub ad_spend: f64,
    #[serde(rename = "valor_vendas")]
    pub sales_value: f64,
    #[serde(rename = "qtd_leads")]
    pub lead_count: i64,
    #[serde(rename = "qtd_vendas")]
    pub sale_count: i64,
}

/// Raw form input, exactly as entered by the user. Goes through
/// `shared::validation::validate_daily_entry` before it may become a DTO.
#[derive(Debug, Clone, Default)]
pub struct DailyEntryForm {
    pub date: String,
    pub ad_spend: String,
    pub sales_value: String,
    pub lead_count: String,
    pub sale_count: String,
}

impl DailyEntryForm {
    /// Convert a validated form into an insert/update payload.
    ///
    /// Callers must run validation first; an unparseable date is the only
    /// error left here and is reported as a violation message.
    pub fn to_dto(&self) -> Result<DailyEntryDto, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Data inválida (esperado: YYYY-MM-DD)".to_string())?;
        Ok(DailyEntryDto {
            date,
            ad_spend: self.ad_spend.trim().parse().unwrap_or(0.0),
            sales_value: self.sales_value.trim().parse().unwrap_or(0.0),
            lead_count: self.lead_count.trim().parse().unwrap_or(0),
            sale_count: self.sale_count.trim().parse().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(date: &str) -> DailyEntry {
        DailyEntry {
            id: 1,
            date: date.parse().unwrap(),
            ad_spend: 100.0,
            sales_value: 250.0,
            lead_count: 10,
            sale_count: 4,
        }
    }

    #[test]
    fn test_month_key() {
        assert_eq!(entry("2025-01-31").month_key(), "2025-01");
        assert_eq!(entry("2025-12-01").month_key(), "2025-12");
    }

    #[test]
    fn test_wire_format_round_trip() {
        // Shape as returned by the hosted backend.
        let json = r#"{
            "id": 42,
            "data": "2025-03-15",
            "gasto_ads": 150.5,
            "valor_vendas": 900.0,
            "qtd_leads": 30,
            "qtd_vendas": 7
        }"#;
        let parsed: DailyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.date.to_string(), "2025-03-15");
        assert_eq!(parsed.ad_spend, 150.5);
        assert_eq!(parsed.sale_count, 7);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["data"], "2025-03-15");
        assert_eq!(back["qtd_leads"], 30);
    }

    #[test]
    fn test_form_to_dto() {
        let form = DailyEntryForm {
            date: "2025-03-15".into(),
            ad_spend: "150.50".into(),
            sales_value: "".into(),
            lead_count: "30".into(),
            sale_count: "7".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.ad_spend, 150.5);
        // Empty numeric fields default to zero, as the original form did.
        assert_eq!(dto.sales_value, 0.0);

        let bad = DailyEntryForm {
            date: "15/03/2025".into(),
            ..Default::default()
        };
        assert!(bad.to_dto().is_err());
    }
}
