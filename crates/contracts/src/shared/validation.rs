//! Pre-flight validation for user-submitted records.
//!
//! Each function checks every rule independently and collects all
//! violations; an empty vec means the record may be written. Nothing here
//! mutates state or talks to the backend. Messages are the user-facing
//! sentences shown next to the form.

use crate::domain::daily_entry::DailyEntryForm;
use crate::domain::pro_labore::ProLaboreForm;

/// Ceiling for monetary fields: ten million currency units. Values above
/// this are far more likely to be typos than real figures.
pub const MAX_SAFE_AMOUNT: f64 = 10_000_000.0;

/// Ceiling for lead/sale counts.
pub const MAX_SAFE_COUNT: i64 = 1_000_000;

fn check_money(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Err(_) => {
            errors.push(format!("{} deve ser um número válido", label));
            None
        }
        Ok(value) if value < 0.0 => {
            errors.push(format!("{} não pode ser negativo", label));
            Some(value)
        }
        Ok(value) if value > MAX_SAFE_AMOUNT => {
            errors.push(format!(
                "{} muito alto (máximo: R$ 10.000.000,00). Verifique o valor.",
                label
            ));
            Some(value)
        }
        Ok(value) => Some(value),
    }
}

fn check_count(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Err(_) => {
            errors.push(format!("{} deve ser um número inteiro válido", label));
            None
        }
        Ok(value) if value < 0 => {
            errors.push(format!("{} não pode ser negativa", label));
            Some(value)
        }
        Ok(value) if value > MAX_SAFE_COUNT => {
            errors.push(format!(
                "{} muito alta (máximo: 1.000.000). Verifique o valor.",
                label
            ));
            Some(value)
        }
        Ok(value) => Some(value),
    }
}

/// Validate a candidate daily entry. Returns every violation found.
pub fn validate_daily_entry(form: &DailyEntryForm) -> Vec<String> {
    let mut errors = Vec::new();

    if form.date.trim().is_empty() {
        errors.push("Data é obrigatória".to_string());
    } else if chrono::NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d").is_err() {
        errors.push("Data inválida (esperado: YYYY-MM-DD)".to_string());
    }

    check_money(&form.ad_spend, "Gasto em Ads", &mut errors);
    check_money(&form.sales_value, "Valor de Vendas", &mut errors);

    let leads = check_count(&form.lead_count, "Quantidade de Leads", &mut errors);
    let sales = check_count(&form.sale_count, "Quantidade de Vendas", &mut errors);

    // Cross-field rule, only meaningful when both counts parsed.
    if let (Some(leads), Some(sales)) = (leads, sales) {
        if sales > leads {
            errors.push(
                "Quantidade de Vendas não pode ser maior que Quantidade de Leads".to_string(),
            );
        }
    }

    errors
}

/// Validate a candidate compensation record. Returns every violation found.
pub fn validate_pro_labore(form: &ProLaboreForm) -> Vec<String> {
    let mut errors = Vec::new();

    let month = form.month.trim();
    if month.is_empty() {
        errors.push("Mês/Ano é obrigatório".to_string());
    } else if !is_month_key_shaped(month) {
        errors.push("Formato de Mês/Ano inválido (esperado: YYYY-MM)".to_string());
    } else {
        let year: i32 = month[..4].parse().unwrap_or(0);
        let month_no: u32 = month[5..].parse().unwrap_or(0);
        if !(1..=12).contains(&month_no) {
            errors.push("Mês deve estar entre 01 e 12".to_string());
        }
        if !(2000..=2100).contains(&year) {
            errors.push("Ano deve estar entre 2000 e 2100".to_string());
        }
    }

    match form.amount.trim().parse::<f64>() {
        Err(_) => errors.push("Valor deve ser um número válido".to_string()),
        Ok(value) if value < 0.0 => errors.push("Valor não pode ser negativo".to_string()),
        Ok(value) if value > MAX_SAFE_AMOUNT => errors.push(
            "Valor muito alto (máximo: R$ 10.000.000,00). Verifique o valor.".to_string(),
        ),
        // Zero is rejected as its own rule, distinct from negative.
        Ok(value) if value == 0.0 => errors.push("Valor deve ser maior que zero".to_string()),
        Ok(_) => {}
    }

    errors
}

/// Strict `YYYY-MM` shape: four digits, dash, two digits.
fn is_month_key_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 7
        && bytes[..4].iter().all(|b| b.is_ascii_digit())
        && bytes[4] == b'-'
        && bytes[5..].iter().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_form() -> DailyEntryForm {
        DailyEntryForm {
            date: "2025-01-15".into(),
            ad_spend: "100".into(),
            sales_value: "250".into(),
            lead_count: "10".into(),
            sale_count: "4".into(),
        }
    }

    #[test]
    fn test_valid_daily_entry_has_no_violations() {
        assert!(validate_daily_entry(&daily_form()).is_empty());
    }

    #[test]
    fn test_missing_date() {
        let mut form = daily_form();
        form.date = "".into();
        let errors = validate_daily_entry(&form);
        assert_eq!(errors, vec!["Data é obrigatória".to_string()]);
    }

    #[test]
    fn test_sales_exceeding_leads_is_collected() {
        let mut form = daily_form();
        form.lead_count = "5".into();
        form.sale_count = "10".into();
        let errors = validate_daily_entry(&form);
        assert!(!errors.is_empty());
        assert!(errors
            .iter()
            .any(|e| e == "Quantidade de Vendas não pode ser maior que Quantidade de Leads"));
    }

    #[test]
    fn test_all_violations_are_collected_not_short_circuited() {
        let form = DailyEntryForm {
            date: "".into(),
            ad_spend: "abc".into(),
            sales_value: "-5".into(),
            lead_count: "-1".into(),
            sale_count: "2000001".into(),
        };
        // Missing date, unparseable spend, negative sales, negative leads,
        // count over the ceiling, plus the cross-field rule (both counts
        // parsed and sales > leads).
        let errors = validate_daily_entry(&form);
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_money_ceiling() {
        let mut form = daily_form();
        form.ad_spend = "10000001".into();
        let errors = validate_daily_entry(&form);
        assert!(errors[0].contains("muito alto"));
    }

    #[test]
    fn test_cross_field_skipped_when_count_unparseable() {
        let mut form = daily_form();
        form.lead_count = "x".into();
        form.sale_count = "10".into();
        let errors = validate_daily_entry(&form);
        // Only the parse failure; the cross-field rule needs both counts.
        assert_eq!(
            errors,
            vec!["Quantidade de Leads deve ser um número inteiro válido".to_string()]
        );
    }

    #[test]
    fn test_pro_labore_zero_amount_is_its_own_rule() {
        let form = ProLaboreForm {
            month: "2025-01".into(),
            amount: "0".into(),
            description: "".into(),
        };
        let errors = validate_pro_labore(&form);
        assert_eq!(errors, vec!["Valor deve ser maior que zero".to_string()]);

        let negative = ProLaboreForm {
            amount: "-10".into(),
            ..form
        };
        let errors = validate_pro_labore(&negative);
        assert_eq!(errors, vec!["Valor não pode ser negativo".to_string()]);
    }

    #[test]
    fn test_pro_labore_month_key_rules() {
        let base = ProLaboreForm {
            month: "2025-1".into(),
            amount: "100".into(),
            description: "".into(),
        };
        assert_eq!(
            validate_pro_labore(&base),
            vec!["Formato de Mês/Ano inválido (esperado: YYYY-MM)".to_string()]
        );

        let bad_month = ProLaboreForm {
            month: "2025-13".into(),
            ..base.clone()
        };
        assert_eq!(
            validate_pro_labore(&bad_month),
            vec!["Mês deve estar entre 01 e 12".to_string()]
        );

        let bad_year = ProLaboreForm {
            month: "1999-05".into(),
            ..base
        };
        assert_eq!(
            validate_pro_labore(&bad_year),
            vec!["Ano deve estar entre 2000 e 2100".to_string()]
        );
    }
}
