use serde::{Deserialize, Serialize};

/// Monthly compensation draw, one row per calendar month (table `prolabore`).
///
/// Joined to daily entries only by month key at display/export time; there
/// is no other relationship between the two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProLabore {
    pub id: i64,

    /// Identity key, strict `YYYY-MM`. Uniqueness enforced by the backend.
    #[serde(rename = "mes_ano")]
    pub month: String,

    /// Must be strictly positive.
    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// Insert/update payload for `prolabore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProLaboreDto {
    #[serde(rename = "mes_ano")]
    pub month: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// Raw form input for a compensation record.
#[derive(Debug, Clone, Default)]
pub struct ProLaboreForm {
    pub month: String,
    pub amount: String,
    pub description: String,
}

impl ProLaboreForm {
    /// Convert a validated form into an insert/update payload.
    pub fn to_dto(&self) -> ProLaboreDto {
        let description = self.description.trim();
        ProLaboreDto {
            month: self.month.trim().to_string(),
            amount: self.amount.trim().parse().unwrap_or(0.0),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = r#"{"id": 3, "mes_ano": "2025-01", "valor": 5000.0, "descricao": null}"#;
        let parsed: ProLabore = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.month, "2025-01");
        assert_eq!(parsed.amount, 5000.0);
        assert!(parsed.description.is_none());

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["mes_ano"], "2025-01");
        assert_eq!(back["valor"], 5000.0);
    }

    #[test]
    fn test_form_to_dto_blank_description() {
        let form = ProLaboreForm {
            month: " 2025-01 ".into(),
            amount: "5000".into(),
            description: "   ".into(),
        };
        let dto = form.to_dto();
        assert_eq!(dto.month, "2025-01");
        assert_eq!(dto.amount, 5000.0);
        assert!(dto.description.is_none());
    }
}
