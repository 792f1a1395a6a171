//! Backend error interpretation.
//!
//! The data-access façade surfaces backend failures verbatim; translating
//! them into one user-facing sentence happens here, next to the rest of
//! the pre-flight checks.

use serde::{Deserialize, Serialize};

/// Error body reported by the hosted backend (PostgREST shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendError {
    /// SQLSTATE or PostgREST code, e.g. "23505" or "PGRST301".
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(msg)) => write!(f, "[{}] {}", code, msg),
            (None, Some(msg)) => write!(f, "{}", msg),
            (Some(code), None) => write!(f, "[{}]", code),
            (None, None) => write!(f, "erro desconhecido"),
        }
    }
}

/// Map a backend error to the single user-facing sentence shown in the UI.
///
/// Classification order: duplicate key, connectivity, authentication,
/// permission; anything unrecognized passes the raw message through.
pub fn friendly_message(error: &BackendError) -> String {
    let message = error
        .message
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let code = error.code.as_deref().unwrap_or_default();

    if code == "23505" || message.contains("duplicate") || message.contains("unique") {
        if message.contains("lancamentos_data_key") {
            return "Já existe um lançamento para esta data. Use a opção de editar.".to_string();
        }
        if message.contains("prolabore_mes_ano_key") {
            return "Já existe um pró-labore para este mês. Use a opção de editar.".to_string();
        }
        return "Registro duplicado. Tente editar o registro existente.".to_string();
    }

    if message.contains("network") || message.contains("fetch") {
        return "Sem conexão com a internet. Verifique sua conexão e tente novamente.".to_string();
    }

    if code == "PGRST301" || message.contains("jwt") || message.contains("auth") {
        return "Erro de autenticação. Verifique suas credenciais do Supabase.".to_string();
    }

    if message.contains("permission") || message.contains("policy") {
        return "Você não tem permissão para realizar esta operação.".to_string();
    }

    match &error.message {
        Some(raw) if !raw.is_empty() => format!("Erro: {}", raw),
        _ => "Erro ao processar requisição. Tente novamente.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_error(code: Option<&str>, message: &str) -> BackendError {
        BackendError {
            code: code.map(str::to_string),
            message: Some(message.to_string()),
            details: None,
            hint: None,
        }
    }

    #[test]
    fn test_parses_postgrest_error_body() {
        let json = r#"{
            "code": "23505",
            "details": "Key (data)=(2025-01-15) already exists.",
            "hint": null,
            "message": "duplicate key value violates unique constraint \"lancamentos_data_key\""
        }"#;
        let error: BackendError = serde_json::from_str(json).unwrap();
        assert_eq!(error.code.as_deref(), Some("23505"));
        assert_eq!(
            friendly_message(&error),
            "Já existe um lançamento para esta data. Use a opção de editar."
        );
    }

    #[test]
    fn test_duplicate_pro_labore_constraint() {
        let error = backend_error(
            Some("23505"),
            "duplicate key value violates unique constraint \"prolabore_mes_ano_key\"",
        );
        assert_eq!(
            friendly_message(&error),
            "Já existe um pró-labore para este mês. Use a opção de editar."
        );
    }

    #[test]
    fn test_generic_duplicate() {
        let error = backend_error(None, "UNIQUE constraint violated");
        assert_eq!(
            friendly_message(&error),
            "Registro duplicado. Tente editar o registro existente."
        );
    }

    #[test]
    fn test_network_class() {
        let error = backend_error(None, "fetch failed");
        assert!(friendly_message(&error).contains("Sem conexão"));
    }

    #[test]
    fn test_auth_class() {
        let error = backend_error(Some("PGRST301"), "JWT expired");
        assert!(friendly_message(&error).contains("autenticação"));

        let error = backend_error(None, "invalid jwt");
        assert!(friendly_message(&error).contains("autenticação"));
    }

    #[test]
    fn test_permission_class() {
        let error = backend_error(None, "new row violates row-level security policy");
        assert!(friendly_message(&error).contains("permissão"));
    }

    #[test]
    fn test_unclassified_passes_raw_message_through() {
        let error = backend_error(Some("42P01"), "relation \"lancamentos\" does not exist");
        assert_eq!(
            friendly_message(&error),
            "Erro: relation \"lancamentos\" does not exist"
        );
    }

    #[test]
    fn test_empty_error() {
        let error = BackendError::default();
        assert_eq!(
            friendly_message(&error),
            "Erro ao processar requisição. Tente novamente."
        );
    }
}
