use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Missing required connection parameters")]
    MissingParameters,
    #[error("Connection timed out (5432)")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDetails {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub ssl: bool,
    #[serde(default)]
    pub is_demo: bool,
}

impl ConnectionDetails {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            database: Some(database.into()),
            user: Some(user.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn demo() -> Self {
        Self {
            is_demo: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }

    #[must_use]
    pub fn has_required_parameters(&self) -> bool {
        fn present(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|value| !value.is_empty())
        }

        present(&self.host) && present(&self.user) && present(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConnectionDetails, ConnectionError};

    #[test]
    fn required_parameters_are_host_user_and_database() {
        let details = ConnectionDetails::new("localhost", "app", "admin");
        assert!(details.has_required_parameters());

        let mut missing_host = details.clone();
        missing_host.host = None;
        assert!(!missing_host.has_required_parameters());

        let mut blank_host = details.clone();
        blank_host.host = Some(String::new());
        assert!(!blank_host.has_required_parameters());

        let mut missing_database = details;
        missing_database.database = None;
        assert!(!missing_database.has_required_parameters());
    }

    #[test]
    fn port_and_password_are_not_required() {
        let details = ConnectionDetails::new("localhost", "app", "admin");
        assert!(details.port.is_none());
        assert!(details.password.is_none());
        assert!(details.has_required_parameters());
    }

    #[test]
    fn demo_details_skip_every_other_field() {
        let details = ConnectionDetails::demo();
        assert!(details.is_demo);
        assert!(!details.has_required_parameters());
    }

    #[test]
    fn errors_carry_user_facing_messages() {
        assert_eq!(
            ConnectionError::MissingParameters.to_string(),
            "Missing required connection parameters"
        );
        assert_eq!(
            ConnectionError::Timeout.to_string(),
            "Connection timed out (5432)"
        );
    }
}
