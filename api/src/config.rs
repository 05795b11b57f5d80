use std::env;

use crate::domain::entities::DeletePolicy;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// What DELETE /courses/:id does with enrolled participants
    pub course_delete_policy: DeletePolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Invalid PORT '{}', using 8080", raw);
                8080
            }),
            None => 8080,
        };

        let course_delete_policy = match var("COURSE_DELETE_POLICY") {
            Some(raw) => raw.parse::<DeletePolicy>().unwrap_or_else(|e| {
                tracing::warn!("{}, using '{}'", e, DeletePolicy::default());
                DeletePolicy::default()
            }),
            None => DeletePolicy::default(),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            course_delete_policy,
        }
    }

    /// Address the server listens on
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_with(&[]);
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.course_delete_policy, DeletePolicy::Reject);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_with(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("COURSE_DELETE_POLICY", "cascade"),
        ]);
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.course_delete_policy, DeletePolicy::Cascade);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = config_with(&[("PORT", "eighty"), ("COURSE_DELETE_POLICY", "nuke")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.course_delete_policy, DeletePolicy::Reject);
    }
}
