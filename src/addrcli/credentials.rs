use std::env;

pub const AUTH_ID_VAR: &str = "SMARTY_AUTH_ID";
pub const AUTH_TOKEN_VAR: &str = "SMARTY_AUTH_TOKEN";

/// API credential pair, from flags or the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub auth_id: String,
    pub auth_token: String,
}

impl Credentials {
    /// Flag values win. When no id flag was given and the environment
    /// carries one, both id and token come from the environment — the
    /// pair is never mixed across origins.
    pub fn resolve(auth_id: &str, auth_token: &str) -> Self {
        Self::pick(
            auth_id,
            auth_token,
            env::var(AUTH_ID_VAR).ok().as_deref(),
            &env::var(AUTH_TOKEN_VAR).unwrap_or_default(),
        )
    }

    fn pick(auth_id: &str, auth_token: &str, env_id: Option<&str>, env_token: &str) -> Self {
        match env_id {
            Some(env_id) if auth_id.is_empty() => Self {
                auth_id: env_id.to_string(),
                auth_token: env_token.to_string(),
            },
            _ => Self {
                auth_id: auth_id.to_string(),
                auth_token: auth_token.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values_win_over_environment() {
        let creds = Credentials::pick("flag-id", "flag-token", Some("env-id"), "env-token");
        assert_eq!(creds.auth_id, "flag-id");
        assert_eq!(creds.auth_token, "flag-token");
    }

    #[test]
    fn environment_fills_in_when_id_flag_is_absent() {
        let creds = Credentials::pick("", "", Some("env-id"), "env-token");
        assert_eq!(creds.auth_id, "env-id");
        assert_eq!(creds.auth_token, "env-token");
    }

    #[test]
    fn environment_pair_replaces_a_lone_token_flag() {
        // With no id flag, the env pair wins wholesale; the token flag
        // is not mixed in.
        let creds = Credentials::pick("", "flag-token", Some("env-id"), "env-token");
        assert_eq!(creds.auth_token, "env-token");
    }

    #[test]
    fn empty_everything_stays_empty() {
        let creds = Credentials::pick("", "", None, "");
        assert_eq!(creds, Credentials::default());
    }
}
