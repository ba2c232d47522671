use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the client.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Resolve endpoints against the origin of the page that loaded us.
    #[default]
    SameOrigin,
    /// Local development API server.
    Local,
    /// An explicitly supplied API base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Returns the API base URL associated with the environment.
    ///
    /// `SameOrigin` yields an empty base, so endpoint paths stay relative and
    /// the transport resolves them against the page origin.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::SameOrigin => String::new(),
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "same-origin" => Ok(Environment::SameOrigin),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::SameOrigin => write!(f, "SameOrigin"),
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_environments() {
        assert_eq!(
            "same-origin".parse::<Environment>(),
            Ok(Environment::SameOrigin)
        );
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("production".parse::<Environment>(), Err(()));
    }

    #[test]
    fn test_base_urls() {
        assert_eq!(Environment::SameOrigin.api_base_url(), "");
        assert_eq!(Environment::Local.api_base_url(), "http://localhost:8000");
        let custom = Environment::Custom {
            api_base_url: "https://laz.example".to_string(),
        };
        assert_eq!(custom.api_base_url(), "https://laz.example");
    }
}
