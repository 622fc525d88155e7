use std::env;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Identity of the running function, as reported by the Lambda environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub function_name: Option<String>,
    pub function_version: String,
}

impl RuntimeInfo {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the info from any variable source; `from_env` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME"),
            function_version: lookup("AWS_LAMBDA_FUNCTION_VERSION")
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }

    pub fn is_lambda(&self) -> bool {
        self.function_name.is_some()
    }
}

/// Tracing filter directive, taken from RUST_LOG when set.
pub fn log_filter() -> String {
    log_filter_from(env::var("RUST_LOG").ok())
}

fn log_filter_from(rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}
