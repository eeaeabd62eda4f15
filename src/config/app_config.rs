#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub tax_id_max_input_length: usize,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unparseable values fall
    /// back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "8081".to_string())
                .parse()
                .unwrap_or(8081),
            tax_id_max_input_length: lookup("TAX_ID_MAX_INPUT_LENGTH")
                .unwrap_or_else(|| "64".to_string())
                .parse()
                .unwrap_or(64),
            log_format: match lookup("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Compact,
            },
        }
    }
}
