use crate::summary::SummaryPolicy;
use dotenvy::dotenv;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub data_dir: String,
    pub save_debounce_ms: u64,
    pub summary_policy: SummaryPolicy,

    // Rate limiting
    pub rate_api_per_min: u32,

    pub api_prefix: String,

    // Assistant proxy upstream; the endpoint answers 500 while these are unset.
    pub assistant_upstream_url: Option<String>,
    pub assistant_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            save_debounce_ms: env::var("SAVE_DEBOUNCE_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("SAVE_DEBOUNCE_MS must be an integer"),
            summary_policy: match env::var("SUMMARY_POLICY").as_deref() {
                Ok("calendar-complete") | Err(_) => SummaryPolicy::CalendarComplete,
                Ok("sparse-filter") => SummaryPolicy::SparseFilter,
                Ok(other) => {
                    panic!("SUMMARY_POLICY must be calendar-complete or sparse-filter, got {other}")
                }
            },

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .expect("RATE_API_PER_MIN must be an integer"),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api/v1".to_string()),

            assistant_upstream_url: env::var("ASSISTANT_UPSTREAM_URL").ok(),
            assistant_api_key: env::var("ASSISTANT_API_KEY").ok(),
        }
    }
}
