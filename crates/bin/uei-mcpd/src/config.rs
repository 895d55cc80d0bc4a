use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use uei_core::config::{
    Credentials,
    DEFAULT_ALPHAVANTAGE_BASE_URL,
    DEFAULT_BRAPI_BASE_URL,
    DEFAULT_FRED_BASE_URL,
    MarketConfig,
    ProviderEndpoints,
};
use uei_mcp::DEFAULT_SERVER_NAME;
use uei_mcp::server::McpHttpServerConfig;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug)]
#[command(name = "uei-mcpd", version, about = "United Exchange Investments MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "BRAPI_TOKEN", default_value = "", hide_env_values = true)]
    brapi_token: String,

    #[arg(long, env = "ALPHAVANTAGE_API_KEY", default_value = "", hide_env_values = true)]
    alphavantage_api_key: String,

    #[arg(long, env = "FRED_API_KEY", default_value = "", hide_env_values = true)]
    fred_api_key: String,

    #[arg(long, env = "UEI_BRAPI_BASE_URL", default_value = DEFAULT_BRAPI_BASE_URL)]
    brapi_base_url: String,

    #[arg(long, env = "UEI_ALPHAVANTAGE_BASE_URL", default_value = DEFAULT_ALPHAVANTAGE_BASE_URL)]
    alphavantage_base_url: String,

    #[arg(long, env = "UEI_FRED_BASE_URL", default_value = DEFAULT_FRED_BASE_URL)]
    fred_base_url: String,

    #[arg(
        long,
        env = "UEI_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS
    )]
    request_timeout_secs: u64,

    #[arg(long, env = "UEI_SERVER_NAME", default_value = DEFAULT_SERVER_NAME)]
    server_name: String,

    #[arg(long, env = "UEI_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long = "stdio",
        env = "UEI_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "UEI_STATELESS_HTTP",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    stateless: bool,

    #[arg(
        long,
        env = "UEI_JSON_RESPONSE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    json_response: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct UeiConfig {
    pub market: MarketConfig,
    pub server_name: String,
    pub http: McpHttpServerConfig,
    pub enable_stdio: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl UeiConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for UeiConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let endpoints = ProviderEndpoints::parse(
            &args.brapi_base_url,
            &args.alphavantage_base_url,
            &args.fred_base_url,
        )
        .map_err(|err| ConfigError::InvalidSetting {
            name: "provider base URL",
            value: err.to_string(),
        })?;

        if args.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "UEI_REQUEST_TIMEOUT_SECS",
                value: args.request_timeout_secs.to_string(),
            });
        }

        let server_name = args.server_name.trim().to_string();
        if server_name.is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "UEI_SERVER_NAME",
                value: args.server_name,
            });
        }

        let credentials = Credentials::new(
            args.brapi_token.trim(),
            args.alphavantage_api_key.trim(),
            args.fred_api_key.trim(),
        );
        let market = MarketConfig::new(credentials)
            .with_endpoints(endpoints)
            .with_request_timeout(Duration::from_secs(args.request_timeout_secs));

        let http = McpHttpServerConfig::new(args.http_addr)
            .with_stateful_mode(!args.stateless)
            .with_json_response(args.json_response);

        Ok(Self {
            market,
            server_name,
            http,
            enable_stdio: args.enable_stdio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            brapi_token: String::new(),
            alphavantage_api_key: String::new(),
            fred_api_key: String::new(),
            brapi_base_url: DEFAULT_BRAPI_BASE_URL.to_string(),
            alphavantage_base_url: DEFAULT_ALPHAVANTAGE_BASE_URL.to_string(),
            fred_base_url: DEFAULT_FRED_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            server_name: DEFAULT_SERVER_NAME.to_string(),
            http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            enable_stdio: false,
            stateless: true,
            json_response: true,
        }
    }

    #[test]
    fn defaults_are_stateless_json_with_empty_credentials() {
        let config = UeiConfig::try_from(base_args()).expect("config should parse");

        assert_eq!(config.market.credentials, Credentials::default());
        assert_eq!(config.market.request_timeout, Duration::from_secs(30));
        assert_eq!(config.server_name, "united-exchange-investments");
        assert!(!config.http.stateful_mode);
        assert!(config.http.json_response);
        assert!(!config.enable_stdio);
    }

    #[test]
    fn stateful_flag_inverts_stateless() {
        let mut args = base_args();
        args.stateless = false;
        args.brapi_token = " token ".to_string();

        let config = UeiConfig::try_from(args).expect("config should parse");

        assert!(config.http.stateful_mode);
        assert_eq!(config.market.credentials.brapi_token, "token");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let mut args = base_args();
        args.fred_base_url = "stlouisfed".to_string();

        assert!(matches!(
            UeiConfig::try_from(args),
            Err(ConfigError::InvalidSetting { name: "provider base URL", .. })
        ));
    }

    #[test]
    fn rejects_zero_timeout_and_blank_name() {
        let mut args = base_args();
        args.request_timeout_secs = 0;
        assert!(UeiConfig::try_from(args).is_err());

        let mut args = base_args();
        args.server_name = "   ".to_string();
        assert!(UeiConfig::try_from(args).is_err());
    }
}
