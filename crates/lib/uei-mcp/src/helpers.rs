use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;
use tracing::warn;
use uei_core::error::MarketError;

pub fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

pub fn map_err(err: MarketError) -> ErrorData {
    warn!(provider = ?err.provider(), error = %err, "market lookup failed");
    let code = match err {
        MarketError::UnsupportedTenor(_) => ErrorCode::INVALID_PARAMS,
        _ => ErrorCode::INTERNAL_ERROR,
    };
    mcp_err(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_tenor_is_invalid_params() {
        let err = map_err(MarketError::UnsupportedTenor(3));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert!(err.message.contains('3'));
    }
}
