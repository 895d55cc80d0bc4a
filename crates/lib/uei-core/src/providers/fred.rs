//! FRED series observations (US Treasury constant-maturity yields).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MarketError, MarketResult, Provider};

/// Treasury maturities with a FRED constant-maturity series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tenor {
    TwoYear,
    FiveYear,
    TenYear,
    ThirtyYear,
}

impl Tenor {
    /// FRED series id for the tenor.
    #[must_use]
    pub const fn series_id(self) -> &'static str {
        match self {
            Self::TwoYear => "DGS2",
            Self::FiveYear => "DGS5",
            Self::TenYear => "DGS10",
            Self::ThirtyYear => "DGS30",
        }
    }
}

impl TryFrom<i64> for Tenor {
    type Error = MarketError;

    fn try_from(years: i64) -> Result<Self, Self::Error> {
        match years {
            2 => Ok(Self::TwoYear),
            5 => Ok(Self::FiveYear),
            10 => Ok(Self::TenYear),
            30 => Ok(Self::ThirtyYear),
            other => Err(MarketError::UnsupportedTenor(other)),
        }
    }
}

/// Body of `GET /fred/series/observations?file_type=json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservationsResponse {
    #[serde(default)]
    pub observations: Vec<TreasuryObservation>,
}

/// A single observation, passed through with every provider key intact.
///
/// FRED reports missing values as `"."`; that sentinel is not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryObservation {
    pub date: String,
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObservationsResponse {
    /// # Errors
    /// Returns [`MarketError::MissingData`] when there are no observations.
    pub fn into_latest(self) -> MarketResult<TreasuryObservation> {
        self.observations
            .into_iter()
            .next_back()
            .ok_or_else(|| MarketError::missing(Provider::Fred, "observations"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tenor_maps_to_series() {
        let ids: Vec<_> = [2, 5, 10, 30]
            .into_iter()
            .map(|years| Tenor::try_from(years).map(Tenor::series_id))
            .collect::<Result<_, _>>()
            .expect("supported tenors");
        assert_eq!(ids, ["DGS2", "DGS5", "DGS10", "DGS30"]);
    }

    #[test]
    fn unsupported_tenor_is_rejected() {
        for years in [0, 1, 3, 7, 20, -10] {
            assert!(matches!(
                Tenor::try_from(years),
                Err(MarketError::UnsupportedTenor(value)) if value == years
            ));
        }
    }

    #[test]
    fn last_observation_passes_through() {
        let body = json!({
            "realtime_start": "2024-01-11",
            "count": 2,
            "observations": [
                {
                    "realtime_start": "2024-01-11",
                    "realtime_end": "2024-01-11",
                    "date": "2024-01-09",
                    "value": "4.02"
                },
                {
                    "realtime_start": "2024-01-11",
                    "realtime_end": "2024-01-11",
                    "date": "2024-01-10",
                    "value": "."
                }
            ]
        });
        let response: ObservationsResponse = serde_json::from_value(body).expect("decode");
        let latest = response.into_latest().expect("observation");
        assert_eq!(
            serde_json::to_value(latest).expect("encode"),
            json!({
                "realtime_start": "2024-01-11",
                "realtime_end": "2024-01-11",
                "date": "2024-01-10",
                "value": "."
            })
        );
    }

    #[test]
    fn no_observations_is_missing_data() {
        let response: ObservationsResponse =
            serde_json::from_value(json!({ "observations": [] })).expect("decode");
        assert!(matches!(
            response.into_latest(),
            Err(MarketError::MissingData { provider: Provider::Fred, .. })
        ));
    }
}
