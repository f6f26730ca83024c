// Bidding settings loaded from the system_settings table.
//
// Settings are read per operation so admin changes apply without a
// restart. Unknown or unparsable rows fall back to the defaults.

use crate::error::ApiResult;
use crate::handlers::AppState;

/// Effective bidding parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiddingSettings {
    pub bidding_enabled: bool,
    pub bid_duration_hours: i64,
    pub offer_min_increment: i64,
    pub min_salary: i64,
    pub max_salary: i64,
}

impl Default for BiddingSettings {
    fn default() -> Self {
        BiddingSettings {
            bidding_enabled: true,
            bid_duration_hours: 4,
            offer_min_increment: 250_000,
            min_salary: 500_000,
            max_salary: 20_000_000,
        }
    }
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value {
        "true" | "1" => true,
        "false" | "0" => false,
        _ => default,
    }
}

/// Load the effective bidding settings, applying defaults for missing keys
pub async fn load_bidding_settings(state: &AppState) -> ApiResult<BiddingSettings> {
    let mut settings = BiddingSettings::default();

    for row in state.repositories.settings.get_all().await? {
        match row.key.as_str() {
            "bidding_enabled" => {
                settings.bidding_enabled = parse_bool(&row.value, settings.bidding_enabled);
            }
            "bid_duration_hours" => {
                settings.bid_duration_hours =
                    row.value.parse().unwrap_or(settings.bid_duration_hours);
            }
            "offer_min_increment" => {
                settings.offer_min_increment =
                    row.value.parse().unwrap_or(settings.offer_min_increment);
            }
            "min_salary" => {
                settings.min_salary = row.value.parse().unwrap_or(settings.min_salary);
            }
            "max_salary" => {
                settings.max_salary = row.value.parse().unwrap_or(settings.max_salary);
            }
            _ => {}
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_parsing_falls_back_to_the_default() {
        assert!(parse_bool("true", false));
        assert!(parse_bool("1", false));
        assert!(!parse_bool("false", true));
        assert!(!parse_bool("0", true));
        assert!(parse_bool("yes?", true));
    }
}
