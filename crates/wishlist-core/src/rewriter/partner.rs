use serde::{Deserialize, Serialize};

/// One affiliate partner: any URL containing `domain` is routed through `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub domain: String,
    pub prefix: String,
}

impl Partner {
    pub fn new(domain: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            prefix: prefix.into(),
        }
    }

    /// Plain substring test, not anchored to the host.
    pub fn matches(&self, url: &str) -> bool {
        !self.domain.is_empty() && url.contains(self.domain.as_str())
    }
}

/// Built-in partner table, in match priority order. The codes are placeholders
/// until real partner-cabinet values are configured.
pub fn default_partners() -> Vec<Partner> {
    vec![
        Partner::new(
            "ozon.ru",
            "https://www.ozon.ru/referral/?code=YOUR_REAL_CODE&url=",
        ),
        Partner::new("wildberries.ru", "https://ad.admitad.com/g/YOUR_ID/?ulp="),
        Partner::new(
            "aliexpress.com",
            "https://s.click.aliexpress.com/deep_link/YOUR_ID?url=",
        ),
        Partner::new("market.yandex.ru", "https://ya.cc/YOUR_ID?url="),
    ]
}
