//! Affiliate link rewriting.
//!
//! Maps a product URL to a partner-tracked URL using an ordered
//! domain → prefix table:
//! - the first partner whose domain occurs anywhere in the URL wins
//! - the whole original URL is percent-encoded and appended to the prefix
//! - URLs matching no partner are returned unchanged
//!
//! Matching is a plain substring test, so a domain mentioned only in a query
//! parameter also matches.
//!
//! Encoding covers every RFC 3986 reserved character, including the
//! sub-delims `! * ' ( )`, which a browser's `encodeURIComponent` leaves
//! as-is. Links produced here can therefore differ byte-for-byte from links
//! built that way when the product URL contains those characters.

mod encode;
mod partner;

pub use encode::encode_component;
pub use partner::{default_partners, Partner};

/// Rewrites product URLs into affiliate URLs. Holds no state besides the table.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    partners: Vec<Partner>,
}

impl Default for LinkRewriter {
    fn default() -> Self {
        Self::new(default_partners())
    }
}

impl LinkRewriter {
    /// Build a rewriter over `partners`, in priority order.
    pub fn new(partners: Vec<Partner>) -> Self {
        Self { partners }
    }

    /// The partner that would be applied to `url`, if any.
    pub fn matching_partner(&self, url: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.matches(url))
    }

    /// Rewrite `url` into its affiliate form; identity when no partner matches.
    ///
    /// # Examples
    ///
    /// - `"https://ozon.ru/product/123"` →
    ///   `"https://www.ozon.ru/referral/?code=YOUR_REAL_CODE&url=https%3A%2F%2Fozon.ru%2Fproduct%2F123"`
    /// - `"https://example.com/x"` → `"https://example.com/x"`
    pub fn rewrite(&self, url: &str) -> String {
        match self.matching_partner(url) {
            Some(partner) => format!("{}{}", partner.prefix, encode_component(url)),
            None => url.to_string(),
        }
    }
}
