//! `wishlist rewrite <url>` – print the affiliate form of a URL.

use wishlist_core::rewriter::LinkRewriter;

use crate::cli::App;

pub fn run_rewrite(app: &App, url: &str, explain: bool) {
    if explain {
        println!("{}", explain_rewrite(&app.rewriter, url));
    }
    println!("{}", app.rewriter.rewrite(url));
}

/// One-line note naming the partner that applies to `url`.
pub fn explain_rewrite(rewriter: &LinkRewriter, url: &str) -> String {
    match rewriter.matching_partner(url) {
        Some(p) => format!("partner: {} (prefix {})", p.domain, p.prefix),
        None => "partner: none (URL left unchanged)".to_string(),
    }
}
