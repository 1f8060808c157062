//! Share message composition.
//!
//! Produces the plain-text payload handed to a share surface: a header, one
//! numbered block per item carrying its affiliate link, and a signature.

use crate::item::WishItem;
use crate::rewriter::LinkRewriter;

const HEADER: &str = "🎉 Мой Вишлист (что подарить мне на ДР):";
const SIGNATURE: &str = "Сгенерировано в приложении WishList";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("wishlist is empty; add some wishes first")]
    EmptyList,
}

/// Build the share message for `items` in their store order.
pub fn compose(items: &[WishItem], rewriter: &LinkRewriter) -> Result<String, ShareError> {
    if items.is_empty() {
        return Err(ShareError::EmptyList);
    }

    let mut message = format!("{HEADER}\n\n");
    for (index, item) in items.iter().enumerate() {
        let link = rewriter.rewrite(&item.url);
        message.push_str(&format!("{}. {}\n", index + 1, item.title));
        message.push_str(&format!("💰 {}\n", item.price));
        message.push_str(&format!("👉 Ссылка: {link}\n\n"));
    }
    message.push_str(SIGNATURE);
    Ok(message)
}
