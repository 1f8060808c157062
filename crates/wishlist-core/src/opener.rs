//! Opening affiliate links with the platform URL handler.

use std::io;

use crate::rewriter::LinkRewriter;

/// Platform capability that can open URLs (browser, default handler).
pub trait UrlHandler {
    /// Whether `url` would be accepted by [`open`](Self::open).
    fn can_open(&self, url: &str) -> bool;

    fn open(&self, url: &str) -> io::Result<()>;
}

/// Default handler: `http`/`https` URLs, launched via the desktop's opener.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlHandler;

impl UrlHandler for SystemUrlHandler {
    fn can_open(&self, url: &str) -> bool {
        match url::Url::parse(url) {
            Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some(),
            Err(_) => false,
        }
    }

    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("cannot open link: {url}")]
    Unsupported { url: String },
    #[error("failed to launch handler for {url}")]
    Launch {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Rewrites links and hands them to a [`UrlHandler`].
#[derive(Debug, Clone)]
pub struct LinkOpener<H> {
    rewriter: LinkRewriter,
    handler: H,
}

impl<H: UrlHandler> LinkOpener<H> {
    pub fn new(rewriter: LinkRewriter, handler: H) -> Self {
        Self { rewriter, handler }
    }

    /// Open the affiliate form of `url`. Returns the URL that was opened.
    pub fn open(&self, url: &str) -> Result<String, OpenError> {
        let target = self.rewriter.rewrite(url);
        if !self.handler.can_open(&target) {
            tracing::info!(url = %target, "no handler for link");
            return Err(OpenError::Unsupported { url: target });
        }
        self.handler
            .open(&target)
            .map_err(|source| OpenError::Launch {
                url: target.clone(),
                source,
            })?;
        tracing::debug!(url = %target, "link opened");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records opened URLs; accepts anything starting with `accept_prefix`.
    struct RecordingHandler {
        accept_prefix: &'static str,
        fail: bool,
        opened: RefCell<Vec<String>>,
    }

    impl RecordingHandler {
        fn accepting(accept_prefix: &'static str) -> Self {
            Self {
                accept_prefix,
                fail: false,
                opened: RefCell::new(Vec::new()),
            }
        }
    }

    impl UrlHandler for RecordingHandler {
        fn can_open(&self, url: &str) -> bool {
            url.starts_with(self.accept_prefix)
        }

        fn open(&self, url: &str) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no opener"));
            }
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn opens_rewritten_url() {
        let opener = LinkOpener::new(LinkRewriter::default(), RecordingHandler::accepting("https://"));
        let opened = opener.open("https://ozon.ru/product/123").unwrap();
        assert_eq!(
            opened,
            "https://www.ozon.ru/referral/?code=YOUR_REAL_CODE&url=https%3A%2F%2Fozon.ru%2Fproduct%2F123"
        );
        assert_eq!(*opener.handler.opened.borrow(), vec![opened]);
    }

    #[test]
    fn unsupported_url_is_reported_and_not_opened() {
        let opener = LinkOpener::new(LinkRewriter::default(), RecordingHandler::accepting("https://"));
        match opener.open("ftp://example.com/file") {
            Err(OpenError::Unsupported { url }) => assert_eq!(url, "ftp://example.com/file"),
            other => panic!("expected Unsupported, got {other:?}"),
        }
        assert!(opener.handler.opened.borrow().is_empty());
    }

    #[test]
    fn launch_failure_is_reported() {
        let handler = RecordingHandler {
            accept_prefix: "https://",
            fail: true,
            opened: RefCell::new(Vec::new()),
        };
        let opener = LinkOpener::new(LinkRewriter::default(), handler);
        assert!(matches!(
            opener.open("https://example.com"),
            Err(OpenError::Launch { .. })
        ));
    }

    #[test]
    fn system_handler_accepts_only_web_urls() {
        let h = SystemUrlHandler;
        assert!(h.can_open("https://www.ozon.ru/referral/?code=X&url=https%3A%2F%2Fozon.ru"));
        assert!(h.can_open("http://example.com"));
        assert!(!h.can_open("ftp://example.com"));
        assert!(!h.can_open("javascript:alert(1)"));
        assert!(!h.can_open("not a url"));
        assert!(!h.can_open(""));
    }
}
