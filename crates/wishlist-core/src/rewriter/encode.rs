/// Percent-encode a whole URL so it can sit in a query value.
///
/// Everything outside `A-Z a-z 0-9 - . _ ~` is encoded as UTF-8 bytes,
/// including `/`, `:`, `?`, `&`, `=` and `#`.
pub fn encode_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}
