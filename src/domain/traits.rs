pub trait HostExtractor {
    /// Authority component of `url` (userinfo, host, port), or an empty string.
    fn host(&self, url: &str) -> String;
}

pub trait MarkupEscaper {
    fn escape(&self, text: &str) -> String;
}
