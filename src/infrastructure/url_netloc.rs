use crate::domain::traits::HostExtractor;
use url::Url;

/// Host suffix exactly as written in the bookmark.
///
/// The URL parser only decides whether an authority exists; the text itself
/// is cut from the raw string so case, IDN hosts and explicit ports survive.
pub struct DefaultHostExtractor;

impl HostExtractor for DefaultHostExtractor {
    fn host(&self, url: &str) -> String {
        match Url::parse(url) {
            Ok(parsed) if !parsed.has_authority() => String::new(),
            _ => split_authority(url.trim()).to_string(),
        }
    }
}

/// Text between `scheme://` (or a leading `//`) and the first `/`, `?` or `#`.
fn split_authority(raw: &str) -> &str {
    let rest = match raw.split_once("://") {
        Some((_scheme, rest)) => rest,
        None => match raw.strip_prefix("//") {
            Some(rest) => rest,
            None => return "",
        },
    };

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    &rest[..end]
}
