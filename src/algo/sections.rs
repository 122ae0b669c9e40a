/// A URL split into the parts this crate cares about.
///
/// `query` and `fragment` exclude their delimiters. `None` means the delimiter
/// was absent; `Some("")` means it was present with nothing after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlSections<'a> {
    pub prefix: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> UrlSections<'a> {
    /// Split at the first `#`, then at the first `?` before it.
    ///
    /// A `?` inside the fragment belongs to the fragment.
    pub fn split(url: &'a str) -> Self {
        let (head, fragment) = match url.split_once('#') {
            Some((head, fragment)) => (head, Some(fragment)),
            None => (url, None),
        };
        let (prefix, query) = match head.split_once('?') {
            Some((prefix, query)) => (prefix, Some(query)),
            None => (head, None),
        };
        Self {
            prefix,
            query,
            fragment,
        }
    }
}

/// Concatenate prefix and sections, emitting a delimiter for every `Some`.
pub fn assemble(prefix: &str, query: Option<&str>, fragment: Option<&str>) -> String {
    let mut out = String::with_capacity(
        prefix.len() + query.map_or(0, |q| q.len() + 1) + fragment.map_or(0, |f| f.len() + 1),
    );
    out.push_str(prefix);
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}
