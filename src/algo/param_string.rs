use indexmap::IndexMap;

/// Ordered key/value mapping of campaign parameters.
pub type ParamMap = IndexMap<String, String>;

/// Ordered mapping of one URL section. `None` marks a token written without
/// `=` (e.g. `#heading`), which serializes back as the bare key.
pub type SectionMap = IndexMap<String, Option<String>>;

/// Parse a `key=value&key=value` section (content after `?` or `#`).
///
/// Keys and values are kept raw. A repeated key overwrites the earlier value
/// but keeps the position of its first occurrence.
pub fn parse(section: &str) -> SectionMap {
    let mut map = SectionMap::new();
    if section.is_empty() {
        return map;
    }
    for token in section.split('&') {
        match token.split_once('=') {
            Some((key, value)) => map.insert(key.to_string(), Some(value.to_string())),
            None => map.insert(token.to_string(), None),
        };
    }
    map
}

/// Serialize a section mapping back to `key=value&...` form in mapping order.
pub fn serialize(map: &SectionMap) -> String {
    map.iter()
        .map(|(k, v)| match v {
            Some(v) => format!("{k}={v}"),
            None => k.clone(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
