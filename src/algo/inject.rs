use super::param_string::{self, ParamMap};
use super::sections::{assemble, UrlSections};

/// Add `campaign_params` to the query of `bare_url`, or to its fragment when
/// `use_fragment` is set.
///
/// Only the target section is re-serialized; the other one is copied through
/// as written. Existing keys are overwritten in place and new keys appended.
/// With no params the input comes back unchanged.
pub fn add_params_to_url(bare_url: &str, campaign_params: &ParamMap, use_fragment: bool) -> String {
    if campaign_params.is_empty() {
        return bare_url.to_string();
    }

    let sections = UrlSections::split(bare_url);
    let target = if use_fragment {
        sections.fragment
    } else {
        sections.query
    };

    let mut map = param_string::parse(target.unwrap_or(""));
    for (key, value) in campaign_params {
        map.insert(key.clone(), Some(value.clone()));
    }
    let updated = param_string::serialize(&map);

    log::trace!(
        "appended {} params to {} of {bare_url}",
        campaign_params.len(),
        if use_fragment { "fragment" } else { "query" }
    );

    if use_fragment {
        assemble(sections.prefix, sections.query, Some(&updated))
    } else {
        assemble(sections.prefix, Some(&updated), sections.fragment)
    }
}
