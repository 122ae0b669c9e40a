use serde::Serialize;

use super::keys::is_campaign_key;
use super::param_string::{self, ParamMap, SectionMap};
use super::sections::{assemble, UrlSections};

/// A URL with its campaign parameters taken out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedParams {
    pub bare_url: String,
    pub params: ParamMap,
}

/// Split `url` into a bare URL and its campaign parameters.
///
/// Both the query and the fragment are scanned. When a key appears in both,
/// the fragment value wins; key order follows first sight across query then
/// fragment. A section left empty after stripping loses its delimiter.
pub fn extract_params_from_website_url(url: &str) -> ExtractedParams {
    let sections = UrlSections::split(url);
    let mut query = param_string::parse(sections.query.unwrap_or(""));
    let mut fragment = param_string::parse(sections.fragment.unwrap_or(""));

    let mut params = ParamMap::new();
    take_campaign_params(&mut query, &mut params);
    take_campaign_params(&mut fragment, &mut params);

    let query = non_empty(param_string::serialize(&query));
    let fragment = non_empty(param_string::serialize(&fragment));
    let bare_url = assemble(sections.prefix, query.as_deref(), fragment.as_deref());

    log::trace!("extracted {} campaign params from {url}", params.len());

    ExtractedParams { bare_url, params }
}

/// Move campaign entries out of `section` into `params`, keeping the order of
/// what remains.
fn take_campaign_params(section: &mut SectionMap, params: &mut ParamMap) {
    section.retain(|key, value| {
        if is_campaign_key(key) {
            params.insert(key.clone(), value.take().unwrap_or_default());
            false
        } else {
            true
        }
    });
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
