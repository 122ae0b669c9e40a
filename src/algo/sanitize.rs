use serde::Deserialize;
use serde_json::{Map, Value};

use super::keys::is_campaign_key;
use super::param_string::ParamMap;

/// Value normalization applied by [`sanitize_params`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SanitizeOptions {
    /// Strip leading and trailing whitespace from each value.
    pub trim: bool,
    /// Drop values that are empty (after trimming, if enabled).
    pub remove_blanks: bool,
}

/// Keep only recognized campaign keys holding string values.
///
/// Non-string values are dropped even for recognized keys. Output order
/// follows the input.
pub fn sanitize_params(all_params: &Map<String, Value>, options: &SanitizeOptions) -> ParamMap {
    all_params
        .iter()
        .filter(|(key, _)| is_campaign_key(key))
        .filter_map(|(key, value)| {
            let text = value.as_str()?;
            let text = if options.trim { text.trim() } else { text };
            if options.remove_blanks && text.is_empty() {
                return None;
            }
            Some((key.clone(), text.to_string()))
        })
        .collect()
}
