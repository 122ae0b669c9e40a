//! Shared operation wrappers over the `algo` modules.
//!
//! Each `op_*` function is a pure, synchronous wrapper. Input and output are
//! `serde_json::Value` so callers never need the crate's own types.

use rayon::prelude::*;
use serde_json::{json, Map, Value};

use crate::algo::{extract, inject, keys, param_string::ParamMap, sanitize};
use crate::error::ParamsError;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "bool",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Null => "null",
    }
}

fn as_object<'a>(v: &'a Value, field: &'static str) -> Result<&'a Map<String, Value>, ParamsError> {
    v.as_object().ok_or(ParamsError::NotAnObject {
        field,
        found: type_name(v),
    })
}

fn param_map_to_json(params: &ParamMap) -> Value {
    Value::Object(
        params
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect(),
    )
}

// ── Operations ───────────────────────────────────────────────────────────────

/// `{"bareUrl": ..., "params": {...}}` for one URL.
pub fn op_extract(url: &str) -> Value {
    let extracted = extract::extract_params_from_website_url(url);
    json!({
        "bareUrl": extracted.bare_url,
        "params": param_map_to_json(&extracted.params),
    })
}

/// [`op_extract`] over many URLs in parallel. Output order matches input.
pub fn op_extract_many(urls: &[String]) -> Value {
    log::debug!("extracting campaign params from {} urls", urls.len());
    let results: Vec<Value> = urls.par_iter().map(|u| op_extract(u)).collect();
    Value::Array(results)
}

/// `{"url": ...}` with `params` appended to the query (or fragment).
///
/// `params` must be an object of strings; `null` means nothing to add.
pub fn op_add_params(bare_url: &str, params: &Value, use_fragment: bool) -> Result<Value, ParamsError> {
    let mut campaign = ParamMap::new();
    if !params.is_null() {
        for (key, value) in as_object(params, "params")? {
            let text = value
                .as_str()
                .ok_or_else(|| ParamsError::NonStringValue { key: key.clone() })?;
            campaign.insert(key.clone(), text.to_string());
        }
    }

    log::debug!(
        "adding {} params (use_fragment={use_fragment})",
        campaign.len()
    );
    let url = inject::add_params_to_url(bare_url, &campaign, use_fragment);
    Ok(json!({ "url": url }))
}

/// Sanitized copy of `params`. `options` may be `null` for defaults.
pub fn op_sanitize(params: &Value, options: &Value) -> Result<Value, ParamsError> {
    let all = as_object(params, "params")?;
    let options: sanitize::SanitizeOptions = if options.is_null() {
        sanitize::SanitizeOptions::default()
    } else {
        as_object(options, "options")?;
        serde_json::from_value(options.clone())?
    };

    let kept = sanitize::sanitize_params(all, &options);
    log::debug!("sanitize kept {} of {} params", kept.len(), all.len());
    Ok(param_map_to_json(&kept))
}

/// The recognized campaign keys as a JSON array.
pub fn op_campaign_keys() -> Value {
    Value::Array(
        keys::CAMPAIGN_KEYS
            .iter()
            .map(|k| Value::String(k.to_string()))
            .collect(),
    )
}
