use campaign_params::{ops, ParamsError};
use serde_json::{json, Value};

fn sample_urls() -> Vec<String> {
    vec![
        "https://example.com/?utm_source=foo&foo=bar".into(),
        "https://example.com/#heading&utm_source=foo&foo=bar".into(),
        "https://example.com/?utm_source=foo&utm_medium=bar#utm_source=qux".into(),
        "https://example.com/plain".into(),
    ]
}

#[test]
fn ops_extract_returns_bare_url_and_params() {
    let result = ops::op_extract("https://example.com/?utm_source=foo&foo=bar");
    assert_eq!(
        result,
        json!({"bareUrl": "https://example.com/?foo=bar", "params": {"utm_source": "foo"}})
    );
}

#[test]
fn ops_extract_many_keeps_input_order() {
    let urls = sample_urls();
    let result = ops::op_extract_many(&urls);
    let arr = result.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["bareUrl"], "https://example.com/?foo=bar");
    assert_eq!(arr[1]["bareUrl"], "https://example.com/#heading&foo=bar");
    assert_eq!(arr[2]["params"], json!({"utm_source": "qux", "utm_medium": "bar"}));
    assert_eq!(arr[3]["params"], json!({}));
}

#[test]
fn ops_extract_many_empty() {
    assert_eq!(ops::op_extract_many(&[]), json!([]));
}

#[test]
fn ops_add_params_to_query() {
    let result = ops::op_add_params(
        "https://example.com/?foo=bar#hash",
        &json!({"utm_source": "foo", "utm_medium": "bar"}),
        false,
    )
    .unwrap();
    assert_eq!(
        result["url"],
        "https://example.com/?foo=bar&utm_source=foo&utm_medium=bar#hash"
    );
}

#[test]
fn ops_add_params_to_fragment() {
    let result = ops::op_add_params(
        "https://example.com/?foo=bar#hash",
        &json!({"utm_source": "foo"}),
        true,
    )
    .unwrap();
    assert_eq!(result["url"], "https://example.com/?foo=bar#hash&utm_source=foo");
}

#[test]
fn ops_add_params_null_is_noop() {
    let result = ops::op_add_params("https://example.com/?", &Value::Null, false).unwrap();
    assert_eq!(result["url"], "https://example.com/?");
}

#[test]
fn ops_add_params_rejects_non_object() {
    let err = ops::op_add_params("https://example.com/", &json!(["utm_source"]), false).unwrap_err();
    assert!(matches!(
        err,
        ParamsError::NotAnObject {
            field: "params",
            found: "array"
        }
    ));
}

#[test]
fn ops_add_params_rejects_non_string_value() {
    let err = ops::op_add_params("https://example.com/", &json!({"utm_source": 3}), false)
        .unwrap_err();
    assert_eq!(err.to_string(), "campaign param 'utm_source' must be a string");
}

#[test]
fn ops_sanitize_default_options() {
    let result = ops::op_sanitize(
        &json!({"utm_source": "foo", "utm_medium": 1, "foo": "bar"}),
        &Value::Null,
    )
    .unwrap();
    assert_eq!(result, json!({"utm_source": "foo"}));
}

#[test]
fn ops_sanitize_with_options() {
    let result = ops::op_sanitize(
        &json!({"utm_source": "  foo ", "utm_medium": "   ", "utm_campaign": null}),
        &json!({"trim": true, "removeBlanks": true}),
    )
    .unwrap();
    assert_eq!(result, json!({"utm_source": "foo"}));
}

#[test]
fn ops_sanitize_rejects_bad_options() {
    let err = ops::op_sanitize(&json!({}), &json!({"trim": "yes"})).unwrap_err();
    assert!(matches!(err, ParamsError::InvalidOptions(_)));

    let err = ops::op_sanitize(&json!({}), &json!(true)).unwrap_err();
    assert!(matches!(err, ParamsError::NotAnObject { field: "options", .. }));
}

#[test]
fn ops_sanitize_rejects_non_object_params() {
    let err = ops::op_sanitize(&json!("utm_source=foo"), &Value::Null).unwrap_err();
    assert_eq!(err.to_string(), "expected 'params' to be an object, got string");
}

#[test]
fn ops_campaign_keys_lists_all() {
    let keys = ops::op_campaign_keys();
    assert_eq!(
        keys,
        json!(["utm_source", "utm_medium", "utm_campaign", "utm_term", "utm_content"])
    );
}
