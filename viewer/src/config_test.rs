use super::*;

#[test]
fn empty_query_uses_defaults() {
    let config = from_query("");
    assert_eq!(config, ViewerConfig::default());
    assert_eq!(config.capture_url, DEFAULT_CAPTURE_URL);
}

#[test]
fn bare_question_mark_uses_defaults() {
    assert_eq!(from_query("?"), ViewerConfig::default());
}

#[test]
fn src_overrides_the_capture_url() {
    let config = from_query("?src=/json/test.json");
    assert_eq!(config.capture_url, "/json/test.json");
}

#[test]
fn src_is_percent_decoded() {
    let config = from_query("?src=http%3A%2F%2Flocalhost%3A8000%2Fcgi-bin%2Fobject_finder.py");
    assert_eq!(config.capture_url, "http://localhost:8000/cgi-bin/object_finder.py");
}

#[test]
fn rose_json_is_captured_verbatim_after_decoding() {
    let config = from_query("?rose=%7B%22radius%22%3A45%7D");
    assert_eq!(config.rose_json.as_deref(), Some(r#"{"radius":45}"#));
}

#[test]
fn parameters_combine_in_any_order() {
    let config = from_query("?rose=%7B%7D&src=/json/test.json");
    assert_eq!(config.capture_url, "/json/test.json");
    assert_eq!(config.rose_json.as_deref(), Some("{}"));
}

#[test]
fn unknown_parameters_are_ignored() {
    let config = from_query("?foo=bar&src=/a.json&baz=1");
    assert_eq!(config.capture_url, "/a.json");
    assert_eq!(config.rose_json, None);
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let config = from_query("?src=&rose=");
    assert_eq!(config.capture_url, DEFAULT_CAPTURE_URL);
    assert_eq!(config.rose_json, None);
}

#[test]
fn valueless_parameters_are_skipped() {
    let config = from_query("?src");
    assert_eq!(config.capture_url, DEFAULT_CAPTURE_URL);
}

#[test]
fn plus_decodes_to_space() {
    let config = from_query("?rose=a+b");
    assert_eq!(config.rose_json.as_deref(), Some("a b"));
}

#[test]
fn malformed_percent_escape_passes_through() {
    let config = from_query("?src=/a%2-b");
    assert_eq!(config.capture_url, "/a%2-b");
}

#[test]
fn truncated_percent_escape_passes_through() {
    let config = from_query("?src=/a%2");
    assert_eq!(config.capture_url, "/a%2");
}
