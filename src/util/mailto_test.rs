use super::*;
use percent_encoding::percent_decode_str;

fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
    let query = uri.split_once('?').map_or("", |(_, q)| q);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
        .unwrap_or_default()
}

fn decoded(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

// =============================================================
// compose
// =============================================================

#[test]
fn compose_targets_fixed_recipient() {
    let uri = compose(&form("Jane", "jane@x.com", "Hi", "Hello"));
    assert!(uri.starts_with("mailto:allainralphlegaspi@gmail.com?subject="));
}

#[test]
fn compose_body_decodes_to_template() {
    let uri = compose(&form("Jane", "jane@x.com", "Hi", "Hello"));
    assert_eq!(
        decoded(query_param(&uri, "body")),
        "Hi Allain,\n\nName: Jane\nEmail: jane@x.com\n\nMessage:\nHello\n\nBest regards,\nJane"
    );
    assert_eq!(decoded(query_param(&uri, "subject")), "Hi");
}

#[test]
fn compose_is_byte_identical_to_component_encoding() {
    let uri = compose(&form("Jane", "jane@x.com", "Hi", "Hello"));
    assert_eq!(
        uri,
        "mailto:allainralphlegaspi@gmail.com?subject=Hi&body=\
         Hi%20Allain%2C%0A%0AName%3A%20Jane%0AEmail%3A%20jane%40x.com%0A%0A\
         Message%3A%0AHello%0A%0ABest%20regards%2C%0AJane"
    );
}

#[test]
fn compose_empty_subject_uses_fallback() {
    let uri = compose(&form("Jane", "jane@x.com", "", "Hello"));
    assert_eq!(query_param(&uri, "subject"), "Contact%20from%20Portfolio");
    assert_eq!(decoded(query_param(&uri, "subject")), "Contact from Portfolio");
}

#[test]
fn compose_whitespace_subject_is_kept() {
    let uri = compose(&form("Jane", "jane@x.com", " ", "Hello"));
    assert_eq!(query_param(&uri, "subject"), "%20");
}

#[test]
fn compose_with_all_fields_empty_still_builds() {
    let uri = compose(&ContactForm::default());
    assert_eq!(decoded(query_param(&uri, "subject")), "Contact from Portfolio");
    assert_eq!(
        decoded(query_param(&uri, "body")),
        "Hi Allain,\n\nName: \nEmail: \n\nMessage:\n\n\nBest regards,\n"
    );
}

// =============================================================
// encode_component
// =============================================================

#[test]
fn encode_component_keeps_unreserved_marks() {
    assert_eq!(encode_component("AZaz09-_.!~*'()"), "AZaz09-_.!~*'()");
}

#[test]
fn encode_component_escapes_query_delimiters() {
    assert_eq!(encode_component("a&b=c?d#e/f+g"), "a%26b%3Dc%3Fd%23e%2Ff%2Bg");
}

#[test]
fn encode_component_escapes_utf8_bytes_upper_hex() {
    assert_eq!(encode_component("é"), "%C3%A9");
    assert_eq!(encode_component("👋"), "%F0%9F%91%8B");
}

#[test]
fn encode_component_escapes_crlf_and_percent() {
    assert_eq!(encode_component("100%\r\n"), "100%25%0D%0A");
}

#[test]
fn body_parameter_cannot_inject_extra_query_keys() {
    let uri = compose(&form("Eve", "e@x.com", "x&cc=spy@x.com", "m&bcc=spy@x.com"));
    assert_eq!(uri.matches('&').count(), 1);
    assert_eq!(decoded(query_param(&uri, "subject")), "x&cc=spy@x.com");
}
