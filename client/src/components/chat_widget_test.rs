use super::*;

#[test]
fn enter_sends() {
    assert!(sends_on_key("Enter", false));
}

#[test]
fn enter_confirming_composition_does_not_send() {
    assert!(!sends_on_key("Enter", true));
}

#[test]
fn other_keys_do_not_send() {
    assert!(!sends_on_key("a", false));
    assert!(!sends_on_key("Tab", false));
}
