use super::*;

#[test]
fn hidden_password_uses_the_password_input_type() {
    assert_eq!(field_type(false), "password");
    assert_eq!(toggle_label(false), "Show");
}

#[test]
fn visible_password_switches_to_plain_text() {
    assert_eq!(field_type(true), "text");
    assert_eq!(toggle_label(true), "Hide");
}
