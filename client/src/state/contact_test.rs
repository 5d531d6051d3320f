use super::*;

#[test]
fn contact_form_starts_empty() {
    let form = ContactForm::default();
    assert!(form.is_empty());
    assert_eq!(form.field(ContactField::Name), "");
}

#[test]
fn update_field_sets_only_that_field() {
    let mut form = ContactForm::default();
    form.update_field(ContactField::Email, "ada@example.com".to_owned());
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.name, "");
    assert_eq!(form.message, "");
}

#[test]
fn update_field_overwrites_previous_value() {
    let mut form = ContactForm::default();
    form.update_field(ContactField::Message, "Hel".to_owned());
    form.update_field(ContactField::Message, "Hello".to_owned());
    assert_eq!(form.field(ContactField::Message), "Hello");
}

#[test]
fn submit_acknowledges_and_resets_all_fields() {
    let mut form = ContactForm::default();
    form.update_field(ContactField::Name, "Ada".to_owned());
    form.update_field(ContactField::Email, "ada@example.com".to_owned());
    form.update_field(ContactField::Message, "Hello".to_owned());

    let ack = form.submit();

    assert_eq!(ack, "Thank you for your message! I will get back to you soon.");
    assert_eq!(form, ContactForm::default());
}

#[test]
fn submit_always_clears_non_empty_input() {
    let samples = [
        ("a", "b", "c"),
        ("Grace Hopper", "grace@navy.mil", "COBOL?"),
        ("  spaced  ", "x@y.z", "multi\nline\nmessage"),
        ("名前", "unicode@example.com", "✓"),
    ];
    for (name, email, message) in samples {
        let mut form = ContactForm {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        };
        form.submit();
        assert!(form.is_empty(), "form not cleared for {name:?}");
    }
}

#[test]
fn fields_render_in_name_email_message_order() {
    let labels: Vec<_> = ContactField::ALL.iter().map(|f| f.label()).collect();
    assert_eq!(labels, ["Name", "Email", "Message"]);
}

#[test]
fn message_is_the_only_multiline_field() {
    assert_eq!(ContactField::Name.input_type(), Some("text"));
    assert_eq!(ContactField::Email.input_type(), Some("email"));
    assert_eq!(ContactField::Message.input_type(), None);
}
