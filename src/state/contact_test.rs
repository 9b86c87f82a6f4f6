use super::*;

const ACK: &str = "thanks";

fn filled() -> ContactBuffer {
    let mut buf = ContactBuffer::default();
    buf.set_field(ContactField::Name, "A");
    buf.set_field(ContactField::Email, "a@b.com");
    buf.set_field(ContactField::Message, "hi");
    buf
}

// =============================================================
// Fields
// =============================================================

#[test]
fn set_field_touches_only_that_field() {
    let mut buf = filled();
    buf.set_field(ContactField::Email, "new@b.com");
    assert_eq!(buf.name, "A");
    assert_eq!(buf.email, "new@b.com");
    assert_eq!(buf.message, "hi");
}

#[test]
fn field_names_round_trip_through_input_name_attribute() {
    for field in ContactField::ALL {
        assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
    }
    assert!("phone".parse::<ContactField>().is_err());
}

#[test]
fn first_missing_follows_form_order() {
    let mut buf = ContactBuffer::default();
    assert_eq!(buf.first_missing(), Some(ContactField::Name));
    buf.set_field(ContactField::Name, "A");
    assert_eq!(buf.first_missing(), Some(ContactField::Email));
    buf.set_field(ContactField::Email, "a@b.com");
    assert_eq!(buf.first_missing(), Some(ContactField::Message));
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_clears_all_fields() {
    let mut buf = filled();
    let ack = buf.submit(ACK).unwrap();
    assert_eq!(ack, Acknowledgement(ACK.to_owned()));
    assert_eq!(buf, ContactBuffer::default());
    assert!(buf.name.is_empty() && buf.email.is_empty() && buf.message.is_empty());
}

#[test]
fn submit_with_empty_field_is_refused_and_keeps_input() {
    let mut buf = filled();
    buf.set_field(ContactField::Message, "");
    let err = buf.submit(ACK).unwrap_err();
    assert_eq!(err, ContactError::MissingField(ContactField::Message));
    assert_eq!(buf.name, "A");
    assert_eq!(buf.email, "a@b.com");
}

#[test]
fn missing_field_error_names_the_field() {
    let err = ContactBuffer::default().submit(ACK).unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
}
