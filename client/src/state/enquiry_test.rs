use super::*;

fn form(name: &str, phone: &str, email: &str, message: &str) -> EnquiryForm {
    EnquiryForm { name: name.to_owned(), phone: phone.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

#[test]
fn valid_form_builds_trimmed_request() {
    let req = form("  Asha Rao ", "+91 98450-00000", " asha@example.com ", "  Call after 5  ")
        .to_request("7", "A-12")
        .unwrap();
    assert_eq!(req.venture_id, "7");
    assert_eq!(req.plot_no, "A-12");
    assert_eq!(req.name, "Asha Rao");
    assert_eq!(req.phone, "+91 98450-00000");
    assert_eq!(req.email.as_deref(), Some("asha@example.com"));
    assert_eq!(req.message.as_deref(), Some("Call after 5"));
}

#[test]
fn optional_fields_may_be_blank() {
    let req = form("Asha", "9845000000", "  ", "").to_request("7", "A-12").unwrap();
    assert!(req.email.is_none());
    assert!(req.message.is_none());
}

#[test]
fn name_required() {
    assert_eq!(form(" ", "9845000000", "", "").to_request("7", "A"), Err(EnquiryError::MissingName));
}

#[test]
fn phone_validated() {
    assert_eq!(form("A", "12345", "", "").to_request("7", "A"), Err(EnquiryError::InvalidPhone));
    assert_eq!(form("A", "98450abc00", "", "").to_request("7", "A"), Err(EnquiryError::InvalidPhone));
}

#[test]
fn email_validated_when_present() {
    for bad in ["asha", "@example.com", "asha@example", "asha@.com", "asha@example."] {
        assert_eq!(form("A", "9845000000", bad, "").to_request("7", "A"), Err(EnquiryError::InvalidEmail), "{bad}");
    }
}
