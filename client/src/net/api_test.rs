use super::*;

#[test]
fn endpoints_join_base() {
    assert_eq!(ventures_endpoint("/api"), "/api/ventures");
    assert_eq!(plots_endpoint("https://host/v1"), "https://host/v1/plots");
    assert_eq!(enquiries_endpoint("/api"), "/api/enquiries");
}

#[test]
fn unauthorized_status_maps_to_variant() {
    assert_eq!(ApiError::from_status(401), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403), ApiError::Status(403));
    assert_eq!(ApiError::from_status(500), ApiError::Status(500));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
    assert_eq!(ApiError::Unauthorized.to_string(), "session expired, please sign in again");
}
