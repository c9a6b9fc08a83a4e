use super::*;

// =============================================================
// ProfileLoad::from_result
// =============================================================

#[test]
fn a_successful_load_is_ready() {
    let profile = Profile { name: "Alice".to_owned(), login: "a@b.com".to_owned() };
    assert_eq!(
        ProfileLoad::from_result(Ok(profile.clone())),
        ProfileLoad::Ready(profile)
    );
}

#[test]
fn a_failed_load_never_reaches_the_profile_view() {
    let err = ApiError::Http { status: 401, message: "unauthorized".to_owned() };
    let load = ProfileLoad::from_result(Err(err));
    assert!(!matches!(load, ProfileLoad::Ready(_)));
    assert_eq!(
        load,
        ProfileLoad::Failed("Could not load profile: 401 unauthorized".to_owned())
    );
}

#[test]
fn transport_failures_surface_in_the_error_indicator() {
    let load = ProfileLoad::from_result(Err(ApiError::Transport("dns failure".to_owned())));
    assert_eq!(
        load,
        ProfileLoad::Failed("Could not load profile: network error: dns failure".to_owned())
    );
}
