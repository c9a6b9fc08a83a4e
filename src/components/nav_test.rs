use super::*;

// =============================================================
// nav_items
// =============================================================

#[test]
fn unauthenticated_menu_is_login_and_signup() {
    let items = nav_items(false);
    assert_eq!(
        items,
        vec![
            NavItem { label: "Login", target: "/login" },
            NavItem { label: "Signup", target: "/signup" },
        ]
    );
}

#[test]
fn authenticated_menu_is_profile_and_logout() {
    let items = nav_items(true);
    assert_eq!(
        items,
        vec![
            NavItem { label: "Profile", target: "/profile" },
            NavItem { label: "Logout", target: "/logout" },
        ]
    );
}

#[test]
fn menu_is_idempotent_for_the_same_input() {
    assert_eq!(nav_items(false), nav_items(false));
    assert_eq!(nav_items(true), nav_items(true));
}
