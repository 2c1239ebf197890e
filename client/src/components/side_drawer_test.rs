use super::*;

#[test]
fn admin_menu_only_links_admin_home() {
    let items = menu_items(true);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0], MenuItem { label: "Home", path: "/admin" });
}

#[test]
fn user_menu_links_member_screens() {
    let paths: Vec<_> = menu_items(false).iter().map(|i| i.path).collect();
    assert_eq!(paths, vec!["/dashboard", "/profile", "/chats", "/looking-for-member"]);
}

#[test]
fn user_menu_never_links_admin_pages() {
    assert!(menu_items(false).iter().all(|i| !i.path.starts_with("/admin")));
}
