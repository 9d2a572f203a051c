use gate::Outcome;

use super::*;

fn nav() -> Navigator {
    match navigator() {
        Ok(nav) => nav,
        Err(e) => panic!("admin navigator rejected: {e}"),
    }
}

const PROTECTED: [&str; 4] = ["/dashboard", "/tables", "/menus", "/categories"];

#[test]
fn table_lists_console_routes_in_order() {
    let Ok(table) = table() else {
        panic!("admin table rejected");
    };
    let paths: Vec<_> = table.entries().iter().map(|e| e.path).collect();
    assert_eq!(paths, vec!["/", "/login", "/dashboard", "/tables", "/menus", "/categories"]);
}

#[test]
fn only_console_pages_require_a_token() {
    let nav = nav();
    for entry in nav.table().entries() {
        assert_eq!(entry.requires_auth, PROTECTED.contains(&entry.path), "{}", entry.path);
    }
}

#[test]
fn console_pages_without_token_go_to_login() {
    let nav = nav();
    for path in PROTECTED {
        assert_eq!(nav.navigate(path, false), Ok(Outcome::Redirect("/login")), "{path}");
    }
}

#[test]
fn console_pages_with_token_render() {
    let nav = nav();
    for path in PROTECTED {
        match nav.navigate(path, true) {
            Ok(Outcome::Render(entry)) => assert_eq!(entry.path, path),
            other => panic!("{path}: unexpected {other:?}"),
        }
    }
}

#[test]
fn login_with_token_goes_to_dashboard() {
    assert_eq!(nav().navigate("/login", true), Ok(Outcome::Redirect("/dashboard")));
}

#[test]
fn login_without_token_renders() {
    match nav().navigate("/login", false) {
        Ok(Outcome::Render(entry)) => assert_eq!(entry.name, LOGIN),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn root_forwards_through_dashboard() {
    let nav = nav();
    assert_eq!(nav.navigate("/", true), Ok(Outcome::Redirect("/dashboard")));
    assert_eq!(nav.navigate("/", false), Ok(Outcome::Redirect("/login")));
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(nav().navigate("/orders", true), Ok(Outcome::NotFound));
}
