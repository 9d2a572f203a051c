use gate::Outcome;

use super::*;

fn nav() -> Navigator {
    match navigator() {
        Ok(nav) => nav,
        Err(e) => panic!("customer navigator rejected: {e}"),
    }
}

const PROTECTED: [&str; 3] = ["/menu", "/order", "/order-status"];

#[test]
fn only_ordering_screens_require_a_session() {
    let nav = nav();
    for entry in nav.table().entries() {
        assert_eq!(entry.requires_auth, PROTECTED.contains(&entry.path), "{}", entry.path);
    }
}

#[test]
fn ordering_screens_without_session_go_to_scanner() {
    let nav = nav();
    for path in PROTECTED {
        assert_eq!(nav.navigate(path, false), Ok(Outcome::Redirect("/qr-scan")), "{path}");
    }
}

#[test]
fn ordering_screens_with_session_render() {
    let nav = nav();
    for path in PROTECTED {
        match nav.navigate(path, true) {
            Ok(Outcome::Render(entry)) => assert_eq!(entry.path, path),
            other => panic!("{path}: unexpected {other:?}"),
        }
    }
}

#[test]
fn scanner_with_session_goes_to_menu() {
    assert_eq!(nav().navigate("/qr-scan", true), Ok(Outcome::Redirect("/menu")));
}

#[test]
fn scanner_without_session_renders_even_with_code_query() {
    match nav().navigate("/qr-scan?code=T-01", false) {
        Ok(Outcome::Render(entry)) => assert_eq!(entry.name, QR_SCAN),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn root_goes_to_scanner_or_menu() {
    let nav = nav();
    assert_eq!(nav.navigate("/", false), Ok(Outcome::Redirect("/qr-scan")));
    assert_eq!(nav.navigate("/", true), Ok(Outcome::Redirect("/menu")));
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(nav().navigate("/dashboard", true), Ok(Outcome::NotFound));
}
