use axum_extra::extract::cookie::CookieJar;

use axum_classifieds_admin::flash::{NOTICE_COOKIE, set_notice, take_notice};

#[test]
fn notice_survives_the_cookie_round_trip() {
    let jar = set_notice(CookieJar::new(), "Usuário João cadastrado com sucesso");

    let stored = jar.get(NOTICE_COOKIE).expect("notice cookie");
    assert!(
        stored.value().chars().all(|c| c.is_ascii()),
        "cookie value must be ascii-safe, got {:?}",
        stored.value()
    );

    let (_jar, notice) = take_notice(jar);
    assert_eq!(notice.as_deref(), Some("Usuário João cadastrado com sucesso"));
}

#[test]
fn taking_a_notice_clears_it() {
    let jar = set_notice(CookieJar::new(), "categoria removida");
    let (jar, first) = take_notice(jar);
    assert_eq!(first.as_deref(), Some("categoria removida"));

    // The removal cookie stays in the jar so the client expires it, but the
    // notice itself must not be readable twice.
    let (_jar, second) = take_notice(jar);
    assert_eq!(second, None);
}

#[test]
fn empty_jar_has_no_notice() {
    let (_jar, notice) = take_notice(CookieJar::new());
    assert_eq!(notice, None);
}
