use axum_extra::extract::cookie::{Cookie, CookieJar};
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Cookie carrying the one-shot notice shown on the next rendered page
/// after a redirect.
pub const NOTICE_COOKIE: &str = "aviso";

/// Queue a notice for the next page. The value is percent-encoded so the
/// Portuguese messages survive the cookie round trip.
pub fn set_notice(jar: CookieJar, message: &str) -> CookieJar {
    let value = utf8_percent_encode(message, NON_ALPHANUMERIC).to_string();
    let mut cookie = Cookie::new(NOTICE_COOKIE, value);
    cookie.set_path("/");
    jar.add(cookie)
}

/// Consume the pending notice, clearing the cookie when one was present.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<String>) {
    let notice = jar.get(NOTICE_COOKIE).and_then(|cookie| {
        percent_decode_str(cookie.value())
            .decode_utf8()
            .ok()
            .map(|value| value.into_owned())
    });

    if notice.is_none() {
        return (jar, None);
    }

    let mut removal = Cookie::from(NOTICE_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), notice)
}
