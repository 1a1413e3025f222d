use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use time::Duration;

use crate::domain::PreferenceStorage;

const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// Preference storage backed by the browser's cookies.
///
/// Writes are collected in the jar, which must be returned with the
/// response for them to persist.
#[derive(Debug, Clone)]
pub struct CookiePreferences {
    jar: CookieJar,
    secure: bool,
}

impl CookiePreferences {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStorage for CookiePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(Duration::days(COOKIE_MAX_AGE_DAYS));

        self.jar = std::mem::take(&mut self.jar).add(cookie);
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header::COOKIE, HeaderMap};

    use super::*;
    use crate::domain::{Language, Preferences, Theme};

    fn jar_with(cookie_header: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie_header.parse().unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn reads_preferences_from_request_cookies() {
        let storage = CookiePreferences::new(jar_with("language=en; theme=dark"), false);
        let prefs = Preferences::load(&storage);

        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn toggle_writes_a_long_lived_cookie() {
        let mut storage = CookiePreferences::new(CookieJar::new(), true);
        let mut prefs = Preferences::load(&storage);

        prefs.toggle_language(&mut storage);

        let jar = storage.into_jar();
        let cookie = jar.get("language").unwrap();
        assert_eq!(cookie.value(), "en");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::days(365)));
    }
}
