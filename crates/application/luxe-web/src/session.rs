//! Cookie-held session record

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use luxe_session::{SessionProvider, SessionStore};
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

/// Cookie carrying the base64 JSON user record
pub const USER_COOKIE: &str = "luxe_user";

/// The browser's cookie jar as a session store
#[derive(Clone)]
pub struct CookieSessionStore {
    cookies: Cookies,
}

impl CookieSessionStore {
    pub fn new(cookies: Cookies) -> Self {
        Self { cookies }
    }
}

impl SessionStore for CookieSessionStore {
    fn load(&self) -> luxe_session::Result<Option<String>> {
        let Some(cookie) = self.cookies.get(USER_COOKIE) else {
            return Ok(None);
        };
        let bytes = URL_SAFE_NO_PAD
            .decode(cookie.value())
            .map_err(|e| luxe_session::Error::Backend(format!("cookie is not base64: {}", e)))?;
        let record = String::from_utf8(bytes)
            .map_err(|e| luxe_session::Error::Backend(format!("cookie is not UTF-8: {}", e)))?;
        Ok(Some(record))
    }

    fn save(&self, record: &str) -> luxe_session::Result<()> {
        let cookie = Cookie::build((USER_COOKIE, URL_SAFE_NO_PAD.encode(record)))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        self.cookies.add(cookie);
        Ok(())
    }

    fn clear(&self) -> luxe_session::Result<()> {
        self.cookies.remove(Cookie::build(USER_COOKIE).path("/").build());
        Ok(())
    }
}

/// Hydrate the session for one request
pub fn session_from(cookies: &Cookies) -> SessionProvider<CookieSessionStore> {
    SessionProvider::hydrate(CookieSessionStore::new(cookies.clone()))
}
