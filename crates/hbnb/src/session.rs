//! Cookie-backed session token.
//!
//! The token lives in a single session cookie so that every page of the
//! site sees it. Controllers get a [`Session`] handed to them instead of
//! poking at `document.cookie` themselves.

use crate::log::debug;

/// Name of the cookie holding the access token.
pub const TOKEN_COOKIE: &str = "token";

/// Access to a page's cookie string, in the shape of `document.cookie`:
/// reads return every visible `name=value` pair joined by `"; "`, writes take
/// one cookie with its attributes.
pub trait CookieJar {
    fn cookies(&self) -> String;
    fn write(&self, cookie: &str);
}

/// Returns the value of the first cookie called `name` in `cookies`.
pub fn get_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|segment| segment.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[derive(Debug, Clone)]
pub struct Session<J> {
    jar: J,
}

impl<J: CookieJar> Session<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The stored token. A blank cookie counts as logged out.
    pub fn token(&self) -> Option<String> {
        get_cookie(&self.jar.cookies(), TOKEN_COOKIE).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        debug!("storing session token");
        self.jar.write(&format!("{TOKEN_COOKIE}={token}; path=/"));
    }

    /// Expires the token cookie, used by logout and on `401` answers.
    pub fn clear(&self) {
        debug!("clearing session token");
        self.jar
            .write(&format!("{TOKEN_COOKIE}=; path=/; max-age=0"));
    }
}
