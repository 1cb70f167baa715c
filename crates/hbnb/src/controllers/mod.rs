//! Page controllers.
//!
//! Each controller owns one page's behavior and nothing else: it reads the
//! session it was given, talks to the API and reports through its [`Host`].
//! What to draw is returned as a view value; the frontend renders it.

pub mod add_review;
pub mod details;
pub mod index;
pub mod login;

pub use add_review::*;
pub use details::*;
pub use index::*;
pub use login::*;

use crate::api::ApiError;
use crate::host::{Destination, Host};
use crate::log::{error, warn};
use crate::session::{CookieJar, Session};

/// Shows `err` to the user, prefixed with what was being attempted.
/// Transport failures are logged in full, the alert stays generic.
pub(crate) fn report(host: &impl Host, action: &str, err: &ApiError) {
    if err.is_transport() {
        error!(%err, "{action}");
    } else {
        warn!(%err, "{action}");
    }
    host.alert(&format!("{action}: {}", err.user_message()));
}

/// Ends the session and returns to the login page.
pub fn logout<J: CookieJar>(session: &Session<J>, host: &impl Host) {
    session.clear();
    host.navigate(Destination::Login);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MemoryCookieJar, RecordingHost};

    #[test]
    fn test_logout_clears_token_and_leaves() {
        let jar = MemoryCookieJar::with_cookies("token=T");
        let host = RecordingHost::default();

        logout(&Session::new(jar.clone()), &host);

        assert_eq!(jar.get("token"), None);
        assert_eq!(host.navigations(), vec![Destination::Login]);
    }
}
