use crate::api::{ApiClient, ApiResult};
use crate::host::{Destination, Host};
use crate::log::{debug, info};
use crate::page::PageController;
use crate::places::PlacesApi;
use crate::session::{CookieJar, Session};

use super::report;

/// Drives the `login-form` page.
pub struct LoginController<C, J, H> {
    api: PlacesApi<C>,
    session: Session<J>,
    host: H,
}

impl<C, J, H> LoginController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    pub fn new(api: PlacesApi<C>, session: Session<J>, host: H) -> Self {
        Self { api, session, host }
    }

    /// Logs in; on success the token is stored and the user sent to the
    /// index page. Failures alert and leave the form as it was.
    pub async fn submit(&self, email: &str, password: &str) -> ApiResult<()> {
        match self.api.login(email, password).await {
            Ok(token) => {
                info!("login succeeded");
                self.session.set_token(&token);
                self.host.navigate(Destination::Index);
                Ok(())
            }
            Err(err) => {
                report(&self.host, "Login failed", &err);
                Err(err)
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl<C, J, H> PageController for LoginController<C, J, H>
where
    C: ApiClient,
    J: CookieJar,
    H: Host,
{
    type View = ();

    /// The login page renders the same for everyone.
    async fn activate(&self) -> Self::View {
        debug!(
            authenticated = self.session.is_authenticated(),
            "login page active"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, HttpMethod};
    use crate::testing::{MemoryCookieJar, RecordingHost, Reply, ScriptedApi};
    use futures::executor::block_on;
    use serde_json::json;

    fn controller(
        reply: Reply,
    ) -> (
        LoginController<ScriptedApi, MemoryCookieJar, RecordingHost>,
        MemoryCookieJar,
        RecordingHost,
    ) {
        let api = ScriptedApi::new().reply(HttpMethod::Post, "/login", reply);
        let jar = MemoryCookieJar::default();
        let host = RecordingHost::default();
        let controller = LoginController::new(
            PlacesApi::new(api),
            Session::new(jar.clone()),
            host.clone(),
        );
        (controller, jar, host)
    }

    #[test]
    fn test_login_stores_token_and_goes_to_index() {
        let (controller, jar, host) = controller(Reply::Json(json!({ "access_token": "T" })));

        block_on(controller.submit("user@hbnb.io", "secret")).unwrap();

        assert_eq!(jar.get("token"), Some("T".to_string()));
        assert_eq!(host.navigations(), vec![Destination::Index]);
        assert!(host.alerts().is_empty());
    }

    #[test]
    fn test_rejected_login_alerts_status_text() {
        let (controller, jar, host) = controller(Reply::Status(401, "UNAUTHORIZED"));

        let err = block_on(controller.submit("user@hbnb.io", "wrong")).unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized(_)));
        assert_eq!(jar.get("token"), None);
        assert_eq!(host.alerts(), vec!["Login failed: UNAUTHORIZED"]);
        assert!(host.navigations().is_empty());
    }

    #[test]
    fn test_network_failure_alerts_generic_message() {
        let (controller, jar, host) = controller(Reply::Offline);

        assert!(block_on(controller.submit("user@hbnb.io", "secret")).is_err());

        assert_eq!(jar.get("token"), None);
        let alerts = host.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].starts_with("Login failed: "));
        assert!(!alerts[0].contains("Failed to fetch"));
    }
}
