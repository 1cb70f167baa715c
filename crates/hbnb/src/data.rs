//! Payloads exchanged with the HBnB API.

use serde::{Deserialize, Serialize};

use crate::id::PlaceId;

/// Login request body for `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login payload. The token is opaque to the client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccessToken {
    pub access_token: String,
}

/// A place as served by `GET /places` and `GET /places/{id}`.
///
/// The list endpoint usually omits `images`, the details endpoint usually
/// omits `image`; both decode to empty values when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Review body for `POST /reviews`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub place_id: PlaceId,
    pub review_text: String,
}
