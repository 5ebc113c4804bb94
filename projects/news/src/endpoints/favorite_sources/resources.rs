use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/favorite-sources`.
///
/// Fields are optional here so that a missing value is reported the same
/// way as a blank one instead of as a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteSourceResource {
    #[serde(default, alias = "newsApiKey")]
    pub owner_key: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSourceResource {
    pub id: i64,
    pub owner_key: String,
    pub source_id: String,
}
