use super::errors::{require_non_blank, InvalidInputError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFavoriteSourceByIdQuery {
    id: i64,
}

impl GetFavoriteSourceByIdQuery {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAllFavoriteSourcesByOwnerKeyQuery {
    owner_key: String,
}

impl GetAllFavoriteSourcesByOwnerKeyQuery {
    pub fn new(owner_key: impl Into<String>) -> Result<Self, InvalidInputError> {
        Ok(Self {
            owner_key: require_non_blank("ownerKey", owner_key.into())?,
        })
    }

    pub fn owner_key(&self) -> &str {
        &self.owner_key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFavoriteSourceByOwnerKeyAndSourceIdQuery {
    owner_key: String,
    source_id: String,
}

impl GetFavoriteSourceByOwnerKeyAndSourceIdQuery {
    pub fn new(
        owner_key: impl Into<String>,
        source_id: impl Into<String>,
    ) -> Result<Self, InvalidInputError> {
        Ok(Self {
            owner_key: require_non_blank("ownerKey", owner_key.into())?,
            source_id: require_non_blank("sourceId", source_id.into())?,
        })
    }

    pub fn owner_key(&self) -> &str {
        &self.owner_key
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_key_query_rejects_blank() {
        assert_eq!(
            GetAllFavoriteSourcesByOwnerKeyQuery::new(" ").unwrap_err(),
            InvalidInputError::Blank { field: "ownerKey" }
        );
    }

    #[test]
    fn pair_query_rejects_blank_source_id() {
        assert_eq!(
            GetFavoriteSourceByOwnerKeyAndSourceIdQuery::new("abc123", "\t").unwrap_err(),
            InvalidInputError::Blank { field: "sourceId" }
        );
    }

    #[test]
    fn pair_query_keeps_both_fields() {
        let query = GetFavoriteSourceByOwnerKeyAndSourceIdQuery::new("abc123", "bbc-news").unwrap();
        assert_eq!(query.owner_key(), "abc123");
        assert_eq!(query.source_id(), "bbc-news");
    }
}
