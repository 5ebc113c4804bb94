use super::errors::{require_non_blank, InvalidInputError};

/// Request to store a new favorite source for an owner.
///
/// Both fields are guaranteed non-blank once constructed; the insert path
/// copies them without checking again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFavoriteSourceCommand {
    owner_key: String,
    source_id: String,
}

impl CreateFavoriteSourceCommand {
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
    fn keeps_fields_unchanged() {
        let command = CreateFavoriteSourceCommand::new("abc123", "bbc-news").unwrap();
        assert_eq!(command.owner_key(), "abc123");
        assert_eq!(command.source_id(), "bbc-news");
    }

    #[test]
    fn rejects_blank_owner_key() {
        let err = CreateFavoriteSourceCommand::new("   ", "bbc-news").unwrap_err();
        assert_eq!(err, InvalidInputError::Blank { field: "ownerKey" });
    }

    #[test]
    fn rejects_empty_source_id() {
        let err = CreateFavoriteSourceCommand::new("abc123", "").unwrap_err();
        assert_eq!(err, InvalidInputError::Blank { field: "sourceId" });
    }
}
