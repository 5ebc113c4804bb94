use crate::db::favorite_source::FavoriteSource;
use crate::domain::errors::require_present;
use crate::domain::{CreateFavoriteSourceCommand, InvalidInputError};

use super::resources::{CreateFavoriteSourceResource, FavoriteSourceResource};

pub fn command_from_resource(
    resource: CreateFavoriteSourceResource,
) -> Result<CreateFavoriteSourceCommand, InvalidInputError> {
    let owner_key = require_present("ownerKey", resource.owner_key)?;
    let source_id = require_present("sourceId", resource.source_id)?;
    CreateFavoriteSourceCommand::new(owner_key, source_id)
}

pub fn resource_from_entity(entity: &FavoriteSource) -> FavoriteSourceResource {
    FavoriteSourceResource {
        id: entity.id,
        owner_key: entity.owner_key.clone(),
        source_id: entity.source_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::favorite_source::{FavoriteSourceRepository, InMemoryFavoriteSourceRepository};

    #[test]
    fn command_carries_resource_fields() {
        let resource = CreateFavoriteSourceResource {
            owner_key: Some("abc123".to_string()),
            source_id: Some("bbc-news".to_string()),
        };
        let command = command_from_resource(resource).unwrap();
        assert_eq!(command.owner_key(), "abc123");
        assert_eq!(command.source_id(), "bbc-news");
    }

    #[test]
    fn missing_source_id_is_rejected() {
        let resource = CreateFavoriteSourceResource {
            owner_key: Some("abc123".to_string()),
            source_id: None,
        };
        assert_eq!(
            command_from_resource(resource).unwrap_err(),
            InvalidInputError::Missing { field: "sourceId" }
        );
    }

    #[test]
    fn legacy_news_api_key_field_is_accepted() {
        let resource: CreateFavoriteSourceResource =
            serde_json::from_str(r#"{"newsApiKey":"abc123","sourceId":"bbc-news"}"#).unwrap();
        assert_eq!(resource.owner_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn stored_entity_maps_back_to_command_fields() {
        let command = CreateFavoriteSourceCommand::new("abc123", "bbc-news").unwrap();
        let entity = InMemoryFavoriteSourceRepository::new().insert(&command).unwrap();

        let resource = resource_from_entity(&entity);
        assert_eq!(resource.id, entity.id);
        assert_eq!(resource.owner_key, command.owner_key());
        assert_eq!(resource.source_id, command.source_id());

        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["ownerKey"], "abc123");
        assert_eq!(json["sourceId"], "bbc-news");
        assert!(json["id"].is_i64());
    }
}
