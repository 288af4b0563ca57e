// src/application/commands/stores/update.rs
use super::{LocationInput, StoreCommandService};
use crate::{
    application::{
        dto::StoreDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::store::{StoreDescription, StoreId, StoreName, StoreUpdate},
};

/// Fields left as `None` keep their stored value. A blank `description`
/// clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateStoreCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub location: Option<LocationInput>,
    pub photo: Option<String>,
}

impl StoreCommandService {
    pub async fn update_store(&self, command: UpdateStoreCommand) -> ApplicationResult<StoreDto> {
        let id = StoreId::new(command.id)?;
        let store = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("store not found"))?;

        let UpdateStoreCommand {
            id: _,
            name,
            description,
            tags,
            location,
            photo,
        } = command;

        let name = name.map(StoreName::new).transpose()?;
        let mut update = StoreUpdate::new(id);
        if let Some(description) = description {
            update = update.with_description(StoreDescription::parse(Some(description)));
        }
        if let Some(tags) = tags {
            update = update.with_tags(tags);
        }
        if let Some(location) = location {
            update = update.with_location(location.into_location()?);
        }
        if let Some(photo) = photo {
            update = update.with_photo(Some(photo));
        }

        let mut attempt = 0;
        loop {
            let mut pending = update.clone();
            if let Some(name) = &name {
                if let Some(slug) = self.slug_service.slug_for_rename(&store, name).await? {
                    pending = pending.with_name(name.clone(), slug);
                }
            }

            if pending.is_empty() {
                return Ok(store.into());
            }

            match self.write_repo.update(pending).await {
                Ok(updated) => {
                    tracing::info!(store_id = %updated.id, slug = %updated.slug, "store updated");
                    return Ok(updated.into());
                }
                Err(err) if self.should_retry(&err, attempt) => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }
}
