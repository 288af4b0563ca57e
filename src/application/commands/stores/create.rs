// src/application/commands/stores/create.rs
use super::{LocationInput, StoreCommandService};
use crate::{
    application::{dto::StoreDto, error::ApplicationResult},
    domain::store::{NewStore, StoreDescription, StoreName},
};

pub struct CreateStoreCommand {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub location: LocationInput,
    pub photo: Option<String>,
}

impl CreateStoreCommand {
    pub fn builder() -> CreateStoreCommandBuilder {
        CreateStoreCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateStoreCommandBuilder {
    name: Option<String>,
    description: Option<String>,
    tags: Vec<String>,
    location: Option<LocationInput>,
    photo: Option<String>,
}

impl CreateStoreCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn location(mut self, location: LocationInput) -> Self {
        self.location = Some(location);
        self
    }

    pub fn photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn build(self) -> Result<CreateStoreCommand, &'static str> {
        Ok(CreateStoreCommand {
            name: self.name.ok_or("name is required")?,
            description: self.description,
            tags: self.tags,
            location: self.location.ok_or("location is required")?,
            photo: self.photo,
        })
    }
}

impl StoreCommandService {
    pub async fn create_store(&self, command: CreateStoreCommand) -> ApplicationResult<StoreDto> {
        let CreateStoreCommand {
            name,
            description,
            tags,
            location,
            photo,
        } = command;

        let name = StoreName::new(name)?;
        let description = StoreDescription::parse(description);
        let location = location.into_location()?;
        let created_at = self.clock.now();

        let mut attempt = 0;
        loop {
            let slug = self.slug_service.generate_unique_slug(&name, None).await?;
            let new_store = NewStore {
                name: name.clone(),
                slug,
                description: description.clone(),
                tags: tags.clone(),
                created_at,
                location: location.clone(),
                photo: photo.clone(),
            };

            match self.write_repo.insert(new_store).await {
                Ok(created) => {
                    tracing::info!(store_id = %created.id, slug = %created.slug, "store created");
                    return Ok(created.into());
                }
                Err(err) if self.should_retry(&err, attempt) => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }
}
