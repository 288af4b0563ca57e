// tests/support/builders.rs
use chrono::{DateTime, Utc};

use store_catalog::application::commands::stores::{CreateStoreCommand, LocationInput};
use store_catalog::domain::store::*;

use super::mocks::fixed_now;

pub struct StoreBuilder {
    id: i64,
    name: String,
    slug: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "Test Store".into(),
            slug: "test-store".into(),
            tags: Vec::new(),
            created_at: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_string()).collect();
        self
    }

    pub fn build(self) -> Store {
        Store {
            id: StoreId::new(self.id).unwrap(),
            name: StoreName::new(self.name).unwrap(),
            slug: StoreSlug::new(self.slug).unwrap(),
            description: None,
            tags: self.tags,
            created_at: self.created_at,
            location: Location::point(
                vec![-79.3832, 43.6532],
                StoreAddress::new("100 Queen St W, Toronto").unwrap(),
            )
            .unwrap(),
            photo: None,
        }
    }
}

/// Stores with the given slugs and ids starting at 1.
pub fn stores_with_slugs(slugs: &[&str]) -> Vec<Store> {
    slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| {
            StoreBuilder::new()
                .id(i64::try_from(i).unwrap() + 1)
                .name(*slug)
                .slug(*slug)
                .build()
        })
        .collect()
}

pub fn create_command(name: &str, tags: &[&str]) -> CreateStoreCommand {
    CreateStoreCommand::builder()
        .name(name)
        .tags(tags.iter().copied())
        .location(LocationInput::point(
            vec![-79.3832, 43.6532],
            "100 Queen St W, Toronto",
        ))
        .build()
        .unwrap()
}
