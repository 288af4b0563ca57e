use crate::{
    application::error::ApplicationResult,
    domain::store::{Location, LocationKind, StoreAddress},
};

/// Raw location payload as received from the caller.
#[derive(Debug, Clone, Default)]
pub struct LocationInput {
    pub kind: Option<String>,
    pub coordinates: Vec<f64>,
    pub address: String,
}

impl LocationInput {
    pub fn point(coordinates: Vec<f64>, address: impl Into<String>) -> Self {
        Self {
            kind: None,
            coordinates,
            address: address.into(),
        }
    }

    pub(super) fn into_location(self) -> ApplicationResult<Location> {
        let kind = match self.kind.as_deref() {
            Some(kind) => kind.parse::<LocationKind>()?,
            None => LocationKind::default(),
        };
        let address = StoreAddress::new(self.address)?;
        Ok(Location::new(kind, self.coordinates, address)?)
    }
}
