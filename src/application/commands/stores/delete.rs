use super::StoreCommandService;
use crate::{application::error::ApplicationResult, domain::store::StoreId};

pub struct DeleteStoreCommand {
    pub id: i64,
}

impl StoreCommandService {
    pub async fn delete_store(&self, command: DeleteStoreCommand) -> ApplicationResult<()> {
        let id = StoreId::new(command.id)?;
        self.write_repo.delete(id).await?;
        tracing::info!(store_id = %id, "store deleted");
        Ok(())
    }
}
