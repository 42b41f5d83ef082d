//! Account handlers.

use shared_types::{BoardError, Notification, UserId};
use tb_02_audience::AudienceTarget;
use tracing::info;

use super::service::BoardService;
use crate::ports::outbound::UserRepository;

impl BoardService {
    /// Delete the requester's account and every row that references it.
    ///
    /// Associates are resolved before the delete, while the shared
    /// workspaces still exist, and hear that the user went offline. Any live
    /// connection is closed afterwards.
    pub async fn delete_self(&self, requester: UserId) -> Result<(), BoardError> {
        let associates = self
            .audience_of(AudienceTarget::UserAssociates(requester))
            .await
            .without(requester);
        self.store.delete_user(requester).await?;

        info!(user_id = %requester, "User deleted");

        self.hub.broadcast(associates, Notification::user_offline());
        self.hub.unregister(requester);
        Ok(())
    }
}
