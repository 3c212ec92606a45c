use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest};
use crate::dto::common_dto::{ApiResponse, MessageResponse};
use crate::repositories::{LogisticsRepository, Page};
use crate::utils::errors::{not_found_error, AppResult};

pub struct ClientController {
    repository: Arc<dyn LogisticsRepository>,
}

impl ClientController {
    pub fn new(repository: Arc<dyn LogisticsRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: CreateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        request.validate()?;

        let client = self
            .repository
            .create_client(request.into_new_client()?)
            .await?;
        info!("✅ Cliente creado: {} (id {})", client.name, client.id);

        Ok(ApiResponse::success_with_message(
            ClientResponse::from(client),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ClientResponse> {
        self.repository
            .find_client(id)
            .await?
            .map(ClientResponse::from)
            .ok_or_else(|| not_found_error("Client", id))
    }

    pub async fn list(&self, page: Page) -> AppResult<Vec<ClientResponse>> {
        let clients = self.repository.list_clients(page).await?;
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> AppResult<MessageResponse> {
        if !self.repository.delete_client(id).await? {
            return Err(not_found_error("Client", id));
        }
        info!("🗑️ Cliente {} eliminado", id);

        Ok(MessageResponse::success(
            "Cliente eliminado exitosamente".to_string(),
        ))
    }
}
