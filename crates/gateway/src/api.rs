use async_trait::async_trait;
use catalogue_core::{Catalogue, CatalogueDraft, CatalogueId};

use crate::GatewayError;

/// The five catalogue operations the client front ends need.
///
/// Write operations return the server's confirmation text.
#[async_trait]
pub trait CatalogueApi: Send + Sync {
    /// `GET /api/catalogues`
    async fn list_all(&self) -> Result<Vec<Catalogue>, GatewayError>;

    /// `GET /api/catalogues/{id}`
    async fn get_one(&self, id: CatalogueId) -> Result<Catalogue, GatewayError>;

    /// `POST /api/catalogues` with the full draft.
    async fn create(&self, draft: &CatalogueDraft) -> Result<String, GatewayError>;

    /// `PUT /api/catalogues/{id}`; the id is not repeated in the body.
    async fn update(&self, id: CatalogueId, draft: &CatalogueDraft) -> Result<String, GatewayError>;

    /// `DELETE /api/catalogues/{id}`
    async fn remove(&self, id: CatalogueId) -> Result<String, GatewayError>;
}
