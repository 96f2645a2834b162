use std::marker::PhantomData;

use super::secrets::RetainSecrets;
use crate::client::{HttpTransport, MonitoringClient, Resource, Transport};
use crate::error::AdapterError;
use crate::mapping::{ToDomain, ToModel};

/// Lifecycle callbacks for one managed resource type, working on the model
/// shape the orchestration host tracks.
///
/// `M` is the model (e.g. `CheckModel<UrlModel>`); its domain counterpart
/// decides the route.
pub struct ResourceAdapter<'a, M, T = HttpTransport> {
    client: &'a MonitoringClient<T>,
    model: PhantomData<fn() -> M>,
}

impl<'a, M, T> ResourceAdapter<'a, M, T>
where
    M: ToDomain + RetainSecrets,
    M::Domain: Resource + ToModel<Model = M>,
    T: Transport,
{
    pub fn new(client: &'a MonitoringClient<T>) -> Self {
        Self {
            client,
            model: PhantomData,
        }
    }

    /// Current remote state. `Ok(None)` tells the host to drop the resource
    /// from its tracked state.
    #[tracing::instrument(skip(self, prior), fields(resource = <M::Domain as Resource>::NAME))]
    pub async fn read(&self, id: i64, prior: Option<&M>) -> Result<Option<M>, AdapterError> {
        let Some(remote) = self.client.get::<M::Domain>(id).await? else {
            tracing::info!(
                name = "adapter.read.gone",
                target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
                resource = <M::Domain as Resource>::NAME,
                id = id,
                message = "Resource no longer exists remotely, dropping from state"
            );
            return Ok(None);
        };
        Ok(Some(self.to_state(&remote, prior)))
    }

    #[tracing::instrument(skip_all, fields(resource = <M::Domain as Resource>::NAME))]
    pub async fn create(&self, desired: &M) -> Result<M, AdapterError> {
        let stored = self.client.create(&desired.to_domain()).await?;
        tracing::info!(
            name = "adapter.create.done",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            resource = <M::Domain as Resource>::NAME,
            id = ?stored.id(),
            message = "Resource created"
        );
        Ok(self.to_state(&stored, Some(desired)))
    }

    /// Sends the full desired state; `desired` must carry the remote id.
    #[tracing::instrument(skip_all, fields(resource = <M::Domain as Resource>::NAME))]
    pub async fn update(&self, desired: &M) -> Result<M, AdapterError> {
        let stored = self.client.update(&desired.to_domain()).await?;
        Ok(self.to_state(&stored, Some(desired)))
    }

    #[tracing::instrument(skip(self), fields(resource = <M::Domain as Resource>::NAME))]
    pub async fn delete(&self, id: i64) -> Result<(), AdapterError> {
        self.client.delete::<M::Domain>(id).await?;
        Ok(())
    }

    /// Adopts an existing remote object by its id as typed by the user.
    #[tracing::instrument(skip(self), fields(resource = <M::Domain as Resource>::NAME))]
    pub async fn import(&self, raw_id: &str) -> Result<M, AdapterError> {
        let id: i64 = raw_id
            .trim()
            .parse()
            .map_err(|_| AdapterError::InvalidImportId(raw_id.to_string()))?;
        self.read(id, None).await?.ok_or(AdapterError::NotFound {
            resource: <M::Domain as Resource>::NAME,
            id,
        })
    }

    fn to_state(&self, remote: &M::Domain, prior: Option<&M>) -> M {
        let mut state = remote.to_model();
        if let Some(prior) = prior {
            state.retain_secrets(prior);
        }
        state
    }
}
