use crate::client::{HttpTransport, MonitoringClient, Resource, Transport};
use crate::error::{AdapterError, Cardinality};

/// Search-backed data sources. The client returns whatever matched; the
/// cardinality rule of each data source is applied here.
pub struct DataSource<'a, T = HttpTransport> {
    client: &'a MonitoringClient<T>,
}

impl<'a, T: Transport> DataSource<'a, T> {
    pub fn new(client: &'a MonitoringClient<T>) -> Self {
        Self { client }
    }

    /// Id of the only object matching `query`. Zero or several matches are
    /// an error.
    pub async fn search_single<R: Resource>(&self, query: &str) -> Result<i64, AdapterError> {
        let ids = self.lookup::<R>(query, Cardinality::ExactlyOne).await?;
        ids.first()
            .copied()
            .ok_or_else(|| cardinality_error::<R>(query, Cardinality::ExactlyOne, 0))
    }

    /// Ids of every object matching `query`. With `require_any`, an empty
    /// result is an error.
    pub async fn search_many<R: Resource>(
        &self,
        query: &str,
        require_any: bool,
    ) -> Result<Vec<i64>, AdapterError> {
        let expected = if require_any {
            Cardinality::AtLeastOne
        } else {
            Cardinality::Any
        };
        self.lookup::<R>(query, expected).await
    }

    #[tracing::instrument(skip(self), fields(resource = R::NAME))]
    async fn lookup<R: Resource>(
        &self,
        query: &str,
        expected: Cardinality,
    ) -> Result<Vec<i64>, AdapterError> {
        // A 404 from the list endpoint means nothing matched.
        let ids = self.client.search::<R>(query).await?.unwrap_or_default();
        tracing::debug!(
            name = "adapter.search",
            target = concat!(env!("CARGO_PKG_NAME"), "::", module_path!()),
            resource = R::NAME,
            matches = ids.len(),
            message = "Search finished"
        );
        if expected.accepts(ids.len()) {
            Ok(ids)
        } else {
            Err(cardinality_error::<R>(query, expected, ids.len()))
        }
    }
}

fn cardinality_error<R: Resource>(query: &str, expected: Cardinality, found: usize) -> AdapterError {
    AdapterError::Cardinality {
        resource: R::NAME,
        query: query.to_string(),
        expected,
        found,
    }
}
