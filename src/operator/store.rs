use async_trait::async_trait;
use k8s_openapi::api::certificates::v1::CertificateSigningRequest;
use kube::{api::PostParams, Api, ResourceExt};

#[cfg(test)]
use mockall::automock;

use crate::crds::managed_cluster::ManagedCluster;

use super::error::{ApproverError, ApproverResult};

/// Reads and writes the objects the approver works with.
///
/// Lookups return `Ok(None)` when the object doesn't exist.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApprovalStore: Send + Sync {
    async fn get_csr(&self, name: &str) -> ApproverResult<Option<CertificateSigningRequest>>;

    async fn get_managed_cluster(&self, name: &str) -> ApproverResult<Option<ManagedCluster>>;

    /// Replaces the approval subresource of the CSR.
    ///
    /// The object's `resourceVersion` is sent along, so a CSR that changed
    /// since it was read is rejected with [`ApproverError::Conflict`].
    async fn submit_approval(
        &self,
        csr: &CertificateSigningRequest,
    ) -> ApproverResult<CertificateSigningRequest>;
}

#[derive(Clone)]
pub struct KubeStore {
    client: kube::Client,
}

impl KubeStore {
    #[must_use]
    pub const fn new(client: kube::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ApprovalStore for KubeStore {
    async fn get_csr(&self, name: &str) -> ApproverResult<Option<CertificateSigningRequest>> {
        let api = Api::<CertificateSigningRequest>::all(self.client.clone());
        Ok(api.get_opt(name).await?)
    }

    async fn get_managed_cluster(&self, name: &str) -> ApproverResult<Option<ManagedCluster>> {
        let api = Api::<ManagedCluster>::all(self.client.clone());
        Ok(api.get_opt(name).await?)
    }

    async fn submit_approval(
        &self,
        csr: &CertificateSigningRequest,
    ) -> ApproverResult<CertificateSigningRequest> {
        let api = Api::<CertificateSigningRequest>::all(self.client.clone());
        let name = csr.name_any();
        let mut body = csr.clone();
        body.managed_fields_mut().clear();
        match api
            .replace_subresource(
                "approval",
                &name,
                &PostParams::default(),
                serde_json::to_vec(&body)?,
            )
            .await
        {
            Ok(updated) => Ok(updated),
            Err(kube::Error::Api(ae)) if ae.code == 409 => Err(ApproverError::Conflict(name)),
            Err(err) => Err(err.into()),
        }
    }
}
