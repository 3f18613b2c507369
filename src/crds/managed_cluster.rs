use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Registry entry of a cluster which is expected to join the hub.
///
/// Only the existence of the object matters to the approver,
/// the fields below are declared so the CRD can be generated
/// for development clusters.
#[derive(CustomResource, Debug, Serialize, Deserialize, Default, Clone, JsonSchema)]
#[kube(
    group = "cluster.open-cluster-management.io",
    version = "v1",
    kind = "ManagedCluster",
    printcolumn = r#"
    {
        "name":"Hub Accepted",
        "type":"boolean",
        "description":"Whether the hub accepts the cluster",
        "jsonPath":".spec.hubAcceptsClient"
    }
    "#
)]
#[serde(rename_all = "camelCase")]
pub struct ManagedClusterCRD {
    /// Whether the hub accepts the cluster to join.
    #[serde(default)]
    pub hub_accepts_client: bool,
    /// Lease duration of the cluster agent in seconds.
    pub lease_duration_seconds: Option<i32>,
    /// Endpoints of the cluster's API server.
    pub managed_cluster_client_configs: Option<Vec<ClientConfig>>,
}

#[derive(Deserialize, Serialize, Clone, Default, Debug, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub url: String,
    pub ca_bundle: Option<String>,
}
