use std::sync::Arc;

use super::{
    args::OperatorArgs,
    store::{ApprovalStore, KubeStore},
};

#[derive(Clone)]
pub struct OperatorCtx {
    pub args: OperatorArgs,
    pub store: Arc<dyn ApprovalStore>,
    /// Parent span of every reconciliation.
    pub span: tracing::Span,
}

impl OperatorCtx {
    pub fn new(args: OperatorArgs, store: Arc<dyn ApprovalStore>, span: tracing::Span) -> Self {
        Self { args, store, span }
    }

    /// Connects to Kubernetes and builds a context backed by the API server.
    ///
    /// The client is returned as well, since the watch needs it.
    pub async fn connect(args: OperatorArgs) -> anyhow::Result<(Self, kube::Client)> {
        tracing::info!("Connecting to Kubernetes");
        let client = kube::Client::try_default().await?;
        tracing::info!("Connected to Kubernetes");
        let store = Arc::new(KubeStore::new(client.clone()));
        let span = tracing::info_span!("csr_controller");
        Ok((Self::new(args, store, span), client))
    }
}
