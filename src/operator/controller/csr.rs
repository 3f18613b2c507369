use std::{sync::Arc, time::Duration};

use k8s_openapi::api::certificates::v1::CertificateSigningRequest;
use kube::runtime::controller::Action;

use crate::{
    crds::UniqueInfo,
    operator::{
        ctx::OperatorCtx,
        eligibility::{self, Ineligibility},
        error::{ApproverError, ApproverResult},
        utils::csr::CsrApprovalExt,
    },
};

/// What a single reconciliation did.
///
/// Every variant is a terminal success, failures are reported as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The CSR was deleted before it could be processed.
    Gone,
    /// The CSR is being deleted.
    Terminating,
    /// No `ManagedCluster` could be read for the labeled cluster.
    UnregisteredCluster(String),
    Ineligible(Ineligibility),
    Approved,
}

/// Re-reads the CSR and approves it if it still qualifies.
pub async fn reconcile_csr(name: &str, ctx: &OperatorCtx) -> ApproverResult<Outcome> {
    let Some(mut csr) = ctx.store.get_csr(name).await? else {
        tracing::debug!("CSR no longer exists");
        return Ok(Outcome::Gone);
    };
    if csr.is_terminating() {
        return Ok(Outcome::Terminating);
    }
    let Some(cluster_name) = csr.cluster_name().map(String::from) else {
        return Ok(Outcome::Ineligible(Ineligibility::MissingClusterLabel));
    };
    match ctx.store.get_managed_cluster(&cluster_name).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            tracing::info!(cluster = %cluster_name, "Cluster is not registered");
            return Ok(Outcome::UnregisteredCluster(cluster_name));
        }
        Err(err) => {
            tracing::warn!(cluster = %cluster_name, error = %err, "Cannot get managed cluster");
            return Ok(Outcome::UnregisteredCluster(cluster_name));
        }
    }
    // The event which queued this CSR may be stale.
    if let Err(reason) = eligibility::check(&csr) {
        tracing::trace!(%reason, "Skipping CSR");
        return Ok(Outcome::Ineligible(reason));
    }
    tracing::info!(cluster = %cluster_name, "Approving CSR");
    csr.push_approval(chrono::Utc::now());
    ctx.store.submit_approval(&csr).await?;
    tracing::info!("CSR approved");
    Ok(Outcome::Approved)
}

#[tracing::instrument(parent = &ctx.span, skip(csr, ctx), fields(name = %csr.unique_info()), err)]
pub async fn reconcile(
    csr: Arc<CertificateSigningRequest>,
    ctx: Arc<OperatorCtx>,
) -> ApproverResult<Action> {
    tracing::info!("Reconciling CSR");
    let Some(name) = csr.metadata.name.as_deref() else {
        tracing::warn!("CSR metadata has no name");
        return Err(ApproverError::CannotReconcile(String::from(
            "CSR metadata has no name",
        )));
    };
    reconcile_csr(name, &ctx).await?;
    Ok(Action::await_change())
}

pub fn on_error(
    _: Arc<CertificateSigningRequest>,
    error: &ApproverError,
    ctx: Arc<OperatorCtx>,
) -> Action {
    match error {
        ApproverError::CannotReconcile(_) => Action::await_change(),
        err if err.is_conflict() => {
            Action::requeue(Duration::from_secs(ctx.args.conflict_requeue_secs))
        }
        _ => Action::requeue(Duration::from_secs(ctx.args.error_requeue_secs)),
    }
}
