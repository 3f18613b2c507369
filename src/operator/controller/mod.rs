use std::sync::Arc;

use futures::{Stream, StreamExt, TryStreamExt};
use k8s_openapi::api::certificates::v1::CertificateSigningRequest;
use kube::{
    runtime::{reflector, watcher, WatchStreamExt},
    Api,
};

use crate::operator::{eligibility, utils::csr::CLUSTER_NAME_LABEL};

use super::ctx::OperatorCtx;

pub mod csr;

/// Keeps created and updated CSRs which pass the eligibility check.
/// Deletions are dropped.
pub fn admit_eligible<S>(
    events: S,
) -> impl Stream<Item = Result<CertificateSigningRequest, watcher::Error>>
where
    S: Stream<Item = Result<watcher::Event<CertificateSigningRequest>, watcher::Error>>,
{
    events
        .applied_objects()
        .try_filter(|csr| futures::future::ready(eligibility::is_eligible(csr)))
}

/// Watches bootstrap CSRs and feeds the eligible ones to the reconciler.
///
/// Only CSRs carrying the cluster name label are listed. Created and updated
/// objects which fail the eligibility check never reach the work queue.
pub async fn run(client: kube::Client, ctx: Arc<OperatorCtx>) -> anyhow::Result<()> {
    tracing::info!("Running CSR controller");
    let api = Api::<CertificateSigningRequest>::all(client);
    let (reader, writer) = reflector::store();
    let events = watcher(api, watcher::Config::default().labels(CLUSTER_NAME_LABEL))
        .default_backoff()
        .reflect(writer);
    let eligible_csrs = admit_eligible(events);

    kube::runtime::Controller::for_stream(eligible_csrs, reader)
        .shutdown_on_signal()
        .run(csr::reconcile, csr::on_error, ctx)
        .for_each(|res| {
            match res {
                Ok((obj, _)) => tracing::debug!(name = %obj.name, "Reconciled CSR"),
                Err(err) => tracing::warn!(error = %err, "CSR reconciliation failed"),
            }
            futures::future::ready(())
        })
        .await;
    tracing::warn!("CSR controller stopped.");
    Ok(())
}
