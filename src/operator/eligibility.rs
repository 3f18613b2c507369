//! Decides whether a CSR is a bootstrap request the operator may approve.
//!
//! A CSR is eligible when it is labeled with a cluster name, has not been
//! approved or denied yet, and was requested by the bootstrap service account
//! of that very cluster. The check is pure so it can run both on watch events
//! and on freshly fetched objects.

use k8s_openapi::api::certificates::v1::CertificateSigningRequest;

use super::utils::csr::{bootstrap_username, ApprovalType, CsrApprovalExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ineligibility {
    MissingClusterLabel,
    AlreadyResolved(ApprovalType),
    UsernameMismatch,
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingClusterLabel => f.write_str("cluster name label is missing"),
            Self::AlreadyResolved(approval) => write!(f, "CSR is already {approval}"),
            Self::UsernameMismatch => f.write_str("requester is not the bootstrap service account"),
        }
    }
}

/// Runs all eligibility checks and returns the cluster name on success.
pub fn check(csr: &CertificateSigningRequest) -> Result<&str, Ineligibility> {
    let cluster_name = csr
        .cluster_name()
        .ok_or(Ineligibility::MissingClusterLabel)?;
    if let Some(approval) = csr.approval_type() {
        return Err(Ineligibility::AlreadyResolved(approval));
    }
    if csr.requested_username() != Some(bootstrap_username(cluster_name).as_str()) {
        return Err(Ineligibility::UsernameMismatch);
    }
    Ok(cluster_name)
}

#[must_use]
pub fn is_eligible(csr: &CertificateSigningRequest) -> bool {
    check(csr).is_ok()
}
