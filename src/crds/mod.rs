use k8s_openapi::api::certificates::v1::CertificateSigningRequest;

use crate::operator::utils::csr::CsrApprovalExt;

pub mod managed_cluster;

pub trait UniqueInfo {
    fn unique_info(&self) -> String;
}

/// `<cluster>/<name>` for labeled CSRs, the bare name otherwise.
impl UniqueInfo for CertificateSigningRequest {
    fn unique_info(&self) -> String {
        let name = self.metadata.name.as_deref().unwrap_or("Unknown");
        self.cluster_name()
            .map_or_else(|| String::from(name), |cluster| format!("{cluster}/{name}"))
    }
}
