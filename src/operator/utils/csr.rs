use k8s_openapi::{
    api::certificates::v1::{CertificateSigningRequest, CertificateSigningRequestCondition},
    apimachinery::pkg::apis::meta::v1::Time,
};

/// Label which carries the name of the cluster the CSR was issued for.
pub const CLUSTER_NAME_LABEL: &str = "open-cluster-management.io/cluster-name";

pub const APPROVED_REASON: &str = "AutoApprovedByCSRController";
pub const APPROVED_MESSAGE: &str =
    "The managedcluster-import-controller auto approval automatically approved this CSR";

/// Terminal condition types of a CSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalType {
    Approved,
    Denied,
}

impl ApprovalType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Denied => "Denied",
        }
    }

    fn parse(type_: &str) -> Option<Self> {
        match type_ {
            "Approved" => Some(Self::Approved),
            "Denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApprovalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity the bootstrap agent of `cluster_name` authenticates as.
#[must_use]
pub fn bootstrap_username(cluster_name: &str) -> String {
    format!("system:serviceaccount:{cluster_name}:{cluster_name}-bootstrap-sa")
}

pub trait CsrApprovalExt {
    /// Non-empty value of the cluster-name label.
    fn cluster_name(&self) -> Option<&str>;

    /// First Approved or Denied condition in list order.
    fn approval_type(&self) -> Option<ApprovalType>;

    fn requested_username(&self) -> Option<&str>;

    fn is_terminating(&self) -> bool;

    /// Appends an Approved condition, keeping the existing ones.
    fn push_approval(&mut self, now: chrono::DateTime<chrono::Utc>);
}

impl CsrApprovalExt for CertificateSigningRequest {
    fn cluster_name(&self) -> Option<&str> {
        self.metadata
            .labels
            .as_ref()?
            .get(CLUSTER_NAME_LABEL)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    fn approval_type(&self) -> Option<ApprovalType> {
        self.status
            .as_ref()?
            .conditions
            .as_ref()?
            .iter()
            .find_map(|condition| ApprovalType::parse(&condition.type_))
    }

    fn requested_username(&self) -> Option<&str> {
        self.spec.username.as_deref()
    }

    fn is_terminating(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }

    fn push_approval(&mut self, now: chrono::DateTime<chrono::Utc>) {
        let approve_condition = CertificateSigningRequestCondition {
            last_update_time: Some(Time(now)),
            message: Some(String::from(APPROVED_MESSAGE)),
            reason: Some(String::from(APPROVED_REASON)),
            status: String::from("True"),
            type_: String::from(ApprovalType::Approved.as_str()),
            last_transition_time: None,
        };
        self.status
            .get_or_insert_with(Default::default)
            .conditions
            .get_or_insert_with(Vec::new)
            .push(approve_condition);
    }
}
