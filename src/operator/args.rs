#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    /// Host to bind the health server to.
    #[clap(
        long = "server-host",
        env = "CSR_APPROVER_SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    /// Port of the health server.
    #[clap(
        long = "server-port",
        env = "CSR_APPROVER_SERVER_PORT",
        default_value = "8080"
    )]
    pub port: u16,
}

#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "csr-approver-operator", version, author, about)]
pub struct OperatorArgs {
    /// Seconds to wait before retrying a CSR
    /// after a failed read or approval.
    #[clap(
        long,
        env = "CSR_APPROVER_ERROR_REQUEUE_SECS",
        default_value = "60"
    )]
    pub error_requeue_secs: u64,

    /// Seconds to wait before retrying a CSR whose approval
    /// lost an optimistic concurrency race.
    #[clap(
        long,
        env = "CSR_APPROVER_CONFLICT_REQUEUE_SECS",
        default_value = "5"
    )]
    pub conflict_requeue_secs: u64,

    #[clap(flatten)]
    pub server: ServerArgs,
}
