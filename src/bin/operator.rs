use std::sync::Arc;

use clap::Parser;
use csr_approver::operator::{args::OperatorArgs, ctx::OperatorCtx};

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = OperatorArgs::parse();
    let (ctx, client) = OperatorCtx::connect(args).await?;
    let ctx = Arc::new(ctx);
    let operator = csr_approver::operator::controller::run(client, ctx.clone());
    let server = csr_approver::server::run(ctx.clone());

    tokio::select! {
        res = operator => {
            match res {
                Ok(()) => tracing::info!("Operator has stopped."),
                Err(e) => tracing::error!("Operator has crashed: {:?}", e),
            }
        }
        res = server => {
            match res {
                Ok(()) => tracing::info!("Server has stopped."),
                Err(e) => tracing::error!("Server has crashed: {:?}", e),
            }
        }
    }
    Ok(())
}
