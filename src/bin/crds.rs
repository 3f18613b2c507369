use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
};

use clap::Parser;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::CustomResourceExt;
use serde::Serialize;

#[cfg(unix)]
extern crate libc;

/// Prints the `ManagedCluster` CRD, for clusters
/// which don't have the registry installed.
#[derive(Parser, Debug, Clone)]
#[clap(name = "csr-approver-crds", version, about)]
struct CrdsArgs {
    /// File to write the definitions to. Stdout is used if omitted.
    out_file: Option<String>,
}

fn generate_crds_def(crds: Vec<CustomResourceDefinition>) -> anyhow::Result<String> {
    let mut serializer = serde_yaml::Serializer::new(Vec::new());
    for crd in crds {
        eprintln!("- Adding {}/{}", crd.spec.group, crd.spec.names.kind);
        crd.serialize(&mut serializer)?;
    }
    let serialized = serializer.into_inner()?;
    String::from_utf8(serialized).map_err(Into::into)
}
pub fn main() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        unsafe {
            // Restore default SIGPIPE so piping into `head` doesn't panic.
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    dotenvy::dotenv().ok();
    let args = CrdsArgs::parse();
    let defs = generate_crds_def(vec![
        csr_approver::crds::managed_cluster::ManagedCluster::crd(),
    ])?;
    if let Some(out_file) = args.out_file {
        let output = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(out_file)?;
        let mut writer = BufWriter::new(output);
        writer.write_all(defs.as_bytes())?;
    } else {
        println!("{}", defs);
    }
    Ok(())
}
