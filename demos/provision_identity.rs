use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing::{error, info};

use idprov::adapters::{DeclinePresence, MemoryStore};
use idprov::{ProvisioningConfig, Variant};

#[derive(Parser, Debug)]
#[command(name = "provision_identity")]
#[command(about = "Provision a presence-protected identity into an in-memory store", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// When to attach the access control
    #[arg(long, default_value = "protect-at-creation")]
    pub variant: VariantArg,

    /// Simulate a device without passcode enrollment
    #[arg(long)]
    pub no_passcode: bool,

    /// Decline every presence prompt
    #[arg(long)]
    pub deny_presence: bool,

    /// Message to sign with the provisioned identity
    #[arg(long, default_value = "hello")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum VariantArg {
    ProtectAtCreation,
    RetrofitProtection,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::ProtectAtCreation => Variant::ProtectAtCreation,
            VariantArg::RetrofitProtection => Variant::RetrofitProtection,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .init();

    let mut store = MemoryStore::new();
    if cli.no_passcode {
        store = store.without_passcode();
    }
    if cli.deny_presence {
        store = store.with_presence(DeclinePresence);
    }

    idprov::provision(&mut store, cli.variant.into()).context("provisioning failed")?;

    let tag = ProvisioningConfig::default().private_tag;
    let identity = idprov::retrieve_identity(&mut store, &tag)?;
    let (certificate, private_key) = identity.parts();
    info!("Certificate fingerprint {}", certificate.fingerprint());
    info!("Private key fingerprint {}", private_key.fingerprint());

    match idprov::sign_with_identity(&mut store, &tag, cli.message.as_bytes()) {
        Ok(signature) => println!("{}", hex::encode(signature)),
        Err(e) => {
            error!("Failed to sign: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
