//! for CLI
//!
//! Inspect profile documents fetched from the directory service.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use profile_engine::logging::{LoggingConfig, init_logging};
use profile_engine::{ProfileRecord, ProfileResponse, RequestType};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "profile-inspect", version = "0.1", about = "Directory profile inspector")]
struct Cli {
    #[arg(long, default_value = "info", help = "Log level: trace | debug | info | warn | error")]
    log_level: Level,

    #[arg(long, help = "Directory for rolling log files")]
    log_dir: Option<PathBuf>,

    #[arg(long, help = "Write log files as JSON")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a profile document
    Show {
        file: PathBuf,

        #[arg(short, long, value_enum)]
        request_type: Option<RequestKind>,
    },

    /// Decode the credential attached to a profile
    Credential { file: PathBuf },

    /// Re-encode a profile as canonical pretty JSON
    Normalize { file: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum RequestKind {
    Profile,
    ProfileAndCredential,
}

impl From<RequestKind> for RequestType {
    fn from(kind: RequestKind) -> Self {
        match kind {
            RequestKind::Profile => RequestType::Profile,
            RequestKind::ProfileAndCredential => RequestType::ProfileAndCredential,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments using clap (see `Cli` and `Commands` structs)
    let cli = Cli::parse();

    let _guard = init_logging(&LoggingConfig {
        level: cli.log_level,
        json_format: cli.json_logs,
        log_dir: cli.log_dir.clone(),
    });

    match cli.command {
        Commands::Show { file, request_type } => {
            let mut response = ProfileResponse::new(read_profile(&file)?);
            if let Some(kind) = request_type {
                response.set_request_type(kind.into());
            }
            print_summary(&response);
        }

        Commands::Credential { file } => {
            let profile = read_profile(&file)?;
            match (profile.credential(), profile.expiring_profile_key_credential_response()) {
                (_, Some(response)) => {
                    println!("Credential expires: {}", response.credential_expiration_time());
                    if let Some(at) = response.expires_at() {
                        println!("Credential expires at: {}", at.to_rfc3339());
                    }
                    println!("Proof length: {} bytes", response.proof().len());
                }
                (Some(bytes), None) if !bytes.is_empty() => {
                    println!("Credential present ({} bytes) but could not be decoded", bytes.len());
                }
                _ => println!("No credential"),
            }
        }

        Commands::Normalize { file } => {
            let profile = read_profile(&file)?;
            let pretty = serde_json::to_string_pretty(&profile)
                .context("Failed to encode profile")?;
            println!("{pretty}");
        }
    }

    Ok(())
}

fn read_profile(path: &Path) -> Result<ProfileRecord> {
    let raw = std::fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let profile = ProfileRecord::from_slice(&raw)
        .with_context(|| format!("Failed to decode profile from {}", path.display()))?;
    info!(path = %path.display(), badges = profile.badges().len(), "loaded profile");
    Ok(profile)
}

fn print_summary(response: &ProfileResponse) {
    let show = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("Service id:      {}", response.service_id().map_or("-".to_string(), |id| id.to_string()));
    println!("Identity key:    {}", show(response.identity_key()));
    println!("Name:            {}", show(response.name()));
    println!("About:           {}", show(response.about()));
    println!("About emoji:     {}", show(response.about_emoji()));
    println!("Avatar:          {}", show(response.avatar()));
    println!("Unidentified:    {}", show(response.unidentified_access()));
    println!("Unrestricted:    {}", response.is_unrestricted_unidentified_access());
    println!("Number sharing:  {}", show(response.phone_number_sharing()));
    println!(
        "Payment address: {}",
        response.payment_address().map_or("-".to_string(), |b| format!("{} bytes", b.len()))
    );
    println!(
        "Credential:      {}",
        response.credential().map_or("-".to_string(), |b| format!("{} bytes", b.len()))
    );
    if let Some(caps) = response.capabilities() {
        println!(
            "Capabilities:    storage={} ssre2={} extralock={}",
            caps.storage, caps.storage_service_encryption_v2, caps.extralock
        );
    }
    if let Some(kind) = response.request_type() {
        println!("Request type:    {kind:?}");
    }

    for badge in response.badges() {
        let expires = badge
            .expires_at()
            .map_or("-".to_string(), |at| at.to_rfc3339());
        println!(
            "Badge {} [{}] visible={} duration={}s expires={} sprites={}",
            badge.id,
            badge.category,
            badge.visible,
            badge.duration_seconds,
            expires,
            badge.sprite_references.len()
        );
    }
}
