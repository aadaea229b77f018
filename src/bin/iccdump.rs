// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{Context, Result};
use clap::Parser;
use iccdump::profile::Profile;
use iccdump::report::Report;
use iccdump::signatures::Signature;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Decode an ICC profile and print an inspection report.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// ICC profile to inspect
    #[arg(value_name = "PROFILE")]
    profile: PathBuf,

    /// Restrict the report to tags with this signature (repeatable)
    #[arg(short = 't', value_name = "SIG")]
    tags: Vec<Signature>,

    /// Extract each sampled curv tag as a <signature>.spi1d LUT sidecar
    #[arg(short = 'e')]
    extract_luts: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit the decoded profile as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let profile_bytes = fs::read(&cli.profile)
        .with_context(|| format!("failed to read profile file `{:?}`", cli.profile))?;

    let profile = Profile::decode(&profile_bytes)
        .with_context(|| format!("failed to decode profile `{:?}`", cli.profile))?;

    if cli.extract_luts {
        extract_luts(&profile, &cli)?;
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&profile).context("failed to serialize profile as JSON")?
    } else {
        Report { profile: &profile, signatures: &cli.tags }.to_string()
    };

    if let Some(output_path) = cli.output {
        fs::write(&output_path, rendered)
            .with_context(|| format!("failed to write to {output_path:?}"))?;
    } else {
        io::stdout().write_all(rendered.as_bytes())?;
    }

    Ok(())
}

fn extract_luts(profile: &Profile, cli: &Cli) -> Result<()> {
    use iccdump::tags::Element;

    let dir = cli
        .output
        .as_ref()
        .and_then(|p| p.parent())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));

    for entry in profile.tags_matching(&cli.tags) {
        if let Element::Curve(curve) = &entry.element {
            if let Some(path) = iccdump::lut::write_sidecar(dir, &entry.signature.to_string(), curve)
                .with_context(|| format!("failed to write LUT sidecar for `{}`", entry.signature))?
            {
                log::info!("wrote {}", path.display());
            }
        }
    }
    Ok(())
}
