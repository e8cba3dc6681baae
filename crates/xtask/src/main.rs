use anyhow::Context;
use serde::Deserialize;

/// Dependencies each workspace crate must never take.
const FORBIDDEN: &[(&str, &[&str])] = &[
    (
        "missionwatch-domain",
        &[
            "missionwatch-shared",
            "missionwatch-engine",
            "tokio",
            "dashmap",
            "dotenvy",
            "tracing",
            "tracing-subscriber",
        ],
    ),
    ("missionwatch-shared", &["missionwatch-engine", "tokio"]),
];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    kind: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = violations(&metadata);

    if !violations.is_empty() {
        for violation in &violations {
            eprintln!("  {violation}");
        }
        anyhow::bail!("arch-check failed with {} violation(s)", violations.len());
    }

    println!("arch-check OK");
    Ok(())
}

/// Normal (non-dev, non-build) dependencies that break a layering rule.
fn violations(metadata: &Metadata) -> Vec<String> {
    let mut found = Vec::new();

    for (crate_name, forbidden) in FORBIDDEN {
        let Some(package) = metadata.packages.iter().find(|p| p.name == *crate_name) else {
            continue;
        };

        for dep in &package.dependencies {
            if dep.kind.is_none() && forbidden.contains(&dep.name.as_str()) {
                found.push(format!("{crate_name} must not depend on {}", dep.name));
            }
        }
    }

    found
}
