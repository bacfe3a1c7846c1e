use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;

use ultimate_crypto_toolkit::save;

/// One row of the sample data set. Mixed case on purpose.
#[derive(Debug, Serialize)]
struct Contact {
    #[serde(rename = "Name")]
    name: &'static str,
    #[serde(rename = "Email")]
    email: &'static str,
    #[serde(rename = "Country")]
    country: &'static str,
    #[serde(rename = "Active")]
    active: bool,
}

const CONTACTS: [Contact; 4] = [
    Contact { name: "Ada Lovelace", email: "Ada@Example.COM", country: "UK", active: true },
    Contact { name: "Alan Turing", email: "Alan.Turing@Example.org", country: "UK", active: false },
    Contact { name: "Grace Hopper", email: "GRACE@navy.MIL", country: "US", active: true },
    Contact { name: "Edsger Dijkstra", email: "EWD@Example.NL", country: "NL", active: true },
];

fn main() -> Result<()> {
    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    write_samples(&dir)?;

    println!("Wrote {} contacts to {}", CONTACTS.len(), dir.display());
    Ok(())
}

/// Write `sample.json`, `sample.csv` and `sample.txt` into `dir`.
fn write_samples(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let records = serde_json::to_value(CONTACTS).context("serializing contacts")?;
    save(&records, &dir.join("sample.json")).context("writing sample.json")?;
    save(&records, &dir.join("sample.csv")).context("writing sample.csv")?;
    save(
        &json!("The Quick Brown Fox Jumps Over The Lazy Dog.\n"),
        &dir.join("sample.txt"),
    )
    .context("writing sample.txt")?;

    Ok(())
}
