use std::collections::HashSet;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{arg, Command};

use loose_version::{cmp_versions, Version};

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort versions")
        .long_about("Take a list of versions, sort and print them in descending order")
        .arg(arg!(versions: <version>... "Versions to sort"))
        .arg(arg!(--"skip-invalid" "Skip invalid versions"))
        .arg(arg!(--ascending "output in ascending order")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order (default)")
            .overrides_with("ascending")
        )
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let versions = matches.get_many::<String>("versions").context("version expected")?;
    let skip_invalid = matches.get_flag("skip-invalid");
    let descending = !matches.get_flag("ascending");

    let versions = sort_versions(versions.map(String::as_str), skip_invalid)?;

    let mut stdout = std::io::stdout().lock();
    write_versions(&mut stdout, &versions, descending)
}

/// Parses, drops duplicates and sorts ascending.
///
/// Duplicates go by `==` ("1.5" and "1.5.0" are one), the first one seen is kept.
/// They are dropped before sorting, `compare` is not transitive across
/// qualifiers so equal versions need not end up next to each other.
pub fn sort_versions<'a>(inputs: impl IntoIterator<Item = &'a str>, skip_invalid: bool) -> Result<Vec<Version>> {

    let mut versions = Vec::new();

    for input in inputs {
        match Version::parse(input) {
            Ok(v) => versions.push(v),
            Err(err) if skip_invalid => {
                tracing::warn!("skipping {input:?}: {err}");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("cannot sort {input:?}"));
            }
        }
    }

    let mut seen = HashSet::new();
    versions.retain(|v| seen.insert(v.clone()));

    versions.sort_by(cmp_versions);

    Ok(versions)
}

pub fn write_versions<W: Write>(out: &mut W, versions: &[Version], descending: bool) -> Result<()> {
    if descending {
        for v in versions.iter().rev() {
            writeln!(out, "{v}")?;
        }
    } else {
        for v in versions {
            writeln!(out, "{v}")?;
        }
    }
    Ok(())
}
