use std::io::Write;

use anyhow::{Context, Result};
use clap::{arg, Command};
use serde::Serialize;

use loose_version::{PreRelease, Version};

pub fn args() -> Command {
    Command::new("explain")
        .about("Show how versions are taken apart")
        .arg(arg!(versions: <version>... "Versions to explain"))
        .arg(arg!(--json "output one json object per version"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let inputs = matches.get_many::<String>("versions").context("version expected")?;
    let json = matches.get_flag("json");

    let mut stdout = std::io::stdout().lock();

    for (nth, input) in inputs.enumerate() {
        let version = Version::parse(input).with_context(|| format!("cannot explain {input:?}"))?;
        let explanation = Explanation::new(input, &version);
        if json {
            serde_json::to_writer(&mut stdout, &explanation)?;
            writeln!(stdout)?;
        } else {
            if nth > 0 {
                writeln!(stdout)?;
            }
            explanation.write_text(&mut stdout)?;
        }
    }

    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Explanation<'a> {
    pub input: &'a str,
    pub canonical: &'a str,
    pub base: String,
    pub numbers: &'a [u64],
    pub suffix: Option<&'a str>,
    pub pre_release: PreRelease,
    pub update_marker: Option<&'a str>,
    pub qualifiers: &'a [String],
    pub snapshot: bool,
}

impl<'a> Explanation<'a> {

    pub fn new(input: &'a str, version: &'a Version) -> Self {
        Self {
            input,
            canonical: version.as_str(),
            base: version.base_version_string(),
            numbers: version.ordered_numbers(),
            suffix: version.version_part_suffix(),
            pre_release: version.pre_release(),
            update_marker: version.update_marker(),
            qualifiers: version.qualifiers(),
            snapshot: version.is_snapshot(),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {

        let pre_release = match self.pre_release {
            PreRelease::Beta(n) => format!("beta {n}"),
            PreRelease::ReleaseCandidate(n) => format!("release candidate {n}"),
            PreRelease::Final => "final".to_string(),
        };

        let mut tw = tabwriter::TabWriter::new(out);
        writeln!(tw, "input\t{:?}", self.input)?;
        writeln!(tw, "canonical\t{}", self.canonical)?;
        writeln!(tw, "numbers\t{}", self.base)?;
        writeln!(tw, "suffix\t{}", self.suffix.unwrap_or("-"))?;
        writeln!(tw, "pre-release\t{pre_release}")?;
        writeln!(tw, "update\t{}", self.update_marker.unwrap_or("-"))?;
        writeln!(tw, "qualifiers\t{}", self.qualifiers.join(" "))?;
        writeln!(tw, "snapshot\t{}", self.snapshot)?;
        tw.flush()?;

        Ok(())
    }
}
