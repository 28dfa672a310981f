use std::io::Write;

use anyhow::{Context, Result};
use clap::{arg, Command};

use loose_version::maven;

pub fn args() -> Command {
    Command::new("filename")
        .about("Find the version in artifact file names")
        .long_about("Find the version in maven style artifact file names, \
                     given without their extension (geronimo-stax-api_1.0_spec-1.0.1)")
        .visible_alias("fn")
        .arg(arg!(names: <name>... "File names without extension"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let names = matches.get_many::<String>("names").context("file name expected")?;

    let mut stdout = std::io::stdout().lock();
    write_table(&mut stdout, names.map(String::as_str))
}

pub fn write_table<'a, W: Write>(out: &mut W, names: impl IntoIterator<Item = &'a str>) -> Result<()> {

    let mut tw = tabwriter::TabWriter::new(out);
    writeln!(tw, "name\tversion\tsnapshot")?;

    for name in names {

        let version = maven::extract_version(name);

        let snapshot = if let Some(snap) = maven::parse_timestamped_snapshot(name) {
            format!("{} build {}", snap.timestamp, snap.build_number)
        } else if version.as_ref().is_some_and(|v| v.is_snapshot()) {
            maven::MAVEN_SNAPSHOT_VERSION.to_string()
        } else {
            "-".to_string()
        };

        let version = version.map_or_else(|| "-".to_string(), |v| v.to_string());

        writeln!(tw, "{name}\t{version}\t{snapshot}")?;
    }

    tw.flush()?;
    Ok(())
}
