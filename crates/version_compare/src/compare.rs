use std::cmp::Ordering;
use std::io::Write;

use anyhow::{Context, Result};
use clap::{arg, Command};

use loose_version::Version;

pub fn args() -> Command {
    Command::new("compare")
        .about("Compare two versions")
        .long_about("Print how two versions order, and whether they are equal. \
                     Versions differing only in qualifiers or update marker order as equal \
                     while not being equal.")
        .visible_alias("cmp")
        .arg(arg!(left: <left> "Left hand version"))
        .arg(arg!(right: <right> "Right hand version"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let left = matches.get_one::<String>("left").context("left version expected")?;
    let right = matches.get_one::<String>("right").context("right version expected")?;

    let left = Version::parse(left).with_context(|| format!("left version {left:?}"))?;
    let right = Version::parse(right).with_context(|| format!("right version {right:?}"))?;

    let mut stdout = std::io::stdout().lock();
    write_comparison(&mut stdout, &left, &right)
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn write_comparison<W: Write>(out: &mut W, left: &Version, right: &Version) -> Result<()> {
    writeln!(out, "{} {} {}", left, symbol(left.compare(right)), right)?;
    writeln!(out, "equal: {}", left == right)?;
    Ok(())
}
