use clap::Command;
use anyhow::Result;

pub mod compare;
pub mod explain;
pub mod filename;
pub mod sort;

pub fn get_cli() -> Command {
    build_cli(
        Command::new("version_compare")
            .about("Parse, compare and sort loosely formatted product versions")
    )
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.subcommand(sort::args())
        .subcommand(compare::args())
        .subcommand(explain::args())
        .subcommand(filename::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return sort::main(matches);
        }

        Some(("compare", matches)) => {
            return compare::main(matches);
        }

        Some(("explain", matches)) => {
            return explain::main(matches);
        }

        Some(("filename", matches)) => {
            return filename::main(matches);
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}
