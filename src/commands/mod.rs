use crate::cli::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Init(args) => init::run(args),
        Command::New(args) => new::run(args),
        Command::Release(args) => release::run(args),
        Command::List(args) => list::run(args),
    }
}

pub mod init;
pub mod list;
pub mod new;
pub mod release;
