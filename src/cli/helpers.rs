use super::errors::NxExtractCliError;
use crate::Cli;
use clap::CommandFactory;

pub fn exit_with_error(error: NxExtractCliError) -> ! {
    let mut cmd = Cli::command();
    cmd.error(error.clone().into(), error.to_string()).exit();
}
