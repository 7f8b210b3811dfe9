//! Главный исполняемый файл sqlnorm

use sqlnorm::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::init();
    cli.execute()
}
