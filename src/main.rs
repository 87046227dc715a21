use anyhow::Result;

mod app;
mod cli;
mod logging;

fn main() -> Result<()> {
    app::run(cli::parse())
}
