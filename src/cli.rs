use filterdate::Cli;

fn main() -> anyhow::Result<()> {
    Cli::run()
}
