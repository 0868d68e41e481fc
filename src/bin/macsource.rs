//! MacSource command-line binary

fn main() -> anyhow::Result<()> {
    macsource::cli::run_cli()
}
