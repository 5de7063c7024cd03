use clap::Parser;

use courier_cli::{Cli, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    courier_observability::init(
        cli.log_format.into(),
        courier_observability::directive_for_verbosity(cli.verbose),
    );

    let (warehouse, store) = cli.inventories()?;
    tracing::info!(
        warehouse_capacity = warehouse.capacity(),
        store_capacity = store.capacity(),
        "courier ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(warehouse, store, stdin.lock(), stdout.lock())
        .with_listing(cli.listing)
        .run()
}
