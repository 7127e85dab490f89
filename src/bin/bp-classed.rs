// Entrypoint for `bp-classed`: React component boilerplate whose markup
// and styles share a random CSS class token drawn for this run.

use bp::{Config, Reporter, Variant};

fn main() -> anyhow::Result<()> {
    bp::init_logging();

    let config = Config::from_args(std::env::args_os(), Variant::Classed)?;

    bp::generate(&config, &mut Reporter::stdout())?;
    Ok(())
}
