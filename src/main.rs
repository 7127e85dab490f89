// Entrypoint for `bp`: Ionic React component boilerplate.
// - Keeps `main` small: build the config from the command line and hand it
//   to the library pipeline.
// - Returns `anyhow::Result` so any failure ends the process with
//   `Error: <message>` and a non-zero status.

use bp::{Config, Reporter, Variant};

fn main() -> anyhow::Result<()> {
    bp::init_logging();

    // Fails with "Please provide a name for the component." before
    // anything touches the filesystem.
    let config = Config::from_args(std::env::args_os(), Variant::Ionic)?;

    bp::generate(&config, &mut Reporter::stdout())?;
    Ok(())
}
