mod cli;
mod commands;

use cli::{Entity, RenderParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    let Some(entity) = Entity::from_name(name) else {
        unreachable!("clap should have caught this")
    };

    let params = RenderParams::from_matches(entity, m);
    init_tracing(params.verbose);
    commands::render::run(params.into());
}

/// Log to stderr so stdout stays a clean query document.
///
/// `RUST_LOG` is honored unless `--verbose` asks for debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("entql=debug,entql_lib=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
