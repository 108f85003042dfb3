use log::info;
use roster::{parse, Config, RecordStore, RosterError};
use std::env;
use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;

const USAGE: &str = "Usage: roster <studentCount> <studentFile>";

/// What a successful run did.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The arguments were wrong and usage was printed.
    Usage,
    /// This many students were loaded and written out.
    Loaded(usize),
}

#[inline]
fn execute<W: Write>(config: &Config, out: W) -> Result<usize, RosterError> {
    let mut store = RecordStore::new(config.count);
    store.load_path(&config.path)?;
    info!(
        "{} students loaded from {}",
        store.count(),
        config.path.display()
    );

    parse::unload_data(&store, out)?;
    Ok(store.count())
}

/// Run against `args` (program name excluded), writing usage or the roster to `out`.
fn run<I, W>(args: I, mut out: W) -> Result<Outcome, RosterError>
where
    I: IntoIterator<Item = String>,
    W: Write,
{
    let config = match Config::from_args(args)? {
        Some(config) => config,
        None => {
            writeln!(out, "{USAGE}")?;
            return Ok(Outcome::Usage);
        }
    };

    execute(&config, out).map(Outcome::Loaded)
}

fn main() -> ExitCode {
    env_logger::init();

    if let Err(error) = run(env::args().skip(1), BufWriter::new(stdout())) {
        eprintln!("Fatal Error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
