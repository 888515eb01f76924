use std::{
    env,
    io::{self, BufWriter, Write},
    process,
};

use env_logger::Env;
use isaac_stream::{check_args, Isaac, Result, Seed, Stream, BLOCK_SIZE};
use log::debug;

const BUFFER_SIZE: usize = 64 * BLOCK_SIZE;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(err) = run() {
        debug!("fatal: {err:?}");
        eprint!("{}", err.diagnostic());
        process::abort();
    }
}

fn run() -> Result<()> {
    check_args(env::args_os().skip(1))?;

    let seed = Seed::read_from(io::stdin().lock())?;
    let stdout = BufWriter::with_capacity(BUFFER_SIZE, io::stdout().lock());
    let mut stream = Stream::new(Isaac::new(&seed), stdout);
    let shutdown = stream.run()?;
    debug!("stopped after {} blocks", shutdown.blocks);

    // The consumer is gone, so anything still buffered has nowhere to go.
    let _ = stream.into_sink().flush();
    Ok(())
}
