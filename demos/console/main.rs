//! Console front end for the cube lattice.
//!
//! Reads move tokens from stdin (several per line, separated by whitespace)
//! and prints the unfolded cube after every line.
//!
//! ```text
//! cargo run --example console
//! > r
//! > yi g
//! ```
//!
//! Set `RUST_LOG=rubik_lattice=debug` to see each turn as it is applied.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use rubik_lattice::operations::query::ReadNet;
use rubik_lattice::render::RenderParams;
use rubik_lattice::session::Session;
use rubik_lattice::view::ViewParams;

fn main() -> io::Result<()> {
    // Default: WARN for everything, INFO for the console and the crate.
    // Override with RUST_LOG env var (e.g. RUST_LOG=rubik_lattice=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("console=info".parse().unwrap_or_default())
        .add_directive("rubik_lattice=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let mut session = Session::new(ViewParams::default(), RenderParams::default());
    let mut clock = Instant::now();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "{}", ReadNet::new().execute(session.lattice()))?;
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line?;
        if matches!(line.trim(), "q" | "quit" | "exit") {
            break;
        }
        for token in line.split_whitespace() {
            session.enqueue(token);
        }

        let elapsed = clock.elapsed().as_secs_f64();
        clock = Instant::now();
        let applied = session.update(elapsed);
        if !applied.is_empty() {
            let moves: Vec<String> = applied.iter().map(ToString::to_string).collect();
            tracing::info!(moves = %moves.join(" "), "applied");
        }

        write!(stdout, "{}", ReadNet::new().execute(session.lattice()))?;
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}
