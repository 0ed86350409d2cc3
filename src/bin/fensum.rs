//! Console driver for the `fensum` command shell.
//!
//! Set `FENSUM_LOG=debug` to see rejected operations.

use std::io::{self, BufRead, Write};

use fensum::shell::{self, Command, Output, MENU};
use fensum::FenwickTree;

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

fn main() -> fensum::error::Result<()> {
    if std::env::var("FENSUM_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("FENSUM_LOG")
            .write_style("FENSUM_LOG_STYLE");
        env_logger::init_from_env(env);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();
    let mut tree = FenwickTree::new();

    loop {
        prompt(&mut out, "Enter number of elements: ")?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let size = match shell::parse_size(&line) {
            Ok(size) => size,
            Err(err) => {
                log::debug!("{err}");
                writeln!(out, "  {err}")?;
                continue;
            }
        };
        match shell::execute(&mut tree, Command::Init { size }) {
            Output::Initialized { .. } => break,
            rejected => writeln!(out, "  {rejected}")?,
        }
    }

    writeln!(out, "\n{MENU}")?;
    loop {
        prompt(&mut out, "\nEnter your choice: ")?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                log::debug!("{err}");
                writeln!(out, "  {err}")?;
                continue;
            }
        };
        let output = shell::execute(&mut tree, command);
        writeln!(out, "  {output}")?;
        if output == Output::Quit {
            break;
        }
    }
    Ok(())
}
