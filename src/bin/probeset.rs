use std::io::{self, BufRead, Write};

use collections::probing::DEFAULT_CAPACITY;
use log::{debug, trace};
use probeset::{DriverError, Session, parse_capacity};

fn main() -> Result<(), DriverError> {
    env_logger::builder().init();

    let capacity = match std::env::args().nth(1) {
        Some(arg) => parse_capacity(&arg)?,
        None => DEFAULT_CAPACITY,
    };
    let mut session = Session::new(capacity)?;
    debug!(target: "main", "table created with {} slots", session.set().capacity());

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut buf = String::with_capacity(1024);

    for line in stdin.lock().lines() {
        let line = line.inspect_err(|e| trace!(target: "main", "error on stdin read {e}"))?;

        buf.clear();
        let keep_going = session.handle_line(&line, &mut buf);
        stdout.write_all(buf.as_bytes())?;
        stdout.flush()?;

        if !keep_going {
            return Ok(());
        }
    }

    trace!(target: "main", "stdin: EOF");
    Ok(())
}
