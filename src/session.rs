use collections::{ProbeSetError, ProbingHashSet};
use log::trace;

use crate::protocol::{
    Command, parse_command,
    reply::{RES_ERR, RES_NX, RES_OK, serialize},
};

const HELP: &str = "commands: insert K, search K, remove K, dump, stats, help, quit";

/// Runs commands against a single set it owns
#[derive(Debug)]
pub struct Session {
    set: ProbingHashSet,
}

impl Session {
    pub fn new(capacity: usize) -> Result<Self, ProbeSetError> {
        Ok(Self {
            set: ProbingHashSet::new(capacity)?,
        })
    }

    pub fn set(&self) -> &ProbingHashSet {
        &self.set
    }

    /// Parses and executes one line, writing the reply into `buf`
    ///
    /// Returns `false` once the session should end.
    pub fn handle_line(&mut self, line: &str, buf: &mut String) -> bool {
        match parse_command(line) {
            Ok(Some(cmd)) => self.execute(cmd, buf),
            Ok(None) => true,
            Err(e) => {
                trace!(target: "handle_line", "could not parse {line:?}: {e}");
                serialize(RES_ERR, &e.to_string(), buf);
                true
            }
        }
    }

    /// Executes `cmd` and appends exactly one reply line to `buf`
    ///
    /// Returns `false` once the session should end.
    pub fn execute(&mut self, cmd: Command, buf: &mut String) -> bool {
        trace!(target: "execute", "{cmd:?}");
        match cmd {
            Command::Insert(key) => match self.set.insert(key) {
                Ok(slot) => serialize(RES_OK, &format!("inserted {key} at slot {slot}"), buf),
                Err(e @ ProbeSetError::DuplicateKey { .. }) => {
                    serialize(RES_NX, &e.to_string(), buf)
                }
                Err(e) => serialize(RES_ERR, &e.to_string(), buf),
            },
            Command::Search(key) => match self.set.search(key) {
                Some(slot) => serialize(RES_OK, &format!("found {key} at slot {slot}"), buf),
                None => serialize(RES_NX, &format!("Key {key} not found"), buf),
            },
            Command::Remove(key) => match self.set.remove(key) {
                Ok(()) => serialize(RES_OK, &format!("removed {key}"), buf),
                Err(e) => serialize(RES_NX, &e.to_string(), buf),
            },
            Command::Dump => serialize(RES_OK, &self.set.to_string(), buf),
            Command::Stats => {
                let stats = format!(
                    "len={} capacity={} tombstones={} load_factor={:.3}",
                    self.set.len(),
                    self.set.capacity(),
                    self.set.tombstones(),
                    self.set.load_factor()
                );
                serialize(RES_OK, &stats, buf)
            }
            Command::Help => serialize(RES_OK, HELP, buf),
            Command::Quit => {
                serialize(RES_OK, "bye", buf);
                return false;
            }
        }

        true
    }
}
