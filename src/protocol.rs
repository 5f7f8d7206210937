use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(i32),
    Search(i32),
    Remove(i32),
    Dump,
    Stats,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("`{command}` expects {want} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        want: usize,
        got: usize,
    },

    #[error("invalid key `{0}`, expected a 32-bit signed integer")]
    InvalidKey(String),

    #[error("invalid capacity `{0}`, expected a positive integer")]
    InvalidCapacity(String),
}

pub mod reply {
    pub const RES_OK: &str = "ok";
    pub const RES_NX: &str = "nx";
    pub const RES_ERR: &str = "err";

    /// Appends a single `<status> <data>` line to `buf`
    pub fn serialize(status: &str, data: &str, buf: &mut String) {
        buf.reserve(status.len() + data.len() + 2);
        buf.push_str(status);
        if !data.is_empty() {
            buf.push(' ');
            buf.push_str(data);
        }
        buf.push('\n');
    }
}

/// Parses one line of input, blank lines give `Ok(None)`
///
/// Verbs are case insensitive, arguments are separated by whitespace.
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let args: Vec<&str> = line.split_whitespace().collect();
    let Some((verb, rest)) = args.split_first() else {
        return Ok(None);
    };

    let cmd = match verb.to_ascii_lowercase().as_str() {
        "insert" => Command::Insert(get_key("insert", rest)?),
        "search" => Command::Search(get_key("search", rest)?),
        "remove" => Command::Remove(get_key("remove", rest)?),
        "dump" => no_args("dump", rest, Command::Dump)?,
        "stats" => no_args("stats", rest, Command::Stats)?,
        "help" => no_args("help", rest, Command::Help)?,
        "quit" | "exit" => no_args("quit", rest, Command::Quit)?,
        _ => return Err(ParseError::UnknownCommand((*verb).into())),
    };

    Ok(Some(cmd))
}

/// Parses the capacity given on the command line
pub fn parse_capacity(arg: &str) -> Result<usize, ParseError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidCapacity(arg.into())),
    }
}

fn get_key(command: &'static str, args: &[&str]) -> Result<i32, ParseError> {
    match args {
        [key] => key
            .parse()
            .map_err(|_| ParseError::InvalidKey((*key).into())),
        _ => Err(ParseError::WrongArity {
            command,
            want: 1,
            got: args.len(),
        }),
    }
}

fn no_args(command: &'static str, args: &[&str], cmd: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(ParseError::WrongArity {
            command,
            want: 0,
            got: args.len(),
        })
    }
}
