//! Argument parsing for `/buffer_open` and recognition of the host commands
//! the add-on intercepts.

use crate::error::OpenError;

pub const HELP: &str = "\
Open buffers by full name

/buffer_open closed [-noswitch|-list]
/buffer_open [-noswitch] <full name>

   closed: open the most recently closed buffer
-noswitch: open the buffer without switching to it
    -list: list the remembered closed buffers, newest first
full name: buffer full name, e.g. irc.libera.#rust or script.scripts";

/// A parsed `/buffer_open` invocation.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedCommand {
    Open { full_name: String, noswitch: bool },
    ReopenClosed { noswitch: bool },
    ListClosed,
}

/// Parse the argument string of `/buffer_open`.
pub fn parse_command(args: &str) -> Result<ParsedCommand, OpenError> {
    let mut parts = args.split_whitespace();
    let first = parts.next().ok_or(OpenError::MissingArgument("full name"))?;

    match first {
        "closed" => {
            let command = match parts.next() {
                None => ParsedCommand::ReopenClosed { noswitch: false },
                Some("-noswitch") => ParsedCommand::ReopenClosed { noswitch: true },
                Some("-list") => ParsedCommand::ListClosed,
                Some(other) => return Err(OpenError::UnknownOption(other.to_string())),
            };
            reject_extra(parts)?;
            Ok(command)
        }
        "-noswitch" => {
            let full_name = parts.next().ok_or(OpenError::MissingArgument("full name"))?;
            reject_extra(parts)?;
            Ok(ParsedCommand::Open { full_name: full_name.to_string(), noswitch: true })
        }
        opt if opt.starts_with('-') => Err(OpenError::UnknownOption(opt.to_string())),
        full_name => {
            reject_extra(parts)?;
            Ok(ParsedCommand::Open { full_name: full_name.to_string(), noswitch: false })
        }
    }
}

/// Fail on the first token past the expected arguments.
fn reject_extra<'a>(mut parts: impl Iterator<Item = &'a str>) -> Result<(), OpenError> {
    match parts.next() {
        Some(extra) => Err(OpenError::UnknownOption(extra.to_string())),
        None => Ok(()),
    }
}

/// If `command` is `/layout apply [<name>] [buffers|windows]`, the layout
/// name it applies (`default` when omitted).
pub fn parse_layout_apply(command: &str) -> Option<String> {
    let mut parts = command.split_whitespace();
    if !parts.next()?.eq_ignore_ascii_case("/layout") {
        return None;
    }
    if !parts.next()?.eq_ignore_ascii_case("apply") {
        return None;
    }
    let name = parts
        .find(|arg| *arg != "buffers" && *arg != "windows")
        .unwrap_or("default");
    Some(name.to_string())
}
