//! Command dispatch: turns bot messages into resolver calls and replies.

use crate::reply::Reply;
use std::io::{self, BufRead, Write};
use whereis_core::{MatchResult, Resolver};

/// Messages must start with this to be treated as commands.
pub const COMMAND_PREFIX: char = '~';

const NOT_FOUND_MESSAGE: &str = "Building or command could not be found.\
    \n\nList of buildings can be found at **~whereis list**";

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Arguments joined by single spaces (may be empty).
    Whereis(String),
    Unknown(String),
}

/// Parse `~name arg arg ...`. Returns `None` for ordinary chat messages.
pub fn parse_message(content: &str) -> Option<Command> {
    let mut words = content.split_whitespace();
    let name = words.next()?.strip_prefix(COMMAND_PREFIX)?;
    let args = words.collect::<Vec<_>>().join(" ");

    Some(match name {
        "help" => Command::Help,
        "whereis" => Command::Whereis(args),
        other => Command::Unknown(other.to_owned()),
    })
}

pub struct Dispatcher<'d> {
    resolver: Resolver<'d>,
    image_base: Option<String>,
}

impl<'d> Dispatcher<'d> {
    pub fn new(resolver: Resolver<'d>, image_base: Option<String>) -> Self {
        let image_base = image_base.map(|url| url.trim_end_matches('/').to_owned());
        Self {
            resolver,
            image_base,
        }
    }

    /// Reply to one chat message; `None` if it is not a command this bot
    /// answers. Unknown `~commands` get no reply, like the chat bot.
    pub fn handle_message(&self, content: &str) -> Option<Reply> {
        let command = parse_message(content)?;
        tracing::debug!(?command, "dispatching");
        match command {
            Command::Help => Some(Self::help()),
            Command::Whereis(args) => Some(self.whereis(&args)),
            Command::Unknown(_) => None,
        }
    }

    /// Answer messages from `input`, one per line, until end of input.
    ///
    /// A line that is not valid UTF-8 is skipped; later messages are still
    /// answered.
    pub fn run_chat<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        let mut line_no = 0usize;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            line_no += 1;

            let Ok(line) = std::str::from_utf8(&buf) else {
                tracing::warn!(line = line_no, "skipping message that is not valid UTF-8");
                continue;
            };
            if let Some(reply) = self.handle_message(line) {
                writeln!(output, "{reply}")?;
                output.flush()?;
            }
        }
    }

    /// `~whereis <args>`: the literal `list` lists buildings, anything else is
    /// resolved as a building name or code.
    pub fn whereis(&self, args: &str) -> Reply {
        let args = args.trim();
        if args.eq_ignore_ascii_case("list") {
            return self.list();
        }

        match self.resolver.resolve_by_text(args) {
            MatchResult::Resolved(code) => match self.resolver.display_name(&code) {
                Ok(name) => {
                    let reply = Reply::new("Building Search").description(format!("{name} ({code})"));
                    match &self.image_base {
                        Some(base) => reply.image(format!("{base}/{code}.png")),
                        None => reply,
                    }
                }
                Err(e) => {
                    // resolver returned a code the directory does not know
                    tracing::error!(error = %e, "resolved code missing from directory");
                    Reply::error(NOT_FOUND_MESSAGE)
                }
            },
            MatchResult::NotFound => Reply::error(NOT_FOUND_MESSAGE),
        }
    }

    pub fn list(&self) -> Reply {
        let list = self.resolver.list_all();
        Reply::new("Building List")
            .field("Codes", list.codes.join("\n"), true)
            .field("Full Names", list.full_names.join("\n"), true)
    }

    pub fn help() -> Reply {
        Reply::new("Help Menu")
            .description("Note: Arguments in <this format> do not require the '<', '>' characters")
            .field(
                "General Commands",
                "**`~help`** - return the help menu",
                false,
            )
            .field(
                "Building Search Commands",
                "**`~whereis <buildingName || buildingCode>`** - return building details and location on map\n\
                 **`~whereis list`** - return the list of all building codes and their associating names",
                false,
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whereis_core::Directory;

    fn directory() -> Directory {
        Directory::from_records([("ERIE", "Erie Hall"), ("DH", "Dillon Hall")]).unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_message("~help"), Some(Command::Help));
        assert_eq!(
            parse_message("~whereis   Erie   Hall "),
            Some(Command::Whereis("Erie Hall".into()))
        );
        assert_eq!(parse_message("~whereis"), Some(Command::Whereis(String::new())));
        assert_eq!(parse_message("~purge 5"), Some(Command::Unknown("purge".into())));
        assert_eq!(parse_message("where is erie?"), None);
        assert_eq!(parse_message("   "), None);
    }

    #[test]
    fn whereis_resolves_with_image() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), Some("https://maps.example/img/".into()));
        let reply = d.whereis("erie haull");
        assert_eq!(reply.title, "Building Search");
        assert_eq!(reply.description.as_deref(), Some("Erie Hall (ERIE)"));
        assert_eq!(reply.image_url.as_deref(), Some("https://maps.example/img/ERIE.png"));
    }

    #[test]
    fn whereis_without_image_base() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        assert_eq!(d.whereis("dh").image_url, None);
    }

    #[test]
    fn whereis_not_found_points_to_list() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        for query in ["xyz123", "", "   "] {
            let reply = d.whereis(query);
            assert!(reply.is_error());
            assert!(reply.description.unwrap().contains("**~whereis list**"));
        }
    }

    #[test]
    fn whereis_list_is_aligned() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        let reply = d.handle_message("~whereis LIST").unwrap();
        assert_eq!(reply.title, "Building List");
        assert_eq!(reply.fields[0].value, "DH\nERIE");
        assert_eq!(reply.fields[1].value, "Dillon Hall\nErie Hall");
    }

    #[test]
    fn unknown_commands_and_chat_get_no_reply() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        assert!(d.handle_message("~equation x^2").is_none());
        assert!(d.handle_message("~purge 5").is_none());
        assert!(d.handle_message("hello there").is_none());
        assert_eq!(d.handle_message("~help").unwrap().title, "Help Menu");
    }

    #[test]
    fn chat_skips_invalid_utf8_and_keeps_answering() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        let input: &[u8] = b"~whereis erie\n\xff\xfe hi\n~whereis dillon hall\n";
        let mut output = Vec::new();

        d.run_chat(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Erie Hall (ERIE)"), "{text}");
        assert!(text.contains("Dillon Hall (DH)"), "{text}");
        assert_eq!(text.matches("== Building Search ==").count(), 2);
    }

    #[test]
    fn chat_answers_last_line_without_newline() {
        let dir = directory();
        let d = Dispatcher::new(Resolver::new(&dir), None);
        let mut output = Vec::new();
        d.run_chat("hi all\r\n~whereis DH".as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("== Building Search ==").count(), 1);
        assert!(text.contains("Dillon Hall (DH)"));
    }
}
