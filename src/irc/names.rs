//! IRC buffer full-name conventions.
//!
//! The IRC plugin names its buffers `irc.server.<server>` for server
//! buffers and `irc.<server>.<target>` for channels and private
//! conversations. A target starting with a channel marker is a channel.

use once_cell::sync::Lazy;
use regex::Regex;

static SERVER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^irc\.server\.(.+)$").expect("valid server regex"));
static CHANNEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^irc\.([^.]+)\.([#&+!].+)$").expect("valid channel regex"));
static QUERY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^irc\.([^.]+)\.(.+)$").expect("valid query regex"));

/// An IRC buffer identified from its full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrcBuffer {
    Server { server: String },
    Channel { server: String, channel: String },
    Query { server: String, nick: String },
}

impl IrcBuffer {
    /// Classify a full name. Shapes are tried server, channel, query; the
    /// first match wins.
    pub fn parse(full_name: &str) -> Option<Self> {
        if let Some(caps) = SERVER_RE.captures(full_name) {
            return Some(IrcBuffer::Server { server: caps[1].to_string() });
        }
        if let Some(caps) = CHANNEL_RE.captures(full_name) {
            return Some(IrcBuffer::Channel {
                server: caps[1].to_string(),
                channel: caps[2].to_string(),
            });
        }
        if let Some(caps) = QUERY_RE.captures(full_name) {
            return Some(IrcBuffer::Query {
                server: caps[1].to_string(),
                nick: caps[2].to_string(),
            });
        }
        None
    }

    /// IRC plugin command that creates this buffer.
    pub fn open_command(&self, noswitch: bool) -> String {
        let flag = if noswitch { " -noswitch" } else { "" };
        match self {
            IrcBuffer::Server { server } => format!("/connect {}", server),
            IrcBuffer::Channel { server, channel } => {
                format!("/join{} -server {} {}", flag, server, channel)
            }
            IrcBuffer::Query { server, nick } => {
                format!("/query{} -server {} {}", flag, server, nick)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            IrcBuffer::parse("irc.server.libera"),
            Some(IrcBuffer::Server { server: "libera".into() })
        );
        assert_eq!(
            IrcBuffer::parse("irc.libera.#rust"),
            Some(IrcBuffer::Channel { server: "libera".into(), channel: "#rust".into() })
        );
        assert_eq!(
            IrcBuffer::parse("irc.oftc.&local"),
            Some(IrcBuffer::Channel { server: "oftc".into(), channel: "&local".into() })
        );
        assert_eq!(
            IrcBuffer::parse("irc.libera.alice"),
            Some(IrcBuffer::Query { server: "libera".into(), nick: "alice".into() })
        );
        assert_eq!(
            IrcBuffer::parse("irc.libera.+foo"),
            Some(IrcBuffer::Channel { server: "libera".into(), channel: "+foo".into() })
        );
        assert_eq!(IrcBuffer::parse("python.foo"), None);
        assert_eq!(IrcBuffer::parse("irc.libera"), None);
    }

    #[test]
    fn test_server_shape_wins_over_query() {
        // "server" would otherwise be read as a server name with nick "x"
        assert_eq!(
            IrcBuffer::parse("irc.server.x"),
            Some(IrcBuffer::Server { server: "x".into() })
        );
    }

    #[test]
    fn test_bare_marker_is_not_a_channel() {
        assert_eq!(
            IrcBuffer::parse("irc.libera.#"),
            Some(IrcBuffer::Query { server: "libera".into(), nick: "#".into() })
        );
    }

    #[test]
    fn test_channel_with_dots() {
        assert_eq!(
            IrcBuffer::parse("irc.libera.#rust.beginners"),
            Some(IrcBuffer::Channel {
                server: "libera".into(),
                channel: "#rust.beginners".into()
            })
        );
    }

    #[test]
    fn test_open_command() {
        let chan = IrcBuffer::Channel { server: "libera".into(), channel: "#rust".into() };
        assert_eq!(chan.open_command(false), "/join -server libera #rust");
        assert_eq!(chan.open_command(true), "/join -noswitch -server libera #rust");

        let query = IrcBuffer::Query { server: "libera".into(), nick: "alice".into() };
        assert_eq!(query.open_command(true), "/query -noswitch -server libera alice");

        let server = IrcBuffer::Server { server: "libera".into() };
        assert_eq!(server.open_command(true), "/connect libera");
    }
}
