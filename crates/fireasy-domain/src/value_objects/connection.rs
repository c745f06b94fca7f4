//! Connection string value objects
//!
//! [`ConnectionString`] keeps the ordered `key=value;` pairs of a driver
//! connection string with case-insensitive key lookup. URL-shaped strings
//! (`mongodb://...`) carry no pairs and are kept verbatim.
//! [`ConnectionParameter`] is the decomposed view used while a connection
//! is being opened.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DATABASE_KEYS, PASSWORD_KEYS, PORT_KEYS, SCHEMA_KEYS, SERVER_KEYS, USER_KEYS,
};
use crate::error::{Error, Result};

/// Driver connection string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ConnectionString {
    raw: String,
    pairs: Vec<Pair>,
}

/// One `key=value` segment and the delimiters its value was written with
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    key: String,
    value: String,
    wrap: Option<(char, char)>,
}

impl ConnectionString {
    /// Parse a connection string
    ///
    /// Parsing is lenient: empty segments and segments without `=` are
    /// skipped. Values that open with `{`, `'` or `"` are unwrapped and may
    /// contain `;`; a quote later in a value is an ordinary character.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let pairs = if is_url(&raw) {
            Vec::new()
        } else {
            parse_pairs(&raw)
        };
        Self { raw, pairs }
    }

    /// Parse a connection string, rejecting input that yields nothing usable
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_connection_string("connection string is empty"));
        }
        let parsed = Self::new(trimmed);
        if !parsed.is_url() && parsed.pairs.is_empty() {
            return Err(Error::invalid_connection_string(format!(
                "no key=value pairs found in '{trimmed}'"
            )));
        }
        Ok(parsed)
    }

    /// The original text this value was built from
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether this is a URL-shaped connection string
    pub fn is_url(&self) -> bool {
        is_url(&self.raw)
    }

    /// Look up a value by key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.key.eq_ignore_ascii_case(key))
            .map(|pair| pair.value.as_str())
    }

    /// Look up the first key of `keys` that is present
    pub fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Whether the key is present (case-insensitive)
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, replacing an existing key in place or appending
    ///
    /// A replaced value keeps the delimiters the original was written with.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self
            .pairs
            .iter_mut()
            .find(|pair| pair.key.eq_ignore_ascii_case(&key))
        {
            Some(pair) => pair.value = value,
            None => self.pairs.push(Pair {
                key,
                value,
                wrap: None,
            }),
        }
        self.raw = render_pairs(&self.pairs);
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self
            .pairs
            .iter()
            .position(|pair| pair.key.eq_ignore_ascii_case(key))?;
        let removed = self.pairs.remove(index);
        self.raw = render_pairs(&self.pairs);
        Some(removed.value)
    }

    /// Replace the whole text of a URL-shaped connection string
    pub fn replace_url(&mut self, url: impl Into<String>) {
        *self = Self::new(url);
    }

    /// Key/value pairs in source order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|pair| (pair.key.as_str(), pair.value.as_str()))
    }
}

impl fmt::Display for ConnectionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for ConnectionString {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ConnectionString {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<ConnectionString> for String {
    fn from(value: ConnectionString) -> Self {
        value.raw
    }
}

fn is_url(raw: &str) -> bool {
    raw.trim_start()
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.is_empty() && !scheme.contains(['=', ';']))
}

fn parse_pairs(raw: &str) -> Vec<Pair> {
    let mut pairs = Vec::new();
    let mut segment = String::new();
    let mut closing: Option<char> = None;
    let mut seen_eq = false;
    // Between the first `=` and the first non-blank value character
    let mut value_pending = false;

    for ch in raw.chars() {
        match closing {
            Some(end) if ch == end => {
                closing = None;
                segment.push(ch);
            }
            Some(_) => segment.push(ch),
            None => match ch {
                ';' => {
                    push_segment(&mut pairs, &segment);
                    segment.clear();
                    seen_eq = false;
                    value_pending = false;
                }
                '=' if !seen_eq => {
                    seen_eq = true;
                    value_pending = true;
                    segment.push(ch);
                }
                '{' | '\'' | '"' if value_pending => {
                    closing = Some(if ch == '{' { '}' } else { ch });
                    value_pending = false;
                    segment.push(ch);
                }
                c if c.is_whitespace() => segment.push(c),
                _ => {
                    value_pending = false;
                    segment.push(ch);
                }
            },
        }
    }
    push_segment(&mut pairs, &segment);
    pairs
}

fn push_segment(pairs: &mut Vec<Pair>, segment: &str) {
    let Some((key, value)) = segment.split_once('=') else {
        return;
    };
    let key = key.trim();
    if key.is_empty() {
        return;
    }
    let (value, wrap) = unwrap_value(value.trim());
    pairs.push(Pair {
        key: key.to_string(),
        value: value.to_string(),
        wrap,
    });
}

fn unwrap_value(value: &str) -> (&str, Option<(char, char)>) {
    for (open, close) in [('{', '}'), ('\'', '\''), ('"', '"')] {
        if value.len() >= 2 && value.starts_with(open) && value.ends_with(close) {
            return (&value[1..value.len() - 1], Some((open, close)));
        }
    }
    (value, None)
}

fn render_pairs(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(|pair| {
            let (key, value) = (&pair.key, &pair.value);
            match pair.wrap.filter(|&(_, close)| !value.contains(close)) {
                Some((open, close)) => format!("{key}={open}{value}{close}"),
                None if needs_wrap(value) => {
                    if value.contains('}') {
                        format!("{key}=\"{value}\"")
                    } else {
                        format!("{key}={{{value}}}")
                    }
                }
                None => format!("{key}={value}"),
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Whether a bare value would be read back differently
fn needs_wrap(value: &str) -> bool {
    value.contains(';')
        || value.starts_with(['{', '\'', '"'])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
}

/// Decomposed connection settings
///
/// Constructed when a connection is opened and discarded afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionParameter {
    /// Server host name or data source
    pub server: Option<String>,
    /// Database / initial catalog / file
    pub database: Option<String>,
    /// Login name
    pub user_id: Option<String>,
    /// Login password
    pub password: Option<String>,
    /// Server port
    pub port: Option<u16>,
    /// Default schema
    pub schema: Option<String>,
    /// Remaining driver-specific keys
    pub properties: BTreeMap<String, String>,
}

impl ConnectionParameter {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    /// Set the database
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the login name
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Read the well-known keys of a `key=value` connection string
    ///
    /// Keys that are not recognised end up in `properties`.
    pub fn from_pairs(connection: &ConnectionString) -> Result<Self> {
        let port = connection
            .get_any(PORT_KEYS)
            .map(|port| {
                port.parse::<u16>().map_err(|_| {
                    Error::invalid_connection_string(format!("invalid port '{port}'"))
                })
            })
            .transpose()?;

        let known: Vec<&str> = [
            SERVER_KEYS,
            DATABASE_KEYS,
            USER_KEYS,
            PASSWORD_KEYS,
            PORT_KEYS,
            SCHEMA_KEYS,
        ]
        .concat();

        let properties = connection
            .pairs()
            .filter(|(k, _)| !known.iter().any(|known| known.eq_ignore_ascii_case(k)))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Ok(Self {
            server: connection.get_any(SERVER_KEYS).map(str::to_string),
            database: connection.get_any(DATABASE_KEYS).map(str::to_string),
            user_id: connection.get_any(USER_KEYS).map(str::to_string),
            password: connection.get_any(PASSWORD_KEYS).map(str::to_string),
            port,
            schema: connection.get_any(SCHEMA_KEYS).map(str::to_string),
            properties,
        })
    }

    /// Write the populated fields back into a `key=value` connection string
    ///
    /// An existing alias of each field is updated in place; when none is
    /// present the first key of the alias list is appended.
    pub fn apply_to_pairs(&self, connection: &mut ConnectionString) {
        let fields: [(&[&str], Option<String>); 6] = [
            (SERVER_KEYS, self.server.clone()),
            (DATABASE_KEYS, self.database.clone()),
            (USER_KEYS, self.user_id.clone()),
            (PASSWORD_KEYS, self.password.clone()),
            (PORT_KEYS, self.port.map(|p| p.to_string())),
            (SCHEMA_KEYS, self.schema.clone()),
        ];
        for (keys, value) in fields {
            let Some(value) = value else { continue };
            let key = keys
                .iter()
                .find(|key| connection.contains_key(key))
                .unwrap_or(&keys[0]);
            connection.set(*key, value);
        }
        for (key, value) in &self.properties {
            connection.set(key.clone(), value.clone());
        }
    }
}
