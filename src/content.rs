//! Content store: the fixed table of facts the bot answers from.
//!
//! Loaded once at startup (embedded JSON or an operator-supplied file),
//! validated, then shared read-only for the process lifetime.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Content shipped with the binary.
const EMBEDDED: &str = include_str!("../data/furia.json");

/// Errors that can occur when loading content.
#[derive(Debug)]
pub enum ContentError {
    /// Failed to read the content file.
    ReadFile { path: PathBuf, source: std::io::Error },
    /// Failed to parse JSON.
    ParseJson { origin: String, source: serde_json::Error },
    /// Validation error.
    Validation(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadFile { path, source } => {
                write!(f, "failed to read content file '{}': {}", path.display(), source)
            }
            Self::ParseJson { origin, source } => {
                write!(f, "failed to parse content from {}: {}", origin, source)
            }
            Self::Validation(msg) => write!(f, "content validation error: {}", msg),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadFile { source, .. } => Some(source),
            Self::ParseJson { source, .. } => Some(source),
            Self::Validation(_) => None,
        }
    }
}

/// The two games FURIA fields rosters in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Csgo,
    Valorant,
}

/// Match outcome from FURIA's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Game {
    pub const ALL: [Game; 2] = [Game::Csgo, Game::Valorant];

    pub fn title(self) -> &'static str {
        match self {
            Game::Csgo => "CS:GO 2",
            Game::Valorant => "VALORANT",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Game::Csgo => "🎮",
            Game::Valorant => "💥",
        }
    }

    /// Classify a score string ("A-B", FURIA first).
    ///
    /// CS:GO scores are series wins, so only a leading 2 is a win. Valorant
    /// results also count a leading 1.
    pub fn outcome(self, score: &str) -> Outcome {
        let first = score.split('-').next().unwrap_or("").trim();
        let win = match self {
            Game::Csgo => first.starts_with('2'),
            Game::Valorant => first.starts_with('1') || first.starts_with('2'),
        };
        if win { Outcome::Win } else { Outcome::Loss }
    }
}

/// A value per game.
#[derive(Debug, Clone, Deserialize)]
pub struct PerGame<T> {
    pub csgo: T,
    pub valorant: T,
}

impl<T> PerGame<T> {
    pub fn get(&self, game: Game) -> &T {
        match game {
            Game::Csgo => &self.csgo,
            Game::Valorant => &self.valorant,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Empty when the player has no listed role.
    #[serde(default)]
    pub role: String,
    pub age: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchResult {
    pub opponent: String,
    pub score: String,
    pub event: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct NewsItem(String);

impl NewsItem {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Links {
    pub store: Link,
    pub instagram: Link,
    pub news: Link,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentStore {
    rosters: PerGame<Vec<RosterEntry>>,
    schedule: PerGame<String>,
    results: PerGame<Vec<MatchResult>>,
    news: Vec<NewsItem>,
    chants: Vec<String>,
    greetings: Vec<String>,
    fallbacks: Vec<String>,
    links: Links,
}

impl ContentStore {
    /// Load the content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(EMBEDDED, "embedded content")
    }

    /// Load content from a JSON file with the same shape as the embedded one.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| ContentError::ReadFile { path: path.clone(), source: e })?;
        Self::parse(&raw, &format!("'{}'", path.display()))
    }

    fn parse(raw: &str, origin: &str) -> Result<Self, ContentError> {
        let store: ContentStore = serde_json::from_str(raw)
            .map_err(|e| ContentError::ParseJson { origin: origin.to_string(), source: e })?;
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let pools = [
            ("chants", self.chants.len()),
            ("greetings", self.greetings.len()),
            ("fallbacks", self.fallbacks.len()),
        ];
        for (name, len) in pools {
            if len == 0 {
                return Err(ContentError::Validation(format!("{name} must not be empty")));
            }
        }

        for game in Game::ALL {
            if self.roster(game).is_empty() {
                return Err(ContentError::Validation(format!(
                    "{} roster must not be empty",
                    game.title()
                )));
            }
            for result in self.results(game) {
                if !is_valid_score(&result.score) {
                    return Err(ContentError::Validation(format!(
                        "score '{}' against {} is not in A-B form",
                        result.score, result.opponent
                    )));
                }
            }
        }

        let links = [
            ("store", &self.links.store),
            ("instagram", &self.links.instagram),
            ("news", &self.links.news),
        ];
        for (name, link) in links {
            if !is_valid_url(&link.url) {
                return Err(ContentError::Validation(format!(
                    "links.{name}.url '{}' must be an http(s) URL with a host",
                    link.url
                )));
            }
        }
        Ok(())
    }

    pub fn roster(&self, game: Game) -> &[RosterEntry] {
        self.rosters.get(game)
    }

    pub fn schedule(&self, game: Game) -> &str {
        self.schedule.get(game)
    }

    pub fn results(&self, game: Game) -> &[MatchResult] {
        self.results.get(game)
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    pub fn chants(&self) -> &[String] {
        &self.chants
    }

    pub fn greetings(&self) -> &[String] {
        &self.greetings
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    pub fn links(&self) -> &Links {
        &self.links
    }
}

fn is_valid_score(score: &str) -> bool {
    match score.split_once('-') {
        Some((a, b)) => {
            !a.is_empty()
                && !b.is_empty()
                && a.chars().all(|c| c.is_ascii_digit())
                && b.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Accepts `http://` or `https://` URLs with a non-empty host.
fn is_valid_url(url: &str) -> bool {
    let Some(rest) = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://")) else {
        return false;
    };
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host_port = authority.rsplit('@').next().unwrap_or("");
    let host = host_port.split(':').next().unwrap_or("");
    !host.is_empty() && !url.chars().any(char::is_whitespace)
}
