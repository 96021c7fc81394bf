use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroU32;

use crate::cards::DeckKind;
use crate::errors::ConfigError;
use crate::rules::DEFAULT_MAX_POINTS;

/// Match rules chosen when a [`crate::game::GameState`] is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameOptions {
    /// Penalty total at which a player loses
    pub max_points: NonZeroU32,
    /// Deck the match is dealt from
    pub deck: DeckKind,
    /// Shuffle seed; random when absent
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_points: NonZeroU32::new(DEFAULT_MAX_POINTS).unwrap_or(NonZeroU32::MIN),
            deck: DeckKind::default(),
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets the points limit. A limit of 0 would end the match on its first
    /// action, so it is raised to 1.
    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = NonZeroU32::new(max_points).unwrap_or_else(|| {
            tracing::warn!("max_points of 0 raised to 1");
            NonZeroU32::MIN
        });
        self
    }

    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSources {
    pub max_points: ValueSource,
    pub deck: ValueSource,
    pub seed: ValueSource,
}

impl Default for OptionSources {
    fn default() -> Self {
        Self {
            max_points: ValueSource::Default,
            deck: ValueSource::Default,
            seed: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OptionsResolved {
    pub options: GameOptions,
    pub sources: OptionSources,
}

pub const CONFIG_ENV: &str = "CHINCHON_CONFIG";
pub const MAX_POINTS_ENV: &str = "CHINCHON_MAX_POINTS";
pub const SEED_ENV: &str = "CHINCHON_SEED";
pub const DECK_ENV: &str = "CHINCHON_DECK";

pub fn load() -> Result<GameOptions, ConfigError> {
    load_with_sources().map(|resolved| resolved.options)
}

/// Resolves options from defaults, then the TOML file named by
/// `CHINCHON_CONFIG`, then `CHINCHON_*` environment overrides.
pub fn load_with_sources() -> Result<OptionsResolved, ConfigError> {
    let mut opts = GameOptions::default();
    let mut sources = OptionSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.max_points {
            opts.max_points = positive_max_points(v)?;
            sources.max_points = ValueSource::File;
        }
        if let Some(v) = f.deck {
            opts.deck = v;
            sources.deck = ValueSource::File;
        }
        if let Some(v) = f.seed {
            opts.seed = Some(v);
            sources.seed = ValueSource::File;
        }
    }

    if let Some(v) = non_empty_env(MAX_POINTS_ENV) {
        let v: u32 = v
            .parse()
            .map_err(|_| ConfigError::Invalid("max_points must be a positive integer".into()))?;
        opts.max_points = positive_max_points(v)?;
        sources.max_points = ValueSource::Env;
    }
    if let Some(v) = non_empty_env(SEED_ENV) {
        opts.seed = Some(
            v.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = non_empty_env(DECK_ENV) {
        opts.deck = DeckKind::parse(&v)
            .ok_or_else(|| ConfigError::Invalid(format!("Unknown deck: {v}")))?;
        sources.deck = ValueSource::Env;
    }

    Ok(OptionsResolved {
        options: opts,
        sources,
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    max_points: Option<u32>,
    #[serde(default)]
    deck: Option<DeckKind>,
    #[serde(default)]
    seed: Option<u64>,
}

fn positive_max_points(v: u32) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(v).ok_or_else(|| ConfigError::Invalid("max_points must be >0".into()))
}
