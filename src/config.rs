use std::path::Path;

use anyhow::Result;
use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

use crate::embed::url::UrlClassifier;
use crate::error::EmbedError;
use crate::render::{render_with, RenderDescriptor};

pub static CONFIG_FILE: &str = "talk.toml";
pub static ENV_PREFIX: &str = "TALK_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub live_input: Option<String>,
    #[serde(default)]
    pub replay_input: Option<String>,
    /// Extra player url regexes passed through as iframe sources
    #[serde(default)]
    pub passthrough_patterns: Vec<String>,
}

fn default_title() -> String {
    "Online talk".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: None,
            live_input: None,
            replay_input: None,
            passthrough_patterns: Vec::new(),
        }
    }
}

impl Config {
    pub fn get_config() -> Result<Self> {
        Self::load(Path::new(CONFIG_FILE))
    }

    /// Read `path`, then let `TALK_*` environment variables override it
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }

    /// Built-in providers followed by the configured pass-through patterns
    pub fn classifier(&self) -> Result<UrlClassifier, EmbedError> {
        self.passthrough_patterns
            .iter()
            .try_fold(UrlClassifier::default(), |classifier, pattern| {
                classifier.with_passthrough(pattern)
            })
    }

    pub fn render(&self, classifier: &UrlClassifier) -> RenderDescriptor {
        render_with(
            classifier,
            self.live_input.as_deref(),
            self.replay_input.as_deref(),
        )
    }
}

#[cfg(test)]
mod test {
    use figment::Jail;

    use super::*;
    use crate::selection::DisplaySelection;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load(Path::new("missing.toml")).unwrap();
            assert_eq!(Config::default(), config);
            assert_eq!("Online talk", config.title);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                title = "Evening talk"
                live_input = ""
                replay_input = "https://youtu.be/abc"
                passthrough_patterns = ['twitch\.tv/embed']
                "#,
            )?;
            jail.set_env("TALK_LIVE_INPUT", "https://www.youtube.com/watch?v=live1");

            let config = Config::get_config().unwrap();
            assert_eq!("Evening talk", config.title);
            assert_eq!(Some("https://www.youtube.com/watch?v=live1"), config.live_input.as_deref());

            let classifier = config.classifier().unwrap();
            let descriptor = config.render(&classifier);
            assert_eq!(DisplaySelection::Live, descriptor.state);
            assert_eq!(
                Some("https://www.youtube.com/embed/live1"),
                descriptor.iframe_src.as_deref()
            );
            Ok(())
        });
    }

    #[test]
    fn test_bad_pattern() {
        let config = Config {
            passthrough_patterns: vec!["[".into()],
            ..Default::default()
        };
        assert!(config.classifier().is_err());
    }
}
