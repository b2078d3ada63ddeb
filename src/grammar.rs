//! Policy-carrying entry point and the process-wide grammar instance.

use std::sync::OnceLock;

use crate::builders::{join_paths, normalize_path};
use crate::error::PathError;
use crate::parsers::{basename, dirname, get_drive, is_absolute_with, split_path};
use crate::types::{Absoluteness, DirnameOptions, GrammarConfig, SplitPath};

static GRAMMAR: OnceLock<PathGrammar> = OnceLock::new();

/// All grammar operations bound to one absoluteness policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathGrammar {
    absoluteness: Absoluteness,
}

impl PathGrammar {
    pub fn new(absoluteness: Absoluteness) -> Self {
        Self { absoluteness }
    }

    pub fn legacy() -> Self {
        Self::new(Absoluteness::LegacyColonBased)
    }

    pub fn structural() -> Self {
        Self::new(Absoluteness::Structural)
    }

    pub fn absoluteness(&self) -> Absoluteness {
        self.absoluteness
    }

    pub fn get_drive<'a>(&self, path: &'a str) -> Option<&'a str> {
        get_drive(path)
    }

    pub fn is_absolute(&self, path: &str) -> bool {
        is_absolute_with(path, self.absoluteness)
    }

    pub fn basename<'a>(&self, path: &'a str) -> &'a str {
        basename(path)
    }

    pub fn dirname<'a>(&self, path: &'a str, options: DirnameOptions) -> &'a str {
        dirname(path, options)
    }

    pub fn join<I, S>(&self, paths: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join_paths(paths, self.absoluteness)
    }

    pub fn normalize(&self, path: &str) -> Result<String, PathError> {
        normalize_path(path, self.absoluteness)
    }

    pub fn split(&self, path: &str) -> SplitPath {
        split_path(path, self.absoluteness)
    }
}

impl From<&GrammarConfig> for PathGrammar {
    fn from(config: &GrammarConfig) -> Self {
        Self::new(config.absoluteness)
    }
}

/// Join `paths` under the legacy policy.
pub fn join<I, S>(paths: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_paths(paths, Absoluteness::LegacyColonBased)
}

/// Normalize `path` under the legacy policy.
pub fn normalize(path: &str) -> Result<String, PathError> {
    normalize_path(path, Absoluteness::LegacyColonBased)
}

/// Split `path` under the legacy policy.
pub fn split(path: &str) -> SplitPath {
    split_path(path, Absoluteness::LegacyColonBased)
}

/// Install the process-wide grammar from `config`.
///
/// Only the first call populates it; later calls return what is already
/// installed, whatever their config.
pub fn install_grammar(config: &GrammarConfig) -> &'static PathGrammar {
    let mut installed_now = false;
    let grammar = GRAMMAR.get_or_init(|| {
        installed_now = true;
        PathGrammar::from(config)
    });
    if installed_now {
        log::debug!("Installed path grammar with {:?}", grammar.absoluteness);
    } else {
        log::debug!(
            "Path grammar already installed with {:?}, ignoring {:?}",
            grammar.absoluteness,
            config.absoluteness
        );
    }
    grammar
}

/// The process-wide grammar, defaulting to the legacy policy.
pub fn grammar() -> &'static PathGrammar {
    GRAMMAR.get_or_init(PathGrammar::default)
}
