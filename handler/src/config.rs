use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_envfile::Error;

use switchboard_framework::loader::DEFAULT_ROOT;

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_components_dir")]
    pub components_dir: PathBuf,
    /// comma separated, e.g. `rs,cmp`
    #[serde(default = "default_component_extensions")]
    pub component_extensions: String,
}

fn default_components_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_component_extensions() -> String {
    "rs".into()
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        serde_envfile::from_env()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.component_extensions
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_split() {
        let config = Config {
            components_dir: default_components_dir(),
            component_extensions: " rs, cmp ,,".into(),
        };

        assert_eq!(config.extensions().collect::<Vec<_>>(), vec!["rs", "cmp"]);
    }

    #[test]
    fn default_components_dir_is_relative() {
        let dir = default_components_dir();

        assert!(dir.is_relative());
        assert_eq!(dir, PathBuf::from("src/components"));
    }
}
