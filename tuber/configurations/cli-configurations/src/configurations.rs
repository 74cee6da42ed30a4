use ::anyhow::Context as _;
use ::use_cases::models::notes::Frontmatter;
use ::use_cases::models::notes::FrontmatterValue;

use crate::utils::aliases::Fallible;

pub const DEFAULT_CONFIG_PATH: &str = "~/.config/tuber/tuber.yml";
pub const DEFAULT_RESOLUTION: &str = "FHD";

/// Values read from the YAML config file. Command-line flags take precedence over all of them.
#[derive(Debug, Default)]
pub struct Configurations {
    pub resolution: Option<String>,
    pub vault: Option<::std::path::PathBuf>,

    /// Keys copied into every note's frontmatter before the computed ones.
    pub frontmatter: Frontmatter,
}

impl Configurations {
    /// A missing file is an empty configuration.
    pub fn load(path: &::std::path::Path) -> Fallible<Self> {
        let raw = match ::std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ::std::io::ErrorKind::NotFound => {
                ::tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            },
            Err(err) => return Err(err).with_context(|| format!("failed to read {}", path.display())),
        };

        let document: ::serde_yaml::Value =
            ::serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;

        let ::serde_yaml::Value::Mapping(mapping) = document else {
            ::tracing::warn!(path = %path.display(), "config file is not a YAML mapping, ignoring it");
            return Ok(Self::default());
        };

        Ok(Self::from_mapping(mapping))
    }

    fn from_mapping(mapping: ::serde_yaml::Mapping) -> Self {
        let mut configurations = Self::default();

        for (key, value) in mapping {
            let Some(key) = key.as_str() else {
                ::tracing::warn!(?key, "ignoring non-string config key");
                continue;
            };

            match (key, value) {
                ("resolution", value) => configurations.resolution = scalar(&value),
                ("vault", value) => configurations.vault = scalar(&value).map(|vault| expand_home(&vault)),
                ("frontmatter", ::serde_yaml::Value::Mapping(entries)) => {
                    configurations.frontmatter = frontmatter(entries);
                },
                ("frontmatter", ::serde_yaml::Value::Null) => {},
                ("frontmatter", _) => ::tracing::warn!("`frontmatter` in the config file is not a mapping, ignoring it"),
                (key, _) => ::tracing::debug!(key, "ignoring unrecognized config key"),
            }
        }

        configurations
    }
}

fn frontmatter(entries: ::serde_yaml::Mapping) -> Frontmatter {
    entries
        .into_iter()
        .filter_map(|(key, value)| {
            let key = scalar(&key)?;

            let value = match value {
                ::serde_yaml::Value::Sequence(values) => FrontmatterValue::List(
                    values
                        .iter()
                        .filter_map(|value| {
                            let value = scalar(value);
                            if value.is_none() {
                                ::tracing::warn!(key = %key, "frontmatter list items must be scalars, dropping one");
                            }

                            value
                        })
                        .map(Into::into)
                        .collect(),
                ),
                ::serde_yaml::Value::Null => FrontmatterValue::Scalar("".into()),
                value => match scalar(&value) {
                    Some(value) => FrontmatterValue::Scalar(value.into()),
                    None => {
                        ::tracing::warn!(key = %key, "frontmatter values must be scalars or lists, dropping it");
                        return None;
                    },
                },
            };

            Some((key, value))
        })
        .collect()
}

fn scalar(value: &::serde_yaml::Value) -> Option<String> {
    match value {
        ::serde_yaml::Value::String(value) => Some(value.clone()),
        ::serde_yaml::Value::Number(value) => Some(value.to_string()),
        ::serde_yaml::Value::Bool(value) => Some(value.to_string()),
        _ => None,
    }
}

/// Expands a leading `~` to the current user's home directory.
pub fn expand_home(path: &str) -> ::std::path::PathBuf {
    let home = ::directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());

    match (path.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) if rest.starts_with(::std::path::is_separator) => {
            home.join(rest.trim_start_matches(::std::path::is_separator))
        },
        _ => path.into(),
    }
}
