use serde::{Deserialize, Serialize};

/// How the launched preview process learns which function to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterConvention {
    /// Append `--preview=<function>` to the resolved command.
    PositionalFlag,
    /// Prefix the resolved command with `SNOWSCAPE_PREVIEW="<function>"`.
    #[default]
    EnvironmentPrefix,
}

impl ParameterConvention {
    /// Parse a configured label. Unrecognized values fall back to the
    /// environment-prefix convention.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positional-flag" => Self::PositionalFlag,
            _ => Self::EnvironmentPrefix,
        }
    }
}

impl<'de> Deserialize<'de> for ParameterConvention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_label(&label))
    }
}
