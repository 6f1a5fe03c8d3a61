use anyhow::Context;

/// What to do with a record whose message type cannot be classified.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UnknownTypePolicy {
    /// Stop the export and hand the error to the caller.
    Abort,
    /// Drop the record, log it, and keep going.
    Skip,
}

/// What to do with rows of tables that have no XML counterpart.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum UnknownTablePolicy {
    Ignore,
    Error,
}

/// Export configuration
///
/// Usually read from a YAML file next to the backup; every key is optional.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct ExportConfig {
    pub unknown_type: UnknownTypePolicy,
    pub unknown_table: UnknownTablePolicy,
    /// Embed attachment content in the parts, base64 encoded.
    pub attach_data: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            unknown_type: UnknownTypePolicy::Abort,
            unknown_table: UnknownTablePolicy::Ignore,
            attach_data: true,
        }
    }
}

impl ExportConfig {
    pub fn from_yaml_str(s: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let fd = std::fs::File::open(path)
            .with_context(|| format!("Could not open config file: {}", path.display()))?;
        let ret = serde_yaml::from_reader(fd)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;

        Ok(ret)
    }
}
