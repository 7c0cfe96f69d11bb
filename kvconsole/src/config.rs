use super::*;

/// Which API generation of the console backend is wire-active.
/// Exactly one generation is active per deployment.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApiGeneration {
    Legacy,
    #[default]
    Current,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the console backend, e.g. `http://127.0.0.1:8080`.
    pub endpoint: String,
    pub generation: ApiGeneration,
    /// Period of the cluster status poll in milliseconds.
    pub poll_period_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080".to_owned(),
            generation: ApiGeneration::default(),
            poll_period_ms: 1000,
        }
    }
}

impl ConsoleConfig {
    /// Read the configuration from `KVCONSOLE_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(v) = std::env::var("KVCONSOLE_ENDPOINT") {
            config.endpoint = v;
        }
        if let Ok(v) = std::env::var("KVCONSOLE_API_GENERATION") {
            config.generation = match v.as_str() {
                "legacy" => ApiGeneration::Legacy,
                "current" => ApiGeneration::Current,
                other => bail!("unknown API generation: {other}"),
            };
        }
        if let Ok(v) = std::env::var("KVCONSOLE_POLL_PERIOD_MS") {
            config.poll_period_ms = v.parse().context("KVCONSOLE_POLL_PERIOD_MS")?;
        }
        Ok(config)
    }

    pub fn poll_period(&self) -> Duration {
        Duration::from_millis(self.poll_period_ms)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    pub(crate) fn read_path(&self) -> &'static str {
        match self.generation {
            ApiGeneration::Legacy => "client/get",
            ApiGeneration::Current => "api/v1/client/read",
        }
    }

    pub(crate) fn write_path(&self) -> &'static str {
        match self.generation {
            ApiGeneration::Legacy => "client/set",
            ApiGeneration::Current => "api/v1/client/write",
        }
    }

    pub(crate) fn remove_path(&self) -> &'static str {
        match self.generation {
            ApiGeneration::Legacy => "client/remove",
            ApiGeneration::Current => "api/v1/client/remove",
        }
    }

    pub(crate) fn status_path(&self) -> &'static str {
        match self.generation {
            ApiGeneration::Legacy => "cluster/status",
            ApiGeneration::Current => "api/v1/cluster/status",
        }
    }

    pub(crate) fn backup_path(&self) -> &'static str {
        match self.generation {
            ApiGeneration::Legacy => "cluster/backup",
            ApiGeneration::Current => "api/v1/cluster/backup",
        }
    }
}
