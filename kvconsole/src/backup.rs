use super::*;
use percent_encoding::percent_decode_str;

/// One backup archive as listed by the backend. `create_time` stays in the
/// backend's own string form; the dashboard shows it verbatim.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BackupRecord {
    pub name: String,
    pub size: i64,
    pub create_time: String,
}

#[derive(Deserialize, Debug)]
struct BackupResponse {
    #[serde(default)]
    backups: Vec<BackupRecord>,
}

/// Adapter over the backup collection. `create`/`delete` never edit the
/// held registry; on success the caller re-invokes `list` so the display
/// only ever shows server-confirmed state.
#[derive(Clone)]
pub struct BackupRegistry {
    http: reqwest::Client,
    config: Arc<ConsoleConfig>,
    records: Arc<spin::Mutex<Vec<BackupRecord>>>,
}

impl BackupRegistry {
    pub fn new(config: Arc<ConsoleConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            records: Arc::new(spin::Mutex::new(vec![])),
        }
    }

    /// The registry as of the last successful `list`.
    pub fn records(&self) -> Vec<BackupRecord> {
        self.records.lock().clone()
    }

    /// Fetch the collection and replace the held registry wholesale.
    pub async fn list(&self) -> Result<Vec<BackupRecord>, Error> {
        let res = self
            .http
            .get(self.config.url(self.config.backup_path()))
            .send()
            .await?;
        let body: BackupResponse = decode(res).await?;
        *self.records.lock() = body.backups.clone();
        Ok(body.backups)
    }

    /// Trigger a backup. Returns the refresh signal: `true` means the
    /// backend confirmed one and the caller should re-list.
    pub async fn create(&self) -> Result<bool, Error> {
        let res = self
            .http
            .post(self.config.url(self.config.backup_path()))
            .send()
            .await?;
        let body: BackupResponse = decode(res).await?;
        let created = body.backups.first();
        if let Some(backup) = created {
            info!("backup created (name={})", backup.name);
        }
        Ok(created.is_some())
    }

    /// Delete by name. Display names may arrive escaped for rendering, so
    /// the name is percent-decoded before transmission.
    pub async fn delete(&self, name: &str) -> Result<bool, Error> {
        let name = percent_decode_str(name).decode_utf8_lossy().into_owned();
        let res = self
            .http
            .delete(self.config.url(self.config.backup_path()))
            .query(&[("name", name.as_str())])
            .send()
            .await?;
        let deleted: bool = decode(res).await?;
        if deleted {
            info!("backup deleted (name={name})");
        }
        Ok(deleted)
    }
}
