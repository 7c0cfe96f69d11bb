use super::*;
use derive_more::Display;

mod layout;
pub use layout::{circular_layout, LayoutPoint, NodePlacement};

mod poller;
pub use poller::{PollScope, StatusPoller};

/// Status of one cluster member as the backend reports it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct MemberStatus {
    pub name: String,
    pub id: String,
    pub endpoint: String,
    #[serde(rename = "leader")]
    pub is_leader: bool,
    #[serde(rename = "health")]
    pub is_healthy: bool,
    #[serde(rename = "connected")]
    pub is_connected: bool,
    #[serde(rename = "dbSize")]
    pub db_size: i64,
    pub version: String,
}

impl MemberStatus {
    /// Derived on every call so that connectivity/health/leadership changes
    /// are always reflected; never stored.
    pub fn state(&self) -> MemberState {
        if !self.is_connected {
            MemberState::Lost
        } else if !self.is_healthy {
            MemberState::Stopped
        } else if self.is_leader {
            MemberState::Leader
        } else {
            MemberState::Follower
        }
    }
}

#[derive(Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum MemberState {
    Leader,
    Follower,
    Stopped,
    Lost,
}

#[derive(Deserialize, Debug)]
pub(crate) struct StatusResponse {
    #[serde(default)]
    pub members: Vec<MemberStatus>,
}

/// The latest wholesale-replaced view of the cluster: members in backend
/// order, each paired with its topology placement.
#[derive(Clone, Debug, Default)]
pub struct ClusterSnapshot {
    pub members: Vec<(MemberStatus, NodePlacement)>,
}

impl ClusterSnapshot {
    pub(crate) fn from_members(members: Vec<MemberStatus>) -> Self {
        let placements = circular_layout(members.len());
        Self {
            members: members.into_iter().zip(placements).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Thin fetch layer over the cluster status endpoint.
#[derive(Clone)]
pub struct ClusterApi {
    http: reqwest::Client,
    config: Arc<ConsoleConfig>,
}

impl ClusterApi {
    pub fn new(config: Arc<ConsoleConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub async fn fetch_status(&self) -> Result<Vec<MemberStatus>, Error> {
        let res = self
            .http
            .get(self.config.url(self.config.status_path()))
            .send()
            .await?;
        let body: StatusResponse = decode(res).await?;
        Ok(body.members)
    }
}
