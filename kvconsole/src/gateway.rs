use super::*;

/// `Gateway` turns a generic client action into one versioned backend call
/// and collapses whatever comes back into a single `NormalizedResponse`.
#[derive(Clone)]
pub struct Gateway {
    http: reqwest::Client,
    config: Arc<ConsoleConfig>,
}

impl Gateway {
    pub fn new(config: Arc<ConsoleConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Dispatch by action kind. Write goes out as a JSON body, remove as
    /// query parameters, anything else is a read with query parameters.
    ///
    /// Every outcome ends in exactly one response: failures are converted
    /// to a single error-severity line here and never propagate further.
    pub async fn process(&self, action: &GenericAction) -> NormalizedResponse {
        let generation = self.config.generation;
        let out = match action.kind {
            ActionKind::Write => {
                self.write(WriteRequest::from_action(generation, action)).await
            }
            ActionKind::Remove => {
                self.remove(RemoveRequest::from_action(generation, action))
                    .await
            }
            _ => self.read(ReadRequest::from_action(generation, action)).await,
        };
        match out {
            Ok(res) => res,
            Err(err) => {
                error!("client action failed: {err}");
                NormalizedResponse::error(err.to_string())
            }
        }
    }

    async fn read(&self, request: ReadRequest) -> Result<NormalizedResponse, Error> {
        let res = self
            .http
            .get(self.config.url(self.config.read_path()))
            .query(&request.query_pairs())
            .send()
            .await?;
        let body: ClientResponse = decode(res).await?;
        Ok(normalize_read(body))
    }

    async fn write(&self, request: WriteRequest) -> Result<NormalizedResponse, Error> {
        let res = self
            .http
            .post(self.config.url(self.config.write_path()))
            .json(&request)
            .send()
            .await?;
        let body: ClientResponse = decode(res).await?;
        Ok(normalize_mutation(body))
    }

    async fn remove(&self, request: RemoveRequest) -> Result<NormalizedResponse, Error> {
        let res = self
            .http
            .delete(self.config.url(self.config.remove_path()))
            .query(&request.query_pairs())
            .send()
            .await?;
        let body: ClientResponse = decode(res).await?;
        Ok(normalize_mutation(body))
    }
}
