use super::{AnalysisClient, ApiError, decode};
use crate::types::ServiceStatus;

impl AnalysisClient {
    /// Asks the service whether it is running.
    pub async fn status(&self) -> Result<ServiceStatus, ApiError> {
        let payload = self.get_json("/").await?;
        decode(payload)
    }
}
