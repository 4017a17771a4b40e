use crate::{api::AnalysisClient, error, info, success};

/// Checks that the analysis service answers.
pub async fn status(client: &AnalysisClient) {
    info!("Checking {}", client.base_url());
    match client.status().await {
        Ok(status) => success!("{}", status.message),
        Err(e) => error!("Service unreachable: {}", e),
    }
}
