use crate::app::AppMessage;
use crate::user::{map_to_rows, User};
use tokio::sync::mpsc;
use tracing::{event, Level};

/// Performs one GET against `endpoint` and decodes the body as a JSON array
/// of users. The decode is all-or-nothing: a single malformed record fails
/// the whole batch.
pub async fn fetch_users(endpoint: &str) -> crate::Result<Vec<User>> {
    let url = url::Url::parse(endpoint)?;
    let response = reqwest::get(url).await?;
    let body = response.bytes().await?;
    let users: Vec<User> = serde_json::from_slice(&body)?;
    Ok(users)
}

///
/// Runs one fetch and hands the mapped rows back over the app channel so
/// the owning context performs the observable write.
///
/// All failures on this path are logged and swallowed: the view-model is
/// never updated, and the view keeps rendering its prior state.
///
pub async fn run(endpoint: String, app_channel_sender: mpsc::UnboundedSender<AppMessage>) {
    match fetch_users(&endpoint).await {
        Ok(users) => {
            event!(Level::INFO, "fetched {} users from {}", users.len(), endpoint);
            let rows = map_to_rows(users);
            if app_channel_sender
                .send(AppMessage::FetchComplete { rows })
                .is_err()
            {
                event!(Level::WARN, "fetch completed after the app loop shut down");
            }
        }
        Err(err) => {
            event!(Level::ERROR, "user fetch failed for {}: {:?}", endpoint, err);
        }
    }
}
