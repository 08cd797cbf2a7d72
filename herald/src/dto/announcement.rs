use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PublishAnnouncement {
    pub announcement: Option<String>,
}
