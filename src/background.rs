//! Best-effort background picture from NASA's Astronomy Picture of the Day.
//!
//! The picture is purely decorative. A terminal cannot draw it behind the
//! screens, so only the entry's metadata is fetched and its title is shown
//! as a header decoration. Every failure collapses into `None` and nothing
//! here can influence the game machine.

use crate::config::BackgroundSettings;
use async_trait::async_trait;
use derive_getters::Getters;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Metadata of the day's background picture.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Background {
    /// Picture title.
    title: String,
    /// Where the image can be viewed (HD version when offered).
    image_url: String,
}

/// Something that may supply a background picture.
#[async_trait]
pub trait BackgroundProvider: Send + Sync {
    /// Fetches a picture, or `None` if there is none to be had.
    async fn try_fetch_background(&self) -> Option<Background>;
}

/// Provider that never supplies a picture.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBackground;

#[async_trait]
impl BackgroundProvider for NoBackground {
    async fn try_fetch_background(&self) -> Option<Background> {
        None
    }
}

/// Metadata returned by the APOD endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApodResponse {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) media_type: Option<String>,
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) hdurl: Option<String>,
}

impl ApodResponse {
    /// Image to download: the HD version if offered. `None` for videos.
    pub(crate) fn image_url(&self) -> Option<&str> {
        if self.media_type.as_deref() != Some("image") {
            return None;
        }
        self.hdurl.as_deref().or(self.url.as_deref())
    }
}

/// Parses an APOD metadata body.
pub(crate) fn parse_apod(body: &str) -> Option<ApodResponse> {
    match serde_json::from_str(body) {
        Ok(response) => Some(response),
        Err(e) => {
            debug!(error = %e, "Unreadable APOD response");
            None
        }
    }
}

/// Turns APOD metadata into a background; `None` for videos and other media.
pub(crate) fn background_from(meta: ApodResponse) -> Option<Background> {
    let Some(image_url) = meta.image_url().map(str::to_string) else {
        debug!(media_type = ?meta.media_type, "APOD entry is not an image");
        return None;
    };
    Some(Background {
        title: meta.title.unwrap_or_default(),
        image_url,
    })
}

/// Provider backed by the NASA APOD API.
#[derive(Debug, Clone)]
pub struct ApodProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ApodProvider {
    /// Creates a provider, reading the API key from the configured variable.
    #[instrument(skip(settings), fields(endpoint = %settings.endpoint()))]
    pub fn from_settings(settings: &BackgroundSettings) -> Self {
        let api_key = std::env::var(settings.api_key_env()).ok();
        Self::new(
            settings.endpoint().clone(),
            api_key,
            Duration::from_secs(*settings.timeout_secs()),
        )
    }

    /// Creates a provider with an explicit key.
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    async fn fetch(&self, api_key: &str) -> Result<Option<Background>, reqwest::Error> {
        let Ok(url) = reqwest::Url::parse_with_params(&self.endpoint, &[("api_key", api_key)])
        else {
            warn!(endpoint = %self.endpoint, "Invalid APOD endpoint");
            return Ok(None);
        };

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            debug!(status = %response.status(), "APOD request rejected");
            return Ok(None);
        }

        let Some(meta) = parse_apod(&response.text().await?) else {
            return Ok(None);
        };
        Ok(background_from(meta))
    }
}

#[async_trait]
impl BackgroundProvider for ApodProvider {
    #[instrument(skip(self))]
    async fn try_fetch_background(&self) -> Option<Background> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("No APOD API key set, using the plain background");
            return None;
        };

        match self.fetch(api_key).await {
            Ok(Some(background)) => {
                info!(title = %background.title, url = %background.image_url, "Background loaded");
                Some(background)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Background fetch failed");
                None
            }
        }
    }
}
