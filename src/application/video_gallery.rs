// src/application/video_gallery.rs
use crate::application::api::{ApiRequest, ApiTransport};
use crate::application::view::{Banner, GalleryView};
use crate::constants::{
    ADD_VIDEO_PATH, DELETE_VIDEO_PATH, MSG_UPLOADING, MSG_VIDEOS_LOAD_FAILED, MSG_VIDEO_ADDED,
    MSG_VIDEO_DELETED, MSG_VIDEO_NETWORK, VIDEOS_PATH,
};
use crate::domain::{DomainError, NewVideo, Video};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Deserialize)]
struct AddVideoResponse {
    #[serde(default)]
    video: Option<Video>,
    #[serde(default)]
    error: Option<String>,
}

/// Mediates between the gallery view and the video backend.
///
/// Mutations patch the view in place: a submitted video is prepended, a
/// deleted one is removed. The gallery is never re-fetched after a mutation.
pub struct VideoGallery<T: ApiTransport, V: GalleryView> {
    transport: T,
    view: V,
}

impl<T: ApiTransport, V: GalleryView> VideoGallery<T, V> {
    pub fn new(transport: T, view: V) -> Self {
        Self { transport, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list_videos(&mut self) -> Result<Vec<Video>, DomainError> {
        match self.fetch_videos() {
            Ok(videos) => {
                debug!(count = videos.len(), "Loaded videos");
                self.view.render_videos(&videos);
                Ok(videos)
            }
            Err(err) => {
                warn!(%err, "Loading videos failed");
                self.view.show_banner(Banner::error(MSG_VIDEOS_LOAD_FAILED));
                Err(err)
            }
        }
    }

    /// Submit the form; on success the new card goes to the top of the grid.
    #[instrument(level = "debug", skip(self, form), fields(title = %form.title))]
    pub fn submit_video(&mut self, form: NewVideo) -> Result<Video, DomainError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            let err = DomainError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ));
            self.view.show_banner(Banner::error(err.to_string()));
            return Err(err);
        }

        self.view.show_banner(Banner::info(MSG_UPLOADING));
        match self.post_video(&form.normalized()) {
            Ok(video) => {
                info!(id = video.id, "Video added");
                self.view.show_banner(Banner::success(MSG_VIDEO_ADDED));
                self.view.prepend_video(&video);
                Ok(video)
            }
            Err(err) => {
                warn!(%err, "Adding video failed");
                let message = match &err {
                    DomainError::Network(_) | DomainError::Decode(_) => {
                        MSG_VIDEO_NETWORK.to_string()
                    }
                    other => format!("Upload failed: {other}"),
                };
                self.view.show_banner(Banner::error(message));
                Err(err)
            }
        }
    }

    /// Returns `Ok(false)` when the user declined the confirmation.
    #[instrument(level = "debug", skip(self))]
    pub fn delete_video(&mut self, id: i64) -> Result<bool, DomainError> {
        if !self.view.confirm("Are you sure you want to delete this video?") {
            debug!(id, "Delete cancelled");
            return Ok(false);
        }

        match self.send_delete(id) {
            Ok(()) => {
                info!(id, "Video deleted");
                if !self.view.remove_video(id) {
                    debug!(id, "No card on screen for deleted video");
                }
                self.view.show_banner(Banner::success(MSG_VIDEO_DELETED));
                Ok(true)
            }
            Err(err) => {
                warn!(id, %err, "Deleting video failed");
                let message = match &err {
                    DomainError::Http { message, .. } => format!("Delete failed: {message}"),
                    other => other.to_string(),
                };
                self.view.show_banner(Banner::error(message));
                Err(err)
            }
        }
    }

    fn fetch_videos(&mut self) -> Result<Vec<Video>, DomainError> {
        self.transport
            .send(&ApiRequest::get(VIDEOS_PATH))?
            .ensure_ok()?
            .json()
    }

    fn post_video(&mut self, form: &NewVideo) -> Result<Video, DomainError> {
        let response = self
            .transport
            .send(&ApiRequest::post(ADD_VIDEO_PATH, form)?)?;
        let response = response.ensure_ok()?;

        let payload: AddVideoResponse = response.json()?;
        if let Some(message) = payload.error {
            return Err(DomainError::Http {
                status: response.status,
                message,
            });
        }
        payload
            .video
            .ok_or_else(|| DomainError::Decode("response carried no video".to_string()))
    }

    fn send_delete(&mut self, id: i64) -> Result<(), DomainError> {
        let path = format!("{DELETE_VIDEO_PATH}/{id}");
        let response = self.transport.send(&ApiRequest::delete(path))?.ensure_ok()?;
        if response.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(());
        }

        let payload: Value = response.json()?;
        match payload.get("error") {
            Some(Value::String(message)) => Err(DomainError::Http {
                status: response.status,
                message: message.clone(),
            }),
            _ => Ok(()),
        }
    }
}
