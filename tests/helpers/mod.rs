use boardview::application::{Method, TaskBoard, VideoGallery};
use boardview::constants::VIDEOS_PATH;
use boardview::domain::{Priority, Task, Video};
use boardview::util::testing::{
    sample_task, sample_video, InMemoryTaskApi, MockTransport, MockTransportBuilder, RecordingView,
};
use serde_json::json;

#[allow(dead_code)]
pub type TestBoard = TaskBoard<InMemoryTaskApi, RecordingView>;
#[allow(dead_code)]
pub type TestGallery = VideoGallery<MockTransport, RecordingView>;

#[allow(dead_code)]
/// Four tasks covering every priority and both completion states
pub fn seeded_tasks() -> Vec<Task> {
    let mut groceries = sample_task(2, "Groceries", false, Priority::Medium);
    groceries.tags = Some("home,errands".to_string());
    vec![
        sample_task(1, "Write report", false, Priority::High),
        groceries,
        sample_task(3, "Renew passport", true, Priority::High),
        sample_task(4, "Water plants", true, Priority::Low),
    ]
}

#[allow(dead_code)]
pub fn seeded_board() -> TestBoard {
    TaskBoard::new(InMemoryTaskApi::with_tasks(seeded_tasks()), RecordingView::new())
}

#[allow(dead_code)]
pub fn gallery_videos() -> Vec<Video> {
    vec![sample_video(1, "First clip"), sample_video(2, "Second clip")]
}

/// Mock pre-loaded with `gallery_videos` behind `GET /api/videos`
#[allow(dead_code)]
pub fn gallery_backend() -> MockTransportBuilder {
    MockTransport::builder().with_json(Method::Get, VIDEOS_PATH, 200, json!(gallery_videos()))
}

/// Gallery with the seeded videos already rendered
#[allow(dead_code)]
pub fn loaded_gallery(backend: MockTransportBuilder) -> TestGallery {
    let mut gallery = VideoGallery::new(backend.build(), RecordingView::new());
    gallery
        .list_videos()
        .expect("seeded gallery should load");
    gallery
}
