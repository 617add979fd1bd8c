use crate::storage::{FileStore, MoodRepository};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Mutex<MoodRepository<FileStore>>>,
}

impl AppState {
    pub fn new(repo: MoodRepository<FileStore>) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }
}
