use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::post::Post;
use crate::store::PostStore;

/// Бэкенд в памяти: та же семантика load/save, но без файла.
///
/// Нужен тестам и заодно показывает, что за контрактом [`PostStore`]
/// можно держать не только плоский файл.
#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryStore {
    /// Пустое хранилище.
    pub fn new() -> Self {
        Self::default()
    }

    /// Хранилище с заранее заданной коллекцией.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
        }
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(posts.clone())
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut stored = self.posts.lock().unwrap_or_else(PoisonError::into_inner);
        *stored = posts.to_vec();
        Ok(())
    }
}
