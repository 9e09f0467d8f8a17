use async_trait::async_trait;

use crate::error::StoreError;
use crate::post::Post;

/// Контракт хранилища: читать и перезаписывать коллекцию только целиком.
///
/// Вызывающая сторона каждый раз загружает всю коллекцию, меняет не больше
/// одной записи и сохраняет коллекцию обратно. Хранилище ничего не кэширует
/// и ничем не блокирует; за тем же контрактом можно спрятать и настоящий
/// встраиваемый бэкенд.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Загружает полную коллекцию постов.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Сериализует и перезаписывает полную коллекцию.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
