use thiserror::Error;

/// Ошибки хранилища постов.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Ошибка ввода-вывода при чтении или записи документа.
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Коллекция не сериализуется в JSON.
    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
