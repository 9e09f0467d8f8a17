use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::error::StoreError;
use crate::post::Post;
use crate::store::PostStore;

/// Файловый бэкенд: один JSON-документ со всеми постами.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Создаёт хранилище поверх указанного файла.
    ///
    /// Файл может ещё не существовать: до первого сохранения хранилище
    /// просто пустое.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Путь к документу хранилища.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name: OsString = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    /// Отсутствующий или повреждённый документ считается пустым хранилищем;
    /// остальные ошибки ввода-вывода отдаются наверх.
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "data file is missing, treating the store as empty");
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => Ok(posts),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file is malformed, treating the store as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Заменяет документ целиком: пишет соседний временный файл и
    /// переименовывает его поверх целевого.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(posts)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, payload.as_bytes()).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
