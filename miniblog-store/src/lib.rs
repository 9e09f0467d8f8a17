//! Хранилище постов для miniblog: весь блог живёт в одном JSON-документе.
//!
//! Крейт отдаёт доменную модель ([`Post`], [`next_id`]) и контракт
//! хранилища ([`PostStore`]) с двумя бэкендами:
//! - [`JsonFileStore`] - плоский файл на диске, единственный источник истины;
//! - [`MemoryStore`] - коллекция в памяти, для тестов и как пример подмены
//!   бэкенда за тем же контрактом.
//!
//! Контракт нарочно минимальный: загрузить коллекцию целиком, сохранить
//! коллекцию целиком. Кэша между запросами нет, блокировок нет -
//! параллельные писатели могут молча затереть запись друг друга.
#![warn(missing_docs)]

mod error;
mod json_file;
mod memory;
mod post;
mod store;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use post::{DEFAULT_AUTHOR, DEFAULT_CONTENT, DEFAULT_TITLE, Post, next_id};
pub use store::PostStore;
