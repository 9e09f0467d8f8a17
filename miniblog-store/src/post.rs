use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Автор по умолчанию для пустого поля формы.
pub const DEFAULT_AUTHOR: &str = "Anonymous";
/// Заголовок по умолчанию для пустого поля формы.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Текст по умолчанию для пустого поля формы.
pub const DEFAULT_CONTENT: &str = "(no content)";

/// Пост блога - единственная сущность хранилища.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Положительный идентификатор, уникальный в пределах коллекции.
    /// Выдаётся функцией [`next_id`], из формы никогда не приходит.
    pub id: i64,
    /// Автор поста.
    pub author: String,
    /// Заголовок поста.
    pub title: String,
    /// Текст поста.
    pub content: String,
    /// Счётчик лайков; в документе поле может отсутствовать, тогда 0.
    #[serde(default)]
    pub likes: u64,
}

impl Post {
    /// Создаёт пост с уже выданным идентификатором и нулём лайков.
    ///
    /// Поля формы обрезаются по краям; пустой результат заменяется
    /// значением по умолчанию.
    pub fn new(id: i64, author: &str, title: &str, content: &str) -> Self {
        Self {
            id,
            author: normalize(author, DEFAULT_AUTHOR),
            title: normalize(title, DEFAULT_TITLE),
            content: normalize(content, DEFAULT_CONTENT),
            likes: 0,
        }
    }

    /// Перезаписывает автора, заголовок и текст по тем же правилам
    /// подстановки, что и при создании. Идентификатор и лайки не трогает.
    pub fn apply(&mut self, author: &str, title: &str, content: &str) {
        self.author = normalize(author, DEFAULT_AUTHOR);
        self.title = normalize(title, DEFAULT_TITLE);
        self.content = normalize(content, DEFAULT_CONTENT);
    }

    /// Увеличивает счётчик лайков на единицу и возвращает новое значение.
    pub fn add_like(&mut self) -> u64 {
        self.likes = self.likes.saturating_add(1);
        self.likes
    }
}

/// Возвращает наименьший положительный идентификатор, свободный в коллекции.
///
/// Счёт идёт с единицы, дыры после удалений заполняются первыми.
pub fn next_id(posts: &[Post]) -> i64 {
    let used: HashSet<i64> = posts.iter().map(|post| post.id).collect();

    let mut id = 1;
    while used.contains(&id) {
        id += 1;
    }
    id
}

fn normalize(value: &str, placeholder: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_AUTHOR, DEFAULT_CONTENT, DEFAULT_TITLE, Post, next_id};

    #[test]
    fn new_trims_fields() {
        let post = Post::new(1, "  Alice  ", "  First post  ", "  Hello  ");

        assert_eq!(post.author, "Alice");
        assert_eq!(post.title, "First post");
        assert_eq!(post.content, "Hello");
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn new_substitutes_placeholders_for_blank_fields() {
        let post = Post::new(1, "   ", "", "  \n ");

        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.title, DEFAULT_TITLE);
        assert_eq!(post.content, DEFAULT_CONTENT);
    }

    #[test]
    fn apply_keeps_id_and_likes() {
        let mut post = Post::new(7, "Alice", "Old", "Old text");
        post.add_like();
        post.add_like();

        post.apply("Bob", "", "New text");

        assert_eq!(post.id, 7);
        assert_eq!(post.likes, 2);
        assert_eq!(post.author, "Bob");
        assert_eq!(post.title, DEFAULT_TITLE);
        assert_eq!(post.content, "New text");
    }

    #[test]
    fn add_like_counts_from_zero() {
        let mut post = Post::new(1, "Alice", "Title", "Text");

        assert_eq!(post.add_like(), 1);
        assert_eq!(post.add_like(), 2);
    }

    #[test]
    fn next_id_starts_from_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_fills_smallest_gap() {
        let posts = vec![
            Post::new(1, "a", "t", "c"),
            Post::new(2, "a", "t", "c"),
            Post::new(4, "a", "t", "c"),
        ];

        assert_eq!(next_id(&posts), 3);
    }

    #[test]
    fn next_id_ignores_collection_order() {
        let posts = vec![
            Post::new(4, "a", "t", "c"),
            Post::new(1, "a", "t", "c"),
            Post::new(2, "a", "t", "c"),
        ];

        assert_eq!(next_id(&posts), 3);
    }

    #[test]
    fn deserialize_defaults_missing_likes_to_zero() {
        let raw = r#"{"id": 3, "author": "Alice", "title": "t", "content": "c"}"#;

        let post: Post = serde_json::from_str(raw).expect("post must deserialize");

        assert_eq!(post.likes, 0);
    }
}
