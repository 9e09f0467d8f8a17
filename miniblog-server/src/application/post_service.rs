use miniblog_store::{Post, PostStore, StoreError, next_id};

/// Author/title/content as submitted; placeholder substitution happens in
/// `Post` itself, so the CLI and the web forms share the rule.
#[derive(Debug, Clone)]
pub(crate) struct PostForm {
    pub(crate) author: String,
    pub(crate) title: String,
    pub(crate) content: String,
}

/// Post operations over the load -> mutate -> save cycle.
///
/// Every call reads the whole collection from the store and writes the whole
/// collection back; nothing is cached between calls.
pub(crate) struct PostService<S: PostStore> {
    store: S,
}

impl<S: PostStore> PostService<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.store.load().await
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Option<Post>, StoreError> {
        let posts = self.store.load().await?;
        Ok(posts.into_iter().find(|post| post.id == id))
    }

    /// Appends a post under the smallest free ID and persists the collection.
    pub(crate) async fn add_post(&self, form: PostForm) -> Result<Post, StoreError> {
        let mut posts = self.store.load().await?;

        let post = Post::new(next_id(&posts), &form.author, &form.title, &form.content);
        posts.push(post.clone());
        self.store.save(&posts).await?;

        Ok(post)
    }

    /// Rewrites author/title/content of an existing post, keeping its likes.
    /// `Ok(None)` when the ID is unknown; nothing is saved in that case.
    pub(crate) async fn update_post(
        &self,
        id: i64,
        form: PostForm,
    ) -> Result<Option<Post>, StoreError> {
        let mut posts = self.store.load().await?;

        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        post.apply(&form.author, &form.title, &form.content);
        let updated = post.clone();

        self.store.save(&posts).await?;
        Ok(Some(updated))
    }

    /// Removes a post by ID. `Ok(false)` when the ID is unknown; the
    /// collection is left untouched and nothing is saved.
    pub(crate) async fn delete_post(&self, id: i64) -> Result<bool, StoreError> {
        let mut posts = self.store.load().await?;

        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Ok(false);
        }

        self.store.save(&posts).await?;
        Ok(true)
    }

    /// Increments the like counter. `Ok(None)` when the ID is unknown;
    /// nothing is saved in that case.
    pub(crate) async fn like_post(&self, id: i64) -> Result<Option<u64>, StoreError> {
        let mut posts = self.store.load().await?;

        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            return Ok(None);
        };
        let likes = post.add_like();

        self.store.save(&posts).await?;
        Ok(Some(likes))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use miniblog_store::{
        DEFAULT_AUTHOR, DEFAULT_TITLE, MemoryStore, Post, PostStore, StoreError,
    };

    use super::{PostForm, PostService};

    fn form(author: &str, title: &str, content: &str) -> PostForm {
        PostForm {
            author: author.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    fn seeded(ids: &[i64]) -> MemoryStore {
        let posts = ids
            .iter()
            .map(|id| Post::new(*id, "Seed", "Seed title", "Seed text"))
            .collect();
        MemoryStore::with_posts(posts)
    }

    #[tokio::test]
    async fn add_post_assigns_sequential_ids_from_one() {
        let service = PostService::new(MemoryStore::new());

        let first = service
            .add_post(form("Alice", "First", "Hello"))
            .await
            .expect("first add must succeed");
        let second = service
            .add_post(form("Bob", "Second", "World"))
            .await
            .expect("second add must succeed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn add_post_reuses_smallest_free_id() {
        let service = PostService::new(seeded(&[1, 2, 4]));

        let created = service
            .add_post(form("Alice", "Gap", "Filler"))
            .await
            .expect("add must succeed");

        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn add_post_substitutes_placeholders() {
        let service = PostService::new(MemoryStore::new());

        let created = service
            .add_post(form("   ", "", "Body"))
            .await
            .expect("add must succeed");

        assert_eq!(created.author, DEFAULT_AUTHOR);
        assert_eq!(created.title, DEFAULT_TITLE);
        assert_eq!(created.content, "Body");
    }

    #[tokio::test]
    async fn update_post_returns_none_for_unknown_id() {
        let service = PostService::new(seeded(&[1]));

        let updated = service
            .update_post(42, form("A", "T", "C"))
            .await
            .expect("update must not fail");

        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn update_post_keeps_likes() {
        let service = PostService::new(seeded(&[1]));
        service.like_post(1).await.expect("like must succeed");
        service.like_post(1).await.expect("like must succeed");

        let updated = service
            .update_post(1, form("New Author", "New Title", "New text"))
            .await
            .expect("update must not fail")
            .expect("post must exist");

        assert_eq!(updated.likes, 2);
        assert_eq!(updated.title, "New Title");
    }

    #[tokio::test]
    async fn delete_post_removes_only_the_target() {
        let service = PostService::new(seeded(&[1, 2, 3]));

        let deleted = service.delete_post(2).await.expect("delete must not fail");
        let remaining = service.list_posts().await.expect("list must succeed");

        assert!(deleted);
        let ids: Vec<i64> = remaining.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn delete_post_leaves_collection_unchanged_for_unknown_id() {
        let service = PostService::new(seeded(&[1, 2]));

        let deleted = service.delete_post(42).await.expect("delete must not fail");
        let remaining = service.list_posts().await.expect("list must succeed");

        assert!(!deleted);
        assert_eq!(remaining.len(), 2);
    }

    #[tokio::test]
    async fn like_post_counts_up_from_missing_likes() {
        let service = PostService::new(seeded(&[1]));

        let first = service.like_post(1).await.expect("like must not fail");
        let second = service.like_post(1).await.expect("like must not fail");

        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[tokio::test]
    async fn like_post_returns_none_for_unknown_id() {
        let service = PostService::new(seeded(&[1]));

        let liked = service.like_post(42).await.expect("like must not fail");

        assert_eq!(liked, None);
    }

    /// Store whose saves always fail; loads return an empty collection.
    struct BrokenSaveStore;

    #[async_trait]
    impl PostStore for BrokenSaveStore {
        async fn load(&self) -> Result<Vec<Post>, StoreError> {
            Ok(Vec::new())
        }

        async fn save(&self, _posts: &[Post]) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk is read-only")))
        }
    }

    #[tokio::test]
    async fn add_post_propagates_save_failure() {
        let service = PostService::new(BrokenSaveStore);

        let err = service
            .add_post(form("Alice", "Title", "Text"))
            .await
            .expect_err("save failure must surface");

        assert!(matches!(err, StoreError::Io(_)));
    }
}
