use axum::http::StatusCode;
use miniblog_store::{DEFAULT_AUTHOR, DEFAULT_TITLE, Post};

use crate::presentation::flash::{Flash, FlashLevel};

const STYLE: &str = r#"
body { max-width: 42rem; margin: 2rem auto; padding: 0 1rem; font-family: Georgia, serif; color: #222; }
header h1 a { color: inherit; text-decoration: none; }
a { color: #2a6496; }
a.danger { color: #a33; }
.flash { padding: 0.6rem 1rem; border-radius: 4px; }
.flash.success { background: #e4f2e4; border: 1px solid #9c9; }
.flash.error { background: #f7e3e3; border: 1px solid #c99; }
article.post { border-bottom: 1px solid #ddd; padding: 1rem 0; }
article.post .content { white-space: pre-line; }
.controls { display: flex; gap: 1rem; align-items: center; }
.controls form { margin: 0; }
button { cursor: pointer; }
.post-form label { display: block; margin-bottom: 0.8rem; }
.post-form input, .post-form textarea { display: block; width: 100%; margin-top: 0.2rem; }
"#;

pub(crate) fn index_page(posts: &[Post], flash: Option<&Flash>) -> String {
    let listing = if posts.is_empty() {
        r#"<p class="empty">No posts yet. <a href="/add">Write the first one</a>.</p>"#.to_string()
    } else {
        posts.iter().map(post_card).collect()
    };

    let body = format!(
        r#"<p class="actions"><a href="/add">Add a new post</a></p>
{listing}"#
    );

    layout("Miniblog", flash, &body)
}

fn post_card(post: &Post) -> String {
    format!(
        r#"<article class="post">
  <h2>{title}</h2>
  <p class="meta">by {author}</p>
  <p class="content">{content}</p>
  <div class="controls">
    <form method="post" action="/update_like/{id}"><button class="like">&#10084; {likes}</button></form>
    <a href="/update/{id}">Update</a>
    <a class="danger" href="/delete/{id}">Delete</a>
  </div>
</article>
"#,
        title = escape(&post.title),
        author = escape(&post.author),
        content = escape(&post.content),
        id = post.id,
        likes = post.likes,
    )
}

pub(crate) fn add_page() -> String {
    let body = format!(
        r#"<h2>New post</h2>
<form method="post" action="/add" class="post-form">
  <label>Author <input type="text" name="author" placeholder="{author}"></label>
  <label>Title <input type="text" name="title" placeholder="{title}"></label>
  <label>Content <textarea name="content" rows="8"></textarea></label>
  <button>Publish</button> <a href="/">Cancel</a>
</form>"#,
        author = DEFAULT_AUTHOR,
        title = DEFAULT_TITLE,
    );

    layout("New post", None, &body)
}

pub(crate) fn update_page(post: &Post) -> String {
    let body = format!(
        r#"<h2>Update post</h2>
<form method="post" action="/update/{id}" class="post-form">
  <label>Author <input type="text" name="author" value="{author}"></label>
  <label>Title <input type="text" name="title" value="{title}"></label>
  <label>Content <textarea name="content" rows="8">{content}</textarea></label>
  <button>Save</button> <a href="/">Cancel</a>
</form>"#,
        id = post.id,
        author = escape(&post.author),
        title = escape(&post.title),
        content = escape(&post.content),
    );

    layout("Update post", None, &body)
}

pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    let heading = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Error")
    );

    let body = format!(
        r#"<h2>{heading}</h2>
<p>{message}</p>
<p><a href="/">Back to all posts</a></p>"#,
        message = escape(message),
    );

    layout(&heading, None, &body)
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let flash_html = match flash {
        Some(flash) => {
            let class = match flash.level {
                FlashLevel::Success => "flash success",
                FlashLevel::Error => "flash error",
            };
            format!(
                r#"<p class="{class}">{message}</p>
"#,
                message = escape(&flash.message),
            )
        }
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
<header><h1><a href="/">Miniblog</a></h1></header>
{flash_html}<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        style = STYLE,
    )
}

// Текст попадает в HTML как есть, поэтому спецсимволы экранируются вручную.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use miniblog_store::Post;

    use super::{Flash, error_page, escape, index_page, update_page};

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b>"quotes" & 'more'</b>"#),
            "&lt;b&gt;&quot;quotes&quot; &amp; &#39;more&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn index_lists_titles_and_like_counters() {
        let mut post = Post::new(7, "Max", "Hello world", "First entry");
        post.add_like();

        let html = index_page(&[post], None);

        assert!(html.contains("Hello world"));
        assert!(html.contains("&#10084; 1"));
        assert!(html.contains(r#"action="/update_like/7""#));
        assert!(html.contains(r#"href="/delete/7""#));
    }

    #[test]
    fn index_escapes_user_content() {
        let post = Post::new(1, "Max", "<script>alert(1)</script>", "x");

        let html = index_page(&[post], None);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert"));
    }

    #[test]
    fn empty_index_offers_the_add_link() {
        let html = index_page(&[], None);
        assert!(html.contains("No posts yet"));
    }

    #[test]
    fn flash_is_rendered_once_present() {
        let html = index_page(&[], Some(&Flash::success("Post deleted.")));
        assert!(html.contains("Post deleted."));
        assert!(html.contains("flash success"));
    }

    #[test]
    fn update_page_prefills_the_form() {
        let post = Post::new(3, "Max", "Old title", "Old content");

        let html = update_page(&post);

        assert!(html.contains(r#"action="/update/3""#));
        assert!(html.contains(r#"value="Old title""#));
        assert!(html.contains(">Old content</textarea>"));
    }

    #[test]
    fn error_page_carries_status_and_message() {
        let html = error_page(StatusCode::NOT_FOUND, "Post 9 was not found.");
        assert!(html.contains("404 Not Found"));
        assert!(html.contains("Post 9 was not found."));
    }
}
