use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use miniblog_store::{JsonFileStore, Post, PostStore, next_id};

const DEFAULT_DATA_FILE: &str = "data/data.json";

#[derive(Debug, Parser)]
#[command(name = "miniblog-cli", version, about = "Управление постами miniblog из консоли")]
struct Cli {
    /// Путь к файлу данных (по умолчанию DATA_FILE или data/data.json).
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Список всех постов.
    List {
        /// Вывести сырой JSON вместо текста.
        #[arg(long)]
        json: bool,
    },
    /// Один пост по id.
    Show {
        #[arg(long)]
        id: i64,
        /// Вывести сырой JSON вместо текста.
        #[arg(long)]
        json: bool,
    },
    /// Добавление поста.
    ///
    /// Пустой автор, заголовок или текст заменяются заглушками,
    /// как и в веб-форме.
    Add {
        #[arg(long, default_value = "")]
        author: String,
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Удаление поста по id.
    Delete {
        #[arg(long)]
        id: i64,
    },
    /// Записать стартовый набор постов в файл данных.
    Seed {
        /// Перезаписать файл, даже если он уже существует.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let data_file = resolve_data_file(cli.file, std::env::var("DATA_FILE").ok());
    let store = JsonFileStore::new(data_file);

    match cli.command {
        Command::List { json } => {
            let posts = load(&store).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
            } else {
                print_list(&posts);
            }
        }
        Command::Show { id, json } => {
            let posts = load(&store).await?;
            let post = posts
                .into_iter()
                .find(|post| post.id == id)
                .ok_or_else(|| anyhow!("пост id={id} не найден"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
            } else {
                print_post("Пост", &post);
            }
        }
        Command::Add {
            author,
            title,
            content,
        } => {
            let mut posts = load(&store).await?;

            let post = Post::new(next_id(&posts), &author, &title, &content);
            posts.push(post.clone());
            ensure_parent_dir(store.path()).await?;
            save(&store, &posts).await?;

            print_post("Пост добавлен", &post);
        }
        Command::Delete { id } => {
            let mut posts = load(&store).await?;

            let before = posts.len();
            posts.retain(|post| post.id != id);
            if posts.len() == before {
                return Err(anyhow!("пост id={id} не найден"));
            }
            save(&store, &posts).await?;

            println!("Пост удалён: id={id}");
        }
        Command::Seed { force } => {
            if store.path().exists() && !force {
                return Err(anyhow!(
                    "файл {} уже существует, добавьте --force для перезаписи",
                    store.path().display()
                ));
            }

            ensure_parent_dir(store.path()).await?;

            let posts = seed_posts();
            save(&store, &posts).await?;

            println!("Записано постов: {} -> {}", posts.len(), store.path().display());
        }
    }

    Ok(())
}

/// На свежей машине каталога файла данных ещё нет; команды, которые
/// пишут файл, создают его заранее.
async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(dir)
            .await
            .context("не удалось создать каталог для файла данных")?;
    }
    Ok(())
}

async fn load(store: &JsonFileStore) -> Result<Vec<Post>> {
    store
        .load()
        .await
        .with_context(|| format!("не удалось прочитать {}", store.path().display()))
}

async fn save(store: &JsonFileStore, posts: &[Post]) -> Result<()> {
    store
        .save(posts)
        .await
        .with_context(|| format!("не удалось сохранить {}", store.path().display()))
}

/// Флаг --file важнее переменной окружения, пустая переменная игнорируется.
fn resolve_data_file(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }

    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATA_FILE),
    }
}

fn seed_posts() -> Vec<Post> {
    let mut first = Post::new(
        1,
        "Max",
        "Hello, miniblog",
        "The very first post. Edit or delete it, or write your own.",
    );
    first.add_like();
    first.add_like();

    let second = Post::new(
        2,
        "Max",
        "How posts are stored",
        "Everything lives in one JSON file next to the server. No database involved.",
    );

    vec![first, second]
}

fn print_list(posts: &[Post]) {
    println!("Постов: {}", posts.len());
    for post in posts {
        println!(
            "- [{}] {} (автор: {}, лайков: {})",
            post.id, post.title, post.author, post.likes
        );
    }
}

fn print_post(title: &str, post: &Post) {
    println!("{title}");
    println!("id: {}", post.id);
    println!("author: {}", post.author);
    println!("title: {}", post.title);
    println!("likes: {}", post.likes);
    println!("content: {}", post.content);
}
