//! CLI entry point for inkpost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkpost::auth::{self, AuthContext, Credentials};
use inkpost::commands;
use inkpost::Blog;

#[derive(Parser)]
#[command(name = "inkpost")]
#[command(version)]
#[command(about = "A Markdown-file blog engine with an admin CLI", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Admin email for mutating commands (or BLOG_ADMIN_EMAIL)
    #[arg(long, global = true)]
    email: Option<String>,

    /// Admin password for mutating commands (or BLOG_ADMIN_PASSWORD)
    #[arg(long, global = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Post title
        title: String,

        /// Short summary shown in listings
        #[arg(short, long, default_value = "")]
        excerpt: String,

        /// Publication date (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Markdown body
        #[arg(long)]
        content: Option<String>,

        /// Read the Markdown body from a file
        #[arg(short, long, conflicts_with = "content")]
        file: Option<PathBuf>,
    },

    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Emit posts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post
    Show {
        /// Slug of the post
        slug: String,

        /// Render the Markdown body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Edit fields of an existing post (the slug never changes)
    Edit {
        /// Slug of the post
        slug: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        excerpt: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        content: Option<String>,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Slug of the post
        slug: String,
    },

    /// Preview the slug a title would produce
    Slug { title: String },

    /// Export all posts as static HTML
    Export,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "inkpost=debug,info"
    } else {
        "inkpost=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            commands::init::run(&target_dir)?;
            println!("Initialized blog in {}", target_dir.display());
        }

        Commands::New {
            title,
            excerpt,
            date,
            content,
            file,
        } => {
            let blog = Blog::new(&base_dir)?;
            let ctx = login(&blog, cli.email, cli.password)?;
            commands::new::run(
                &blog,
                &ctx,
                &title,
                &excerpt,
                date.as_deref(),
                content.as_deref(),
                file.as_deref(),
            )?;
        }

        Commands::List { json } => {
            let blog = Blog::new(&base_dir)?;
            commands::list::run(&blog, json)?;
        }

        Commands::Show { slug, html } => {
            let blog = Blog::new(&base_dir)?;
            commands::show::run(&blog, &slug, html)?;
        }

        Commands::Edit {
            slug,
            title,
            excerpt,
            date,
            content,
        } => {
            let blog = Blog::new(&base_dir)?;
            let ctx = login(&blog, cli.email, cli.password)?;
            commands::edit::run(
                &blog,
                &ctx,
                &slug,
                commands::edit::EditFields {
                    title,
                    date,
                    excerpt,
                    content,
                },
            )?;
        }

        Commands::Delete { slug } => {
            let blog = Blog::new(&base_dir)?;
            let ctx = login(&blog, cli.email, cli.password)?;
            commands::delete::run(&blog, &ctx, &slug)?;
        }

        Commands::Slug { title } => {
            println!("{}", inkpost::content::derive_slug(&title));
        }

        Commands::Export => {
            let blog = Blog::new(&base_dir)?;
            commands::export::run(&blog)?;
        }
    }

    Ok(())
}

/// Resolve credentials from flags or environment and authenticate against
/// the configured admin pair
fn login(blog: &Blog, email: Option<String>, password: Option<String>) -> Result<AuthContext> {
    let credentials = Credentials {
        email: email
            .or_else(|| std::env::var("BLOG_ADMIN_EMAIL").ok())
            .unwrap_or_default(),
        password: password
            .or_else(|| std::env::var("BLOG_ADMIN_PASSWORD").ok())
            .unwrap_or_default(),
    };
    auth::login(&blog.config.admin, &credentials)
}
