//! `folio` — text-mode demo shell for the Folio portfolio engine.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the
//! on-disk key-value store, and runs a line-oriented loop on stdin: lines
//! starting with `/` or `#` navigate and print the resulting view; a small
//! set of commands drives the form actions.
//!
//! ```text
//! register <email> <password> [name...]
//! login <email> <password>
//! logout
//! contact <name> <email> <message...>
//! project <public|private> <title...> [-- tag,tag,...]
//! delete <project-id>
//! quit
//! ```

use std::{io::BufRead as _, path::PathBuf};

use anyhow::Context as _;
use clap::Parser;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use folio_app::{App, View};
use folio_core::{ProjectDraft, Store, User, Visibility};
use folio_store_kv::{DirBackend, KvStore};

#[derive(Parser)]
#[command(author, version, about = "Folio portfolio demo shell")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Override the data directory from config.
  #[arg(long)]
  data_dir: Option<PathBuf>,
}

/// Runtime configuration, deserialised from `config.toml` and the
/// `FOLIO_*` environment.
#[derive(Deserialize)]
struct AppConfig {
  data_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration; CLI flags override file and environment.
  let settings = config::Config::builder()
    .set_default("data_dir", "folio_data")
    .context("setting config defaults")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("FOLIO"))
    .build()
    .context("failed to read config")?;

  let mut app_cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise AppConfig")?;
  if let Some(dir) = cli.data_dir {
    app_cfg.data_dir = dir;
  }

  let backend = DirBackend::open(&app_cfg.data_dir)
    .with_context(|| format!("failed to open data dir {:?}", app_cfg.data_dir))?;
  let app = App::new(KvStore::new(backend));

  tracing::info!(data_dir = %app_cfg.data_dir.display(), "store opened");
  println!("folio — type a fragment (e.g. #/dashboard) or a command; 'quit' exits");

  // Show the initial view, like the initial-load dispatch.
  render(&app.navigate("#/")?);

  let stdin = std::io::stdin();
  for line in stdin.lock().lines() {
    let line = line.context("reading stdin")?;
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    if line == "quit" || line == "exit" {
      break;
    }

    if let Err(e) = handle_line(&app, line) {
      println!("error: {e}");
    }
  }

  Ok(())
}

fn handle_line<S: Store + Clone + 'static>(app: &App<S>, line: &str) -> folio_app::Result<()> {
  if line.starts_with('/') || line.starts_with('#') {
    render(&app.navigate(line)?);
    return Ok(());
  }

  let mut words = line.split_whitespace();
  let command = words.next().unwrap_or_default();

  match command {
    "register" => {
      let (Some(email), Some(password)) = (words.next(), words.next()) else {
        println!("usage: register <email> <password> [name...]");
        return Ok(());
      };
      let name = words.collect::<Vec<_>>().join(" ");
      let user = app.auth().register(email, password, &name)?;
      println!("account created and signed in as {}", user.display_name());
      render(&app.navigate("#/dashboard")?);
    }
    "login" => {
      let (Some(email), Some(password)) = (words.next(), words.next()) else {
        println!("usage: login <email> <password>");
        return Ok(());
      };
      let user = app.auth().login(email, password)?;
      println!("signed in as {}", user.display_name());
      render(&app.navigate("#/dashboard")?);
    }
    "logout" => {
      app.auth().logout()?;
      println!("signed out");
      render(&app.navigate("#/")?);
    }
    "contact" => {
      let (Some(name), Some(email)) = (words.next(), words.next()) else {
        println!("usage: contact <name> <email> <message...>");
        return Ok(());
      };
      let body = words.collect::<Vec<_>>().join(" ");
      app.submit_contact(name, email, &body)?;
      println!("message saved locally");
    }
    "project" => {
      let Some(visibility) = words.next().and_then(|w| w.parse::<Visibility>().ok()) else {
        println!("usage: project <public|private> <title...> [-- tag,tag,...]");
        return Ok(());
      };
      let rest = words.collect::<Vec<_>>().join(" ");
      let (title, tags) = match rest.split_once(" -- ") {
        Some((title, raw)) => (title.to_owned(), ProjectDraft::parse_tags(raw)),
        None => (rest, Vec::new()),
      };
      let draft = ProjectDraft {
        short: title.clone(),
        title,
        tags,
        visibility: Some(visibility),
        ..Default::default()
      };
      let project = app.create_project(draft)?;
      println!("project saved: #/p/{}", project.id);
    }
    "delete" => {
      let Some(id) = words.next().and_then(|w| w.parse::<Uuid>().ok()) else {
        println!("usage: delete <project-id>");
        return Ok(());
      };
      app.delete_project(id)?;
      println!("deleted");
    }
    other => println!("unknown command: {other}"),
  }

  Ok(())
}

// ─── Text rendering ──────────────────────────────────────────────────────────

fn attribution(owner: Option<&User>) -> String {
  owner.map_or_else(|| "Unknown".to_owned(), |u| u.display_name().to_owned())
}

fn render(view: &View) {
  match view {
    View::Home => println!("== Home =="),
    View::About => println!("== About Folio =="),
    View::Contact => println!("== Contact == (use: contact <name> <email> <message...>)"),
    View::Login => println!("== Login == (use: login <email> <password>)"),
    View::Register => println!("== Register == (use: register <email> <password> [name...])"),
    View::Dashboard { user, projects } => {
      println!("== Dashboard: {} ==", user.display_name());
      println!("shareable profile: #/u/{}", user.slug);
      if projects.is_empty() {
        println!("no projects yet");
      }
      for p in projects {
        println!("  [{:?}] {} — #/p/{}", p.visibility, p.title, p.id);
      }
    }
    View::ProjectDetail { project, owner } => {
      println!("== {} ==", project.title);
      println!(
        "by {} • {}",
        attribution(owner.as_ref()),
        project.created_at.format("%Y-%m-%d")
      );
      println!("{}", project.long.as_deref().unwrap_or(&project.short));
      if !project.tags.is_empty() {
        println!("tags: {}", project.tags.join(", "));
      }
      if let Some(url) = &project.url {
        println!("visit: {url}");
      }
      if !project.gallery.is_empty() {
        println!("gallery: {} image(s)", project.gallery.len());
      }
    }
    View::ProjectNotFound => println!("Project not found"),
    View::PrivateProject => println!("This project is private."),
    View::Profile { user, projects } => {
      println!("== {} — public profile ==", user.display_name());
      if projects.is_empty() {
        println!("no public projects yet");
      }
      for p in projects {
        println!("  {} — #/p/{}", p.title, p.id);
      }
    }
    View::ProfileNotFound => println!("User not found"),
    View::NotFound { path } => println!("Page not found: {path}"),
    View::RedirectLoop { path } => println!("Navigation gave up (redirect loop at {path})"),
  }
}
