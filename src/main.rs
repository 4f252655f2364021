use clap::{Args, Parser, Subcommand};
use npm_push::PublishOptions;
use npm_push::commands::{self, PublishArgs};
use npm_push::core::context::ProjectContext;
use npm_push::core::error::{FAILURE_EXIT_CODE, PushError, print_error};
use npm_push::i18n::{Locale, Translator};
use npm_push::release::version::BumpKind;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Release npm packages: bump, changelog, tag and publish, with rollback on failure
#[derive(Parser)]
#[command(name = "npm-push")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Output language (defaults to npm-push.toml `lang`, then the system locale)
  #[arg(long, global = true, value_enum)]
  lang: Option<Locale>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Bump the version, update the changelog, tag and publish one package
  Publish(PublishCli),

  /// List the packages in this project
  List {
    /// Output in JSON format
    #[arg(long)]
    json: bool,
  },
}

#[derive(Args)]
struct PublishCli {
  /// Package to publish, by name or directory (required in multi-package workspaces)
  #[arg(short, long)]
  package: Option<String>,

  /// Version component to bump [default: patch]
  #[arg(long, value_enum, conflicts_with = "new_version")]
  bump: Option<BumpKind>,

  /// Exact version to publish (major.minor.patch)
  #[arg(long)]
  new_version: Option<String>,

  /// Changelog line; repeat for several (e.g. -m "Fixed: crash on start")
  #[arg(short = 'm', long = "changelog", value_name = "LINE")]
  changelog: Vec<String>,

  /// Tag name [default: <name>@<version>, scope removed]
  #[arg(long)]
  tag: Option<String>,

  /// package.json script to run before publishing
  #[arg(long)]
  script: Option<String>,

  /// Create the tag and push it after publishing
  #[arg(long, overrides_with = "no_push_tag")]
  push_tag: bool,

  /// Do not create or push a tag
  #[arg(long)]
  no_push_tag: bool,

  /// Prepend a section to CHANGELOG.md
  #[arg(long, overrides_with = "no_generate_changelog")]
  generate_changelog: bool,

  /// Leave CHANGELOG.md alone
  #[arg(long)]
  no_generate_changelog: bool,

  /// Registry URL [default: https://registry.npmjs.org/]
  #[arg(long)]
  registry: Option<String>,

  /// One-time password for the registry (6 digits)
  #[arg(long)]
  otp: Option<String>,

  /// Remote the tag is pushed to [default: origin]
  #[arg(long)]
  remote: Option<String>,

  /// Skip the confirmation prompt
  #[arg(short, long)]
  yes: bool,

  /// Show the release preview and exit without changing anything
  #[arg(long)]
  dry_run: bool,
}

/// `--flag` / `--no-flag` pair to an override
fn flag_pair(on: bool, off: bool) -> Option<bool> {
  match (on, off) {
    (true, _) => Some(true),
    (_, true) => Some(false),
    _ => None,
  }
}

impl From<PublishCli> for PublishArgs {
  fn from(cli: PublishCli) -> Self {
    PublishArgs {
      options: PublishOptions {
        package: cli.package,
        bump: cli.bump,
        new_version: cli.new_version,
        changelog: cli.changelog,
        tag: cli.tag,
        script: cli.script,
        push_tag: flag_pair(cli.push_tag, cli.no_push_tag),
        generate_changelog: flag_pair(cli.generate_changelog, cli.no_generate_changelog),
        registry: cli.registry,
        otp: cli.otp,
        remote: cli.remote,
      },
      yes: cli.yes,
      dry_run: cli.dry_run,
    }
  }
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

/// Diagnostics on stderr, filtered by `NPM_PUSH_LOG` (default `warn`)
///
/// `NPM_PUSH_LOG_JSON=1` switches to one JSON object per event.
fn init_tracing() {
  let filter = EnvFilter::try_from_env("NPM_PUSH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  let json = std::env::var("NPM_PUSH_LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

  let registry = tracing_subscriber::registry().with(filter);
  let _ = if json {
    registry
      .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
      .try_init()
  } else {
    registry
      .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
      .try_init()
  };
}

fn main() {
  let cli = Cli::parse();
  init_tracing();

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => handle_error(e.into(), &Translator::new(cli.lang.unwrap_or_else(Locale::detect))),
  };

  let ctx = match ProjectContext::build(&root, cli.lang) {
    Ok(ctx) => ctx,
    Err(e) => handle_error(e, &ProjectContext::fallback_translator(&root, cli.lang)),
  };
  tracing::debug!(
    root = %ctx.root.display(),
    lang = ctx.translator.locale().code(),
    packages = ctx.workspace.packages.len(),
    "project context ready"
  );

  let result = match cli.command {
    Commands::Publish(args) => commands::run_publish(&ctx, args.into()),
    Commands::List { json } => commands::run_list(&ctx, json),
  };

  if let Err(err) = result {
    handle_error(err, &ctx.translator);
  }
}

fn handle_error(err: PushError, tr: &Translator) -> ! {
  tracing::debug!(error = ?err, "exiting with failure");
  print_error(&err, tr);
  std::process::exit(FAILURE_EXIT_CODE);
}
