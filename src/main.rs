//! page-codec command line tool.
//!
//! Decodes page instance Urls into request handlers and encodes handlers
//! back into canonical Urls, using the same codec an application mounts.
//!
//! ```text
//! page-codec decode 'wicket/page?abc.4.5-ILinkListener-a-b-c'
//! page-codec encode render --page-id 15 --version 4 --alias pm1
//! page-codec encode listener --page-id 15 --component a:b:c --interface ILinkListener
//! page-codec check-config codec.toml
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use page_codec::codec::{ComponentPath, PageReference};
use page_codec::config::{load_config, CodecConfig};
use page_codec::observability::logging::init_logging;
use page_codec::registry::ListenerInterface;
use page_codec::{PageInstanceCodec, RequestCodec, RequestHandler, Url};

#[derive(Parser)]
#[command(name = "page-codec")]
#[command(about = "Decode and encode page instance Urls", long_about = None)]
struct Cli {
    /// TOML configuration file (defaults are used when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one or more Urls and print the result as JSON
    Decode {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Encode a request handler into its canonical Url
    #[command(subcommand)]
    Encode(EncodeCommand),
    /// Load and validate a configuration file
    CheckConfig { path: PathBuf },
}

#[derive(Subcommand)]
enum EncodeCommand {
    /// Url that renders a page
    Render(PageArgs),
    /// Url that invokes a listener on a component
    Listener {
        #[command(flatten)]
        page: PageArgs,
        /// Colon-separated component path (e.g. `form:submit`)
        #[arg(long)]
        component: String,
        /// Listener interface name
        #[arg(long)]
        interface: String,
        /// Behavior index on the component
        #[arg(long)]
        behavior: Option<u32>,
    },
}

#[derive(Args)]
struct PageArgs {
    #[arg(long)]
    page_id: u64,
    #[arg(long, default_value_t = 0)]
    version: u64,
    #[arg(long)]
    alias: Option<String>,
}

impl PageArgs {
    fn reference(&self) -> PageReference {
        PageReference::new(self.page_id, self.version, self.alias.clone())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Commands::CheckConfig { path } = &cli.command {
        return check_config(path);
    }

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => CodecConfig::default(),
    };
    init_logging(&config.observability);

    let codec = match PageInstanceCodec::from_config(&config) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(prefix = ?codec.mount_prefix(), "Codec ready");

    match cli.command {
        Commands::Decode { urls } => decode(&codec, &urls),
        Commands::Encode(command) => encode(&codec, command),
        Commands::CheckConfig { .. } => ExitCode::SUCCESS,
    }
}

fn decode(codec: &PageInstanceCodec, urls: &[String]) -> ExitCode {
    for raw in urls {
        let url = Url::parse_link(raw);
        let line = match codec.decode(&url) {
            Ok(outcome) => json!({ "url": raw, "result": outcome }),
            Err(e) => json!({ "url": raw, "error": e.to_string() }),
        };
        println!("{}", line);
    }
    ExitCode::SUCCESS
}

fn encode(codec: &PageInstanceCodec, command: EncodeCommand) -> ExitCode {
    let handler = match command {
        EncodeCommand::Render(page) => RequestHandler::render(page.reference()),
        EncodeCommand::Listener {
            page,
            component,
            interface,
            behavior,
        } => RequestHandler::listener(
            page.reference(),
            ComponentPath::parse(&component),
            ListenerInterface::new(interface),
            behavior,
        ),
    };

    match codec.encode(&handler) {
        Ok(url) => {
            println!("{}", url);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn check_config(path: &Path) -> ExitCode {
    match load_config(path) {
        Ok(config) => {
            println!(
                "{}: ok (mount /{}, {} listener interfaces)",
                path.display(),
                config.mount.prefix.join("/"),
                config.listeners.interfaces.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}
