//! Command-line and environment configuration.
//!
//! Every flag can also be set through an `EVIDEBUS_*` environment
//! variable; flags win over the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::sitemap::SitemapConfig;

/// Public origin of the site.
pub const DEFAULT_BASE_URL: &str = "https://evidebus.com";

/// Kerala bus timings directory.
#[derive(Debug, Parser)]
#[command(name = "evidebus", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API
    Serve(ServeArgs),

    /// Write the sitemap document
    Sitemap(SitemapArgs),
}

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct SiteArgs {
    /// Public origin used in generated URLs
    #[arg(long, env = "EVIDEBUS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
}

impl SiteArgs {
    /// Sitemap configuration for this site.
    pub fn sitemap_config(&self) -> SitemapConfig {
        SitemapConfig::new(self.base_url.clone())
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "EVIDEBUS_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Directory served under /static
    #[arg(long, env = "EVIDEBUS_STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub site: SiteArgs,
}

#[derive(Debug, Clone, Args)]
pub struct SitemapArgs {
    /// Output file
    #[arg(long, env = "EVIDEBUS_SITEMAP_OUT", default_value = "public/sitemap.xml")]
    pub out: PathBuf,

    /// Date for <lastmod> (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub lastmod: Option<NaiveDate>,

    #[command(flatten)]
    pub site: SiteArgs,
}
