// src/cli.rs
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "WEB_ADDRESS")]
    pub bind: Option<String>,

    /// HTTP server port
    #[arg(long, short, env = "WEB_PORT")]
    pub port: Option<u16>,

    /// Base URL of the breach range-query service
    #[arg(long, env = "BREACH_API_URL")]
    pub breach_api_url: Option<String>,
}
