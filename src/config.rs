use std::net::IpAddr;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(env, long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,

    /// Comma separated list of allowed CORS origins, or `*`.
    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,

    /// Base url of the third-party listings API. Property details are served from demo
    /// data when this or the api key is missing.
    #[clap(env, long)]
    pub zoopla_base_url: Option<String>,

    #[clap(env, long)]
    pub zoopla_api_key: Option<String>,

    #[clap(env, long, default_value_t = 5)]
    pub listings_timeout_secs: u64,
}
