use clap::{Args, Parser, Subcommand};
use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_data::{DEFAULT_BASE_URL, ListResponse, Params, YouTubeClient};

/// Query the YouTube Data API v3 from the command line.
#[derive(Parser, Debug)]
#[command(name = "youtube-data-cli", version, about, arg_required_else_help = true)]
struct Cli {
    /// API key from https://console.developers.google.com
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    key: Option<String>,

    /// Root URL of the API
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// Print one line per returned item instead of the raw JSON response
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Content details, statistics and live streaming details of a video
    Video {
        /// Video ID (or comma-separated list of IDs)
        id: String,
    },
    /// Details of a playlist
    Playlist {
        /// Playlist ID
        id: String,
    },
    /// Items of a playlist
    PlaylistItems {
        /// Playlist ID
        playlist_id: String,
        #[arg(short = 'n', long, default_value_t = 5)]
        max_results: u32,
        #[command(flatten)]
        params: ExtraParams,
    },
    /// Search for videos, channels and playlists
    Search {
        query: String,
        #[arg(short = 'n', long, default_value_t = 5)]
        max_results: u32,
        #[command(flatten)]
        params: ExtraParams,
    },
    /// Videos related to a video
    Related {
        /// Video ID
        video_id: String,
        #[arg(short = 'n', long, default_value_t = 5)]
        max_results: u32,
    },
    /// The most popular videos, optionally within one video category
    MostPopular {
        #[arg(short = 'n', long, default_value_t = 5)]
        max_results: u32,
        /// Video category ID
        #[arg(long)]
        category: Option<String>,
    },
    /// Channels matching the given filters
    Channels {
        /// Channel filter such as `id=UC...` or `forHandle=@name`
        #[arg(long = "filter", value_name = "NAME=VALUE", value_parser = parse_key_val, required = true)]
        filters: Vec<(String, String)>,
        /// Channel resource part to include
        #[arg(long = "part", default_values_t = ["snippet".to_string()])]
        parts: Vec<String>,
        #[command(flatten)]
        params: ExtraParams,
    },
}

#[derive(Args, Debug)]
struct ExtraParams {
    /// Additional query parameter, overriding the defaults
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    params: Vec<(String, String)>,
}

impl ExtraParams {
    fn to_params(&self) -> Params {
        self.params.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{s}`")),
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let mut yt = YouTubeClient::new().with_base_url(&cli.base_url);
    if let Some(key) = &cli.key {
        yt.set_key(key);
    }

    let response = match &cli.command {
        Command::Video { id } => yt.get_by_id(id).await,
        Command::Playlist { id } => yt.get_playlist_by_id(id).await,
        Command::PlaylistItems {
            playlist_id,
            max_results,
            params,
        } => {
            yt.get_playlist_items(playlist_id, *max_results, Some(&params.to_params()))
                .await
        }
        Command::Search {
            query,
            max_results,
            params,
        } => yt.search(query, *max_results, Some(&params.to_params())).await,
        Command::Related {
            video_id,
            max_results,
        } => yt.related(video_id, *max_results).await,
        Command::MostPopular {
            max_results,
            category: None,
        } => yt.most_popular(*max_results).await,
        Command::MostPopular {
            max_results,
            category: Some(category),
        } => yt.most_popular_by_category(*max_results, category).await,
        Command::Channels {
            filters,
            parts,
            params,
        } => {
            let filters: Params = filters.iter().map(|(k, v)| (k.as_str(), v)).collect();
            yt.list_channels(&filters, parts, Some(&params.to_params()))
                .await
        }
    }
    .context("query YouTube Data API")?;

    if cli.summary {
        let list: ListResponse =
            ListResponse::from_value(response).context("parse YouTube API list response")?;
        for item in &list.items {
            let id = item.id_str().unwrap_or("-");
            match &item.snippet {
                Some(snippet) => {
                    let published = snippet
                        .published_at
                        .map(|t| t.to_string())
                        .unwrap_or_default();
                    println!("{id}\t{published}\t{}", snippet.title);
                }
                None => println!("{id}"),
            }
        }
        if let Some(page_info) = &list.page_info {
            eprintln!(
                "{} of {} results",
                list.items.len(),
                page_info.total_results
            );
        }
        if let Some(token) = &list.next_page_token {
            eprintln!("next page: --param pageToken={token}");
        }
    } else {
        let json = serde_json::to_string_pretty(&response).context("serialize response")?;
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_value_pairs() {
        assert_eq!(
            parse_key_val("order=date"),
            Ok(("order".to_string(), "date".to_string()))
        );
        assert_eq!(
            parse_key_val("q=a=b"),
            Ok(("q".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_key_val("pageToken="), Ok(("pageToken".to_string(), String::new())));
        assert!(parse_key_val("order").is_err());
        assert!(parse_key_val("=date").is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn channels_arguments() {
        let cli = Cli::try_parse_from([
            "youtube-data-cli",
            "--key",
            "k",
            "channels",
            "--filter",
            "id=UC123",
            "--part",
            "snippet",
            "--part",
            "statistics",
            "--param",
            "hl=en",
        ])
        .unwrap();
        let Command::Channels {
            filters,
            parts,
            params,
        } = cli.command
        else {
            panic!("wrong subcommand");
        };
        assert_eq!(filters, vec![("id".to_string(), "UC123".to_string())]);
        assert_eq!(parts, vec!["snippet", "statistics"]);
        assert_eq!(params.to_params().get("hl"), Some("en"));
    }
}
