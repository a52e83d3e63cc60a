mod oembed;
mod title;
mod url;

pub use oembed::{fallback_metadata, OEmbedClient, UNKNOWN_ARTIST, UNKNOWN_SONG};
pub use title::split_title;
pub use url::{embed_url, extract_video_id, is_youtube_url, thumbnail_url, watch_url};
