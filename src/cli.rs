use clap::{Parser, Subcommand};
use melodium_types::Emotion;

#[derive(Parser)]
#[command(name = "melodium")]
#[command(about = "Attach a song to a memory and play it back later", long_about = None)]
pub struct Cli {
    /// Use local storage (./.melodium)
    #[arg(short, long, global = true)]
    pub local: bool,

    /// Use global storage (~/.melodium)
    #[arg(short, long, global = true)]
    pub global: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Initialize melodium configuration (optional, defaults are used otherwise)")]
    Init,

    #[command(about = "Create a memory for a YouTube song")]
    Add {
        /// YouTube URL (watch, youtu.be or embed link)
        url: String,

        /// How the song makes you feel (see `melodium emotions`)
        #[arg(short, long)]
        emotion: Option<Emotion>,

        /// Secondary feelings (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        sub: Option<Vec<String>>,

        /// Tags for the memory (comma-separated, e.g., "summer,road trip")
        #[arg(short = 't', long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Free text describing the memory
        #[arg(short, long)]
        note: Option<String>,

        /// Song title
        #[arg(long)]
        song: Option<String>,

        /// Artist name
        #[arg(long)]
        artist: Option<String>,

        /// Look up song title and artist from YouTube
        #[arg(long)]
        lookup: bool,
    },

    #[command(about = "List all memories, newest first")]
    List {
        /// Only memories with this emotion
        #[arg(short, long)]
        emotion: Option<Emotion>,

        /// Only memories with this tag
        #[arg(short = 't', long)]
        tag: Option<String>,

        /// Print memories as JSON (same shape as the stored data)
        #[arg(long)]
        json: bool,
    },

    #[command(about = "Show one memory in detail")]
    Show {
        id: String,
    },

    #[command(about = "Update fields of a memory (unspecified fields are kept)")]
    Update {
        id: String,

        /// New YouTube URL
        #[arg(short, long)]
        url: Option<String>,

        #[arg(short, long)]
        emotion: Option<Emotion>,

        /// Replace secondary feelings (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        sub: Option<Vec<String>>,

        /// Replace tags (comma-separated)
        #[arg(short = 't', long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// New note (pass "" to remove it)
        #[arg(short, long)]
        note: Option<String>,

        /// New song title (pass "" to remove it)
        #[arg(long)]
        song: Option<String>,

        /// New artist name (pass "" to remove it)
        #[arg(long)]
        artist: Option<String>,

        /// Refresh song title and artist from YouTube
        #[arg(long)]
        lookup: bool,
    },

    #[command(about = "Delete a memory")]
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    #[command(about = "Clear all memories (DANGEROUS operation)")]
    Clear {
        /// Skip confirmation prompt (use with caution)
        #[arg(short, long)]
        force: bool,
    },

    #[command(about = "Look up song title and artist for YouTube URLs")]
    Lookup {
        #[arg(required = true)]
        urls: Vec<String>,
    },

    #[command(about = "List the available emotions")]
    Emotions,
}
