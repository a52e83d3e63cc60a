use once_cell::sync::Lazy;
use regex::Regex;

/// 标题中歌名/歌手的排列方式
#[derive(Debug, Clone, Copy)]
enum Order {
    ArtistFirst,
    SongFirst,
}

static TITLE_PATTERNS: Lazy<Vec<(Regex, Order)>> = Lazy::new(|| {
    [
        // "Artist - Song"
        (r"^(.+?)\s*-\s*(.+)$", Order::ArtistFirst),
        // "Artist: Song"
        (r"^(.+?)\s*:\s*(.+)$", Order::ArtistFirst),
        // "Song by Artist"
        (r"(?i)^(.+?)\s+by\s+(.+)$", Order::SongFirst),
    ]
    .into_iter()
    .filter_map(|(p, order)| Regex::new(p).ok().map(|re| (re, order)))
    .collect()
});

/// 从视频标题中拆出 (歌名, 歌手)
///
/// 依次尝试常见写法，都不匹配时返回原标题与频道作者
pub fn split_title(title: &str, author: &str) -> (String, String) {
    for (re, order) in TITLE_PATTERNS.iter() {
        if let Some(caps) = re.captures(title) {
            let first = caps[1].trim().to_string();
            let second = caps[2].trim().to_string();
            return match order {
                Order::ArtistFirst => (second, first),
                Order::SongFirst => (first, second),
            };
        }
    }

    (title.to_string(), author.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_dash_song() {
        assert_eq!(
            split_title("Bon Iver - Holocene", "Bon Iver"),
            ("Holocene".to_string(), "Bon Iver".to_string())
        );
    }

    #[test]
    fn test_artist_colon_song() {
        assert_eq!(
            split_title("Radiohead: Weird Fishes", "RadioheadVEVO"),
            ("Weird Fishes".to_string(), "Radiohead".to_string())
        );
    }

    #[test]
    fn test_song_by_artist() {
        assert_eq!(
            split_title("Clair de Lune BY Debussy", "Classical Channel"),
            ("Clair de Lune".to_string(), "Debussy".to_string())
        );
    }

    #[test]
    fn test_dash_wins_over_by() {
        // 按顺序匹配，第一个命中的生效
        assert_eq!(
            split_title("Stand by Me - Ben E. King", "x"),
            ("Ben E. King".to_string(), "Stand by Me".to_string())
        );
    }

    #[test]
    fn test_fallback_to_raw_title_and_author() {
        assert_eq!(
            split_title("Lofi beats to study to", "Lofi Girl"),
            ("Lofi beats to study to".to_string(), "Lofi Girl".to_string())
        );
    }
}
