//! YouTube 链接识别

use once_cell::sync::Lazy;
use regex::Regex;

/// 已知的链接形式，按顺序尝试，第一个命中的生效
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // watch?v= / youtu.be/ / embed/
        r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([^&\n?#]+)",
        // v 不是第一个查询参数
        r"youtube\.com/watch\?.*v=([^&\n?#]+)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

/// 从链接中提取视频 id，无法识别时返回 `None`
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn is_youtube_url(url: &str) -> bool {
    extract_video_id(url).is_some()
}

/// 标准播放页链接
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// 嵌入播放器链接
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_shapes_give_same_id() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(extract_video_id(url).as_deref(), Some("dQw4w9WgXcQ"), "{}", url);
        }
    }

    #[test]
    fn test_extra_query_parameters() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=abc123&t=42s").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract_video_id("https://youtu.be/abc123?si=share").as_deref(),
            Some("abc123")
        );
        // 第二个模式：v 不在第一个位置
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?list=PL1&v=xyz789#t=3").as_deref(),
            Some("xyz789")
        );
    }

    #[test]
    fn test_unrelated_urls() {
        assert_eq!(extract_video_id("https://example.com"), None);
        assert_eq!(extract_video_id("https://open.spotify.com/track/123"), None);
        assert_eq!(extract_video_id(""), None);
        assert!(!is_youtube_url("https://example.com"));
        assert!(is_youtube_url("https://youtu.be/abc123"));
    }

    #[test]
    fn test_link_builders() {
        assert_eq!(watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(embed_url("abc123"), "https://www.youtube.com/embed/abc123");
        assert_eq!(
            thumbnail_url("abc123"),
            "https://img.youtube.com/vi/abc123/hqdefault.jpg"
        );
    }
}
