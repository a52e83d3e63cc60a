use console::Style;
use std::io::{self, Write};
use std::path::Path;

use melodium_providers::youtube::{embed_url, extract_video_id, thumbnail_url, watch_url};
use melodium_providers::VideoMetadata;
use melodium_types::{Memory, EMOTION_DICTIONARY};

/// 命令行输出格式化工具
/// 提供统一的 Cargo 风格输出
pub struct Output {
    green: Style,
    bold: Style,
    dim: Style,
}

impl Output {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// 显示状态消息（如 "Creating memory", "Looking up" 等）
    /// 格式: "    Creating memory ..."（动词右对齐到 12 字符）
    pub fn status(&self, action: &str, target: &str) {
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// 开始执行操作的状态消息（会在前面自动添加空行）
    pub fn begin_operation(&self, action: &str, target: &str) {
        eprintln!();
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// 显示存储信息
    /// 格式: "     Storage /path/to/data (12 memories)"
    /// 自动在后面添加空行
    pub fn storage_info(&self, path: &Path, memory_count: usize) {
        eprintln!(
            "{:>12} {} {}",
            self.green.apply_to("Storage"),
            path.display(),
            self.dim.apply_to(format!("({} memories)", memory_count))
        );
        eprintln!();
    }

    /// 显示创建/查找资源消息
    /// 格式: "    Creating config at /path/to/config"
    /// 自动在后面添加空行
    pub fn resource_action(&self, action: &str, resource: &str, path: &Path) {
        eprintln!(
            "{:>12} {} at {}",
            self.green.apply_to(action),
            resource,
            path.display()
        );
        eprintln!();
    }

    /// 显示完成消息
    /// 格式: "    Finished action for scope"
    /// 自动在前面添加空行
    pub fn finish(&self, action: &str, scope: &str) {
        eprintln!();
        eprintln!(
            "{:>12} {} for {} scope",
            self.green.apply_to("Finished"),
            action,
            scope
        );
    }

    /// 显示单个记忆（列表格式）
    /// 格式: "[1/5] id (date) Joyful [tag1, tag2]"
    ///       "      Song - Artist"
    ///       "      https://youtu.be/..."
    fn memory_item(&self, index: usize, total: usize, memory: &Memory) {
        let index_part = format!("{}/{}", index, total);
        let date = memory.created_at.format("%Y-%m-%d %H:%M").to_string();

        let tags_part = if memory.tags.is_empty() {
            String::new()
        } else {
            format!(
                " {}",
                self.dim.apply_to(format!("[{}]", memory.tags.join(", ")))
            )
        };

        println!(
            "[{}] {} {} {}{}",
            self.dim.apply_to(&index_part),
            self.bold.apply_to(&memory.id),
            self.dim.apply_to(format!("({})", date)),
            self.green.apply_to(memory.emotion.label()),
            tags_part
        );

        // [index_part] + 空格
        let indent = " ".repeat(index_part.len() + 3);
        println!("{}{}", indent, song_line(memory));
        println!("{}{}", indent, self.dim.apply_to(&memory.youtube_url));
        if let Some(note) = &memory.note {
            for line in note.lines() {
                println!("{}{}", indent, line);
            }
        }
    }

    /// 显示记忆列表（自动处理分隔和格式化）
    pub fn memory_list(&self, memories: &[Memory]) {
        let total = memories.len();
        for (i, memory) in memories.iter().enumerate() {
            self.memory_item(i + 1, total, memory);

            // 只在非最后一个结果后添加空行分隔
            if i < memories.len() - 1 {
                println!();
            }
        }
    }

    /// 显示单个记忆的全部细节
    pub fn memory_detail(&self, memory: &Memory) {
        let field = |name: &str, value: &str| {
            println!("{:>12} {}", self.dim.apply_to(name), value);
        };

        field("ID", &self.bold.apply_to(&memory.id).to_string());
        field(
            "Created",
            &memory.created_at.format("%A, %B %-d, %Y %H:%M").to_string(),
        );
        field("Feeling", &self.green.apply_to(memory.emotion.label()).to_string());
        if !memory.sub_emotions.is_empty() {
            field("Also", &memory.sub_emotions.join(", "));
        }
        field("Song", &song_line(memory));
        field("URL", &memory.youtube_url);

        if let Some(video_id) = extract_video_id(&memory.youtube_url) {
            field("Watch", &watch_url(&video_id));
            field("Embed", &embed_url(&video_id));
            field("Thumbnail", &thumbnail_url(&video_id));
        }

        if !memory.tags.is_empty() {
            field("Tags", &memory.tags.join(", "));
        }
        if let Some(note) = &memory.note {
            println!();
            for line in note.lines() {
                println!("{:>12} {}", "", line);
            }
        }
    }

    /// 显示元数据查询结果
    pub fn metadata(&self, url: &str, metadata: &VideoMetadata) {
        println!("{}", self.bold.apply_to(url));
        println!("{:>12} {}", self.dim.apply_to("Song"), metadata.title);
        println!("{:>12} {}", self.dim.apply_to("Artist"), metadata.author);
        println!("{:>12} {}", self.dim.apply_to("Video"), metadata.video_id);
    }

    /// 显示情绪字典
    pub fn emotions(&self) {
        for info in EMOTION_DICTIONARY.iter() {
            println!(
                "{:>12} {}",
                self.green.apply_to(info.key),
                self.dim.apply_to(info.label)
            );
        }
    }

    /// 显示注意事项（右对齐）
    pub fn note(&self, message: &str) {
        eprintln!("{:>12} {}", self.dim.apply_to("Note"), message);
    }

    /// 显示警告（黄色，右对齐）
    /// 自动在前面添加空行
    pub fn warning(&self, message: &str) {
        eprintln!();
        eprintln!(
            "{:>12} {}",
            Style::new().yellow().bold().apply_to("Warning"),
            message
        );
        eprintln!();
    }

    /// 显示提示消息（标准输出，右对齐）
    pub fn info(&self, message: &str) {
        println!("{:>12} {}", "", message);
    }

    /// 显示确认提示并读取用户输入
    /// 返回用户是否输入了 "yes"
    pub fn confirm(&self, expected: &str) -> io::Result<bool> {
        println!();
        print!(
            "{:>12} Type {} to confirm: ",
            "",
            Style::new().green().bold().apply_to(expected)
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim() == expected)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

/// "歌名 - 歌手"，缺失时用占位文本
fn song_line(memory: &Memory) -> String {
    format!(
        "{} - {}",
        memory.song_title.as_deref().unwrap_or("Unknown Track"),
        memory.artist_name.as_deref().unwrap_or("Unknown Artist")
    )
}
