macro_rules! lazy_regex {
    ($pattern:expr) => {
        ::once_cell::sync::Lazy::new(|| ::regex::Regex::new($pattern).unwrap())
    };
}

/// Turns a free-text tag into a lowercase, hyphen-separated slug that Obsidian accepts.
pub fn sanitize_tag(tag: &str) -> String {
    static PUNCTUATION: ::once_cell::sync::Lazy<::regex::Regex> = lazy_regex!(r"[^\w\s]");
    static WHITESPACE: ::once_cell::sync::Lazy<::regex::Regex> = lazy_regex!(r"\s+");

    let tag = tag.replace('\'', "");
    let tag = PUNCTUATION.replace_all(&tag, "-");
    let tag = WHITESPACE.replace_all(&tag, "-");

    tag.to_lowercase()
}

pub fn sanitize_tags<Tags, Tag>(tags: Tags) -> Vec<String>
where
    Tags: IntoIterator<Item = Tag>,
    Tag: AsRef<str>,
{
    tags.into_iter().map(|tag| sanitize_tag(tag.as_ref())).collect()
}

/// Same as [`sanitize_tags`], in the `#tag` form used inside note bodies.
pub fn inline_tags<Tags, Tag>(tags: Tags) -> Vec<String>
where
    Tags: IntoIterator<Item = Tag>,
    Tag: AsRef<str>,
{
    sanitize_tags(tags).into_iter().map(|tag| format!("#{tag}")).collect()
}

const FILENAME_RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

pub fn sanitize_filename(title: &str) -> String {
    title.replace(FILENAME_RESERVED_CHARS, "-")
}
