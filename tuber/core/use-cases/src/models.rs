pub mod descriptors {
    use crate::utils::aliases::MaybeOwnedString;

    /// Outcome of a metadata lookup. An unknown id is a `NotFound`, never an empty [`::domain::Video`].
    #[derive(Debug, Clone)]
    pub enum MetadataLookup {
        Found(::domain::Video),
        NotFound,
    }

    /// Local wall-clock reading, already formatted the way notes print it.
    #[derive(Debug, Clone, PartialEq, Eq, ::bon::Builder)]
    #[builder(on(_, into))]
    pub struct Timestamp {
        /// `YYYY-MM-DD`
        pub date: MaybeOwnedString,
        /// Three-letter weekday, e.g. `Mon`
        pub day: MaybeOwnedString,
        /// `HH:MM`
        pub time: MaybeOwnedString,
    }
}

pub mod events {
    use crate::utils::aliases::MaybeOwnedPath;
    use crate::utils::aliases::MaybeOwnedString;

    pub enum CreateNoteEvent {
        VideoIdentified(VideoIdentifiedEvent),
        MetadataFetched(MetadataFetchedEvent),
        NoteWritten(NoteWrittenEvent),
    }

    pub struct VideoIdentifiedEvent {
        pub id: ::domain::VideoId,
        pub resolution: ::domain::Resolution,
    }

    pub struct MetadataFetchedEvent {
        pub video: ::domain::Video,
    }

    pub struct NoteWrittenEvent {
        pub embed_code: MaybeOwnedString,
        pub path: MaybeOwnedPath,
    }
}

pub mod notes {
    use crate::utils::aliases::MaybeOwnedString;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum FrontmatterValue {
        Scalar(MaybeOwnedString),
        List(Vec<MaybeOwnedString>),
    }

    impl From<MaybeOwnedString> for FrontmatterValue {
        fn from(value: MaybeOwnedString) -> Self {
            Self::Scalar(value)
        }
    }

    impl From<String> for FrontmatterValue {
        fn from(value: String) -> Self {
            Self::Scalar(value.into())
        }
    }

    impl From<&'static str> for FrontmatterValue {
        fn from(value: &'static str) -> Self {
            Self::Scalar(value.into())
        }
    }

    impl From<Vec<String>> for FrontmatterValue {
        fn from(values: Vec<String>) -> Self {
            Self::List(values.into_iter().map(Into::into).collect())
        }
    }

    /// Ordered key-value header of a note. Re-inserting a key replaces its value in place.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct Frontmatter {
        entries: Vec<(MaybeOwnedString, FrontmatterValue)>,
    }

    impl Frontmatter {
        pub fn insert<Key, Value>(&mut self, key: Key, value: Value)
        where
            Key: Into<MaybeOwnedString>,
            Value: Into<FrontmatterValue>,
        {
            let (key, value) = (key.into(), value.into());

            match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some((_, existing)) => *existing = value,
                None => self.entries.push((key, value)),
            }
        }

        pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
            self.entries
                .iter()
                .find(|(existing, _)| existing == key)
                .map(|(_, value)| value)
        }

        pub fn keys(&self) -> impl Iterator<Item = &str> {
            self.entries.iter().map(|(key, _)| key.as_ref())
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }

    impl<Key, Value> FromIterator<(Key, Value)> for Frontmatter
    where
        Key: Into<MaybeOwnedString>,
        Value: Into<FrontmatterValue>,
    {
        fn from_iter<Entries>(entries: Entries) -> Self
        where
            Entries: IntoIterator<Item = (Key, Value)>,
        {
            let mut frontmatter = Self::default();
            entries
                .into_iter()
                .for_each(|(key, value)| frontmatter.insert(key, value));

            frontmatter
        }
    }

    impl ::std::fmt::Display for Frontmatter {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            writeln!(f, "---")?;

            for (key, value) in &self.entries {
                match value {
                    FrontmatterValue::Scalar(value) => writeln!(f, "{key}: {value}")?,
                    FrontmatterValue::List(values) => {
                        writeln!(f, "{key}:")?;
                        for value in values {
                            writeln!(f, "  - {value}")?;
                        }
                    },
                }
            }

            writeln!(f, "---")?;
            writeln!(f)
        }
    }

    #[derive(Debug, Clone, ::bon::Builder)]
    #[builder(on(_, into))]
    pub struct Note {
        pub title: MaybeOwnedString,
        pub frontmatter: Frontmatter,
        pub embed_code: MaybeOwnedString,
        pub description: MaybeOwnedString,
    }

    impl Note {
        pub fn file_name(&self) -> String {
            format!("{}.md", ::domain::sanitizers::sanitize_filename(&self.title))
        }
    }

    impl ::std::fmt::Display for Note {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            write!(f, "{}", self.frontmatter)?;
            write!(f, "{}\n\n", self.embed_code)?;
            write!(f, "## Description\n{}", self.description)
        }
    }

}

pub mod errors {
    use ::domain::Resolution;

    #[derive(Debug, ::thiserror::Error)]
    pub enum CreateNoteError {
        #[error("API key not found. Set the {0} environment variable.")]
        MissingCredential(&'static str),

        #[error("could not extract a video id from `{0}`")]
        InvalidUrl(String),

        #[error("no video found for id `{0}`")]
        NotFound(::domain::VideoId),

        #[error("unknown resolution `{0}` (expected one of: {names})", names = Resolution::names().collect::<Vec<_>>().join(", "))]
        InvalidResolution(String),
    }
}
