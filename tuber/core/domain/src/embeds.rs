use ::derive_new::new;

use crate::Resolution;
use crate::VideoId;

/// The iframe snippet YouTube hands out under "Share > Embed".
#[derive(Debug, Clone, new)]
pub struct EmbedCode<'a> {
    id: &'a VideoId,
    resolution: Resolution,
}

impl ::std::fmt::Display for EmbedCode<'_> {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        write!(
            f,
            r#"<iframe width="{}" height="{}" src="{}" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#,
            self.resolution.width,
            self.resolution.height,
            self.id.embed_url(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_preset_dimensions_and_id() {
        let id = VideoId::from("ABC123");
        let embed = EmbedCode::new(&id, Resolution::from_name("FHD").unwrap()).to_string();

        assert!(embed.contains(r#"width="1920""#));
        assert!(embed.contains(r#"height="1080""#));
        assert!(embed.contains(r#"src="https://www.youtube.com/embed/ABC123""#));
        assert_eq!(embed.matches("ABC123").count(), 1);
    }

    #[test]
    fn reproduces_the_template_verbatim() {
        let id = VideoId::from("x");
        let embed = EmbedCode::new(&id, Resolution::from_name("nHD").unwrap()).to_string();

        assert_eq!(
            embed,
            r#"<iframe width="640" height="360" src="https://www.youtube.com/embed/x" title="YouTube video player" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#
        );
    }
}
