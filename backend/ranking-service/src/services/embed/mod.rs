//! Preview embed markup
//!
//! Pure string template; the item id is inserted as-is.

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";
const EMBED_WIDTH: u32 = 560;
const EMBED_HEIGHT: u32 = 315;
const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub fn embed_markup(item_id: &str) -> String {
    format!(
        r#"<iframe width="{EMBED_WIDTH}" height="{EMBED_HEIGHT}" src="{EMBED_BASE_URL}{item_id}" frameborder="0" allow="{EMBED_ALLOW}" allowfullscreen></iframe>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_markup() {
        assert_eq!(
            embed_markup("dQw4w9WgXcQ"),
            r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/dQw4w9WgXcQ" frameborder="0" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen></iframe>"#
        );
    }
}
