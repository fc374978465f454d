//! The block data model.
//!
//! A page is described as a tree of tagged block records. On the wire every
//! block is a JSON object `{ "type": "<tag>", ...fields }`; here the tags
//! become a closed enum so the renderer's dispatch is an exhaustive match.
//! Objects with a tag we do not recognize deserialize into
//! [`Block::Unknown`] rather than failing; a single unrecognized block must
//! never abort a page build.

use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::Value;

/// Root document descriptor for one generated page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover: Option<Cover>,
    #[serde(default)]
    pub icon: Option<PageIcon>,
    #[serde(default)]
    pub toc: bool,
    #[serde(default)]
    pub back_link: Option<BackLink>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Trailing "back to ..." link rendered after the block tree.
#[derive(Debug, Clone, Deserialize)]
pub struct BackLink {
    pub href: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Cover banner source: a CSS gradient or an image. When both are present
/// the gradient wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cover {
    #[serde(default)]
    pub gradient: Option<String>,
    #[serde(default)]
    pub src: Option<String>,
}

/// Page icon descriptor: `{"type":"none"}`, `{"type":"image","src":...}`
/// or `{"emoji":"🌱"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageIcon {
    Kind {
        #[serde(rename = "type")]
        kind: IconKind,
        #[serde(default)]
        src: Option<String>,
    },
    Emoji {
        emoji: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    None,
    Image,
}

/// One renderable unit of page content.
#[derive(Debug, Clone)]
pub enum Block {
    Cover(Cover),
    Icon(IconBlock),
    H1(Heading),
    H2(Heading),
    H3(Heading),
    Paragraph(Paragraph),
    Callout(Callout),
    BulletList(List),
    NumberedList(List),
    Quote(Quote),
    Divider,
    Columns(Columns),
    ThreeColumns(Columns),
    Toggle(Toggle),
    NumberedToggle(NumberedToggle),
    Button(Button),
    Link(LinkBlock),
    Code(CodeBlock),
    Image(ImageBlock),
    Gallery(Gallery),
    Toc,
    Spacer(Spacer),
    Centered(Centered),
    Html(RawHtml),
    /// Anything with a tag the renderer does not know. Kept around (tag and
    /// raw payload) so the renderer can emit a visible diagnostic placeholder.
    Unknown { block_type: String, data: Value },
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconBlock {
    pub icon: PageIcon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Heading {
    pub text: String,
    #[serde(default)]
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paragraph {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Callout {
    #[serde(default)]
    pub icon: Option<String>,
    pub content: BlockText,
    #[serde(default)]
    pub background: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct List {
    pub items: Vec<ListItem>,
}

/// A list entry: plain inline-formatted text, or a `{lead, text}` record
/// rendered as a bold lead-in. `text` is optional; when absent only the
/// lead renders.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListItem {
    Text(String),
    Lead {
        lead: String,
        #[serde(default)]
        text: Option<String>,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub attribution: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Columns {
    pub columns: Vec<Vec<Block>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Toggle {
    pub title: String,
    pub content: BlockText,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NumberedToggle {
    pub number: u32,
    pub title: String,
    pub content: BlockText,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub variant: Option<String>,
    #[serde(default)]
    pub new_tab: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkBlock {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeBlock {
    pub content: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageBlock {
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gallery {
    pub cards: Vec<GalleryCard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryCard {
    pub title: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Spacer {
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Centered {
    pub blocks: Vec<Block>,
}

/// Verbatim HTML escape hatch. The content is emitted unescaped; callers
/// are responsible for sanitizing anything that reaches an `html` block.
/// This is a deliberate trust boundary, not an oversight.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHtml {
    pub content: String,
}

/// Content that is either a string (inline-formatted) or a nested block
/// list (rendered recursively). Used by `callout` and the toggles.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockText {
    Text(String),
    Blocks(Vec<Block>),
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::custom("block object missing string `type` field"))?
            .to_owned();

        fn fields<T, E>(value: Value) -> Result<T, E>
        where
            T: de::DeserializeOwned,
            E: de::Error,
        {
            serde_json::from_value(value).map_err(de::Error::custom)
        }

        Ok(match tag.as_str() {
            "cover" => Block::Cover(fields(value)?),
            "icon" => Block::Icon(fields(value)?),
            "h1" => Block::H1(fields(value)?),
            "h2" => Block::H2(fields(value)?),
            "h3" => Block::H3(fields(value)?),
            "paragraph" => Block::Paragraph(fields(value)?),
            "callout" => Block::Callout(fields(value)?),
            "bulletList" => Block::BulletList(fields(value)?),
            "numberedList" => Block::NumberedList(fields(value)?),
            "quote" => Block::Quote(fields(value)?),
            "divider" => Block::Divider,
            "columns" => Block::Columns(fields(value)?),
            "threeColumns" => Block::ThreeColumns(fields(value)?),
            "toggle" => Block::Toggle(fields(value)?),
            "numberedToggle" => Block::NumberedToggle(fields(value)?),
            "button" => Block::Button(fields(value)?),
            "link" => Block::Link(fields(value)?),
            "code" => Block::Code(fields(value)?),
            "image" => Block::Image(fields(value)?),
            "gallery" => Block::Gallery(fields(value)?),
            "toc" => Block::Toc,
            "spacer" => Block::Spacer(fields(value)?),
            "centered" => Block::Centered(fields(value)?),
            "html" => Block::Html(fields(value)?),
            _ => Block::Unknown {
                block_type: tag,
                data: value,
            },
        })
    }
}

impl Block {
    /// The wire tag this block was (or would be) written with.
    pub fn type_tag(&self) -> &str {
        match self {
            Block::Cover(_) => "cover",
            Block::Icon(_) => "icon",
            Block::H1(_) => "h1",
            Block::H2(_) => "h2",
            Block::H3(_) => "h3",
            Block::Paragraph(_) => "paragraph",
            Block::Callout(_) => "callout",
            Block::BulletList(_) => "bulletList",
            Block::NumberedList(_) => "numberedList",
            Block::Quote(_) => "quote",
            Block::Divider => "divider",
            Block::Columns(_) => "columns",
            Block::ThreeColumns(_) => "threeColumns",
            Block::Toggle(_) => "toggle",
            Block::NumberedToggle(_) => "numberedToggle",
            Block::Button(_) => "button",
            Block::Link(_) => "link",
            Block::Code(_) => "code",
            Block::Image(_) => "image",
            Block::Gallery(_) => "gallery",
            Block::Toc => "toc",
            Block::Spacer(_) => "spacer",
            Block::Centered(_) => "centered",
            Block::Html(_) => "html",
            Block::Unknown { block_type, .. } => block_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_deserializes_into_variant() {
        let block: Block = serde_json::from_str(r#"{"type":"paragraph","text":"hi"}"#).unwrap();
        assert!(matches!(block, Block::Paragraph(Paragraph { ref text, .. }) if text == "hi"));
    }

    #[test]
    fn unknown_tag_never_fails() {
        let block: Block =
            serde_json::from_str(r#"{"type":"hologram","payload":[1,2,3]}"#).unwrap();
        match block {
            Block::Unknown { block_type, data } => {
                assert_eq!(block_type, "hologram");
                assert_eq!(data["payload"][0], 1);
            }
            other => panic!("expected Unknown, got {:?}", other.type_tag()),
        }
    }

    #[test]
    fn missing_type_is_an_error() {
        let result: Result<Block, _> = serde_json::from_str(r#"{"text":"hi"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        // known tag, but `items` is required on lists
        let result: Result<Block, _> = serde_json::from_str(r#"{"type":"bulletList"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn list_items_accept_both_shapes() {
        let block: Block = serde_json::from_str(
            r#"{"type":"bulletList","items":["x",{"lead":"Y","text":"z"},{"lead":"solo"}]}"#,
        )
        .unwrap();
        let Block::BulletList(list) = block else {
            panic!("wrong variant");
        };
        assert_eq!(list.items.len(), 3);
        assert!(matches!(list.items[0], ListItem::Text(ref s) if s == "x"));
        assert!(
            matches!(list.items[2], ListItem::Lead { ref lead, ref text } if lead == "solo" && text.is_none())
        );
    }

    #[test]
    fn nested_blocks_deserialize_recursively() {
        let block: Block = serde_json::from_str(
            r#"{"type":"columns","columns":[[{"type":"h2","text":"a"}],[{"type":"divider"}]]}"#,
        )
        .unwrap();
        let Block::Columns(cols) = block else {
            panic!("wrong variant");
        };
        assert!(matches!(cols.columns[0][0], Block::H2(_)));
        assert!(matches!(cols.columns[1][0], Block::Divider));
    }

    #[test]
    fn page_config_defaults() {
        let page: PageConfig =
            serde_json::from_str(r#"{"slug":"index","title":"Home"}"#).unwrap();
        assert!(!page.toc);
        assert!(page.cover.is_none());
        assert!(page.blocks.is_empty());
    }

    #[test]
    fn icon_shapes() {
        let none: PageIcon = serde_json::from_str(r#"{"type":"none"}"#).unwrap();
        assert!(matches!(none, PageIcon::Kind { kind: IconKind::None, .. }));
        let emoji: PageIcon = serde_json::from_str(r#"{"emoji":"🌱"}"#).unwrap();
        assert!(matches!(emoji, PageIcon::Emoji { .. }));
        let image: PageIcon =
            serde_json::from_str(r#"{"type":"image","src":"/me.png"}"#).unwrap();
        assert!(
            matches!(image, PageIcon::Kind { kind: IconKind::Image, src: Some(ref s) } if s == "/me.png")
        );
    }
}
