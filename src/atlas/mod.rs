//! # Item Atlas Module
//!
//! Converts a font item atlas into a source listing of character constants.
//!
//! The atlas is a JSON object mapping resource names such as
//! `minecraft:item/diamond` or `minecraft:block/stone` to an entry holding the
//! hex code point of the glyph drawn for it. Each entry becomes a
//! `Character` constant, and every constant whose name also appears in the
//! material list gets a line in a `fromMaterial` lookup helper.

use crate::{QuestGenError, QuestGenResult};
use indexmap::IndexMap;
use log::{debug, info};
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Default atlas input file name.
pub const DEFAULT_ATLAS_FILE: &str = "item_atlas.json";
/// Default material list file name.
pub const DEFAULT_MATERIALS_FILE: &str = "item_atlas_material.txt";
/// Default generated source file name.
pub const DEFAULT_SOURCE_FILE: &str = "item_atlas.java";

/// One glyph in the atlas. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AtlasEntry {
    /// Hex code point, e.g. `E001`
    pub code: String,
}

/// Atlas entries in file order.
pub type ItemAtlas = IndexMap<String, AtlasEntry>;

/// Naming options for the generated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtlasOptions {
    /// Class holding block glyphs
    pub block_class: String,
    /// Class holding item glyphs
    pub item_class: String,
    /// Names starting with this prefix are items; everything else is a block
    pub item_prefix: String,
}

impl Default for AtlasOptions {
    fn default() -> Self {
        Self {
            block_class: "NotFontBlock".to_string(),
            item_class: "NotFontItem".to_string(),
            item_prefix: "minecraft:item".to_string(),
        }
    }
}

/// Parses atlas JSON, keeping entry order.
pub fn parse_atlas(json: &str) -> QuestGenResult<ItemAtlas> {
    let atlas: ItemAtlas = serde_json::from_str(json)?;
    for (name, entry) in &atlas {
        let code = entry.code.trim();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(QuestGenError::AtlasFormat(format!(
                "entry '{}' has invalid code '{}'",
                name, entry.code
            )));
        }
    }
    Ok(atlas)
}

/// Extracts material names from a material listing.
///
/// Each line contributes the text before its first `(`; blank lines are
/// skipped.
pub fn parse_materials(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('(').next().unwrap_or_default().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Constant name for an atlas entry: the last path segment, upper-cased.
///
/// # Examples
///
/// ```
/// use questgen::atlas::constant_name;
///
/// assert_eq!(constant_name("minecraft:item/golden_apple"), "GOLDEN_APPLE");
/// assert_eq!(constant_name("stone"), "STONE");
/// ```
pub fn constant_name(resource: &str) -> String {
    resource
        .rsplit('/')
        .next()
        .unwrap_or(resource)
        .to_uppercase()
}

fn render_class(
    out: &mut String,
    class_name: &str,
    entries: &[(String, &AtlasEntry)],
    materials: &[String],
) -> std::fmt::Result {
    writeln!(out, "public class {} {{", class_name)?;
    for (constant, entry) in entries {
        writeln!(
            out,
            "    public static final Character {} = '\\u{}';",
            constant,
            entry.code.trim()
        )?;
    }

    write!(
        out,
        "\n\n    public static Character fromMaterial(Material material) {{\n"
    )?;
    for (constant, _) in entries {
        if materials.iter().any(|material| material == constant) {
            writeln!(
                out,
                "        if (material == Material.{}) return {};",
                constant, constant
            )?;
        }
    }
    writeln!(out, "        return null;")?;
    writeln!(out, "    }}")?;
    write!(out, "}}")
}

/// Renders the block and item classes for an atlas.
pub fn render_source(
    atlas: &ItemAtlas,
    materials: &[String],
    options: &AtlasOptions,
) -> QuestGenResult<String> {
    let mut blocks = Vec::new();
    let mut items = Vec::new();
    for (name, entry) in atlas {
        let constant = constant_name(name);
        if name.starts_with(options.item_prefix.as_str()) {
            items.push((constant, entry));
        } else {
            blocks.push((constant, entry));
        }
    }
    debug!(
        "Atlas has {} blocks and {} items",
        blocks.len(),
        items.len()
    );

    let mut out = String::new();
    render_classes(&mut out, options, &blocks, &items, materials)
        .map_err(|e| {
            QuestGenError::AtlasFormat(format!("rendering failed: {}", e))
        })?;
    Ok(out)
}

fn render_classes(
    out: &mut String,
    options: &AtlasOptions,
    blocks: &[(String, &AtlasEntry)],
    items: &[(String, &AtlasEntry)],
    materials: &[String],
) -> std::fmt::Result {
    render_class(out, &options.block_class, blocks, materials)?;
    out.write_str("\n\n")?;
    render_class(out, &options.item_class, items, materials)
}

/// Reads the atlas and material list, then writes the generated source.
pub fn convert_files(
    atlas_path: impl AsRef<Path>,
    materials_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    options: &AtlasOptions,
) -> QuestGenResult<()> {
    let atlas = parse_atlas(&fs::read_to_string(atlas_path.as_ref())?)?;
    let materials = parse_materials(&fs::read_to_string(materials_path.as_ref())?);
    let source = render_source(&atlas, &materials, options)?;

    let output_path = output_path.as_ref();
    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, source)?;

    info!(
        "Wrote {} atlas constants to {}",
        atlas.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS: &str = r#"{
        "minecraft:block/stone": { "code": "E000", "width": 16 },
        "minecraft:item/diamond": { "code": "E001" },
        "minecraft:block/beacon": { "code": "E002" },
        "minecraft:item/custom_token": { "code": "E003" }
    }"#;

    #[test]
    fn test_parse_atlas_keeps_order() {
        let atlas = parse_atlas(ATLAS).unwrap();
        let names: Vec<_> = atlas.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "minecraft:block/stone",
                "minecraft:item/diamond",
                "minecraft:block/beacon",
                "minecraft:item/custom_token"
            ]
        );
    }

    #[test]
    fn test_parse_atlas_rejects_bad_code() {
        let result = parse_atlas(r#"{ "minecraft:item/apple": { "code": "" } }"#);
        assert!(matches!(result, Err(QuestGenError::AtlasFormat(_))));

        let result = parse_atlas(r#"{ "minecraft:item/apple": { "code": "zz" } }"#);
        assert!(matches!(result, Err(QuestGenError::AtlasFormat(_))));

        let result = parse_atlas(r#"{ "minecraft:item/apple": {} }"#);
        assert!(matches!(result, Err(QuestGenError::Serde(_))));
    }

    #[test]
    fn test_parse_materials() {
        let materials = parse_materials("STONE(1),\nDIAMOND(264, 64)\n\nBEACON\n");
        assert_eq!(materials, vec!["STONE", "DIAMOND", "BEACON"]);
    }

    #[test]
    fn test_render_source() {
        let atlas = parse_atlas(ATLAS).unwrap();
        let materials = parse_materials("STONE(1)\nDIAMOND(264)\n");
        let source = render_source(&atlas, &materials, &AtlasOptions::default()).unwrap();

        let block_at = source.find("public class NotFontBlock {").unwrap();
        let item_at = source.find("public class NotFontItem {").unwrap();
        assert!(block_at < item_at);

        let (blocks, items) = source.split_at(item_at);
        assert!(blocks.contains("    public static final Character STONE = '\\uE000';"));
        assert!(blocks.contains("    public static final Character BEACON = '\\uE002';"));
        assert!(blocks.contains("        if (material == Material.STONE) return STONE;"));
        assert!(!blocks.contains("Material.BEACON"));

        assert!(items.contains("    public static final Character DIAMOND = '\\uE001';"));
        assert!(items.contains("    public static final Character CUSTOM_TOKEN = '\\uE003';"));
        assert!(items.contains("        if (material == Material.DIAMOND) return DIAMOND;"));
        assert!(!items.contains("Material.CUSTOM_TOKEN"));
        assert_eq!(source.matches("        return null;").count(), 2);
        assert!(source.ends_with('}'));
    }

    #[test]
    fn test_convert_files() {
        let dir = tempfile::tempdir().unwrap();
        let atlas_path = dir.path().join("item_atlas.json");
        let materials_path = dir.path().join("materials.txt");
        let output_path = dir.path().join("out").join("item_atlas.java");
        fs::write(&atlas_path, ATLAS).unwrap();
        fs::write(&materials_path, "STONE(1)\n").unwrap();

        convert_files(
            &atlas_path,
            &materials_path,
            &output_path,
            &AtlasOptions::default(),
        )
        .unwrap();

        let source = fs::read_to_string(&output_path).unwrap();
        assert!(source.contains("Material.STONE"));
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_files(
            dir.path().join("missing.json"),
            dir.path().join("missing.txt"),
            dir.path().join("out.java"),
            &AtlasOptions::default(),
        );
        assert!(matches!(result, Err(QuestGenError::Io(_))));
    }
}
