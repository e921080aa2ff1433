//! Makeup looks tagged by undertone and depth

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::catalog::{parse_catalog, read_catalog_file};
use crate::error::Result;
use crate::tone::{DepthLabel, Undertone};

/// Which tones a look suits.
///
/// Tag strings that name no known undertone or depth bucket are dropped
/// while parsing, so a catalog can carry tags this crate does not use.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LookTags {
    #[serde(default, deserialize_with = "known_undertones")]
    pub undertone: Vec<Undertone>,
    #[serde(default, deserialize_with = "known_depths")]
    pub depth: Vec<DepthLabel>,
}

fn known_undertones<'de, D>(deserializer: D) -> std::result::Result<Vec<Undertone>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(tags.iter().filter_map(|tag| Undertone::from_name(tag)).collect())
}

fn known_depths<'de, D>(deserializer: D) -> std::result::Result<Vec<DepthLabel>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = Vec::<String>::deserialize(deserializer)?;
    Ok(tags.iter().filter_map(|tag| DepthLabel::from_name(tag)).collect())
}

/// A makeup look. Presentation fields the analysis does not use are
/// kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Look {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: LookTags,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Look {
    pub fn suits(&self, undertone: Undertone, depth_label: DepthLabel) -> bool {
        self.tags.undertone.contains(&undertone) && self.tags.depth.contains(&depth_label)
    }
}

/// All known looks, in file order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookCatalog {
    pub looks: Vec<Look>,
}

impl LookCatalog {
    /// Load from a JSON array file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read_catalog_file(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        parse_catalog(json, "look")
    }

    /// See [`filter_looks`]
    pub fn matching(&self, undertone: Undertone, depth_label: DepthLabel) -> Vec<&Look> {
        filter_looks(&self.looks, undertone, depth_label)
    }
}

/// Looks tagged with both `undertone` and `depth_label`, in input order
pub fn filter_looks(looks: &[Look], undertone: Undertone, depth_label: DepthLabel) -> Vec<&Look> {
    looks
        .iter()
        .filter(|look| look.suits(undertone, depth_label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKS: &str = r#"[
        {"id": "sunset", "name": "Sunset Glow", "image": "sunset.webp",
         "tags": {"undertone": ["warm", "olive"], "depth": ["Medium", "Tan"]}},
        {"id": "berry", "name": "Berry Chic",
         "tags": {"undertone": ["cool"], "depth": ["Fair", "Light", "Medium"]}},
        {"id": "nude", "name": "Everyday Nude",
         "tags": {"undertone": ["warm", "cool", "neutral", "olive"], "depth": ["Medium"]}}
    ]"#;

    #[test]
    fn test_filter_requires_both_tags() {
        let catalog = LookCatalog::from_json_str(LOOKS).unwrap();
        let ids: Vec<&str> = catalog
            .matching(Undertone::Warm, DepthLabel::Medium)
            .into_iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, ["sunset", "nude"]);

        assert!(catalog.matching(Undertone::Cool, DepthLabel::VeryDeep).is_empty());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let catalog = LookCatalog::from_json_str(LOOKS).unwrap();
        assert_eq!(catalog.looks[0].extra.get("image").and_then(|v| v.as_str()), Some("sunset.webp"));

        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json[0]["image"], "sunset.webp");
    }

    #[test]
    fn test_unknown_tags_are_skipped() {
        let catalog = LookCatalog::from_json_str(
            r#"[
                {"id": "glow", "tags": {"undertone": ["warm", "pink"], "depth": ["Pale", "Tan"]}},
                {"id": "other", "tags": {"undertone": ["rosy"], "depth": ["Tan"]}}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.looks[0].tags.undertone, [Undertone::Warm]);
        assert_eq!(catalog.looks[0].tags.depth, [DepthLabel::Tan]);
        assert!(catalog.looks[1].tags.undertone.is_empty());

        let ids: Vec<&str> = catalog
            .matching(Undertone::Warm, DepthLabel::Tan)
            .into_iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, ["glow"]);
    }

    #[test]
    fn test_untagged_look_never_matches() {
        let catalog = LookCatalog::from_json_str(r#"[{"id": "bare"}]"#).unwrap();
        assert!(catalog.matching(Undertone::Neutral, DepthLabel::Light).is_empty());
    }
}
