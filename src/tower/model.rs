use std::{fs, path::Path};

use serde_json::Value;
use tracing::debug;

use crate::error::{GenerateError, Result};

/// The four tower categories the game ships with. Towers may carry any other
/// `type` string; those simply fall outside the builtin color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TowerKind {
    Vanguard,
    Swift,
    Elemental,
    Utility,
}

impl TowerKind {
    pub const ALL: [TowerKind; 4] = [
        TowerKind::Vanguard,
        TowerKind::Swift,
        TowerKind::Elemental,
        TowerKind::Utility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TowerKind::Vanguard => "Vanguard",
            TowerKind::Swift => "Swift",
            TowerKind::Elemental => "Elemental",
            TowerKind::Utility => "Utility",
        }
    }

    /// Exact, case-sensitive match on the `type` string.
    pub fn from_type(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn default_color(self) -> &'static str {
        match self {
            TowerKind::Vanguard => "#4ecdc4",
            TowerKind::Swift => "#ffd700",
            TowerKind::Elemental => "#ff6b6b",
            TowerKind::Utility => "#a78bfa",
        }
    }
}

/// Owned view of the fields the generator reads from one tower object.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerRecord {
    pub index: usize,
    pub name: String,
    /// `None` when `type` is absent, null or an empty string. Non-string
    /// values are kept as their JSON text.
    pub tower_type: Option<String>,
}

impl TowerRecord {
    pub fn kind(&self) -> Option<TowerKind> {
        self.tower_type.as_deref().and_then(TowerKind::from_type)
    }

    /// First character of the name, used as the icon label.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Root JSON value of a tower document. Everything besides the `image` field
/// of each tower passes through untouched, key order included.
#[derive(Debug, Clone, PartialEq)]
pub struct TowerDocument {
    root: Value,
}

impl TowerDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GenerateError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::parse(&text).map_err(|source| GenerateError::ParseDocument {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "loaded tower document");
        Ok(doc)
    }

    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text).map(|root| Self { root })
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// 2-space indented JSON with non-ASCII text written as-is.
    pub fn to_pretty_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).map_err(GenerateError::SerializeDocument)
    }

    /// Replace the file at `path` with the current document.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = self.to_pretty_string()?;
        fs::write(path, text).map_err(|source| GenerateError::WriteDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    fn towers(&self) -> Result<&Vec<Value>> {
        self.root
            .get("towers")
            .and_then(Value::as_array)
            .ok_or(GenerateError::MissingTowers)
    }

    pub fn tower_count(&self) -> Result<usize> {
        self.towers().map(Vec::len)
    }

    pub fn record(&self, index: usize) -> Result<TowerRecord> {
        let tower = self
            .towers()?
            .get(index)
            .ok_or(GenerateError::MissingName { index })?;
        let name = tower
            .get("name")
            .and_then(Value::as_str)
            .ok_or(GenerateError::MissingName { index })?;
        let tower_type = match tower.get("type") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };
        Ok(TowerRecord {
            index,
            name: name.to_string(),
            tower_type,
        })
    }

    pub fn records(&self) -> Result<Vec<TowerRecord>> {
        (0..self.tower_count()?).map(|i| self.record(i)).collect()
    }

    /// Set (or overwrite in place) the `image` field of tower `index`.
    pub fn set_image(&mut self, index: usize, image: &str) -> Result<()> {
        let tower = self
            .root
            .get_mut("towers")
            .and_then(Value::as_array_mut)
            .ok_or(GenerateError::MissingTowers)?
            .get_mut(index)
            .and_then(Value::as_object_mut)
            .ok_or(GenerateError::MissingName { index })?;
        tower.insert("image".into(), Value::String(image.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_lookup_is_exact() {
        assert_eq!(TowerKind::from_type("Swift"), Some(TowerKind::Swift));
        assert_eq!(TowerKind::from_type("swift"), None);
        assert_eq!(TowerKind::from_type("Support"), None);
        for k in TowerKind::ALL {
            assert_eq!(TowerKind::from_type(k.as_str()), Some(k));
        }
    }

    #[test]
    fn records_normalize_type() {
        let doc = TowerDocument::parse(
            r#"{"towers":[
                {"name":"Swift Shot","type":"Swift"},
                {"name":"Mystic Well"},
                {"name":"Blank","type":""},
                {"name":"Odd","type":5}
            ]}"#,
        )
        .unwrap();
        let recs = doc.records().unwrap();
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].kind(), Some(TowerKind::Swift));
        assert_eq!(recs[1].tower_type, None);
        assert_eq!(recs[2].tower_type, None);
        assert_eq!(recs[3].tower_type.as_deref(), Some("5"));
        assert_eq!(recs[3].kind(), None);
        assert_eq!(recs[1].initial(), Some('M'));
        assert_eq!(recs.iter().map(|r| r.index).collect::<Vec<_>>(), [0, 1, 2, 3]);
    }

    #[test]
    fn missing_towers_and_names() {
        let doc = TowerDocument::parse(r#"{"tower":[]}"#).unwrap();
        assert!(matches!(doc.tower_count(), Err(GenerateError::MissingTowers)));

        let doc = TowerDocument::parse(r#"{"towers":{"name":"x"}}"#).unwrap();
        assert!(matches!(doc.records(), Err(GenerateError::MissingTowers)));

        let doc = TowerDocument::parse(r#"{"towers":[{"name":"ok"},{"type":"Swift"}]}"#).unwrap();
        assert!(matches!(doc.records(), Err(GenerateError::MissingName { index: 1 })));
    }

    #[test]
    fn set_image_keeps_key_order_and_extra_fields() {
        let mut doc = TowerDocument::parse(
            r#"{"version":2,"towers":[{"id":1,"name":"Ñandú","image":"old.png","type":"Swift","range":{"min":1}}]}"#,
        )
        .unwrap();
        doc.set_image(0, "img/towers/Ñandú.svg").unwrap();
        let out = doc.to_pretty_string().unwrap();
        let expected = r#"{
  "version": 2,
  "towers": [
    {
      "id": 1,
      "name": "Ñandú",
      "image": "img/towers/Ñandú.svg",
      "type": "Swift",
      "range": {
        "min": 1
      }
    }
  ]
}"#;
        assert_eq!(out, expected);
    }

    #[test]
    fn numbers_are_written_back_verbatim() {
        let text = r#"{"seed":123456789012345678901234567890,"towers":[{"name":"X","damage":1.50,"hp":-98765432109876543210}]}"#;
        let mut doc = TowerDocument::parse(text).unwrap();
        doc.set_image(0, "img/towers/X.svg").unwrap();
        let out = doc.to_pretty_string().unwrap();
        assert!(out.contains(r#""seed": 123456789012345678901234567890,"#), "{out}");
        assert!(out.contains(r#""damage": 1.50,"#), "{out}");
        assert!(out.contains(r#""hp": -98765432109876543210,"#), "{out}");
    }

    #[test]
    fn set_image_out_of_range() {
        let mut doc = TowerDocument::parse(r#"{"towers":[]}"#).unwrap();
        assert!(matches!(doc.set_image(0, "x"), Err(GenerateError::MissingName { index: 0 })));
    }
}
