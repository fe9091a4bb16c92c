//! Font database for resolving named families

use std::sync::Arc;

use fontdb::{Database, Source};
use pack_style::FontStyle;

use super::{Font, FontResolver, is_generic_family};
use crate::{Result, TextError};

/// Font database that resolves family names against loaded faces
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self { db: Database::new() }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Load a font from file
    pub fn load_font_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.db
            .load_font_file(path)
            .map_err(|e| TextError::FontParsing(e.to_string()))
    }

    /// Load a font from memory
    pub fn load_font_data(&mut self, data: Arc<dyn AsRef<[u8]> + Send + Sync>) {
        self.db.load_font_source(Source::Binary(data));
    }

    /// Whether any loaded face belongs to `family`
    pub fn has_family(&self, font: &Font) -> bool {
        let families = [fontdb::Family::Name(font.family.as_str())];
        self.db
            .query(&fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight.numeric()),
                stretch: fontdb::Stretch::Normal,
                style: fontdb_style(font.style),
            })
            .is_some()
    }

    /// List all loaded font families
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.db
            .faces()
            .filter_map(|f| f.families.first().map(|(name, _)| name.as_str()))
    }

    /// Number of loaded faces
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl FontResolver for FontDatabase {
    fn resolve(&self, candidate: Font) -> Result<Font> {
        if is_generic_family(&candidate.family) || self.has_family(&candidate) {
            Ok(candidate)
        } else {
            Err(TextError::FontNotFound(candidate.family))
        }
    }
}

fn fontdb_style(style: FontStyle) -> fontdb::Style {
    match style {
        FontStyle::Normal => fontdb::Style::Normal,
        FontStyle::Italic => fontdb::Style::Italic,
        FontStyle::Oblique => fontdb::Style::Oblique,
    }
}
