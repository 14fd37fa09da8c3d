//! Tower icon generation pass.
//!
//! Load -> per tower (derive name, pick color, render, write icon, annotate)
//! -> persist document -> report. Towers are handled strictly in document
//! order, so when two names derive the same file the later tower's icon wins
//! while both records point at it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::core::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::icon::{render_icon, IconSpec};
use crate::tower::{derive_filename, image_path, ColorTable, TowerDocument};

/// One icon written during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub name: String,
    pub filename: String,
    /// Value recorded in the tower's `image` field.
    pub image_path: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
    pub document_path: PathBuf,
}

impl GenerationReport {
    pub fn tower_count(&self) -> usize {
        self.icons.len()
    }

    /// Closing console lines, printed after the per-tower lines.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            String::new(),
            format!("✅ Generated {} tower icons", self.tower_count()),
            "✅ JSON updated with image paths".to_string(),
        ]
    }
}

/// Console line announcing one written icon.
pub fn created_line(icon: &GeneratedIcon) -> String {
    format!("✓ Created: {}", icon.filename)
}

/// Full run against the paths in `cfg`, printing one line per icon to stdout.
pub fn generate(cfg: &GeneratorConfig) -> Result<GenerationReport> {
    generate_with(cfg, |icon| println!("{}", created_line(icon)))
}

/// Same as [`generate`] with a caller-supplied per-icon callback.
pub fn generate_with<F>(cfg: &GeneratorConfig, on_icon: F) -> Result<GenerationReport>
where
    F: FnMut(&GeneratedIcon),
{
    let input = &cfg.paths.input;
    let mut doc = TowerDocument::load(input)?;
    let icons = generate_document_with(&mut doc, cfg, on_icon)?;
    doc.save(input)?;
    info!(path = %input.display(), towers = icons.len(), "tower document updated");
    Ok(GenerationReport {
        icons,
        document_path: input.clone(),
    })
}

/// Write one icon per tower and annotate `doc` in memory. The document itself
/// is not persisted.
pub fn generate_document(doc: &mut TowerDocument, cfg: &GeneratorConfig) -> Result<Vec<GeneratedIcon>> {
    generate_document_with(doc, cfg, |_| {})
}

fn generate_document_with<F>(
    doc: &mut TowerDocument,
    cfg: &GeneratorConfig,
    mut on_icon: F,
) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    let out_dir = &cfg.paths.output_dir;
    ensure_dir(out_dir)?;

    let table = ColorTable::from_config(&cfg.palette);
    let count = doc.tower_count()?;
    let mut icons = Vec::with_capacity(count);
    for index in 0..count {
        let record = doc.record(index)?;
        let label = record
            .initial()
            .ok_or(GenerateError::EmptyName { index: record.index })?;
        let explicit_type = record.tower_type.as_deref();
        let tower_type = table.effective_type(explicit_type);
        let color = table.color_for(explicit_type);
        if let Some(t) = explicit_type.filter(|t| !table.contains(t)) {
            debug!(tower = %record.name, tower_type = t, "unknown tower type, using default color");
        }

        let filename = derive_filename(&record.name);
        let svg = render_icon(&IconSpec {
            label,
            tower_type,
            color,
            geometry: &cfg.icon,
        });
        let path = out_dir.join(&filename);
        fs::write(&path, svg).map_err(|source| GenerateError::WriteIcon {
            path: path.clone(),
            source,
        })?;
        debug!(tower = %record.name, file = %path.display(), color, "icon written");

        let image = image_path(&cfg.paths.image_prefix, &filename);
        doc.set_image(index, &image)?;

        let icon = GeneratedIcon {
            name: record.name,
            filename,
            image_path: image,
            color: color.to_string(),
        };
        on_icon(&icon);
        icons.push(icon);
    }
    Ok(icons)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| GenerateError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "output directory ready");
    Ok(())
}
