//! Placeholder tower icon markup.
//!
//! Each icon is a square canvas with a gradient-filled circle and the tower's
//! initial on top. Circle and label share one drop-shadow filter. The
//! gradient id only depends on the tower type, so icons of the same type
//! reuse the same id (fine for standalone files).

use std::borrow::Cow;

use crate::core::config::IconConfig;

/// Inputs for one icon.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec<'a> {
    /// Character drawn in the middle of the circle.
    pub label: char,
    /// Effective tower type; becomes the `grad_<type>` gradient id.
    pub tower_type: &'a str,
    pub color: &'a str,
    pub geometry: &'a IconConfig,
}

impl IconSpec<'_> {
    pub fn gradient_id(&self) -> String {
        format!("grad_{}", escape_xml(self.tower_type))
    }
}

/// Render the SVG document text (no trailing newline).
pub fn render_icon(spec: &IconSpec<'_>) -> String {
    let g = spec.geometry;
    // u64 so configured sizes up to u32::MAX cannot overflow.
    let center = u64::from(g.size) / 2;
    // Baseline offset that visually centers a bold cap (10 units at 48px).
    let baseline = center + u64::from(g.font_size) * 5 / 24;
    let grad = spec.gradient_id();
    let color = escape_xml(spec.color);
    let stroke = escape_xml(&g.stroke);
    let font_family = escape_xml(&g.font_family);
    let mut buf = [0u8; 4];
    let label = escape_xml(spec.label.encode_utf8(&mut buf));

    format!(
        r##"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
    <defs>
        <linearGradient id="{grad}" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{color};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{color};stop-opacity:0.6" />
        </linearGradient>
        <filter id="shadow">
            <feDropShadow dx="0" dy="2" stdDeviation="3" flood-opacity="0.5"/>
        </filter>
    </defs>
    <circle cx="{center}" cy="{center}" r="{radius}" fill="url(#{grad})" filter="url(#shadow)" stroke="{stroke}" stroke-width="{stroke_width}"/>
    <text x="{center}" y="{baseline}" font-family="{font_family}" font-size="{font_size}" font-weight="bold" fill="white" text-anchor="middle" filter="url(#shadow)">
        {label}
    </text>
</svg>"##,
        size = g.size,
        radius = g.radius,
        stroke_width = g.stroke_width,
        font_size = g.font_size,
    )
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWIFT_SHOT: &str = r##"<svg width="120" height="120" xmlns="http://www.w3.org/2000/svg">
    <defs>
        <linearGradient id="grad_Swift" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:#ffd700;stop-opacity:1" />
            <stop offset="100%" style="stop-color:#ffd700;stop-opacity:0.6" />
        </linearGradient>
        <filter id="shadow">
            <feDropShadow dx="0" dy="2" stdDeviation="3" flood-opacity="0.5"/>
        </filter>
    </defs>
    <circle cx="60" cy="60" r="50" fill="url(#grad_Swift)" filter="url(#shadow)" stroke="#333" stroke-width="3"/>
    <text x="60" y="70" font-family="Arial, sans-serif" font-size="48" font-weight="bold" fill="white" text-anchor="middle" filter="url(#shadow)">
        S
    </text>
</svg>"##;

    #[test]
    fn default_geometry_matches_reference_markup() {
        let geometry = IconConfig::default();
        let svg = render_icon(&IconSpec {
            label: 'S',
            tower_type: "Swift",
            color: "#ffd700",
            geometry: &geometry,
        });
        assert_eq!(svg, SWIFT_SHOT);
    }

    #[test]
    fn label_and_gradient_are_escaped() {
        let geometry = IconConfig::default();
        let svg = render_icon(&IconSpec {
            label: '<',
            tower_type: "R&D",
            color: "#cccccc",
            geometry: &geometry,
        });
        assert!(svg.contains(r#"id="grad_R&amp;D""#));
        assert!(svg.contains("url(#grad_R&amp;D)"));
        assert!(svg.contains("        &lt;\n"));
        assert!(!svg.contains("R&D"));
    }

    #[test]
    fn non_ascii_initial() {
        let geometry = IconConfig::default();
        let svg = render_icon(&IconSpec {
            label: 'É',
            tower_type: "Utility",
            color: "#a78bfa",
            geometry: &geometry,
        });
        assert!(svg.contains("        É\n    </text>"));
        assert_eq!(svg.matches("stop-color:#a78bfa").count(), 2);
    }

    #[test]
    fn custom_geometry() {
        let geometry = IconConfig {
            size: 64,
            radius: 28,
            font_size: 24,
            ..IconConfig::default()
        };
        let svg = render_icon(&IconSpec {
            label: 'V',
            tower_type: "Vanguard",
            color: "#4ecdc4",
            geometry: &geometry,
        });
        assert!(svg.starts_with(r#"<svg width="64" height="64""#));
        assert!(svg.contains(r#"<circle cx="32" cy="32" r="28""#));
        assert!(svg.contains(r#"<text x="32" y="37""#));
    }

    #[test]
    fn oversized_geometry_does_not_overflow() {
        let geometry = IconConfig {
            size: u32::MAX,
            font_size: 1_000_000_000,
            ..IconConfig::default()
        };
        let svg = render_icon(&IconSpec {
            label: 'X',
            tower_type: "Swift",
            color: "#ffd700",
            geometry: &geometry,
        });
        // center 2147483647 + 1_000_000_000 * 5 / 24
        assert!(svg.contains(r#"<text x="2147483647" y="2355816980""#));
    }
}
