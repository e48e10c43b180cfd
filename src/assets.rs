//! The fixed family of brand assets
//!
//! Seven SVG files are produced from one palette and one symbol geometry.
//! [`render_assets`] is a pure function of its inputs: the same palette and
//! config always yield byte-identical markup.

use crate::palette::Palette;
use crate::renderer::geometry::{Canvas, Transform, EMBRACE, SYMBOL_FRAME};
use crate::renderer::{Length, SvgBuilder, SvgConfig, TextStyle};

/// Brand name rendered by the wordmark
pub const BRAND_NAME: &str = "Emberly";

/// Font stack for the wordmark, most specific first
pub const FONT_FAMILY: &str =
    "Nunito, Poppins, 'Circular Std', system-ui, -apple-system, 'Segoe UI', Arial, sans-serif";

const WORDMARK_FONT_SIZE: f64 = 170.0;
const WORDMARK_FONT_WEIGHT: u16 = 700;

const SYMBOL_CANVAS: Canvas = Canvas::new(SYMBOL_FRAME, SYMBOL_FRAME);
const WORDMARK_CANVAS: Canvas = Canvas::new(1000.0, 300.0);
const LOCKUP_CANVAS: Canvas = Canvas::new(1200.0, 400.0);
const APP_ICON_CANVAS: Canvas = Canvas::new(1024.0, 1024.0).with_viewbox(SYMBOL_FRAME, SYMBOL_FRAME);

/// Symbol placement inside the lockup, left of the wordmark
const LOCKUP_SYMBOL: Transform = Transform::translate(70.0, 72.0).with_scale(1.15);
const APP_ICON_SYMBOL: Transform = Transform::translate(0.0, 0.0);
const APP_ICON_CORNER_RADIUS: f64 = 56.0;

/// One of the generated assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// Symbol alone on a transparent canvas
    Symbol,
    /// Brand text alone
    Wordmark,
    /// Symbol and wordmark side by side, transparent
    Primary,
    LightLockup,
    DarkLockup,
    /// Symbol centered on a rounded light square
    LightAppIcon,
    /// Symbol centered on a rounded dark square
    DarkAppIcon,
}

impl AssetKind {
    /// Every asset, in output order
    pub const ALL: [AssetKind; 7] = [
        AssetKind::Symbol,
        AssetKind::Wordmark,
        AssetKind::Primary,
        AssetKind::LightLockup,
        AssetKind::DarkLockup,
        AssetKind::LightAppIcon,
        AssetKind::DarkAppIcon,
    ];

    /// Output file name
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Symbol => "emberly-symbol.svg",
            AssetKind::Wordmark => "emberly-wordmark.svg",
            AssetKind::Primary => "emberly-logo-primary.svg",
            AssetKind::LightLockup => "emberly-logo-light-bg.svg",
            AssetKind::DarkLockup => "emberly-logo-dark-bg.svg",
            AssetKind::LightAppIcon => "emberly-app-icon-light.svg",
            AssetKind::DarkAppIcon => "emberly-app-icon-dark.svg",
        }
    }

    /// Background fill for this asset, if it has one
    pub fn background(self, palette: &Palette) -> Option<&str> {
        match self {
            AssetKind::Symbol | AssetKind::Wordmark | AssetKind::Primary => None,
            AssetKind::LightLockup | AssetKind::LightAppIcon => Some(&palette.background_light),
            AssetKind::DarkLockup | AssetKind::DarkAppIcon => Some(&palette.background_dark),
        }
    }

    /// Render this asset to SVG markup
    pub fn render(self, palette: &Palette, config: &SvgConfig) -> String {
        match self {
            AssetKind::Symbol => render_symbol(palette, config),
            AssetKind::Wordmark => render_wordmark(palette, config),
            AssetKind::Primary | AssetKind::LightLockup | AssetKind::DarkLockup => {
                render_lockup(palette, config, self.background(palette))
            }
            AssetKind::LightAppIcon => render_app_icon(palette, config, &palette.background_light),
            AssetKind::DarkAppIcon => render_app_icon(palette, config, &palette.background_dark),
        }
    }
}

/// A rendered asset: file name plus markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    pub name: &'static str,
    pub content: String,
}

/// All rendered assets, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSet {
    assets: Vec<Asset>,
}

impl AssetSet {
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Look up an asset by file name
    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.name == name)
    }

    /// Look up an asset by kind
    pub fn by_kind(&self, kind: AssetKind) -> Option<&Asset> {
        self.assets.iter().find(|a| a.kind == kind)
    }

    /// File names in output order
    pub fn names(&self) -> Vec<&'static str> {
        self.assets.iter().map(|a| a.name).collect()
    }
}

impl<'a> IntoIterator for &'a AssetSet {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

/// Render every asset from the palette
pub fn render_assets(palette: &Palette, config: &SvgConfig) -> AssetSet {
    let assets = AssetKind::ALL
        .iter()
        .map(|&kind| Asset {
            kind,
            name: kind.file_name(),
            content: kind.render(palette, config),
        })
        .collect();
    AssetSet { assets }
}

/// Spark and both arms, all in the symbol color
fn add_symbol_shapes(builder: &mut SvgBuilder, palette: &Palette, annotate: bool) {
    if annotate {
        builder.add_comment("Spark");
    }
    builder.add_circle(&EMBRACE.spark, &palette.symbol);
    if annotate {
        builder.add_comment("Left arm");
    }
    builder.add_path(&EMBRACE.left_arm, &palette.symbol);
    if annotate {
        builder.add_comment("Right arm");
    }
    builder.add_path(&EMBRACE.right_arm, &palette.symbol);
}

fn wordmark_style(palette: &Palette) -> TextStyle {
    TextStyle {
        font_size: WORDMARK_FONT_SIZE,
        font_weight: WORDMARK_FONT_WEIGHT,
        letter_spacing: 0.0,
        font_family: FONT_FAMILY.to_string(),
        fill: palette.wordmark.clone(),
    }
}

fn render_symbol(palette: &Palette, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone()).with_root_fill("none");
    builder.add_comment("Emberly Embrace Symbol");
    builder.start_group(None);
    add_symbol_shapes(&mut builder, palette, true);
    builder.end_group();
    builder.build(&SYMBOL_CANVAS)
}

fn render_wordmark(palette: &Palette, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_text(BRAND_NAME, 10.0, 210.0, &wordmark_style(palette));
    builder.build(&WORDMARK_CANVAS)
}

fn render_lockup(palette: &Palette, config: &SvgConfig, background: Option<&str>) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    if let Some(bg) = background {
        builder.add_rect(Length::Percent(100.0), Length::Percent(100.0), None, bg);
    }
    builder.add_comment("Symbol");
    builder.start_group(Some(&LOCKUP_SYMBOL));
    add_symbol_shapes(&mut builder, palette, false);
    builder.end_group();
    builder.add_comment("Wordmark");
    builder.add_text(BRAND_NAME, 360.0, 250.0, &wordmark_style(palette));
    builder.build(&LOCKUP_CANVAS)
}

fn render_app_icon(palette: &Palette, config: &SvgConfig, background: &str) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    builder.add_rect(
        Length::Units(SYMBOL_FRAME),
        Length::Units(SYMBOL_FRAME),
        Some(APP_ICON_CORNER_RADIUS),
        background,
    );
    builder.start_group(Some(&APP_ICON_SYMBOL));
    add_symbol_shapes(&mut builder, palette, false);
    builder.end_group();
    builder.build(&APP_ICON_CANVAS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(kind: AssetKind) -> String {
        kind.render(&Palette::default(), &SvgConfig::default())
    }

    #[test]
    fn test_seven_unique_names() {
        let set = render_assets(&Palette::default(), &SvgConfig::default());
        assert_eq!(set.len(), 7);
        let mut names = set.names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_names_in_output_order() {
        let set = render_assets(&Palette::default(), &SvgConfig::default());
        assert_eq!(
            set.names(),
            vec![
                "emberly-symbol.svg",
                "emberly-wordmark.svg",
                "emberly-logo-primary.svg",
                "emberly-logo-light-bg.svg",
                "emberly-logo-dark-bg.svg",
                "emberly-app-icon-light.svg",
                "emberly-app-icon-dark.svg",
            ]
        );
    }

    #[test]
    fn test_symbol_root_is_transparent() {
        let svg = render(AssetKind::Symbol);
        assert!(svg.contains(r#"viewBox="0 0 256 256" fill="none""#));
        assert!(!svg.contains("<rect"));
        assert!(!svg.contains("<text"));
        assert!(svg.contains("<!-- Spark -->"));
    }

    #[test]
    fn test_wordmark_has_no_geometry() {
        let svg = render(AssetKind::Wordmark);
        assert!(svg.contains(">Emberly</text>"));
        assert!(svg.contains(r##"fill="#5a524c""##));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_lockup_places_symbol_left_of_text() {
        let svg = render(AssetKind::Primary);
        assert!(svg.contains(r#"width="1200" height="400" viewBox="0 0 1200 400""#));
        assert!(svg.contains(r#"<g transform="translate(70,72) scale(1.15)">"#));
        assert!(svg.contains(r#"<text x="360" y="250""#));
    }

    #[test]
    fn test_app_icon_frame() {
        let svg = render(AssetKind::DarkAppIcon);
        assert!(svg.contains(r#"width="1024" height="1024" viewBox="0 0 256 256""#));
        assert!(svg.contains(r##"rx="56" ry="56" fill="#2d2520""##));
        assert!(svg.contains(r#"<g transform="translate(0,0)">"#));
    }

    #[test]
    fn test_app_icon_backdrop_matches_background() {
        let palette = Palette::from_str(
            "[colors]\nbackground-light = \"#eeeeee\"\nbackground-dark = \"#111111\"\n",
        )
        .unwrap();
        for kind in [AssetKind::LightAppIcon, AssetKind::DarkAppIcon] {
            let bg = kind.background(&palette).unwrap();
            let svg = kind.render(&palette, &SvgConfig::default());
            assert!(svg.contains(&format!(r#"rx="56" ry="56" fill="{}""#, bg)), "{:?}", kind);
        }
    }

    #[test]
    fn test_background_lookup() {
        let palette = Palette::default();
        assert_eq!(AssetKind::Primary.background(&palette), None);
        assert_eq!(AssetKind::LightLockup.background(&palette), Some("#f8f6f4"));
        assert_eq!(AssetKind::DarkAppIcon.background(&palette), Some("#2d2520"));
    }

    #[test]
    fn test_custom_palette_flows_through() {
        let palette = Palette::from_str("[colors]\nsymbol = \"#abcdef\"\n").unwrap();
        let svg = AssetKind::Symbol.render(&palette, &SvgConfig::default());
        assert_eq!(svg.matches(r##"fill="#abcdef""##).count(), 3);
        assert!(!svg.contains("#d9a58b"));
    }

    #[test]
    fn test_lookup_by_name_and_kind() {
        let set = render_assets(&Palette::default(), &SvgConfig::default());
        let by_name = set.get("emberly-wordmark.svg").unwrap();
        let by_kind = set.by_kind(AssetKind::Wordmark).unwrap();
        assert_eq!(by_name, by_kind);
        assert!(set.get("missing.svg").is_none());
    }
}
