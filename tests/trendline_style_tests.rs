use chart_trendline::api::{
    DEFAULT_TRENDLINE_WIDTH_PX, TrendlineConfig, default_trendline_color, resolve_trendline_style,
};
use chart_trendline::core::PixelSegment;
use chart_trendline::render::{Color, DASHED_PATTERN, LineStrokeStyle};

#[test]
fn trendline_color_overrides_dataset_border() {
    let config = TrendlineConfig::new().with_color(Color::rgb(1.0, 0.0, 0.0));
    let style = resolve_trendline_style(&config, Some(Color::rgb(0.0, 0.0, 1.0)), Some(2.0));

    assert_eq!(style.color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn dataset_border_color_is_used_when_unset() {
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let style = resolve_trendline_style(&TrendlineConfig::new(), Some(blue), None);

    assert_eq!(style.color, Color::rgb(0.0, 0.0, 1.0));
}

#[test]
fn translucent_gray_is_the_last_resort_color() {
    let style = resolve_trendline_style(&TrendlineConfig::new(), None, None);

    assert_eq!(style.color, default_trendline_color());
    assert_eq!(style.color, Color::from_rgba8(169, 169, 169, 0.6));
    assert_eq!(style.width_px, DEFAULT_TRENDLINE_WIDTH_PX);
    assert_eq!(style.stroke_style, LineStrokeStyle::Solid);
}

#[test]
fn explicitly_invisible_trendline_is_transparent() {
    let config = TrendlineConfig::new()
        .with_color(Color::rgb(1.0, 0.0, 0.0))
        .with_visible(false);
    let style = resolve_trendline_style(&config, None, None);

    assert!(style.color.is_transparent());
    assert_eq!(style.color, Color::transparent());

    let shown = resolve_trendline_style(&config.with_visible(true), None, None);
    assert_eq!(shown.color, Color::rgb(1.0, 0.0, 0.0));
}

#[test]
fn width_falls_back_through_dataset_border_width() {
    let explicit = TrendlineConfig::new().with_width_px(5.0);
    let style = resolve_trendline_style(&explicit, None, Some(1.0));
    assert_eq!(style.width_px, 5.0);

    let zero = TrendlineConfig::new().with_width_px(0.0);
    let style = resolve_trendline_style(&zero, None, Some(2.0));
    assert_eq!(style.width_px, 2.0);

    let not_finite = TrendlineConfig::new().with_width_px(f64::NAN);
    assert_eq!(
        resolve_trendline_style(&not_finite, None, None).width_px,
        DEFAULT_TRENDLINE_WIDTH_PX
    );

    // A zero border width is a legitimate value and is kept.
    assert_eq!(
        resolve_trendline_style(&TrendlineConfig::new(), None, Some(0.0)).width_px,
        0.0
    );
}

#[test]
fn dotted_and_dashed_names_select_dash_pattern() {
    for name in ["dotted", "DASHED", " Dotted "] {
        let config = TrendlineConfig::new().with_line_style(name);
        let style = resolve_trendline_style(&config, None, None);
        assert_eq!(
            style.stroke_style,
            LineStrokeStyle::Dashed,
            "line style `{name}`"
        );
        assert_eq!(style.stroke_style.dash_pattern(), DASHED_PATTERN.as_slice());
    }

    for name in ["solid", "wavy", ""] {
        let config = TrendlineConfig::new().with_line_style(name);
        let style = resolve_trendline_style(&config, None, None);
        assert_eq!(
            style.stroke_style,
            LineStrokeStyle::Solid,
            "line style `{name}`"
        );
        assert!(style.stroke_style.dash_pattern().is_empty());
    }
}

#[test]
fn resolved_style_builds_line_primitive() {
    let config = TrendlineConfig::new()
        .with_width_px(2.0)
        .with_line_style("dashed");
    let style = resolve_trendline_style(&config, Some(Color::rgb(0.0, 0.5, 0.0)), None);
    let line = style.line_primitive(PixelSegment::new(1.0, 2.0, 3.0, 4.0));

    assert_eq!(line.segment(), PixelSegment::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(line.stroke_width, 2.0);
    assert_eq!(line.color, Color::rgb(0.0, 0.5, 0.0));
    assert_eq!(line.stroke_style, LineStrokeStyle::Dashed);
    assert!(line.validate().is_ok());
}

#[test]
fn css_colors_parse() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    assert_eq!(Color::parse_css("#ff0000").ok(), Some(red));
    assert_eq!(Color::parse_css("#f00").ok(), Some(red));
    assert_eq!(
        Color::parse_css("rgba(169, 169, 169, 0.6)").ok(),
        Some(Color::from_rgba8(169, 169, 169, 0.6))
    );
    assert!(Color::parse_css("chartreuse").is_err());
    assert!(Color::parse_css("rgb(300, 0, 0)").is_err());
    assert!(Color::parse_css("rgba(0, 0, 0, 2)").is_err());
}

#[test]
fn basic_named_colors_parse() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let navy = Color::from_rgba8(0, 0, 128, 1.0);
    assert_eq!(Color::parse_css("red").ok(), Some(red));
    assert_eq!(Color::parse_css(" Navy ").ok(), Some(navy));
    assert_eq!(Color::parse_css("grey").ok(), Color::parse_css("gray").ok());

    let transparent = Color::parse_css("transparent").expect("transparent keyword");
    assert!(transparent.is_transparent());
}
