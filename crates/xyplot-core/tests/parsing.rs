// File: crates/xyplot-core/tests/parsing.rs
// Purpose: String forms of the styling vocabulary and JSON chart requests.

use xyplot_core::{ChartRequest, Color, LegendLoc, LineStyle, Marker, PlotError, StyleMaps};

fn color(s: &str) -> Color {
    s.parse().unwrap_or_else(|e| panic!("{s}: {e}"))
}

#[test]
fn color_forms() {
    assert_eq!(color("#ff000080"), Color::rgba(255, 0, 0, 128));
    assert_eq!(color("#abc"), Color::rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(color("C1"), Color::rgb(0xff, 0x7f, 0x0e));
    assert_eq!(color("tab:green"), Color::rgb(0x2c, 0xa0, 0x2c));
    assert_eq!(color("Red"), Color::rgb(255, 0, 0));
    assert_eq!(color("k"), Color::rgb(0, 0, 0));
    assert_eq!(color("g"), Color::rgb(0, 128, 0));
    assert_eq!(color("0.5"), Color::rgb(128, 128, 128));
    assert_eq!(Color::rgb(255, 0, 0).to_string(), "#ff0000");
    assert_eq!(Color::rgba(0, 0, 255, 16).to_string(), "#0000ff10");
}

#[test]
fn bad_colors_are_rejected() {
    for s in ["C", "C10", "C01", "c1", "#12345", "#gg0000", "1.5", "tab:mauve", "notacolor"] {
        assert!(matches!(s.parse::<Color>(), Err(PlotError::InvalidColor(_))), "{s}");
    }
}

#[test]
fn line_style_forms() {
    assert_eq!("-".parse::<LineStyle>().unwrap(), LineStyle::Solid);
    assert_eq!("--".parse::<LineStyle>().unwrap(), LineStyle::Dashed);
    assert_eq!("dashdot".parse::<LineStyle>().unwrap(), LineStyle::DashDot);
    assert_eq!(":".parse::<LineStyle>().unwrap(), LineStyle::Dotted);
    assert_eq!("".parse::<LineStyle>().unwrap(), LineStyle::None);
    assert!(!LineStyle::None.draws_line());
    assert!(LineStyle::Solid.dash_pattern().is_none());
    assert!(matches!("~".parse::<LineStyle>(), Err(PlotError::InvalidLineStyle(_))));
}

#[test]
fn marker_forms() {
    assert_eq!("o".parse::<Marker>().unwrap(), Marker::Circle);
    assert_eq!("^".parse::<Marker>().unwrap(), Marker::TriangleUp);
    assert_eq!("D".parse::<Marker>().unwrap(), Marker::Diamond);
    assert_eq!("d".parse::<Marker>().unwrap(), Marker::ThinDiamond);
    assert_eq!("none".parse::<Marker>().unwrap(), Marker::None);
    assert!(!Marker::Plus.is_filled());
    assert!(Marker::Star.is_filled());
    assert!(matches!("q".parse::<Marker>(), Err(PlotError::InvalidMarker(_))));
}

#[test]
fn legend_location_forms() {
    assert_eq!("best".parse::<LegendLoc>().unwrap(), LegendLoc::Best);
    assert_eq!("Upper Left".parse::<LegendLoc>().unwrap(), LegendLoc::UpperLeft);
    assert_eq!("3".parse::<LegendLoc>().unwrap(), LegendLoc::LowerLeft);
    assert_eq!("10".parse::<LegendLoc>().unwrap(), LegendLoc::Center);
    assert!(matches!("nowhere".parse::<LegendLoc>(), Err(PlotError::InvalidLegendLoc(_))));
}

#[test]
fn json_request_with_aliases() {
    let req: ChartRequest = serde_json::from_str(
        r#"{
            "figure_title": "Signals",
            "xlabel": "t",
            "y_label": "v",
            "series": [
                {"name": "a", "x": [0, 1], "y": [1, 2], "color": "C2", "line_style": "--", "marker": "o"},
                {"name": "b", "x": [0, 1], "y": [2, 1], "legend": "B"}
            ],
            "font_sizes": {"title": 20},
            "figure_size": [6, 4],
            "dpi": 50,
            "legend_loc": "lower right",
            "xticks_values": [0, 1],
            "xticks_labels": ["lo", "hi"]
        }"#,
    )
    .expect("parse request");

    assert_eq!(req.title, "Signals");
    assert_eq!(req.x_label, "t");
    assert_eq!(req.y_label, "v");
    assert_eq!(req.font_sizes.title, Some(20.0));
    assert_eq!(req.font_sizes.legend, None);
    assert_eq!(req.x_tick_labels.as_deref(), Some(&["lo".to_string(), "hi".to_string()][..]));

    let a = req.series[0].style();
    assert_eq!(a.color, Color::rgb(0x2c, 0xa0, 0x2c));
    assert_eq!(a.line_style, LineStyle::Dashed);
    assert_eq!(a.marker, Marker::Circle);
    assert_eq!(a.line_width, 2.0);

    let opts = req.render_options();
    assert_eq!(opts.pixel_size().unwrap(), (300, 200));

    let chart = req.resolve().unwrap();
    assert_eq!(chart.legend, Some(LegendLoc::LowerRight));
    assert_eq!(chart.fonts.title, 20.0);
    assert_eq!(chart.fonts.xticks, 16.0);
}

#[test]
fn json_rejects_bad_style_values() {
    let err = serde_json::from_str::<ChartRequest>(r#"{"series": [{"name": "a", "color": "nope"}]}"#).unwrap_err();
    assert!(err.to_string().contains("invalid color 'nope'"), "{err}");

    let err = serde_json::from_str::<ChartRequest>(r#"{"legend_loc": "top"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid legend location"), "{err}");
}

#[test]
fn font_size_table_accepts_legends_key() {
    let req: ChartRequest =
        serde_json::from_str(r#"{"font_sizes": {"title": 18, "legends": 10}}"#).unwrap();
    let fonts = req.font_sizes.resolve();
    assert_eq!(fonts.legend, 10.0);
    assert_eq!(fonts.title, 18.0);
    assert_eq!(fonts.xticks, 16.0);
}

#[test]
fn json_style_maps() {
    let maps: StyleMaps = serde_json::from_str(
        r#"{"colors": {"a": "r"}, "line_styles": {"a": ":"}, "marker_sizes": {"b": 9}}"#,
    )
    .unwrap();
    assert_eq!(maps.colors["a"], Color::rgb(255, 0, 0));
    assert_eq!(maps.line_styles["a"], LineStyle::Dotted);
    assert_eq!(maps.marker_sizes["b"], 9.0);
    assert!(maps.legends.is_empty());
}
