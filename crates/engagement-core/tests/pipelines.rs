// File: crates/engagement-core/tests/pipelines.rs
// Purpose: Loading, coercion and the box/bar/line pipelines from records to geometry.

use chart_core::data::from_reader;
use chart_core::geometry::{PathCmd, Point};
use chart_core::scene::{Anchor, Baseline};
use chart_core::{
    coerce_numeric, distinct, BarPlot, BarPlotConfig, BoxPlot, BoxPlotConfig, ChartError, ChartKind, ChartsConfig,
    CoercionPolicy, Groups, LinePlot, LinePlotConfig, Record, Rgba, Shape, Value,
};

fn records(csv: &str, numeric: &[&str]) -> Vec<Record> {
    let mut rows = from_reader(csv.as_bytes()).expect("parse csv");
    coerce_numeric(&mut rows, numeric, CoercionPolicy::Strict).expect("coerce");
    rows
}

#[test]
fn category_order_is_first_occurrence() {
    let csv = "Platform,Likes\nB,1\nA,2\nC,3\nA,4\nB,5\n";
    let rows = records(csv, &["Likes"]);
    let platforms: Vec<&str> = rows.iter().map(|r| r.text("Platform").unwrap()).collect();
    assert_eq!(distinct(&platforms), ["B", "A", "C"]);

    let plot = BoxPlot::build(&rows, &BoxPlotConfig::default()).expect("box plot");
    assert_eq!(plot.x.domain(), ["B", "A", "C"]);
    let order: Vec<&str> = plot.groups.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(order, ["B", "A", "C"]);
    assert_eq!(plot.groups[0].summary.values(), [1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn groups_keep_insertion_order() {
    let g: Groups<i32> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(g.keys().collect::<Vec<_>>(), ["x", "y"]);
    assert_eq!(g.get("x"), Some(&[1, 3][..]));
    let sums = g.rollup(|v| v.iter().sum::<i32>());
    assert_eq!(sums, vec![("x".to_string(), 4), ("y".to_string(), 2)]);
}

#[test]
fn lenient_coercion_turns_bad_text_into_nan() {
    let mut rows = from_reader("Platform,Likes\nA,12\nB,lots\nC, 7 \nD,\n".as_bytes()).unwrap();
    let failures = coerce_numeric(&mut rows, &["Likes", "Shares"], CoercionPolicy::Lenient).unwrap();
    // "lots" plus four missing `Shares`
    assert_eq!(failures, 5);
    assert_eq!(rows[0].number("Likes"), Some(12.0));
    assert!(rows[1].number("Likes").unwrap().is_nan());
    assert_eq!(rows[2].number("Likes"), Some(7.0));
    assert_eq!(rows[3].number("Likes"), Some(0.0));
    assert_eq!(rows[0].get("Platform"), Some(&Value::Text("A".into())));
}

#[test]
fn strict_coercion_reports_the_cell() {
    let mut rows = from_reader("Platform,Likes\nA,12\nB,lots\n".as_bytes()).unwrap();
    let err = coerce_numeric(&mut rows, &["Likes"], CoercionPolicy::Strict).unwrap_err();
    match err {
        ChartError::InvalidNumber { row, field, value } => {
            assert_eq!((row, field.as_str(), value.as_str()), (2, "Likes", "lots"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn short_rows_leave_fields_missing() {
    let rows = from_reader("Platform,PostType,AvgLikes\nX,Video\n".as_bytes()).unwrap();
    assert_eq!(rows[0].text("PostType"), Some("Video"));
    assert_eq!(rows[0].get("AvgLikes"), None);
    let err = BarPlot::build(&rows, &BarPlotConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDomain { .. }));
}

#[test]
fn box_geometry_follows_quartiles() {
    let csv = "Platform,Likes\nA,0\nA,100\nA,50\nA,25\nA,75\n";
    let rows = records(csv, &["Likes"]);
    let cfg = BoxPlotConfig::default();
    let plot = BoxPlot::build(&rows, &cfg).unwrap();
    assert_eq!(plot.y.domain(), (0.0, 100.0));
    let h = cfg.frame.height;
    let g = &plot.groups[0];
    assert_eq!(g.summary.values(), [0.0, 25.0, 50.0, 75.0, 100.0]);
    let bw = plot.x.bandwidth();
    let left = plot.x.position("A").unwrap();
    // whisker spans min..max at the band center
    assert_eq!(g.geometry.whisker.0.x, left + bw / 2.0);
    assert_eq!(g.geometry.whisker.0.y, h);
    assert_eq!(g.geometry.whisker.1.y, 0.0);
    // box from q3 (top) to q1
    assert_eq!(g.geometry.body.y, h * 0.25);
    assert_eq!(g.geometry.body.height, h * 0.5);
    assert_eq!(g.geometry.body.width, bw);
    assert_eq!(g.geometry.median.0.y, h * 0.5);
    assert!((g.geometry.median.1.x - g.geometry.median.0.x - bw).abs() < 1e-9);

    let scene = plot.scene(&cfg);
    assert_eq!(scene.mount, "boxplot");
    let boxes: Vec<_> = scene
        .shapes
        .iter()
        .filter(|s| matches!(s, Shape::Rect { fill: Some(c), .. } if *c == cfg.box_fill))
        .collect();
    assert_eq!(boxes.len(), 1);
}

#[test]
fn grouped_bars_nest_inside_their_category() {
    let csv = "Platform,PostType,AvgLikes\nX,Type1,10\nX,Type2,20\nY,Type1,30\n";
    let rows = records(csv, &["AvgLikes"]);
    let cfg = BarPlotConfig::default();
    let plot = BarPlot::build(&rows, &cfg).unwrap();
    let h = cfg.frame.height;
    assert_eq!(plot.y.domain(), (0.0, 30.0));

    let bar = |c: &str, g: &str| plot.bars.iter().find(|b| b.category == c && b.group == g).unwrap();
    let x_t1 = bar("X", "Type1");
    let x_t2 = bar("X", "Type2");
    let y_t1 = bar("Y", "Type1");

    assert!((x_t2.rect.height - h * 20.0 / 30.0).abs() < 1e-9);
    assert!((x_t2.rect.bottom() - h).abs() < 1e-9);
    assert!((x_t1.rect.height * 2.0 - x_t2.rect.height).abs() < 1e-9);
    assert!(x_t2.rect.x > x_t1.rect.x);

    let slot = plot.x0.position("X").unwrap();
    assert!(x_t1.rect.x >= slot);
    assert!(x_t2.rect.right() <= slot + plot.x0.bandwidth() + 1e-9);
    assert!(y_t1.rect.x > x_t2.rect.right());

    assert_eq!(x_t1.fill, Rgba::parse("pink").unwrap());
    assert_eq!(x_t2.fill, Rgba::parse("green").unwrap());
    assert_eq!(y_t1.fill, x_t1.fill);
}

#[test]
fn bar_legend_lists_groups_with_palette() {
    let csv = "Platform,PostType,AvgLikes\nA,Image,1\nA,Video,2\nA,Link,3\nA,Story,4\n";
    let rows = records(csv, &["AvgLikes"]);
    let cfg = BarPlotConfig::default();
    let plot = BarPlot::build(&rows, &cfg).unwrap();
    let legend = plot.legend();
    let names: Vec<&str> = legend.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, ["Image", "Video", "Link", "Story"]);
    // palette of three cycles back
    assert_eq!(legend[3].1, legend[0].1);

    let scene = plot.scene(&cfg);
    let swatches: Vec<_> = scene.rects().filter(|r| r.x >= cfg.frame.width).collect();
    assert_eq!(swatches.len(), 4);
    assert_eq!(swatches[1].y - swatches[0].y, cfg.legend.row_height);
    assert!(scene.labels.iter().any(|l| l.text == "Story"));
}

#[test]
fn line_passes_through_band_centers() {
    let csv = "Date,AvgLikes\nMon,10\nTue,40\nWed,20\nThu,30\n";
    let rows = records(csv, &["AvgLikes"]);
    let cfg = LinePlotConfig::default();
    let plot = LinePlot::build(&rows, &cfg).unwrap();
    assert_eq!(plot.y.domain(), (0.0, 40.0));
    let vertices = plot.path.vertices();
    assert_eq!(vertices.len(), 4);
    for (p, v) in plot.points.iter().zip(&vertices) {
        assert_eq!(p.at, *v);
        assert_eq!(v.x, plot.x.center(&p.category).unwrap());
        assert_eq!(v.y, plot.y.apply(p.value));
    }
    assert!(matches!(plot.path.commands()[1], PathCmd::CubicTo(..)));

    let scene = plot.scene(&cfg);
    assert!(scene.labels.iter().any(|l| l.text == "Mon" && l.rotate == cfg.tick_rotation));
    assert!(scene
        .shapes
        .iter()
        .any(|s| matches!(s, Shape::Path { fill: None, stroke: Some(st), .. } if st.width == 2.0)));
}

#[test]
fn chart_kinds_build_from_defaults() {
    let cfg = ChartsConfig::default();
    let rows = records("Date,AvgLikes\nMon,10\n", &["AvgLikes"]);
    let scene = ChartKind::Line.scene(&rows, &cfg).unwrap();
    assert_eq!(scene.mount, "lineplot");
    assert_eq!(ChartKind::Box.input(&cfg), "socialMedia.csv");
    assert_eq!(ChartKind::Bar.numeric_fields(&cfg), ["AvgLikes"]);
}

#[test]
fn config_overrides_from_toml() {
    let cfg = ChartsConfig::from_toml_str(
        r##"
        [barplot]
        palette = ["#ff0000", "blue"]

        [lineplot.titles]
        x = "Day"
        "##,
    )
    .unwrap();
    assert_eq!(cfg.barplot.palette, vec![Rgba::rgb(255, 0, 0), Rgba::rgb(0, 0, 255)]);
    assert_eq!(cfg.lineplot.titles.x, "Day");
    // untouched tables keep their defaults
    assert_eq!(cfg.boxplot, BoxPlotConfig::default());
    assert_eq!(cfg.lineplot.stroke_width, 2.0);

    assert!(ChartsConfig::from_toml_str("[barplot]\npalette = [\"notacolor\"]\n").is_err());
    assert!(ChartsConfig::from_toml_str("[boxplot]\nbogus = 1\n").is_err());
    assert!(ChartsConfig::from_toml_str("[lineplot.frame]\ndepth = 3.0\n").is_err());
}

#[test]
fn empty_config_is_the_default() {
    assert_eq!(ChartsConfig::from_toml_str("").unwrap(), ChartsConfig::default());
}

#[test]
fn partial_tables_keep_chart_defaults() {
    let line = LinePlotConfig::default();
    let cfg = ChartsConfig::from_toml_str("[lineplot.titles]\nx = \"Day\"\n").unwrap();
    let t = &cfg.lineplot.titles;
    assert_eq!(t.x, "Day");
    assert_eq!(t.y, "Average Number of Likes");
    assert!(t.y_bold);
    assert_eq!((t.x_lift, t.y_inset), (line.titles.x_lift, line.titles.y_inset));
    assert_eq!((t.x_lift, t.y_inset), (40.0, 10.0));

    let cfg = ChartsConfig::from_toml_str("[lineplot.frame]\nwidth = 960.0\nmargin = { bottom = 120.0 }\n").unwrap();
    let f = cfg.lineplot.frame;
    assert_eq!((f.width, f.height), (960.0, line.frame.height));
    assert_eq!(f.margin.bottom, 120.0);
    assert_eq!((f.margin.top, f.margin.right, f.margin.left), (30.0, 30.0, 50.0));
    // sibling charts are untouched
    assert_eq!(cfg.barplot, BarPlotConfig::default());
}

#[test]
fn non_finite_text_is_a_coercion_failure() {
    let csv = "Date,AvgLikes\nA,inf\nB,10\nC,NaN\nD,-Infinity\nE,1e400\n";
    let mut rows = from_reader(csv.as_bytes()).unwrap();
    let failures = coerce_numeric(&mut rows, &["AvgLikes"], CoercionPolicy::Lenient).unwrap();
    assert_eq!(failures, 4);
    assert!(rows.iter().all(|r| !r.number("AvgLikes").unwrap().is_infinite()));
    assert_eq!(rows[1].number("AvgLikes"), Some(10.0));

    // the surviving value still drives a finite, niced domain
    let plot = LinePlot::build(&rows, &LinePlotConfig::default()).unwrap();
    assert_eq!(plot.y.domain(), (0.0, 10.0));
    assert_eq!(plot.points.len(), 1);

    let mut rows = from_reader("Date,AvgLikes\nA,inf\n".as_bytes()).unwrap();
    let err = coerce_numeric(&mut rows, &["AvgLikes"], CoercionPolicy::Strict).unwrap_err();
    assert!(matches!(err, ChartError::InvalidNumber { row: 1, .. }));
}

#[test]
fn line_scene_axis_styling() {
    let rows = records("Date,AvgLikes\nMon,10\nTue,40\n", &["AvgLikes"]);
    let cfg = LinePlotConfig::default();
    let scene = LinePlot::build(&rows, &cfg).unwrap().scene(&cfg);

    let y_ticks: Vec<_> = scene.labels.iter().filter(|l| l.style.anchor == Anchor::End && l.rotate == 0.0).collect();
    assert!(!y_ticks.is_empty());
    assert!(y_ticks.iter().all(|l| l.style.size == 12.0));
    assert!(y_ticks.iter().any(|l| l.text == "40"));

    let y_title = scene.labels.iter().find(|l| l.rotate == -90.0).expect("y title");
    assert_eq!(y_title.text, "Average Number of Likes");
    assert_eq!(y_title.style.size, 16.0);
    assert!(y_title.style.bold);

    let x_title = scene.labels.iter().find(|l| l.text == "Date").expect("x title");
    assert!(!x_title.style.bold);
    assert_eq!(x_title.offset.y, cfg.frame.height + cfg.frame.margin.bottom - 40.0);
}

#[test]
fn legend_text_sits_beside_each_swatch() {
    let csv = "Platform,PostType,AvgLikes\nA,Image,1\nA,Video,2\n";
    let rows = records(csv, &["AvgLikes"]);
    let cfg = BarPlotConfig::default();
    let scene = BarPlot::build(&rows, &cfg).unwrap().scene(&cfg);
    let lx = cfg.frame.width + 20.0;
    for (i, name) in ["Image", "Video"].into_iter().enumerate() {
        let label = scene
            .labels
            .iter()
            .find(|l| l.text == name && l.style.size == 14.0)
            .expect("legend label");
        let row = i as f64 * 25.0;
        assert_eq!(label.offset, Point::new(lx + 25.0, 10.0 + row + 14.0));
        assert_eq!(label.style.baseline, Baseline::Middle);
    }
}
