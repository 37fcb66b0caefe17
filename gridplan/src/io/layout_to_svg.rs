use ceilgrid::entities::LayoutResult;
use ceilgrid::geometry::Rect;
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::io::svg_util::{self, SvgDrawOptions};

/// Draws the surface, the band of the perimeter gap and all panels of `layout`.
pub fn layout_to_svg(layout: &LayoutResult, options: SvgDrawOptions, title: &str) -> Document {
    let surface = layout.surface();
    let spacing = layout.spacing();
    let unit = surface.unit().symbol();
    let theme = options.theme.get_theme();

    let (length, width) = (surface.length(), surface.width());
    let margin = 0.025 * f64::max(length, width);
    let caption_height = match options.caption {
        true => 0.06 * width,
        false => 0.0,
    };
    let stroke_width = f64::min(length, width) * 0.001 * theme.stroke_width_multiplier;

    let vbox = (
        -margin,
        -margin,
        length + 2.0 * margin,
        width + 2.0 * margin + caption_height,
    );

    //perimeter band, the interior is drawn on top of it
    let surface_group = {
        let p = spacing.perimeter_gap();
        let outer = Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: length,
            y_max: width,
        };
        let inner = Rect {
            x_min: p,
            y_min: p,
            x_max: length - p,
            y_max: width - p,
        };
        Group::new()
            .set("id", "surface")
            .add(
                rect_element(&outer)
                    .set("fill", theme.perimeter_fill)
                    .set("stroke", "black")
                    .set("stroke-width", 2.0 * stroke_width)
                    .add(Title::new(format!(
                        "surface: {length} x {width} {unit}, perimeter gap: {p} {unit}"
                    ))),
            )
            .add(
                rect_element(&inner)
                    .set("fill", theme.interior_fill)
                    .set("stroke", "none")
                    .add(Title::new(format!(
                        "interior: {:.1} x {:.1} {unit}, panel gap: {} {unit}",
                        inner.width(),
                        inner.height(),
                        spacing.panel_gap()
                    ))),
            )
    };

    let panel_group = {
        let panel_stroke = svg_util::change_brightness(theme.panel_fill, 0.5);
        let font_size = 0.25 * f64::min(layout.panel_width(), layout.panel_height());
        let positions = (0..layout.panel_count_y()).cartesian_product(0..layout.panel_count_x());

        layout
            .panel_rects()
            .zip(positions)
            .fold(Group::new().set("id", "panels"), |group, (rect, (row, col))| {
                let panel = rect_element(&rect)
                    .set("id", format!("panel_{col}_{row}"))
                    .set("fill", theme.panel_fill)
                    .set("stroke", panel_stroke.as_str())
                    .set("stroke-width", stroke_width)
                    .add(Title::new(format!(
                        "panel ({col}, {row}): {:.1} x {:.1} {unit}",
                        rect.width(),
                        rect.height()
                    )));
                let group = group.add(panel);
                match options.panel_labels {
                    true => {
                        let (cx, cy) = rect.centroid();
                        group.add(
                            Text::new(format!("{col},{row}"))
                                .set("x", cx)
                                .set("y", cy)
                                .set("font-size", font_size)
                                .set("font-family", "monospace")
                                .set("text-anchor", "middle")
                                .set("dominant-baseline", "middle")
                                .set("fill", theme.text_fill),
                        )
                    }
                    false => group,
                }
            })
    };

    let mut document = Document::new()
        .set("viewBox", vbox)
        .add(Title::new(title.to_string()))
        .add(surface_group)
        .add(panel_group);

    if options.caption {
        let caption = format!(
            "{length} x {width} {unit} | {}x{} panels of {:.1} x {:.1} {unit} | coverage {:.1}%",
            layout.panel_count_x(),
            layout.panel_count_y(),
            layout.panel_width(),
            layout.panel_height(),
            layout.coverage_ratio() * 100.0
        );
        document = document.add(
            Text::new(caption)
                .set("x", 0.0)
                .set("y", width + margin + 0.5 * caption_height)
                .set("font-size", 0.5 * caption_height)
                .set("font-family", "monospace")
                .set("dominant-baseline", "middle")
                .set("fill", theme.text_fill),
        );
    }

    document
}

fn rect_element(rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x_min)
        .set("y", rect.y_min)
        .set("width", rect.width())
        .set("height", rect.height())
}
