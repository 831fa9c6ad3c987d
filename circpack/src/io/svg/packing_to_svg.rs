use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::PackingSnapshot;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;

/// Renders a snapshot of a packing as an SVG document.
/// The y-axis points down, as is common for SVG.
pub fn packing_to_svg(snapshot: &PackingSnapshot, options: SvgDrawOptions, title: &str) -> Document {
    let theme = &options.theme;
    let enclosing = &snapshot.enclosing_circle;

    let bbox = match enclosing.radius > 0.0 {
        true => enclosing.bbox(),
        false => {
            //degenerate enclosing circle, fall back to the bounding box of the circles
            let rects = snapshot.circles.iter().map(|c| c.bbox());
            rects
                .reduce(|a, b| Rect::bounding_rect(&a, &b))
                .filter(|r| r.width() > 0.0 && r.height() > 0.0)
                .unwrap_or(Rect::new(-1.0, -1.0, 1.0, 1.0))
        }
    };
    let vbox = bbox.scale(1.10);

    let stroke_width = f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let background = Rectangle::new()
        .set("x", vbox.x_min)
        .set("y", vbox.y_min)
        .set("width", vbox.width())
        .set("height", vbox.height())
        .set("fill", format!("{}", theme.background_fill));

    let label = {
        //print some information above the left top of the packing
        let font_size = f64::min(bbox.width(), bbox.height()) * 0.025;
        let label_content = format!(
            "circles: {} | enclosing radius: {:.3} | density: {:.3}% | {}",
            snapshot.circles.len(),
            enclosing.radius,
            snapshot.density * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", bbox.x_min)
            .set("y", bbox.y_min - 0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
            .set("fill", format!("{}", theme.text_fill))
    };

    //draw circles
    let circles_group = {
        let mut circles_group = Group::new().set("id", "circles");
        for (i, c) in snapshot.circles.iter().enumerate() {
            let title = Title::new(format!(
                "circle, idx: {}, center: ({:.3}, {:.3}), r: {:.3}",
                i, c.center.0, c.center.1, c.radius
            ));
            circles_group = circles_group.add(
                svg_util::circle(
                    *c,
                    &[
                        ("fill", &*format!("{}", theme.circle_fill)),
                        ("fill-opacity", &*format!("{}", theme.circle_fill_opac)),
                        ("stroke", &*format!("{}", theme.circle_stroke)),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                )
                .add(title),
            );
        }
        circles_group
    };

    let enclosing_group = match options.enclosing_circle && enclosing.radius > 0.0 {
        false => None,
        true => {
            let title = Title::new(format!(
                "enclosing circle, center: ({:.3}, {:.3}), r: {:.3}",
                enclosing.center.0, enclosing.center.1, enclosing.radius
            ));
            let circle = svg_util::circle(
                *enclosing,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.enclosing_stroke)),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                    ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ("stroke-linecap", "round"),
                ],
            )
            .add(title);
            Some(Group::new().set("id", "enclosing_circle").add(circle))
        }
    };

    let centers_group = match options.centers {
        false => None,
        true => {
            let fill = format!("{}", svg_util::change_brightness(theme.circle_stroke, 0.5));
            let group = snapshot
                .circles
                .iter()
                .map(|c| svg_util::point(c.center, Some(&fill), Some(2.0 * stroke_width)))
                .fold(Group::new().set("id", "centers"), |g, p| g.add(p));
            Some(group)
        }
    };

    let indices_group = match options.indices {
        false => None,
        true => {
            let mut indices_group = Group::new().set("id", "indices");
            for (i, c) in snapshot.circles.iter().enumerate() {
                let Point(x, y) = c.center;
                indices_group = indices_group.add(
                    Text::new(format!("{i}"))
                        .set("x", x)
                        .set("y", y)
                        .set("font-size", c.radius * 0.6)
                        .set("font-family", "monospace")
                        .set("text-anchor", "middle")
                        .set("dominant-baseline", "central")
                        .set("fill", format!("{}", theme.text_fill)),
                );
            }
            Some(indices_group)
        }
    };

    //highlight overlapping circles (if enabled)
    let overlap_group = match options.highlight_overlaps {
        false => None,
        true => {
            let color = format!("{}", theme.overlap_highlight_color);
            let group = snapshot
                .circles
                .iter()
                .tuple_combinations()
                .filter(|(a, b)| a.overlaps(b))
                .map(|(a, b)| {
                    svg_util::data_to_path(
                        svg_util::segment_data(a.center, b.center),
                        &[
                            ("stroke", &*color),
                            ("stroke-opacity", "0.75"),
                            ("stroke-width", &*format!("{}", stroke_width * 4.0)),
                            (
                                "stroke-dasharray",
                                &*format!("{} {}", 4.0 * stroke_width, 8.0 * stroke_width),
                            ),
                            ("stroke-linecap", "round"),
                            ("stroke-linejoin", "round"),
                        ],
                    )
                })
                .fold(Group::new().set("id", "overlap_lines"), |g, p| g.add(p));
            Some(group)
        }
    };

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    let optionals = [enclosing_group, centers_group, indices_group, overlap_group]
        .into_iter()
        .flatten()
        .fold(Group::new().set("id", "optionals"), |g, opt| g.add(opt));

    Document::new()
        .set("viewBox", vbox_svg)
        .add(background)
        .add(circles_group)
        .add(optionals)
        .add(label)
}
