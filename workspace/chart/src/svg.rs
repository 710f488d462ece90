//! Standalone SVG serialization of a [`Scene`], used for offline rendering.

use std::fmt::Write;

use crate::curve::format_number;
use crate::layout::Dimensions;
use crate::scene::{Primitive, Scene, Style};
use crate::timeline::TimelineView;

const BACKGROUND: &str = "#0a0a0a";
const MESSAGE_COLOR: &str = "#a3a3a3";

/// Renders whichever view a derivation produced.
pub fn render_view(view: &TimelineView, dimensions: &Dimensions) -> String {
    match view {
        TimelineView::Ready(model) => render_svg(model.scene()),
        other => placeholder_svg(dimensions, &other.message().unwrap_or_default()),
    }
}

pub fn render_svg(scene: &Scene) -> String {
    let mut svg = String::new();
    open_svg(&mut svg, scene.width, scene.height);

    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(svg, "    <clipPath id=\"{}\">", escape(&scene.clip_id));
    let _ = writeln!(
        svg,
        "      <rect width=\"{}\" height=\"{}\"/>",
        format_number(scene.inner_width),
        format_number(scene.inner_height)
    );
    let _ = writeln!(svg, "    </clipPath>");
    let _ = writeln!(svg, "  </defs>");

    let _ = writeln!(
        svg,
        "  <g transform=\"translate({},{})\">",
        format_number(scene.margins.left),
        format_number(scene.margins.top)
    );
    for primitive in &scene.axes {
        write_primitive(&mut svg, primitive, "    ");
    }
    let _ = writeln!(
        svg,
        "    <g clip-path=\"url(#{})\">",
        escape(&scene.clip_id)
    );
    for primitive in &scene.series {
        write_primitive(&mut svg, primitive, "      ");
    }
    let _ = writeln!(svg, "    </g>");
    let _ = writeln!(svg, "  </g>");
    let _ = writeln!(svg, "</svg>");
    svg
}

/// A blank chart with a centred message.
pub fn placeholder_svg(dimensions: &Dimensions, message: &str) -> String {
    let mut svg = String::new();
    open_svg(&mut svg, dimensions.width, dimensions.height);
    let _ = writeln!(
        svg,
        "  <text x=\"{}\" y=\"{}\" fill=\"{}\" font-size=\"14\" text-anchor=\"middle\">{}</text>",
        format_number(dimensions.width / 2.0),
        format_number(dimensions.height / 2.0),
        MESSAGE_COLOR,
        escape(message)
    );
    let _ = writeln!(svg, "</svg>");
    svg
}

fn open_svg(svg: &mut String, width: f64, height: f64) {
    let (width, height) = (format_number(width), format_number(height));
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" role=\"img\">"
    );
    let _ = writeln!(
        svg,
        "  <rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND}\"/>"
    );
}

fn write_primitive(svg: &mut String, primitive: &Primitive, indent: &str) {
    match primitive {
        Primitive::Line { x1, y1, x2, y2, style, .. } => {
            let _ = writeln!(
                svg,
                "{indent}<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>",
                format_number(*x1),
                format_number(*y1),
                format_number(*x2),
                format_number(*y2),
                style_attributes(style)
            );
        }
        Primitive::Path { d, style, .. } => {
            let _ = writeln!(svg, "{indent}<path d=\"{d}\"{}/>", style_attributes(style));
        }
        Primitive::Circle { cx, cy, r, style, .. } => {
            let _ = writeln!(
                svg,
                "{indent}<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>",
                format_number(*cx),
                format_number(*cy),
                format_number(*r),
                style_attributes(style)
            );
        }
        Primitive::Rect { x, y, width, height, style, .. } => {
            let _ = writeln!(
                svg,
                "{indent}<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
                format_number(*x),
                format_number(*y),
                format_number(*width),
                format_number(*height),
                style_attributes(style)
            );
        }
        Primitive::Text { x, y, content, anchor, rotate, style, .. } => {
            let transform = rotate
                .map(|degrees| format!(" transform=\"rotate({})\"", format_number(degrees)))
                .unwrap_or_default();
            let _ = writeln!(
                svg,
                "{indent}<text x=\"{}\" y=\"{}\" text-anchor=\"{}\"{transform}{}>{}</text>",
                format_number(*x),
                format_number(*y),
                anchor.as_str(),
                style_attributes(style),
                escape(content)
            );
        }
    }
}

fn style_attributes(style: &Style) -> String {
    let mut attributes = String::new();
    match style.fill {
        Some(fill) => {
            let _ = write!(attributes, " fill=\"{fill}\"");
        }
        None => attributes.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = style.stroke {
        let _ = write!(
            attributes,
            " stroke=\"{stroke}\" stroke-width=\"{}\"",
            format_number(style.stroke_width)
        );
    }
    if let Some(dash) = style.dash {
        let _ = write!(attributes, " stroke-dasharray=\"{dash}\"");
    }
    if style.opacity < 1.0 {
        let _ = write!(attributes, " opacity=\"{}\"", format_number(style.opacity));
    }
    if let Some(size) = style.font_size {
        let _ = write!(attributes, " font-size=\"{}\"", format_number(size));
    }
    attributes
}

/// Escapes text for use in SVG content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChartError;
    use crate::layout::ChartConfig;
    use crate::testing::sample_response;
    use crate::timeline::derive;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn test_render_ready_view() {
        let config = ChartConfig::default();
        let view = derive(&sample_response(6), &config);
        let svg = render_view(&view, &config.dimensions);

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"420\""));
        assert!(svg.contains("<clipPath id=\"forecast-timeline-clip\">"));
        assert!(svg.contains("<g clip-path=\"url(#forecast-timeline-clip)\">"));
        assert!(svg.contains("stroke-dasharray=\"6,4\""));
        assert!(svg.contains("<circle cx=\"680\""));
        assert!(svg.contains(">Architecture Health</text>"));
        assert!(svg.contains(">Forecast</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_series_are_inside_the_clip_group() {
        let config = ChartConfig::default();
        let view = derive(&sample_response(3), &config);
        let svg = render_view(&view, &config.dimensions);

        let clip_start = svg.find("clip-path=").unwrap();
        let marker = svg.find("<circle").unwrap();
        let title = svg.find("Snapshots").unwrap();
        assert!(marker > clip_start);
        assert!(title < clip_start);
    }

    #[test]
    fn test_placeholder_for_invalid_view() {
        let view = TimelineView::Invalid(ChartError::MissingField("rmse"));
        let svg = render_view(&view, &Dimensions::default());
        assert!(svg.contains("Forecast unavailable: Forecast field `rmse` is missing"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_placeholder_for_empty_view() {
        let svg = render_view(&TimelineView::Empty, &Dimensions::new(400.0, 200.0));
        assert!(svg.contains("x=\"200\" y=\"100\""));
        assert!(svg.contains("No forecast history available yet."));
    }
}
