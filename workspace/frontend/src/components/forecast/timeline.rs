use std::rc::Rc;

use chart::curve::format_number;
use chart::hover::{client_to_plot_x, tooltip_position, HoverEvent, HoverState};
use chart::scene::{Primitive, Style, FOCUS_COLOR, FOCUS_RADIUS};
use chart::{TimelineModel, TimelineView};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForecastTimelineChartProps {
    pub view: Rc<TimelineView>,
}

/// Hover overlay state. `last_index` survives a pointer leave so the hidden
/// marker keeps its place.
#[derive(Clone, Debug, Default, PartialEq)]
struct Overlay {
    state: HoverState,
    last_index: Option<usize>,
    tooltip: (f64, f64),
}

enum OverlayAction {
    Move { index: Option<usize>, tooltip: (f64, f64) },
    Leave,
    Reset,
}

impl Reducible for Overlay {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            OverlayAction::Move { index: None, .. } => self,
            OverlayAction::Move { index: Some(index), tooltip } => Rc::new(Overlay {
                state: self.state.next(HoverEvent::PointerMove(Some(index))),
                last_index: Some(index),
                tooltip,
            }),
            OverlayAction::Leave => Rc::new(Overlay {
                state: self.state.next(HoverEvent::PointerLeave),
                ..(*self).clone()
            }),
            OverlayAction::Reset => Rc::new(Overlay::default()),
        }
    }
}

/// Pointer position over the chart: resolved series index and tooltip anchor.
fn pointer_target(
    event: &MouseEvent,
    model: &TimelineModel,
    svg: &Element,
    container: &Element,
) -> (Option<usize>, (f64, f64)) {
    let scene = model.scene();
    let (client_x, client_y) = (event.client_x() as f64, event.client_y() as f64);

    let svg_rect = svg.get_bounding_client_rect();
    let plot_x = client_to_plot_x(
        client_x,
        svg_rect.left(),
        svg_rect.width(),
        scene.width,
        scene.margins.left,
    );

    let container_rect = container.get_bounding_client_rect();
    let tooltip = tooltip_position(client_x - container_rect.left(), client_y - container_rect.top());

    (model.resolve_index(plot_x), tooltip)
}

#[function_component(ForecastTimelineChart)]
pub fn forecast_timeline_chart(props: &ForecastTimelineChartProps) -> Html {
    let container_ref = use_node_ref();
    let svg_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let overlay = use_reducer(Overlay::default);

    // Listeners belong to the current view: dropping them on change or unmount
    // detaches them before the next ones are attached.
    {
        let dispatcher = overlay.dispatcher();
        let container_ref = container_ref.clone();
        let svg_ref = svg_ref.clone();
        let overlay_ref = overlay_ref.clone();

        use_effect_with(props.view.clone(), move |view| {
            dispatcher.dispatch(OverlayAction::Reset);

            let listeners = overlay_ref
                .cast::<Element>()
                .filter(|_| view.is_ready())
                .map(|target| {
                    log::debug!("Attaching forecast chart hover listeners");
                    let on_move = {
                        let view = view.clone();
                        let dispatcher = dispatcher.clone();
                        EventListener::new(&target, "mousemove", move |event| {
                            let (Some(model), Some(event)) = (view.model(), event.dyn_ref::<MouseEvent>())
                            else {
                                return;
                            };
                            let (Some(svg), Some(container)) =
                                (svg_ref.cast::<Element>(), container_ref.cast::<Element>())
                            else {
                                return;
                            };
                            let (index, tooltip) = pointer_target(event, model, &svg, &container);
                            dispatcher.dispatch(OverlayAction::Move { index, tooltip });
                        })
                    };
                    let on_leave = EventListener::new(&target, "mouseleave", move |_| {
                        dispatcher.dispatch(OverlayAction::Leave);
                    });
                    (on_move, on_leave)
                });

            move || {
                if listeners.is_some() {
                    log::trace!("Releasing forecast chart hover listeners");
                }
                drop(listeners);
            }
        });
    }

    let Some(model) = props.view.model() else {
        return html! {};
    };
    let scene = model.scene();
    let visible = overlay.state.is_visible();
    let focus = overlay.last_index.and_then(|index| model.focus(index));

    let view_box = format!("0 0 {} {}", format_number(scene.width), format_number(scene.height));
    let aspect = format!("aspect-ratio: {} / {};", format_number(scene.width), format_number(scene.height));
    let translate = format!(
        "translate({},{})",
        format_number(scene.margins.left),
        format_number(scene.margins.top)
    );
    let clip_url = format!("url(#{})", scene.clip_id);
    let inner_width = format_number(scene.inner_width);
    let inner_height = format_number(scene.inner_height);

    let (focus_x, focus_y) = focus.as_ref().map(|f| (f.x, f.y)).unwrap_or_default();
    let tooltip_style = format!(
        "left: {}px; top: {}px; opacity: {};",
        format_number(overlay.tooltip.0),
        format_number(overlay.tooltip.1),
        if visible { 1 } else { 0 }
    );

    html! {
        <div ref={container_ref} class="relative w-full">
            <svg ref={svg_ref} class="w-full h-auto" style={aspect} viewBox={view_box} role="img">
                <defs>
                    <clipPath id={scene.clip_id.clone()}>
                        <rect width={inner_width.clone()} height={inner_height.clone()} />
                    </clipPath>
                </defs>
                <g transform={translate}>
                    { for scene.axes.iter().map(primitive_html) }
                    <g clip-path={clip_url}>
                        { for scene.series.iter().map(primitive_html) }
                    </g>
                    <circle
                        cx={format_number(focus_x)}
                        cy={format_number(focus_y)}
                        r={format_number(FOCUS_RADIUS)}
                        fill={FOCUS_COLOR}
                        opacity={if visible { "1" } else { "0" }}
                        pointer-events="none"
                    />
                    <rect ref={overlay_ref} width={inner_width} height={inner_height} fill="transparent" />
                </g>
            </svg>
            <div
                class="absolute pointer-events-none rounded-xl border border-neutral-800 bg-neutral-950/95 px-4 py-3 text-xs text-white shadow-2xl transition-opacity"
                style={tooltip_style}
            >
                {
                    if let Some(focus) = focus {
                        html! {
                            <>
                                <div class="font-semibold mb-1.5">{&focus.tooltip.label}</div>
                                <div>{"Health: "}<strong>{focus.tooltip.health_display()}</strong></div>
                                <div>{"Stability: "}{focus.tooltip.stability_display()}</div>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

/// SVG presentation attributes of a primitive.
struct Paint {
    fill: &'static str,
    stroke: Option<&'static str>,
    stroke_width: Option<String>,
    dash: Option<&'static str>,
    opacity: Option<String>,
    font_size: Option<String>,
}

impl From<&Style> for Paint {
    fn from(style: &Style) -> Self {
        Self {
            fill: style.fill.unwrap_or("none"),
            stroke: style.stroke,
            stroke_width: style.stroke.map(|_| format_number(style.stroke_width)),
            dash: style.dash,
            opacity: (style.opacity < 1.0).then(|| format_number(style.opacity)),
            font_size: style.font_size.map(format_number),
        }
    }
}

fn primitive_html(primitive: &Primitive) -> Html {
    match primitive {
        Primitive::Line { x1, y1, x2, y2, style, .. } => {
            let paint = Paint::from(style);
            html! {
                <line
                    x1={format_number(*x1)}
                    y1={format_number(*y1)}
                    x2={format_number(*x2)}
                    y2={format_number(*y2)}
                    stroke={paint.stroke}
                    stroke-width={paint.stroke_width}
                    opacity={paint.opacity}
                />
            }
        }
        Primitive::Path { d, style, .. } => {
            let paint = Paint::from(style);
            html! {
                <path
                    d={d.clone()}
                    fill={paint.fill}
                    stroke={paint.stroke}
                    stroke-width={paint.stroke_width}
                    stroke-dasharray={paint.dash}
                    opacity={paint.opacity}
                />
            }
        }
        Primitive::Circle { cx, cy, r, style, .. } => {
            let paint = Paint::from(style);
            html! {
                <circle
                    cx={format_number(*cx)}
                    cy={format_number(*cy)}
                    r={format_number(*r)}
                    fill={paint.fill}
                    stroke={paint.stroke}
                    stroke-width={paint.stroke_width}
                />
            }
        }
        Primitive::Rect { x, y, width, height, style, .. } => {
            let paint = Paint::from(style);
            html! {
                <rect
                    x={format_number(*x)}
                    y={format_number(*y)}
                    width={format_number(*width)}
                    height={format_number(*height)}
                    fill={paint.fill}
                    opacity={paint.opacity}
                />
            }
        }
        Primitive::Text { x, y, content, anchor, rotate, style, .. } => {
            let paint = Paint::from(style);
            let transform = rotate.map(|degrees| format!("rotate({})", format_number(degrees)));
            html! {
                <text
                    x={format_number(*x)}
                    y={format_number(*y)}
                    text-anchor={anchor.as_str()}
                    transform={transform}
                    fill={paint.fill}
                    font-size={paint.font_size}
                >
                    {content.clone()}
                </text>
            }
        }
    }
}
