//! Sentiment distribution pie chart
//!
//! Fetched once on mount, drawn on a canvas with the legend on the right.
//! Hovering a legend entry shows the "label: value%" tooltip.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::fetch_data;
use crate::state::chart_layout::{pie_color, pie_tooltip, slice_angles};
use crate::state::PieSeries;

const ENDPOINT: &str = "performance-geral";

#[component]
pub fn PieChart() -> impl IntoView {
    let data = create_rw_signal(None::<PieSeries>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        spawn_local(async move {
            if let Some(series) = fetch_data::<PieSeries>(ENDPOINT).await {
                data.set(Some(series));
            }
        });
    });

    create_effect(move |_| {
        if let (Some(series), Some(canvas)) = (data.get(), canvas_ref.get()) {
            draw_pie(&canvas, &series);
        }
    });

    move || {
        data.get().map(|series| {
            let legend = series
                .labels
                .iter()
                .zip(series.values.iter())
                .enumerate()
                .map(|(index, (label, value))| {
                    view! {
                        <li class="flex items-center space-x-2" title=pie_tooltip(label, *value)>
                            <span
                                class="inline-block w-[10px] h-[10px]"
                                style=format!("background-color: {}", pie_color(index))
                            />
                            <span class="text-[11px] text-gray-600">{label.clone()}</span>
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class="bg-white rounded-lg shadow p-4 flex items-center">
                    <canvas node_ref=canvas_ref width="260" height="260" class="flex-1 max-w-xs" />
                    <ul class="ml-4 space-y-1">{legend}</ul>
                </div>
            }
        })
    }
}

fn draw_pie(canvas: &HtmlCanvasElement, series: &PieSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 4.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    let count = series.labels.len().min(series.values.len());
    for (index, (start, end)) in slice_angles(&series.values[..count]).into_iter().enumerate() {
        ctx.set_fill_style(&pie_color(index).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style(&"#ffffff".into());
        ctx.set_line_width(1.0);
        ctx.stroke();
    }
}
