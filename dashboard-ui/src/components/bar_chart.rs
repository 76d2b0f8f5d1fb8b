//! Monthly sentiment evolution bar chart
//!
//! Fetched once on mount. Grouped bars (not stacked), y-axis fixed at 0..8 in
//! steps of 2, legend below.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::fetch_data;
use crate::state::chart_layout::{bar_height, y_ticks, BarLayout, GRID_COLOR, Y_MAX};
use crate::state::BarSeries;

const ENDPOINT: &str = "evolucao-mensal";

#[component]
pub fn BarChart() -> impl IntoView {
    let data = create_rw_signal(None::<BarSeries>);
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        spawn_local(async move {
            if let Some(series) = fetch_data::<BarSeries>(ENDPOINT).await {
                data.set(Some(series));
            }
        });
    });

    create_effect(move |_| {
        if let (Some(series), Some(canvas)) = (data.get(), canvas_ref.get()) {
            draw_bars(&canvas, &series);
        }
    });

    move || {
        data.get().map(|series| {
            let legend = series
                .datasets()
                .iter()
                .map(|(label, color, _)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <span
                                class="inline-block w-3 h-3 rounded-sm"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-xs text-gray-600">{*label}</span>
                        </div>
                    }
                })
                .collect_view();

            view! {
                <div class="bg-white rounded-lg shadow p-4">
                    <canvas node_ref=canvas_ref width="720" height="300" class="w-full" />
                    <div class="flex justify-center gap-4 mt-3">{legend}</div>
                </div>
            }
        })
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, series: &BarSeries) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 30.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 30.0;

    let plot_width = width - margin_left - margin_right;
    let plot_height = height - margin_top - margin_bottom;
    let baseline = margin_top + plot_height;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Horizontal grid lines with y labels
    ctx.set_font("11px sans-serif");
    for tick in y_ticks() {
        let y = baseline - tick / Y_MAX * plot_height;
        ctx.set_stroke_style(&GRID_COLOR.into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#6b7280".into());
        let _ = ctx.fill_text(&format!("{}", tick), 8.0, y + 4.0);
    }

    let datasets = series.datasets();
    let groups = datasets
        .iter()
        .map(|(_, _, values)| values.len())
        .fold(series.months.len(), usize::min);
    let layout = BarLayout {
        plot_width,
        groups,
        series: datasets.len(),
    };

    for (series_index, (_, color, values)) in datasets.iter().enumerate() {
        ctx.set_fill_style(&(*color).into());
        for (group, value) in values.iter().take(groups).enumerate() {
            let bar = bar_height(*value, plot_height);
            ctx.fill_rect(
                margin_left + layout.bar_x(group, series_index),
                baseline - bar,
                layout.bar_width(),
                bar,
            );
        }
    }

    // Month labels
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_text_align("center");
    for (group, month) in series.months.iter().take(groups).enumerate() {
        let label: String = month.chars().take(3).collect();
        let _ = ctx.fill_text(&label, margin_left + layout.slot_center(group), height - 10.0);
    }
    ctx.set_text_align("start");
}
