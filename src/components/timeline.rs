use leptos::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};
use pagelens_core::chart::ChartFrame;
use pagelens_core::{Axis, DragEffect, DragMachine, PointerInput};
use crate::canvas::timeline_surface::CanvasSurface;
use crate::state::AppState;

fn paint(canvas: &HtmlCanvasElement, frame: &ChartFrame) {
    let Some(mut surface) = CanvasSurface::new(canvas) else {
        log::error!("Timeline canvas has no 2d context");
        return;
    };
    frame.render(&mut surface);
}

/// Relevance timeline. Authoritative repaints come from `state.chart`; while
/// a drag is in progress the pointer handlers repaint the preview marker
/// directly and only hand the final index to the controller.
#[component]
pub fn Timeline() -> impl IntoView {
    let state = expect_context::<AppState>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let drag = RwSignal::new(DragMachine::new());
    let hover_text = RwSignal::new(String::new());

    Effect::new(move || {
        let frame = state.chart.get();
        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        paint(canvas, &frame);
    });

    // Pointer x relative to the canvas box, and the axis in CSS pixels.
    let locate = move |ev: &MouseEvent| -> Option<(f64, Axis)> {
        let canvas_el = canvas_ref.get_untracked()?;
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        let samples = state.chart.with_untracked(|f| f.samples());
        if samples == 0 {
            return None;
        }
        let rect = canvas.get_bounding_client_rect();
        Some((ev.client_x() as f64 - rect.left(), Axis::new(samples, rect.width())))
    };

    let step = move |input: PointerInput, axis: Axis| {
        let mut machine = drag.get_untracked();
        let effect = machine.handle(input, &axis);
        drag.set(machine);

        match effect {
            DragEffect::None => {}
            DragEffect::Preview(i) => {
                let Some(canvas_el) = canvas_ref.get_untracked() else { return };
                let canvas: &HtmlCanvasElement = canvas_el.as_ref();
                let frame = state.chart.with_untracked(|f| f.with_marker(i));
                paint(canvas, &frame);
            }
            DragEffect::Commit(i) => state.controller().seek_index(i),
        }
    };

    let on_mousedown = move |ev: MouseEvent| {
        ev.prevent_default();
        let Some((x, axis)) = locate(&ev) else { return };
        step(PointerInput::Press(x), axis);
    };

    let on_mousemove = move |ev: MouseEvent| {
        let Some((x, axis)) = locate(&ev) else { return };
        let text = state.chart.with_untracked(|f| f.inspect(x, axis.width));
        hover_text.set(text.unwrap_or_default());
        step(PointerInput::Move(x), axis);
    };

    let on_mouseup = move |ev: MouseEvent| {
        let Some((x, axis)) = locate(&ev) else { return };
        step(PointerInput::Release(x), axis);
    };

    let on_mouseleave = move |ev: MouseEvent| {
        let Some((_, axis)) = locate(&ev) else { return };
        step(PointerInput::Leave, axis);
    };

    view! {
        <div class="timeline-container">
            <canvas
                node_ref=canvas_ref
                width=state.timeline_width.to_string()
                height=state.timeline_height.to_string()
                title=move || hover_text.get()
                on:mousedown=on_mousedown
                on:mousemove=on_mousemove
                on:mouseup=on_mouseup
                on:mouseleave=on_mouseleave
                style="cursor: crosshair; width: 100%;"
            />
        </div>
    }
}
