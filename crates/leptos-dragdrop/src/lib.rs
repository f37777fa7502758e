//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop reordering for flat Leptos lists using mouse
//! events. Uses a movement threshold to distinguish click from drag,
//! and resolves the drop target with a closest-row rule while the
//! pointer moves.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Attribute every draggable row must carry; its value is the row id.
pub const DRAG_ID_ATTR: &str = "data-drag-id";

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub drop_target_read: ReadSignal<Option<String>>,
    pub drop_target_write: WriteSignal<Option<String>>,
    /// Pending row id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (drop_target_read, drop_target_write) = signal(None::<String>);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for a drag handle.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, row_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(row_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Horizontal/vertical extent of one draggable row.
struct RowBand {
    id: String,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

/// Closest-row rule: among the given rows (minus the dragged one), pick
/// the one whose vertical center is nearest the pointer. A row only
/// attracts the pointer within its own horizontal extent and within one
/// row height of its center; outside every row's reach there is no
/// target, so releasing there abandons the gesture.
fn nearest_band(bands: &[RowBand], x: f64, y: f64, exclude: &str) -> Option<String> {
    let mut best: Option<(f64, &RowBand)> = None;
    for band in bands.iter().filter(|b| b.id != exclude) {
        if x < band.left || x > band.right {
            continue;
        }
        let center = (band.top + band.bottom) / 2.0;
        let dist = (y - center).abs();
        if dist > (band.bottom - band.top).max(1.0) {
            continue;
        }
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, band));
        }
    }
    best.map(|(_, b)| b.id.clone())
}

/// Collect the current row bands from the document.
fn collect_bands(doc: &web_sys::Document) -> Vec<RowBand> {
    let mut bands = Vec::new();
    let Ok(rows) = doc.query_selector_all(&format!("[{}]", DRAG_ID_ATTR)) else {
        return bands;
    };
    for i in 0..rows.length() {
        let Some(node) = rows.item(i) else { continue };
        let Some(el) = node.dyn_ref::<web_sys::Element>() else { continue };
        let Some(id) = el.get_attribute(DRAG_ID_ATTR) else { continue };
        let rect = el.get_bounding_client_rect();
        bands.push(RowBand {
            id,
            left: rect.left(),
            right: rect.right(),
            top: rect.top(),
            bottom: rect.bottom(),
        });
    }
    bands
}

/// Create mousemove handler for the document - starts the drag once the
/// pointer moved past the threshold, then tracks the closest drop row.
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let start_x = dnd.start_x_read.get_untracked();
            let start_y = dnd.start_y_read.get_untracked();
            let dx = (ev.client_x() - start_x).abs();
            let dy = (ev.client_y() - start_y).abs();

            // Start dragging if moved beyond threshold
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
            }
        }

        // While dragging, resolve the drop target from the pointer
        if let Some(dragging) = dnd.dragging_id_read.get_untracked() {
            let target = web_sys::window()
                .and_then(|win| win.document())
                .and_then(|doc| {
                    let bands = collect_bands(&doc);
                    nearest_band(&bands, ev.client_x() as f64, ev.client_y() as f64, &dragging)
                });
            if dnd.drop_target_read.get_untracked() != target {
                dnd.drop_target_write.set(target);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(String, String) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        // Clear pending state first
        dnd.pending_id_write.set(None);

        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            end_drag(&dnd);
            if dragged != target {
                on_drop(dragged, target);
            }
        } else {
            // Not dragging, or released outside any row - no state change
            end_drag(&dnd);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str, top: f64) -> RowBand {
        RowBand {
            id: id.to_string(),
            left: 100.0,
            right: 500.0,
            top,
            bottom: top + 40.0,
        }
    }

    fn rows() -> Vec<RowBand> {
        vec![band("a", 0.0), band("b", 40.0), band("c", 80.0)]
    }

    #[test]
    fn picks_row_under_pointer() {
        let bands = rows();
        assert_eq!(nearest_band(&bands, 200.0, 60.0, "a"), Some("b".to_string()));
    }

    #[test]
    fn excludes_dragged_row() {
        let bands = rows();
        // Pointer dead center on "b", but "b" is being dragged
        assert_eq!(nearest_band(&bands, 200.0, 60.0, "b"), Some("a".to_string()));
    }

    #[test]
    fn no_target_outside_horizontal_extent() {
        let bands = rows();
        assert_eq!(nearest_band(&bands, 700.0, 60.0, "a"), None);
    }

    #[test]
    fn no_target_far_below_list() {
        let bands = rows();
        assert_eq!(nearest_band(&bands, 200.0, 400.0, "a"), None);
    }

    #[test]
    fn pointer_between_rows_prefers_nearest_center() {
        let bands = rows();
        // y = 41: 19 from b's center (60), 21 from a's center (20)
        assert_eq!(nearest_band(&bands, 200.0, 41.0, "c"), Some("b".to_string()));
    }

    #[test]
    fn no_rows_no_target() {
        assert_eq!(nearest_band(&[], 200.0, 60.0, "a"), None);
    }
}
