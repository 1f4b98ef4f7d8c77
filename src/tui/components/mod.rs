// Components module - reusable UI building blocks
//
// Every frame renders the same shell:
// - Title bar: app name, in-flight spinner, classifier target
// - Input panel: text area with live character counter
// - Result panel: idle backdrop, loading, ranked emotions or error
// - Logs panel: captured tracing output (toggled with F2)
// - Status bar: key hints and current state
// - Toast: transient overlay, bottom-right

pub mod input_panel;
pub mod logs_panel;
pub mod result_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
