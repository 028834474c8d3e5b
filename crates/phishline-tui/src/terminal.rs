//! Keeps a panic from leaving the terminal in raw mode.

use std::cell::Cell;

thread_local! {
    static HOOK_SUPPRESSED: Cell<bool> = const { Cell::new(false) };
}

/// Chain a hook ahead of the default one that drops out of the alternate
/// screen before the panic prints, so the message is actually readable.
///
/// Panics caught by [`crate::render::render_with_fallback`] must not tear
/// down the terminal, so the hook is a no-op while suppressed.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if HOOK_SUPPRESSED.with(|suppressed| suppressed.get()) {
            return;
        }
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Run a closure with the panic hook suppressed on this thread
///
/// The closure is expected to contain the unwind itself (`catch_unwind`);
/// the flag is cleared once it returns.
pub fn with_suppressed_panic_hook<T>(f: impl FnOnce() -> T) -> T {
    HOOK_SUPPRESSED.with(|suppressed| suppressed.set(true));
    let result = f();
    HOOK_SUPPRESSED.with(|suppressed| suppressed.set(false));
    result
}
