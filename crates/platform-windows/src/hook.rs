//! `WH_MOUSE_LL` registration and the hook procedure.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use scrollguard_common::clock::HookClock;
use scrollguard_common::error::{ScrollguardError, ScrollguardResult};
use scrollguard_filter_core::{Decision, Direction, FilterEngine, WheelEvent};

use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, SetWindowsHookExW, TranslateMessage,
    UnhookWindowsHookEx, HC_ACTION, HHOOK, MSG, MSLLHOOKSTRUCT, WH_MOUSE_LL, WM_MOUSEWHEEL,
};

use crate::foreground;

struct HookShared {
    engine: Arc<FilterEngine>,
    clock: HookClock,
}

// The hook procedure is a bare extern "system" function; it reaches the
// engine through this cell. Set once per process, before installation.
static SHARED: OnceCell<HookShared> = OnceCell::new();

/// Install the hook and pump messages until `WM_QUIT`.
pub fn run(engine: Arc<FilterEngine>) -> ScrollguardResult<()> {
    let clock = HookClock::start();
    let epoch_wall = clock.epoch_wall().to_string();

    SHARED
        .set(HookShared { engine, clock })
        .map_err(|_| ScrollguardError::hook("mouse hook already installed in this process"))?;

    unsafe {
        let module = GetModuleHandleW(None)
            .map_err(|e| ScrollguardError::hook(format!("GetModuleHandleW failed: {e}")))?;

        let hook = SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), module, 0)
            .map_err(|e| ScrollguardError::hook(format!("SetWindowsHookExW failed: {e}")))?;

        tracing::info!(epoch_wall, "Low-level mouse hook installed");

        // Dedicated message-retrieval loop; the hook stays registered for
        // as long as this thread keeps pumping.
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        let _ = UnhookWindowsHookEx(hook);
        tracing::info!("Low-level mouse hook removed");
    }

    Ok(())
}

/// High word of `mouseData` is the signed wheel delta.
fn wheel_delta(mouse_data: u32) -> i32 {
    ((mouse_data >> 16) & 0xffff) as u16 as i16 as i32
}

unsafe extern "system" fn mouse_hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    // Unrecognized codes and non-wheel notifications pass through unchanged.
    if code == HC_ACTION as i32 && wparam.0 as u32 == WM_MOUSEWHEEL {
        if let Some(shared) = SHARED.get() {
            let data = *(lparam.0 as *const MSLLHOOKSTRUCT);

            // A zero delta carries no direction; fail open.
            if let Some(direction) = Direction::from_delta(wheel_delta(data.mouseData)) {
                let event = WheelEvent {
                    timestamp_ns: shared.clock.elapsed_ns(),
                    direction,
                    process: foreground::process_name(),
                };

                if shared.engine.classify(&event) == Decision::Suppress {
                    return LRESULT(1);
                }
            }
        }
    }

    CallNextHookEx(HHOOK::default(), code, wparam, lparam)
}
