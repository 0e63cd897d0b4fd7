//! Global unauthorized-response handler
//!
//! The transport layer does not own session state or navigation. Instead,
//! every 401 response fires the handler registered here, exactly once per
//! response, before the error propagates to the caller. The application's
//! session layer registers a handler that tears the session down and
//! redirects to its login entry point.

use std::cell::RefCell;

thread_local! {
    static UNAUTHORIZED_HANDLER: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register the handler invoked on every 401 response.
///
/// Replaces any previously registered handler.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    UNAUTHORIZED_HANDLER.with(|cell| {
        *cell.borrow_mut() = Some(Box::new(handler));
    });
}

/// Remove the registered handler, if any.
pub fn clear_unauthorized_handler() {
    UNAUTHORIZED_HANDLER.with(|cell| {
        *cell.borrow_mut() = None;
    });
}

/// Fire the registered handler. No-op when none is registered.
pub(crate) fn notify_unauthorized() {
    UNAUTHORIZED_HANDLER.with(|cell| {
        if let Some(handler) = cell.borrow().as_ref() {
            handler();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn handler_fires_and_can_be_cleared() {
        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        set_unauthorized_handler(move || counter.set(counter.get() + 1));

        notify_unauthorized();
        assert_eq!(fired.get(), 1);

        clear_unauthorized_handler();
        notify_unauthorized();
        assert_eq!(fired.get(), 1);
    }
}
