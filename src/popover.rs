//! Popover shell
//!
//! The selector never positions or mounts anything itself; it only reads
//! and writes the open flag through [`PopoverShell`].

use std::fmt;

/// Open/closed state owned by whatever hosts the selector columns
pub trait PopoverShell {
    fn is_open(&self) -> bool;
    fn set_open(&mut self, open: bool);

    /// Whether content should be built even while closed
    fn is_mounted(&self) -> bool {
        self.is_open()
    }
}

/// Listener for open-state transitions
pub type OpenChangeListener = Box<dyn FnMut(bool)>;

/// In-memory popover used by the terminal widget
#[derive(Default)]
pub struct Popover {
    open: bool,
    force_mount: bool,
    on_open_change: Option<OpenChangeListener>,
}

impl fmt::Debug for Popover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Popover")
            .field("open", &self.open)
            .field("force_mount", &self.force_mount)
            .finish_non_exhaustive()
    }
}

impl Popover {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep content mounted while closed
    pub fn with_force_mount(mut self) -> Self {
        self.force_mount = true;
        self
    }

    pub fn on_open_change(mut self, listener: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(listener));
        self
    }

    pub fn toggle(&mut self) {
        let open = !self.open;
        self.set_open(open);
    }
}

impl PopoverShell for Popover {
    fn is_open(&self) -> bool {
        self.open
    }

    fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        tracing::trace!(open, "popover state changed");
        if let Some(listener) = self.on_open_change.as_mut() {
            listener(open);
        }
    }

    fn is_mounted(&self) -> bool {
        self.open || self.force_mount
    }
}
