#[derive(Debug, PartialEq, Clone, Copy)]
pub enum StackState {
    Browsing, // Cards on the stack, navigation and auto-advance active
    Lightbox, // Center card enlarged, navigation ignored, auto-advance held
}

/// How a click on a side card navigates.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ClickMode {
    Jump, // Go straight to the clicked card (gallery)
    Step, // One step toward the clicked side (awards)
}
