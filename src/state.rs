#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RevealState {
    Hidden,   // Not on screen
    Entering, // Fading and sliding into place
    Shown,    // Fully visible and at rest
}
