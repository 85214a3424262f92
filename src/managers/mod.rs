// Zync managers
// Own long-lived UI state.

pub mod window_shell;
