//! Control events from the host's button scanner.

/// Discrete operator actions routed into the focuser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    /// Store the current position as the seek mark.
    MarkRequested,
    /// Plan and start a seek to the stored mark.
    SeekRequested,
    /// Switch to the opposite drive resolution.
    ModeToggleRequested,
}
