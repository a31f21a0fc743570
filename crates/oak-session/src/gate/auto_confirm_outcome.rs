/// How an admin auto-confirm countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoConfirmOutcome {
    /// Countdown elapsed and the gate granted access
    Confirmed,
    /// Countdown elapsed but the gate denied access
    Denied,
    /// Cancel signal fired first; the gate is back at Idle
    Cancelled,
    /// Account is not an admin, or stopped being one during the countdown;
    /// the gate is left at Idle
    NotAdmin,
}
