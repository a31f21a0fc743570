pub(crate) mod auto_confirm_outcome;
pub(crate) mod deny_reason;
pub(crate) mod gate_preview;
pub(crate) mod gate_state;
pub(crate) mod trial_gate;

pub use auto_confirm_outcome::AutoConfirmOutcome;
pub use deny_reason::DenyReason;
pub use gate_preview::GatePreview;
pub use gate_state::GateState;
pub use trial_gate::TrialGate;
