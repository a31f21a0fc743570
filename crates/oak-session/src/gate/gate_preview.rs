use serde::Serialize;

/// What a confirmation prompt should tell the user before they commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GatePreview {
    NotAuthenticated,
    /// Unlimited access, no trial is spent
    Admin,
    Available { remaining: u32, after: u32 },
    /// Regular account without a trial limit; still asks before consuming
    UnlimitedTrials,
    Exhausted,
    /// Signed in but no profile cached yet; the server decides on confirm
    ProfileUnavailable,
}
