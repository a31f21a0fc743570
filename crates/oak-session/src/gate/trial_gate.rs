use crate::{
    AgentKind, AutoConfirmOutcome, DenyReason, GatePreview, GateState, SessionManager, TrialCount,
};

use std::future::Future;
use std::time::Duration;

use log::{info, warn};

const TICK: Duration = Duration::from_secs(1);

/// Check-then-consume guard in front of a gated demo.
///
/// One gate per demo attempt, owned by the caller that shows the
/// confirmation. `confirm` takes `&mut self`, so a single gate can never have
/// two consumption requests in flight.
///
/// - Admins are granted without spending a trial (optionally with an audit
///   call whose failure is ignored).
/// - Non-admins with no trials left are denied without a network call.
/// - Otherwise one trial is consumed; the server's refusal message is passed
///   through verbatim.
///
/// A granted gate stays granted. A denied gate starts over on the next
/// `confirm`.
#[derive(Debug, Clone)]
pub struct TrialGate {
    agent: AgentKind,
    audit_admin_usage: bool,
    state: GateState,
}

impl TrialGate {
    pub fn new(agent: AgentKind) -> Self {
        Self {
            agent,
            audit_admin_usage: false,
            state: GateState::Idle,
        }
    }

    /// Also record admin usage on the server.
    pub fn with_admin_audit(mut self, enabled: bool) -> Self {
        self.audit_admin_usage = enabled;
        self
    }

    pub fn agent(&self) -> &AgentKind {
        &self.agent
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn is_granted(&self) -> bool {
        self.state.is_granted()
    }

    /// Back to Idle, unless already granted.
    pub fn reset(&mut self) {
        if !self.state.is_granted() {
            self.state = GateState::Idle;
        }
    }

    /// What the confirmation prompt should show, from the cached profile.
    pub async fn preview(&self, session: &SessionManager) -> GatePreview {
        if !session.is_authenticated().await {
            return GatePreview::NotAuthenticated;
        }

        match session.current_user().await {
            Some(user) if user.is_admin => GatePreview::Admin,
            Some(user) => match user.trial_count {
                TrialCount::Limited(0) => GatePreview::Exhausted,
                TrialCount::Limited(n) => GatePreview::Available {
                    remaining: n,
                    after: n.saturating_sub(1),
                },
                TrialCount::Unlimited => GatePreview::UnlimitedTrials,
            },
            None => GatePreview::ProfileUnavailable,
        }
    }

    /// Run the gate after explicit user confirmation.
    pub async fn confirm(&mut self, session: &SessionManager) -> &GateState {
        if self.state.is_granted() {
            return &self.state;
        }

        self.state = GateState::Checking;
        self.state = self.check(session).await;

        match self.state {
            GateState::Granted { remaining } => {
                info!("Access to {} granted ({} remaining)", self.agent, remaining)
            }
            GateState::Denied { ref reason } => {
                info!("Access to {} denied: {}", self.agent, reason)
            }
            _ => {}
        }

        &self.state
    }

    /// Admin affordance: confirm automatically once `countdown` elapses.
    ///
    /// `on_tick` receives the whole seconds still to wait, once per second.
    /// If `cancel` completes first the gate stays Idle. The admin check is
    /// repeated once the countdown ends: if the account is no longer an admin
    /// nothing is confirmed and the gate stays Idle.
    pub async fn auto_confirm_admin<C, T>(
        &mut self,
        session: &SessionManager,
        countdown: Duration,
        cancel: C,
        mut on_tick: T,
    ) -> AutoConfirmOutcome
    where
        C: Future<Output = ()>,
        T: FnMut(u64),
    {
        if !Self::is_admin(session).await {
            return AutoConfirmOutcome::NotAdmin;
        }

        tokio::pin!(cancel);

        let mut remaining = countdown.as_secs();
        while remaining > 0 {
            on_tick(remaining);
            tokio::select! {
                _ = &mut cancel => {
                    info!("Admin auto-start of {} cancelled", self.agent);
                    self.reset();
                    return AutoConfirmOutcome::Cancelled;
                }
                _ = tokio::time::sleep(TICK) => {}
            }
            remaining -= 1;
        }

        if !Self::is_admin(session).await {
            info!("Session changed during admin auto-start of {}", self.agent);
            self.reset();
            return AutoConfirmOutcome::NotAdmin;
        }

        if self.confirm(session).await.is_granted() {
            AutoConfirmOutcome::Confirmed
        } else {
            AutoConfirmOutcome::Denied
        }
    }

    async fn is_admin(session: &SessionManager) -> bool {
        session
            .current_user()
            .await
            .is_some_and(|user| user.is_admin)
    }

    async fn check(&self, session: &SessionManager) -> GateState {
        if !session.is_authenticated().await {
            return GateState::Denied {
                reason: DenyReason::NotAuthenticated,
            };
        }

        let user = match session.current_user().await {
            Some(user) => user,
            None => {
                let refreshed = session.refresh_profile().await;
                match refreshed.user {
                    Some(user) if refreshed.success => user,
                    _ => {
                        return GateState::Denied {
                            reason: DenyReason::Rejected(refreshed.message),
                        };
                    }
                }
            }
        };

        if user.is_admin {
            if self.audit_admin_usage {
                let audit = session.consume_trial(&self.agent).await;
                if !audit.success {
                    warn!("Admin usage audit failed: {}", audit.message);
                }
            }
            return GateState::Granted {
                remaining: TrialCount::Unlimited,
            };
        }

        if user.trial_count.is_exhausted() {
            return GateState::Denied {
                reason: DenyReason::NoTrialsRemaining,
            };
        }

        let result = session.consume_trial(&self.agent).await;
        if result.success {
            GateState::Granted {
                remaining: result
                    .remaining_trials
                    .unwrap_or_else(|| user.trial_count.after_one_use()),
            }
        } else {
            GateState::Denied {
                reason: DenyReason::Rejected(result.message),
            }
        }
    }
}
