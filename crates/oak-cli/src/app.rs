use crate::validation::{check_login, check_password_change, check_registration};
use crate::{
    AdminCommands, CliError, CliResult, Commands, Outcome, PasswordCommands, TrialCommands,
};

use oak_config::{DemosConfig, GateConfig};
use oak_session::{
    AgentKind, AutoConfirmOutcome, GatePreview, GateState, NOT_AUTHENTICATED_MESSAGE,
    SessionManager, TrialGate,
};

use std::io::{BufRead, Write};

use log::warn;
use serde_json::json;

/// Runs one parsed command against the session.
///
/// Prompts and countdown ticks go to stderr; the returned [`Outcome`] is what
/// the binary prints on stdout.
pub struct App {
    session: SessionManager,
    gate: GateConfig,
    demos: DemosConfig,
}

impl App {
    pub fn new(session: SessionManager, gate: GateConfig, demos: DemosConfig) -> Self {
        Self {
            session,
            gate,
            demos,
        }
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Execute `command`. Confirmation answers are read from `input`.
    pub async fn run<R: BufRead>(&self, command: Commands, input: &mut R) -> CliResult<Outcome> {
        match command {
            Commands::Register {
                email,
                password,
                confirm_password,
            } => {
                if let Err(e) = check_registration(&email, &password, &confirm_password) {
                    return Ok(Outcome::failure(e.to_string()));
                }
                Outcome::from_result(&self.session.register(email.trim(), &password).await)
            }

            Commands::Login { email, password } => {
                if let Err(e) = check_login(&email, &password) {
                    return Ok(Outcome::failure(e.to_string()));
                }
                Outcome::from_result(&self.session.login(email.trim(), &password).await)
            }

            Commands::Logout => {
                self.session.logout().await;
                Ok(Outcome::success(
                    json!({ "success": true, "message": "Signed out" }),
                ))
            }

            Commands::Whoami { refresh } => self.whoami(refresh).await,

            Commands::Trial { action } => match action {
                TrialCommands::Status => Outcome::from_result(&self.session.check_trial().await),
                TrialCommands::Permissions => {
                    Outcome::from_result(&self.session.permissions().await)
                }
            },

            Commands::Demo { agent, yes } => {
                let Ok(agent) = agent.parse::<AgentKind>();
                self.demo(agent, yes, input).await
            }

            Commands::Password { action } => match action {
                PasswordCommands::Change {
                    current,
                    new_password,
                    confirm,
                } => {
                    if let Err(e) = check_password_change(&current, &new_password, &confirm) {
                        return Ok(Outcome::failure(e.to_string()));
                    }
                    Outcome::from_result(
                        &self.session.change_password(&current, &new_password).await,
                    )
                }
            },

            Commands::Admin { action } => match action {
                AdminCommands::Users => {
                    Outcome::from_result(&self.session.admin_list_users().await)
                }
                AdminCommands::ResetTrials { id, count } => {
                    Outcome::from_result(&self.session.admin_reset_trials(id, count).await)
                }
            },
        }
    }

    async fn whoami(&self, refresh: bool) -> CliResult<Outcome> {
        if refresh {
            let result = self.session.refresh_profile().await;
            if !result.success {
                return Outcome::from_result(&result);
            }
        }

        if !self.session.is_authenticated().await {
            return Ok(Outcome::failure(NOT_AUTHENTICATED_MESSAGE));
        }
        let Some(user) = self.session.current_user().await else {
            return Ok(Outcome::failure("Profile not cached; run `oak whoami --refresh`"));
        };

        Ok(Outcome::success(json!({
            "success": true,
            "display_name": user.display_name(),
            "remaining_trials": user.remaining_trials(),
            "user": user,
        })))
    }

    async fn demo<R: BufRead>(
        &self,
        agent: AgentKind,
        yes: bool,
        input: &mut R,
    ) -> CliResult<Outcome> {
        let mut gate =
            TrialGate::new(agent.clone()).with_admin_audit(self.gate.audit_admin_usage);
        let name = agent.display_name().to_string();

        let trial_question =
            format!("Start a {name} trial session? This uses one of your trials.");
        if !yes {
            match gate.preview(&self.session).await {
                GatePreview::Admin => {
                    eprintln!("Admin access: unlimited use of the {name}, no trial is spent.");
                    let outcome = gate
                        .auto_confirm_admin(
                            &self.session,
                            self.gate.admin_countdown(),
                            ctrl_c(),
                            |secs| eprintln!("Starting in {secs}s (Ctrl-C to cancel)"),
                        )
                        .await;
                    match outcome {
                        AutoConfirmOutcome::Cancelled => {
                            return Ok(Self::cancelled(&agent, &gate));
                        }
                        // The session changed under the countdown; fall back to asking.
                        AutoConfirmOutcome::NotAdmin => {
                            if !prompt(input, &trial_question)? {
                                return Ok(Self::cancelled(&agent, &gate));
                            }
                            gate.confirm(&self.session).await;
                        }
                        AutoConfirmOutcome::Confirmed | AutoConfirmOutcome::Denied => {}
                    }
                    return Ok(self.report(&agent, &name, &gate));
                }
                GatePreview::Available { remaining, after } => {
                    let question = format!(
                        "Start a {name} trial session? Current trials: {remaining}, after this session: {after}."
                    );
                    if !prompt(input, &question)? {
                        return Ok(Self::cancelled(&agent, &gate));
                    }
                }
                GatePreview::UnlimitedTrials | GatePreview::ProfileUnavailable => {
                    if !prompt(input, &trial_question)? {
                        return Ok(Self::cancelled(&agent, &gate));
                    }
                }
                // The gate denies these without asking the server.
                GatePreview::NotAuthenticated | GatePreview::Exhausted => {}
            }
        }

        gate.confirm(&self.session).await;
        Ok(self.report(&agent, &name, &gate))
    }

    fn report(&self, agent: &AgentKind, name: &str, gate: &TrialGate) -> Outcome {
        let state = gate.state();
        let body = if state.is_granted() {
            json!({
                "success": true,
                "agent": agent,
                "agent_name": name,
                "gate": state,
                "url": self.demos.url_for(agent.as_str()),
            })
        } else {
            let message = match state {
                GateState::Denied { reason } => reason.to_string(),
                _ => String::from("Access not granted"),
            };
            json!({
                "success": false,
                "message": message,
                "agent": agent,
                "gate": state,
            })
        };

        Outcome {
            success: state.is_granted(),
            body,
        }
    }

    fn cancelled(agent: &AgentKind, gate: &TrialGate) -> Outcome {
        Outcome {
            success: false,
            body: json!({
                "success": false,
                "message": "Cancelled",
                "agent": agent,
                "gate": gate.state(),
            }),
        }
    }
}

/// Ask a yes/no question on stderr, read the answer from `input`.
fn prompt<R: BufRead>(input: &mut R, question: &str) -> CliResult<bool> {
    eprint!("{question} [y/N] ");
    let _ = std::io::stderr().flush();

    let mut line = String::new();
    input.read_line(&mut line).map_err(CliError::input)?;

    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Ctrl-C handler unavailable, countdown cannot be cancelled: {e}");
        std::future::pending::<()>().await;
    }
}
