mod agent_kind;
mod results;
mod trial_count;
mod user_profile;
