#![allow(clippy::unwrap_used)]

use pulseboard::core::{env::is_sensitive, RuntimeState};
use pulseboard::server::{app_state::AppState, config::Settings};

#[test]
fn facade_exposes_both_crates() {
    let app = AppState::new(Settings::default());
    let rt: std::sync::Arc<RuntimeState> = app.runtime();
    assert_eq!(rt.counter(), 0);
    assert!(is_sensitive("SECRET_KEY"));
}
