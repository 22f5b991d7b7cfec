#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use cofipei_server::{api::app_router, build_state, config::Config, AppState};
use tempfile::TempDir;

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    _dir: TempDir,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: dir.path().join("db").join("test.db").to_string_lossy().to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        chart_width: 400,
        chart_height: 200,
        chart_font: None,
    }
}

pub fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let state = build_state(&config).unwrap();
    let router = app_router(state.clone(), &config);
    TestApp {
        router,
        state,
        _dir: dir,
    }
}
