// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::token::BackupToken;

/// Bearer-token settings.
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    /// HS256 secret. `None` means development mode.
    pub jwt_secret: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub token: Arc<RwLock<BackupToken>>,
    pub auth_config: Arc<AuthConfig>,
}

impl AppState {
    pub fn new(token: BackupToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
            auth_config: Arc::new(AuthConfig::default()),
        }
    }

    pub fn with_auth_config(mut self, auth_config: AuthConfig) -> Self {
        self.auth_config = Arc::new(auth_config);
        self
    }
}
