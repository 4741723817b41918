//! RecordingActivityStarter - 起動依頼を記録するだけの ActivityStarter
//!
//! デスクトップで起動手順を動かすときと、テストで「何が dispatch されたか」を
//! 確認するときに使います。

use std::sync::Mutex;

use crate::domain::LaunchIntent;
use crate::ports::{ActivityStarter, StartError};

#[derive(Debug, Default)]
pub struct RecordingActivityStarter {
    started: Mutex<Vec<LaunchIntent>>,
    /// 設定されていれば、すべての依頼をこのエラーで拒否する
    reject_with: Option<StartError>,
}

impl RecordingActivityStarter {
    pub fn new() -> Self {
        Self::default()
    }

    /// すべての起動依頼を拒否する starter
    pub fn rejecting(error: StartError) -> Self {
        Self {
            started: Mutex::new(Vec::new()),
            reject_with: Some(error),
        }
    }

    /// これまでに受け付けた intent（古い順）
    pub fn started(&self) -> Vec<LaunchIntent> {
        self.started
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn started_count(&self) -> usize {
        self.started
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl ActivityStarter for RecordingActivityStarter {
    fn start_activity(&self, intent: &LaunchIntent) -> Result<(), StartError> {
        if let Some(error) = &self.reject_with {
            return Err(error.clone());
        }
        self.started
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(intent.clone());
        Ok(())
    }
}
