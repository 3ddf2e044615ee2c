use serde::{Deserialize, Serialize};

/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle ──start ok──→ recording
///  ↑ └─start failed─┘    │
///  └──────── stop ───────┘
/// ```
/// Starting while recording stops the current recording first. There is no
/// terminal state; a session is reused for the lifetime of the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
}

impl RecorderState {
    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}
