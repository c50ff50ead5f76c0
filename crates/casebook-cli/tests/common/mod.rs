#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use casebook_oracle::error::OracleError;
use casebook_oracle::oracle::Oracle;

/// Oracle that replays canned responses in order.
pub struct ScriptedOracle {
    responses: Mutex<VecDeque<String>>,
    pub user_prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            user_prompts: Mutex::new(Vec::new()),
        }
    }
}

impl Oracle for ScriptedOracle {
    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, _system_prompt: &str, user_prompt: &str) -> Result<String, OracleError> {
        self.user_prompts.lock().unwrap().push(user_prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| OracleError::Invocation("script exhausted".to_string()))
    }
}

pub const VALID_CCD: &str = r#"{
    "Situation": "Lying awake before an exam",
    "Automatic_Thoughts": ["I'll blank on every question"],
    "Emotions": ["dread"],
    "Behaviors": ["stays up rereading notes"],
    "Intermediate_Beliefs": ["If I don't know everything, I'll fail"],
    "Core_Beliefs": ["I am not capable"]
}"#;
