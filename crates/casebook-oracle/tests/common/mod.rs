#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use casebook_oracle::error::OracleError;
use casebook_oracle::oracle::Oracle;

/// Oracle that replays canned responses and records every prompt it sees.
pub struct ScriptedOracle {
    responses: Mutex<VecDeque<Result<String, String>>>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedOracle {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(|r| Ok(r.into())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_failure(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn user_prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, u)| u.clone()).collect()
    }

    pub fn system_prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(s, _)| s.clone()).collect()
    }
}

impl Oracle for ScriptedOracle {
    fn model_id(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String, OracleError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(OracleError::Invocation(message)),
            None => Err(OracleError::Invocation("script exhausted".to_string())),
        }
    }
}

pub const VALID_CCD: &str = r#"{
    "Situation": "Presenting at the weekly team meeting",
    "Automatic_Thoughts": ["Everyone will see I'm a fraud"],
    "Emotions": ["anxiety", "shame"],
    "Behaviors": ["avoids speaking up"],
    "Intermediate_Beliefs": ["If I make a mistake, people will reject me"],
    "Core_Beliefs": ["I am incompetent"]
}"#;
