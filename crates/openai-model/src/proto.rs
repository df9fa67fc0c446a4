use comedian_model::{CompletionRequest, Message, Role, Target};
use serde::Serialize;

// ------------------------
// Types sent to the server
// ------------------------

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputContent {
    r#type: &'static str,
    text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InputMessage {
    role: Role,
    content: Vec<InputContent>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Metadata {
    workflow_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ResponsesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    agent_id: Option<String>,
    input: Vec<InputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<Metadata>,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(req: &CompletionRequest) -> ResponsesRequest {
    let (model, agent_id) = match &req.target {
        Target::Model(model) => (Some(model.clone()), None),
        Target::Agent(agent_id) => (None, Some(agent_id.clone())),
    };
    ResponsesRequest {
        model,
        agent_id,
        input: req.messages.iter().map(create_message).collect(),
        session_id: req.options.session_id.clone(),
        metadata: req.options.workflow_id.clone().map(|workflow_id| Metadata {
            workflow_id,
        }),
    }
}

#[inline]
fn create_message(msg: &Message) -> InputMessage {
    // Replies from the service are sent back as output text, everything else
    // is input text.
    let r#type = match msg.role {
        Role::Assistant => "output_text",
        Role::System | Role::User => "input_text",
    };
    InputMessage {
        role: msg.role,
        content: msg
            .content
            .iter()
            .map(|part| InputContent {
                r#type,
                text: part.text.clone(),
            })
            .collect(),
    }
}
