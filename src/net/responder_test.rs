use std::cell::RefCell;
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;

/// Transport replaying scripted outcomes and recording every request.
#[derive(Default)]
struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<ChatResponse, ResponderError>>>,
    requests: RefCell<Vec<(String, ChatRequest)>>,
}

impl ScriptedTransport {
    fn with(outcome: Result<ChatResponse, ResponderError>) -> Rc<Self> {
        let transport = Self::default();
        transport.outcomes.borrow_mut().push_back(outcome);
        Rc::new(transport)
    }
}

#[async_trait(?Send)]
impl ChatTransport for ScriptedTransport {
    async fn post(&self, endpoint: &str, request: &ChatRequest) -> Result<ChatResponse, ResponderError> {
        self.requests.borrow_mut().push((endpoint.to_owned(), request.clone()));
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ResponderError::Transport("no scripted outcome".into())))
    }
}

fn answer(text: &str) -> Result<ChatResponse, ResponderError> {
    Ok(ChatResponse { response: text.to_owned() })
}

// =============================================================
// Reply classification
// =============================================================

#[test]
fn success_resolves_with_endpoint_reply() {
    assert_eq!(Reply::from_exchange(answer("Plans start at $20.")), Reply::Answer("Plans start at $20.".into()));
}

#[test]
fn failure_status_resolves_with_error_apology() {
    for status in [400, 404, 500, 503] {
        let reply = Reply::from_exchange(Err(ResponderError::Status { status }));
        assert_eq!(reply, Reply::EndpointFailure);
        assert_eq!(reply.text(), "Sorry, I encountered an error. Please try again.");
    }
}

#[test]
fn transport_failure_resolves_with_connection_apology() {
    let reply = Reply::from_exchange(Err(ResponderError::Transport("network unreachable".into())));
    assert_eq!(reply, Reply::TransportFailure);
    assert_eq!(reply.text(), "Sorry, I'm having trouble connecting. Please try again later.");
}

#[test]
fn malformed_success_payload_is_transport_failure() {
    let reply = Reply::from_exchange(Err(ResponderError::Decode("expected value".into())));
    assert_eq!(reply, Reply::TransportFailure);
}

#[test]
fn fallback_texts_are_distinct() {
    assert_ne!(Reply::EndpointFailure.text(), Reply::TransportFailure.text());
}

// =============================================================
// ResponderClient
// =============================================================

#[test]
fn send_posts_message_to_endpoint_once() {
    let transport = ScriptedTransport::with(answer("Hi!"));
    let client = ResponderClient::new(Rc::clone(&transport), "/api/chatbot/");
    let reply = block_on(client.send("Show membership plans"));
    assert_eq!(reply.text(), "Hi!");
    assert_eq!(
        transport.requests.borrow().as_slice(),
        &[("/api/chatbot/".to_owned(), ChatRequest { message: "Show membership plans".into() })]
    );
}

#[test]
fn send_never_retries_after_failure() {
    let transport = ScriptedTransport::with(Err(ResponderError::Status { status: 500 }));
    let client = ResponderClient::new(Rc::clone(&transport), "/api/chatbot/");
    assert_eq!(block_on(client.send("hello")), Reply::EndpointFailure);
    assert_eq!(transport.requests.borrow().len(), 1);
}

#[test]
fn every_send_resolves_to_exactly_one_outcome() {
    let cases = vec![
        answer("ok"),
        Err(ResponderError::Status { status: 502 }),
        Err(ResponderError::Transport("timeout".into())),
        Err(ResponderError::Decode("bad json".into())),
    ];
    let expected = [
        Reply::Answer("ok".into()),
        Reply::EndpointFailure,
        Reply::TransportFailure,
        Reply::TransportFailure,
    ];
    for (outcome, want) in cases.into_iter().zip(expected) {
        let client = ResponderClient::new(ScriptedTransport::with(outcome), "/api/chatbot/");
        assert_eq!(block_on(client.send("ping")), want);
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn gloo_transport_outside_browser_is_transport_failure() {
    let client = ResponderClient::new(GlooTransport, "/api/chatbot/");
    assert_eq!(block_on(client.send("hello")), Reply::TransportFailure);
}
