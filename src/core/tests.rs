#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use httpmock::prelude::*;
    use serde::Serialize;
    use serde_json::json;
    use tokio::sync::oneshot;

    use crate::core::error::SUBMIT_FALLBACK_MESSAGE;
    use crate::core::schedule::{ManualScheduler, RecordingNavigator};
    use crate::core::transport::{ReqwestTransport, TransportError};
    use crate::core::{
        ContactField, ContactWorkflow, ContentClient, FaqSection, HeaderSection, LoadState,
        Navigator, RawResponse, Scheduler, SectionLoader, SubmitState, Transport,
        ValidationRules, WorkflowSettings,
    };

    type Reply = Result<RawResponse, TransportError>;

    /// Transport whose responses are released by the test, in any order.
    #[derive(Default)]
    struct ScriptedTransport {
        replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
        requests: Mutex<Vec<String>>,
        bodies: Mutex<Vec<serde_json::Value>>,
    }

    impl ScriptedTransport {
        fn new(replies: Vec<oneshot::Receiver<Reply>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                ..Default::default()
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn bodies(&self) -> Vec<serde_json::Value> {
            self.bodies.lock().unwrap().clone()
        }

        async fn next_reply(&self, url: &str, query: &[(&str, &str)]) -> Reply {
            let query: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
            self.requests
                .lock()
                .unwrap()
                .push(format!("{url}?{}", query.join("&")));
            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(TransportError("reply dropped".into()))),
                None => Err(TransportError("no scripted reply".into())),
            }
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str, query: &[(&str, &str)]) -> Reply {
            self.next_reply(url, query).await
        }

        async fn post_json<B: Serialize + ?Sized>(
            &self,
            url: &str,
            query: &[(&str, &str)],
            body: &B,
        ) -> Reply {
            self.bodies
                .lock()
                .unwrap()
                .push(serde_json::to_value(body).unwrap());
            self.next_reply(url, query).await
        }
    }

    fn ok(body: serde_json::Value) -> Reply {
        Ok(RawResponse::new(200, body.to_string()))
    }

    fn faq_body(title: &str) -> serde_json::Value {
        json!({
            "faqs": [{"id": 1, "faq_title": title, "faq_content": "<p>Yes</p>"}],
            "page": [{"heading": "FAQ"}]
        })
    }

    fn faq_title(state: &LoadState<FaqSection>) -> Option<String> {
        state.data().map(|faq| faq.faqs[0].faq_title.clone())
    }

    fn recording_loader<T: Transport>(
        client: Arc<ContentClient<T>>,
    ) -> (SectionLoader<FaqSection, T>, Arc<Mutex<Vec<LoadState<FaqSection>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let loader = SectionLoader::<FaqSection, T>::for_section(client)
            .with_observer(move |state| sink.lock().unwrap().push(state.clone()));
        (loader, seen)
    }

    struct Harness<T> {
        workflow: ContactWorkflow<T>,
        scheduler: Arc<ManualScheduler>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness<T: Transport>(client: ContentClient<T>, rules: ValidationRules) -> Harness<T> {
        let scheduler = Arc::new(ManualScheduler::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let settings = WorkflowSettings {
            rules,
            redirect_to: "/thank-you".to_string(),
            redirect_delay: Duration::from_millis(1000),
        };
        let workflow = ContactWorkflow::new(
            Arc::new(client),
            settings,
            scheduler.clone() as Arc<dyn Scheduler>,
            navigator.clone() as Arc<dyn Navigator>,
        );
        Harness {
            workflow,
            scheduler,
            navigator,
        }
    }

    fn fill_valid<T: Transport>(workflow: &ContactWorkflow<T>) {
        workflow.update_field(ContactField::FirstName, "Asha");
        workflow.update_field(ContactField::LastName, "Rao");
        workflow.update_field(ContactField::Email, "asha@example.com");
        workflow.update_field(ContactField::Phone, "98765 43210");
        workflow.update_field(ContactField::Message, "Site visit on Sunday");
    }

    // ========================================================================
    // Section loading over HTTP
    // ========================================================================

    #[tokio::test]
    async fn test_load_success_parses_section() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/faq").query_param("website", "skyline");
                then.status(200).json_body(faq_body("Is parking included?"));
            })
            .await;

        let client = Arc::new(ContentClient::new(
            server.base_url(),
            "skyline",
            ReqwestTransport::new(),
        ));
        let (loader, seen) = recording_loader(client);
        let state = loader.load().await;

        mock.assert_async().await;
        assert_eq!(faq_title(&state).as_deref(), Some("Is parking included?"));
        assert_eq!(state.data().map(|f| f.heading()), Some("FAQ".to_string()));
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], LoadState::Loading);
    }

    #[tokio::test]
    async fn test_load_http_errors_fail_with_message() {
        let server = MockServer::start_async().await;
        let not_found = server
            .mock_async(|when, then| {
                when.method(GET).path("/faq");
                then.status(404);
            })
            .await;
        let broken = server
            .mock_async(|when, then| {
                when.method(GET).path("/header");
                then.status(500).body("upstream down");
            })
            .await;

        let client = Arc::new(ContentClient::new(
            server.base_url(),
            "skyline",
            ReqwestTransport::new(),
        ));

        let faq = SectionLoader::<FaqSection, _>::for_section(client.clone())
            .load()
            .await;
        assert_eq!(faq.error(), Some("Failed to fetch FAQ data"));

        let header = SectionLoader::<HeaderSection, _>::for_section(client)
            .load()
            .await;
        assert_eq!(header.error(), Some("Failed to fetch header data"));

        not_found.assert_async().await;
        broken.assert_async().await;
    }

    #[tokio::test]
    async fn test_load_failure_is_not_retried() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/faq");
                then.status(503);
            })
            .await;

        let client = Arc::new(ContentClient::new(
            server.base_url(),
            "skyline",
            ReqwestTransport::new(),
        ));
        let loader = SectionLoader::<FaqSection, _>::for_section(client);
        let state = loader.load().await;

        assert!(state.error().is_some());
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_manual_reload_recovers_after_failure() {
        let (fail_tx, fail_rx) = oneshot::channel();
        let (ok_tx, ok_rx) = oneshot::channel();
        fail_tx
            .send(Ok(RawResponse::new(500, "upstream down")))
            .unwrap();
        ok_tx.send(ok(faq_body("Is there a clubhouse?"))).unwrap();

        let client = Arc::new(ContentClient::new(
            "https://api.test",
            "skyline",
            ScriptedTransport::new(vec![fail_rx, ok_rx]),
        ));
        let (loader, seen) = recording_loader(client.clone());

        let failed = loader.load().await;
        assert_eq!(failed.error(), Some("Failed to fetch FAQ data"));

        let reloaded = loader.load().await;
        assert_eq!(faq_title(&reloaded).as_deref(), Some("Is there a clubhouse?"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], LoadState::Loading);
        assert_eq!(seen[1], LoadState::Failed("Failed to fetch FAQ data".to_string()));
        assert_eq!(seen[2], LoadState::Loading);
        assert_eq!(faq_title(&seen[3]).as_deref(), Some("Is there a clubhouse?"));
        assert_eq!(client.transport().requests().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/faq");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let client = Arc::new(ContentClient::new(
            server.base_url(),
            "skyline",
            ReqwestTransport::new(),
        ));
        let state = SectionLoader::<FaqSection, _>::for_section(client)
            .load()
            .await;

        let message = state.error().unwrap_or_default();
        assert!(message.starts_with("Invalid FAQ data response"), "{message}");
    }

    #[tokio::test]
    async fn test_empty_payload_loads_empty_section() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/faq");
                then.status(200).json_body(json!({}));
            })
            .await;

        let client = Arc::new(ContentClient::new(
            server.base_url(),
            "skyline",
            ReqwestTransport::new(),
        ));
        let state = SectionLoader::<FaqSection, _>::for_section(client)
            .load()
            .await;

        let faq = state.data().cloned().unwrap_or_default();
        assert!(matches!(state, LoadState::Loaded(_)));
        assert!(faq.faqs.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_network_failure() {
        let client = Arc::new(ContentClient::new(
            "http://127.0.0.1:1",
            "skyline",
            ReqwestTransport::new(),
        ));
        let state = SectionLoader::<FaqSection, _>::for_section(client)
            .load()
            .await;

        let message = state.error().unwrap_or_default();
        assert!(message.starts_with("Network error"), "{message}");
    }

    #[tokio::test]
    async fn test_blank_site_sends_nothing() {
        let transport = ScriptedTransport::new(Vec::new());
        let client = Arc::new(ContentClient::new("https://api.test", " ", transport));
        let loader = SectionLoader::<FaqSection, _>::for_section(client.clone());

        let state = loader.load().await;

        assert!(state.error().unwrap_or_default().starts_with("Invalid request"));
        assert!(client.transport().requests().is_empty());
    }

    // ========================================================================
    // Ordering and disposal
    // ========================================================================

    #[tokio::test]
    async fn test_dispose_before_response_blocks_update() {
        let (tx, rx) = oneshot::channel();
        let transport = ScriptedTransport::new(vec![rx]);
        let client = Arc::new(ContentClient::new("https://api.test", "skyline", transport));
        let (loader, seen) = recording_loader(client);

        let load = loader.load();
        let unmount = async {
            loader.dispose();
            let _ = tx.send(ok(faq_body("late")));
        };
        let (state, ()) = tokio::join!(load, unmount);

        assert_eq!(state, LoadState::Loading);
        assert_eq!(*seen.lock().unwrap(), vec![LoadState::Loading]);
    }

    #[tokio::test]
    async fn test_disposed_loader_does_not_fetch() {
        let transport = ScriptedTransport::new(Vec::new());
        let client = Arc::new(ContentClient::new("https://api.test", "skyline", transport));
        let (loader, seen) = recording_loader(client.clone());

        loader.dispose();
        let state = loader.load().await;

        assert_eq!(state, LoadState::Idle);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_newest_load_wins_when_older_resolves_last() {
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let transport = ScriptedTransport::new(vec![rx_old, rx_new]);
        let client = Arc::new(ContentClient::new("https://api.test", "skyline", transport));
        let (loader, seen) = recording_loader(client);

        let older = loader.load();
        let newer = loader.load();
        let server = async {
            let _ = tx_new.send(ok(faq_body("newer")));
            tokio::task::yield_now().await;
            let _ = tx_old.send(ok(faq_body("older")));
        };
        let (_, newer_state, ()) = tokio::join!(older, newer, server);

        assert_eq!(faq_title(&newer_state).as_deref(), Some("newer"));
        assert_eq!(faq_title(&loader.state()).as_deref(), Some("newer"));
        let titles: Vec<_> = seen.lock().unwrap().iter().filter_map(faq_title).collect();
        assert_eq!(titles, vec!["newer".to_string()]);
    }

    #[tokio::test]
    async fn test_newest_load_wins_when_older_resolves_first() {
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let transport = ScriptedTransport::new(vec![rx_old, rx_new]);
        let client = Arc::new(ContentClient::new("https://api.test", "skyline", transport));
        let (loader, seen) = recording_loader(client);

        let older = loader.load();
        let newer = loader.load();
        let server = async {
            let _ = tx_old.send(ok(faq_body("older")));
            tokio::task::yield_now().await;
            let _ = tx_new.send(Ok(RawResponse::new(500, "")));
        };
        let (_, newer_state, ()) = tokio::join!(older, newer, server);

        assert_eq!(newer_state.error(), Some("Failed to fetch FAQ data"));
        assert!(seen.lock().unwrap().iter().all(|s| faq_title(s).is_none()));
    }

    #[tokio::test]
    async fn test_requests_carry_site_identifier() {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(ok(json!({})));
        let transport = ScriptedTransport::new(vec![rx]);
        let client = Arc::new(ContentClient::new("https://api.test/", "skyline", transport));

        let _ = client.fetch_section::<FaqSection>().await;
        let _ = client.fetch_section::<HeaderSection>().await;

        assert_eq!(
            client_requests(&client),
            vec![
                "https://api.test/faq?website=skyline".to_string(),
                "https://api.test/header?website=skyline".to_string(),
            ]
        );
    }

    fn client_requests(client: &ContentClient<ScriptedTransport>) -> Vec<String> {
        client.transport().requests()
    }

    // ========================================================================
    // Contact submission
    // ========================================================================

    #[tokio::test]
    async fn test_invalid_form_never_posts() {
        let transport = ScriptedTransport::new(Vec::new());
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        h.workflow.update_field(ContactField::LastName, "B");
        h.workflow.update_field(ContactField::Phone, "1234567890");

        let state = h.workflow.submit().await;

        assert_eq!(state, SubmitState::NotSubmitted);
        let errors = h.workflow.errors();
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![ContactField::FirstName]);
        assert_eq!(h.workflow.snapshot().data.last_name, "B");
    }

    #[tokio::test]
    async fn test_editing_field_clears_its_error() {
        let transport = ScriptedTransport::new(Vec::new());
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        h.workflow.update_field(ContactField::Phone, "12345");
        h.workflow.submit().await;
        assert!(h.workflow.errors().contains(ContactField::Phone));
        assert!(h.workflow.errors().contains(ContactField::FirstName));

        h.workflow.update_field(ContactField::Phone, "1234567890");

        assert!(!h.workflow.errors().contains(ContactField::Phone));
        assert!(h.workflow.errors().contains(ContactField::FirstName));
    }

    #[tokio::test]
    async fn test_successful_submit_clears_form_and_redirects_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/contact")
                    .query_param("website", "skyline")
                    .json_body(json!({
                        "first_name": "Asha",
                        "last_name": "Rao",
                        "email_id": "asha@example.com",
                        "phone_number": "98765 43210",
                        "message": "Site visit on Sunday"
                    }));
                then.status(200).json_body(json!({"status": "ok"}));
            })
            .await;

        let h = harness(
            ContentClient::new(server.base_url(), "skyline", ReqwestTransport::new()),
            ValidationRules {
                email_required: true,
            },
        );
        fill_valid(&h.workflow);

        let state = h.workflow.submit().await;

        mock.assert_hits_async(1).await;
        assert_eq!(state, SubmitState::Succeeded);
        assert_eq!(h.workflow.data(), Default::default());
        assert!(h.navigator.visits().is_empty());

        h.scheduler.advance(Duration::from_millis(999));
        assert!(h.navigator.visits().is_empty());

        h.scheduler.advance(Duration::from_millis(1));
        assert_eq!(h.navigator.visits(), vec!["/thank-you".to_string()]);

        h.scheduler.advance(Duration::from_secs(60));
        assert_eq!(h.navigator.visits().len(), 1);
    }

    #[tokio::test]
    async fn test_server_message_shown_and_resubmission_allowed() {
        let server = MockServer::start_async().await;
        let rejected = server
            .mock_async(|when, then| {
                when.method(POST).path("/contact").json_body(json!({
                    "first_name": "Asha",
                    "last_name": "Rao",
                    "email_id": "asha@example.com",
                    "phone_number": "98765 43210",
                    "message": "Site visit on Sunday"
                }));
                then.status(400).json_body(json!({"message": "Duplicate lead"}));
            })
            .await;
        let accepted = server
            .mock_async(|when, then| {
                when.method(POST).path("/contact").json_body(json!({
                    "first_name": "Asha",
                    "last_name": "Rao",
                    "email_id": "asha@example.com",
                    "phone_number": "9123456780",
                    "message": "Site visit on Sunday"
                }));
                then.status(201);
            })
            .await;

        let h = harness(
            ContentClient::new(server.base_url(), "skyline", ReqwestTransport::new()),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        let state = h.workflow.submit().await;
        assert_eq!(state, SubmitState::Failed("Duplicate lead".to_string()));
        assert_eq!(h.workflow.data().first_name, "Asha");
        assert_eq!(h.workflow.data().phone_number, "98765 43210");

        h.workflow.update_field(ContactField::Phone, "9123456780");
        let state = h.workflow.submit().await;

        assert_eq!(state, SubmitState::Succeeded);
        rejected.assert_hits_async(1).await;
        accepted.assert_hits_async(1).await;
        h.scheduler.advance(Duration::from_secs(1));
        assert_eq!(h.navigator.visits().len(), 1);
    }

    #[tokio::test]
    async fn test_rejection_without_message_uses_fallback() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/contact");
                then.status(503).body("Service Unavailable");
            })
            .await;

        let h = harness(
            ContentClient::new(server.base_url(), "skyline", ReqwestTransport::new()),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        let state = h.workflow.submit().await;

        assert_eq!(state, SubmitState::Failed(SUBMIT_FALLBACK_MESSAGE.to_string()));
        assert_eq!(h.scheduler.pending(), 0);
        assert!(h.navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_ignored() {
        let (tx, rx) = oneshot::channel();
        let transport = ScriptedTransport::new(vec![rx]);
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        let first = h.workflow.submit();
        let second = async {
            let state = h.workflow.submit().await;
            let _ = tx.send(ok(json!({})));
            state
        };
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, SubmitState::Succeeded);
        assert_eq!(second, SubmitState::Submitting);
        assert_eq!(h.workflow.client().transport().bodies().len(), 1);
    }

    #[tokio::test]
    async fn test_unmount_cancels_pending_redirect() {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(ok(json!({})));
        let transport = ScriptedTransport::new(vec![rx]);
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        assert_eq!(h.workflow.submit().await, SubmitState::Succeeded);
        assert_eq!(h.scheduler.pending(), 1);

        h.workflow.dispose();
        h.scheduler.advance(Duration::from_secs(5));

        assert!(h.navigator.visits().is_empty());
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_unmount_during_submission_drops_response() {
        let (tx, rx) = oneshot::channel();
        let transport = ScriptedTransport::new(vec![rx]);
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        let submit = h.workflow.submit();
        let unmount = async {
            h.workflow.dispose();
            let _ = tx.send(ok(json!({})));
        };
        let (state, ()) = tokio::join!(submit, unmount);

        assert_eq!(state, SubmitState::Submitting);
        assert_eq!(h.workflow.data().first_name, "Asha");
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[tokio::test]
    async fn test_observer_sees_each_transition() {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(ok(json!({})));
        let transport = ScriptedTransport::new(vec![rx]);
        let h = harness(
            ContentClient::new("https://api.test", "skyline", transport),
            ValidationRules::default(),
        );
        fill_valid(&h.workflow);

        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        h.workflow
            .observe(move |snapshot| sink.lock().unwrap().push(snapshot.state.clone()));

        h.workflow.submit().await;

        assert_eq!(
            *states.lock().unwrap(),
            vec![SubmitState::Submitting, SubmitState::Succeeded]
        );
    }
}
