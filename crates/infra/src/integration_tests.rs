//! Integration tests across the engines and the in-memory stores.
//!
//! Tests: directory + friend graph + purchase ledger + feed aggregator,
//! wired exactly as the API wires them.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use cartshare_auth::{UserAccount, UserDirectory};
    use cartshare_core::{DomainError, EmailAddress, UserId};
    use cartshare_feed::FeedAggregator;
    use cartshare_purchases::PurchaseLedger;
    use cartshare_social::FriendGraph;

    use crate::memory::{InMemoryPurchaseStore, InMemoryRelationshipStore, InMemoryUserDirectory};

    struct Harness {
        directory: Arc<InMemoryUserDirectory>,
        graph: FriendGraph<Arc<InMemoryRelationshipStore>, Arc<InMemoryUserDirectory>>,
        ledger: PurchaseLedger<Arc<InMemoryPurchaseStore>>,
        feed: FeedAggregator<
            Arc<InMemoryRelationshipStore>,
            Arc<InMemoryUserDirectory>,
            Arc<InMemoryPurchaseStore>,
        >,
    }

    fn setup() -> Harness {
        let directory = Arc::new(InMemoryUserDirectory::new());
        let relationships = Arc::new(InMemoryRelationshipStore::new());
        let purchases = Arc::new(InMemoryPurchaseStore::new());

        Harness {
            directory: directory.clone(),
            graph: FriendGraph::new(relationships.clone(), directory.clone()),
            ledger: PurchaseLedger::new(purchases.clone()),
            feed: FeedAggregator::new(
                FriendGraph::new(relationships, directory),
                PurchaseLedger::new(purchases),
            ),
        }
    }

    fn register(h: &Harness, email: &str) -> UserId {
        let account = UserAccount::new(
            EmailAddress::parse(email).unwrap(),
            "hash".to_string(),
            Utc::now(),
        );
        let id = account.id;
        h.directory.create(account).unwrap();
        id
    }

    fn email(raw: &str) -> EmailAddress {
        EmailAddress::parse(raw).unwrap()
    }

    #[test]
    fn full_scenario_request_accept_feed_toggle() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");

        // a requests b; pending(b) = {a}.
        h.graph.send_request(a, &email("b@x.com")).unwrap();
        let pending = h.graph.pending_requests(b).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, a);

        // b accepts; friendship symmetric, pending cleared.
        h.graph.accept_request(b, a).unwrap();
        assert_eq!(h.graph.friends(a).unwrap()[0].id, b);
        assert_eq!(h.graph.friends(b).unwrap()[0].id, a);
        assert!(h.graph.pending_requests(b).unwrap().is_empty());

        // A purchase recorded for b shows up in a's feed.
        let purchase = h.ledger.record(b, "Widget").unwrap();
        let feed = h.feed.build_feed(a).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].purchase.item, "Widget");
        assert!(feed[0].purchase.visible);
        assert_eq!(feed[0].friend.id, b);

        // b hides it; a's feed is empty again.
        h.ledger.toggle_visibility(b, purchase.id).unwrap();
        assert!(h.feed.build_feed(a).unwrap().is_empty());
    }

    #[test]
    fn feed_excludes_hidden_purchases_and_own_purchases() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");

        h.graph.send_request(a, &email("b@x.com")).unwrap();
        h.graph.accept_request(b, a).unwrap();

        h.ledger.record(b, "Visible thing").unwrap();
        let hidden = h.ledger.record(b, "Hidden thing").unwrap();
        h.ledger.toggle_visibility(b, hidden.id).unwrap();
        // The viewer's own purchase never appears in their feed.
        h.ledger.record(a, "Mine").unwrap();

        let feed = h.feed.build_feed(a).unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].purchase.item, "Visible thing");
        assert!(feed.iter().all(|e| e.purchase.visible));
        assert!(feed.iter().all(|e| e.purchase.owner != a));
    }

    #[test]
    fn feed_only_covers_confirmed_friends() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");

        // Request sent but not accepted: no feed visibility either way.
        h.graph.send_request(a, &email("b@x.com")).unwrap();
        h.ledger.record(b, "Widget").unwrap();

        assert!(h.feed.build_feed(a).unwrap().is_empty());
        assert!(h.feed.build_feed(b).unwrap().is_empty());
    }

    #[test]
    fn toggle_by_non_owner_is_forbidden_and_changes_nothing() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");

        h.graph.send_request(a, &email("b@x.com")).unwrap();
        h.graph.accept_request(b, a).unwrap();
        let purchase = h.ledger.record(b, "Widget").unwrap();

        assert_eq!(
            h.ledger.toggle_visibility(a, purchase.id).unwrap_err(),
            DomainError::Forbidden
        );
        // Still visible in a's feed: the foreign toggle did not commit.
        assert_eq!(h.feed.build_feed(a).unwrap().len(), 1);

        // The owner's toggle works, twice restores the original flag.
        assert!(!h.ledger.toggle_visibility(b, purchase.id).unwrap().visible);
        assert!(h.ledger.toggle_visibility(b, purchase.id).unwrap().visible);
    }

    #[test]
    fn racing_accepts_commit_exactly_once() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");
        h.graph.send_request(a, &email("b@x.com")).unwrap();

        let graph = Arc::new(h.graph);
        let results: Vec<_> = std::thread::scope(|scope| {
            (0..4)
                .map(|_| {
                    let graph = graph.clone();
                    scope.spawn(move || graph.accept_request(b, a))
                })
                .collect::<Vec<_>>()
                .into_iter()
                .map(|t| t.join().unwrap())
                .collect()
        });

        // Exactly one accept wins; the rest observe no pending request.
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| *e == DomainError::NoSuchRequest));
        assert_eq!(graph.friends(a).unwrap().len(), 1);
        assert_eq!(graph.friends(b).unwrap().len(), 1);
    }

    #[test]
    fn send_racing_accept_never_duplicates_a_pair() {
        let h = setup();
        let a = register(&h, "a@x.com");
        let b = register(&h, "b@x.com");
        h.graph.send_request(a, &email("b@x.com")).unwrap();

        let graph = Arc::new(h.graph);
        std::thread::scope(|scope| {
            let g1 = graph.clone();
            let g2 = graph.clone();
            let accept = scope.spawn(move || g1.accept_request(b, a));
            let resend = scope.spawn(move || g2.send_request(a, &email("b@x.com")));
            let _ = accept.join().unwrap();
            // The resend loses either way: duplicate while pending, conflict
            // once accepted.
            let err = resend.join().unwrap().unwrap_err();
            assert!(matches!(
                err,
                DomainError::DuplicateRequest | DomainError::Conflict(_)
            ));
        });

        assert_eq!(graph.friends(a).unwrap().len(), 1);
        assert!(graph.pending_requests(b).unwrap().is_empty());
    }
}
