//! Router tests for the admin crate

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use auth::AuthConfig;
    use auth::domain::value_object::{
        activation_status::ActivationStatus, user_id::UserId, user_role::UserRole,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::presentation::router::admin_router_generic;
    use crate::testing::{InMemoryDirectory, RecordingNotifier};

    fn app(directory: &InMemoryDirectory, notifier: &RecordingNotifier) -> Router {
        admin_router_generic(
            directory.clone(),
            directory.clone(),
            notifier.clone(),
            AuthConfig::default(),
        )
    }

    fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    struct Fixture {
        directory: InMemoryDirectory,
        notifier: RecordingNotifier,
        admin_cookie: String,
        lead: UserId,
    }

    fn fixture() -> Fixture {
        let directory = InMemoryDirectory::default();
        let admin = directory.seed("Root", "root@x.com", UserRole::Admin);
        let lead = directory.seed("Lead", "lead@x.com", UserRole::TeamLead);
        let admin_cookie = directory.session_cookie(admin);
        Fixture {
            directory,
            notifier: RecordingNotifier::default(),
            admin_cookie,
            lead,
        }
    }

    #[tokio::test]
    async fn test_every_route_requires_admin() {
        let f = fixture();
        let member = f.directory.seed("Ann", "ann@x.com", UserRole::TeamMember);
        let member_cookie = f.directory.session_cookie(member);

        let routes = [
            ("GET", "/members"),
            ("GET", "/team-lead-requests/pending"),
            ("DELETE", "/members/2"),
        ];
        for (method, uri) in routes {
            let response = app(&f.directory, &f.notifier)
                .oneshot(request(method, uri, None, None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
            assert_eq!(body_json(response).await["error"], "Authentication required");

            let response = app(&f.directory, &f.notifier)
                .oneshot(request(method, uri, Some(&member_cookie), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{method} {uri}");
            assert_eq!(body_json(response).await["error"], "Admin access required");
        }

        // Gate runs before the handler: the lead was not deleted
        assert!(f.directory.member(f.lead).is_some());
    }

    #[tokio::test]
    async fn test_approve_team_lead() {
        let f = fixture();

        let response = app(&f.directory, &f.notifier)
            .oneshot(request(
                "POST",
                "/team-lead-requests/handle",
                Some(&f.admin_cookie),
                Some(json!({"memberId": f.lead.get(), "status": "approved"})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], f.lead.get());
        assert_eq!(body["isActive"], true);
        assert_eq!(body["activationStatus"], "approved");
        assert_eq!(f.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_second_decision_conflicts() {
        let f = fixture();
        let handle = |status: &str| {
            request(
                "POST",
                "/team-lead-requests/handle",
                Some(&f.admin_cookie),
                Some(json!({"memberId": f.lead.get(), "status": status})),
            )
        };

        let first = app(&f.directory, &f.notifier)
            .oneshot(handle("rejected"))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app(&f.directory, &f.notifier)
            .oneshot(handle("approved"))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_json(second).await["error"],
            "Team lead not found or already processed"
        );
        assert_eq!(
            f.directory.member(f.lead).unwrap().activation_status,
            ActivationStatus::Rejected
        );
    }

    #[tokio::test]
    async fn test_pending_status_is_not_a_decision() {
        let f = fixture();

        let response = app(&f.directory, &f.notifier)
            .oneshot(request(
                "POST",
                "/team-lead-requests/handle",
                Some(&f.admin_cookie),
                Some(json!({"memberId": f.lead.get(), "status": "pending"})),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert!(f.directory.member(f.lead).unwrap().is_pending());
    }

    #[tokio::test]
    async fn test_pending_list_and_members_list() {
        let f = fixture();
        let newer = f.directory.seed("Newer Lead", "newer@x.com", UserRole::TeamLead);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request("GET", "/team-lead-requests/pending", Some(&f.admin_cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let ids: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![newer.get(), f.lead.get()]);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request("GET", "/members", Some(&f.admin_cookie), None))
            .await
            .unwrap();
        let body = body_json(response).await;
        let members = body.as_array().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0]["email"], "root@x.com");
        assert_eq!(members[0]["role"], "admin");
    }

    #[tokio::test]
    async fn test_update_member_role() {
        let f = fixture();
        let ann = f.directory.seed("Ann", "ann@x.com", UserRole::TeamMember);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request(
                "PUT",
                "/members",
                Some(&f.admin_cookie),
                Some(json!({"memberId": ann.get(), "role": "team-lead"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Member role updated successfully"})
        );
        assert_eq!(f.directory.member(ann).unwrap().role, UserRole::TeamLead);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request(
                "PUT",
                "/members",
                Some(&f.admin_cookie),
                Some(json!({"memberId": ann.get(), "role": "admin"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid role");

        let response = app(&f.directory, &f.notifier)
            .oneshot(request(
                "PUT",
                "/members",
                Some(&f.admin_cookie),
                Some(json!({"memberId": 9999, "role": "team-member"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_member_ends_their_sessions() {
        let f = fixture();
        let ann = f.directory.seed("Ann", "ann@x.com", UserRole::TeamMember);
        f.directory.session_cookie(ann);
        assert_eq!(f.directory.live_sessions_of(ann), 1);

        let uri = format!("/members/{}", ann.get());
        let response = app(&f.directory, &f.notifier)
            .oneshot(request("DELETE", &uri, Some(&f.admin_cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"success": true, "message": "Member deleted successfully"})
        );
        assert!(f.directory.member(ann).is_none());
        assert_eq!(f.directory.live_sessions_of(ann), 0);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request("DELETE", &uri, Some(&f.admin_cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Member not found");
    }

    #[tokio::test]
    async fn test_deleted_admin_loses_access() {
        let f = fixture();
        let second_admin = f.directory.seed("Backup", "backup@x.com", UserRole::Admin);
        let second_cookie = f.directory.session_cookie(second_admin);

        let uri = format!("/members/{}", second_admin.get());
        let response = app(&f.directory, &f.notifier)
            .oneshot(request("DELETE", &uri, Some(&f.admin_cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(&f.directory, &f.notifier)
            .oneshot(request("GET", "/members", Some(&second_cookie), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
