#[cfg(test)]
mod integration_tests {
    use crate::schemas::ErrorResponse;
    use crate::test_utils::test_utils::setup_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{Player, Profile};
    use serde_json::json;

    async fn server() -> (TestServer, tracing::subscriber::DefaultGuard) {
        let (app, guard) = setup_test_app().await;
        (TestServer::new(app).unwrap(), guard)
    }

    #[tokio::test]
    async fn test_health_check() {
        let (server, _guard) = server().await;

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_create_profile_ignores_id() {
        let (server, _guard) = server().await;

        let response = server
            .post("/profiles")
            .json(&json!({ "id": 41, "twitter": "@king_kane" }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body, json!({ "id": 1, "twitter": "@king_kane" }));
    }

    #[tokio::test]
    async fn test_list_and_get_profiles() {
        let (server, _guard) = server().await;

        let empty: Vec<Profile> = server.get("/profiles").await.json();
        assert!(empty.is_empty());

        server
            .post("/profiles")
            .json(&Profile::new("@a"))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/profiles")
            .json(&Profile::new("@b"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get("/profiles").await;
        response.assert_status(StatusCode::OK);
        let profiles: Vec<Profile> = response.json();
        assert_eq!(profiles.len(), 2);

        let response = server.get("/profiles/2").await;
        response.assert_status(StatusCode::OK);
        let profile: Profile = response.json();
        assert_eq!(profile.twitter_handle.as_deref(), Some("@b"));
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let (server, _guard) = server().await;

        // Scenario D
        let response = server.get("/profiles/999").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "NOT_FOUND");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let (server, _guard) = server().await;
        server
            .post("/profiles")
            .json(&Profile::new("@loose"))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.delete("/profiles/1").await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        server.get("/profiles/1").await.assert_status(StatusCode::NOT_FOUND);
        server.delete("/profiles/1").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_owned_profile_conflicts() {
        let (server, _guard) = server().await;
        server
            .post("/players")
            .json(&Player::new("Ronaldo", Some(Profile::new("@Cristiano"))))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.delete("/profiles/1").await;

        response.assert_status(StatusCode::CONFLICT);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "CONSTRAINT_VIOLATION");
        server.get("/profiles/1").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_player_with_profile() {
        let (server, _guard) = server().await;

        // Scenario A
        let response = server
            .post("/players")
            .json(&json!({ "name": "Ronaldo", "playerProfile": { "twitter": "@Cristiano" } }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Ronaldo",
                "profile": { "id": 1, "twitter": "@Cristiano" }
            })
        );
    }

    #[tokio::test]
    async fn test_create_player_requires_name() {
        let (server, _guard) = server().await;

        let response = server
            .post("/players")
            .json(&json!({ "playerProfile": { "twitter": "@x" } }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let profiles: Vec<Profile> = server.get("/profiles").await.json();
        assert!(profiles.is_empty());
    }

    #[tokio::test]
    async fn test_list_and_get_players() {
        let (server, _guard) = server().await;
        server
            .post("/players")
            .json(&Player::new("Ronaldo", Some(Profile::new("@Cristiano"))))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/players")
            .json(&Player::new("Messi", None))
            .await
            .assert_status(StatusCode::CREATED);

        let players: Vec<Player> = server.get("/players").await.json();
        assert_eq!(players.len(), 2);
        assert_eq!(players[0].profile_id(), Some(1));
        assert!(players[1].profile.is_none());

        let response = server.get("/players/2").await;
        response.assert_status(StatusCode::OK);
        let player: Player = response.json();
        assert_eq!(player.name, "Messi");

        server.get("/players/3").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assign_and_cascade_scenarios() {
        let (server, _guard) = server().await;

        // Scenario A
        server
            .post("/players")
            .json(&Player::new("Ronaldo", Some(Profile::new("@Cristiano"))))
            .await
            .assert_status(StatusCode::CREATED);

        // Scenario B
        let kane: Profile = server
            .post("/profiles")
            .json(&json!({ "twitter": "@king_kane" }))
            .await
            .json();
        assert_eq!(kane.id, Some(2));

        let response = server
            .put("/players/1/profile")
            .json(&json!({ "id": 2 }))
            .await;
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Ronaldo",
                "profile": { "id": 2, "twitter": "@king_kane" }
            })
        );
        server.get("/profiles/1").await.assert_status(StatusCode::OK);

        // Scenario C
        server
            .delete("/players/1")
            .await
            .assert_status(StatusCode::NO_CONTENT);
        server.get("/players/1").await.assert_status(StatusCode::NOT_FOUND);
        server.get("/profiles/2").await.assert_status(StatusCode::NOT_FOUND);

        let remaining: Vec<Profile> = server.get("/profiles").await.json();
        assert_eq!(
            remaining,
            vec![Profile {
                id: Some(1),
                twitter_handle: Some("@Cristiano".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_assign_profile_errors() {
        let (server, _guard) = server().await;

        server
            .put("/players/9/profile")
            .json(&Profile::new("@nobody"))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        server
            .post("/players")
            .json(&Player::new("First", Some(Profile::new("@first"))))
            .await
            .assert_status(StatusCode::CREATED);
        server
            .post("/players")
            .json(&Player::new("Second", None))
            .await
            .assert_status(StatusCode::CREATED);

        // The profile already belongs to player 1
        let response = server
            .put("/players/2/profile")
            .json(&Profile::reference(1))
            .await;
        response.assert_status(StatusCode::CONFLICT);

        // A reference to a profile that does not exist
        server
            .put("/players/2/profile")
            .json(&Profile::reference(77))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_player_not_found() {
        let (server, _guard) = server().await;

        let response = server.delete("/players/1").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Player with ID 1 not found");
    }
}
