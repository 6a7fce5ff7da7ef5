//! Integration tests for the `/quiz/` schema

mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use quizbook::graphql::{QuizSchema, build_quiz_schema, verify_token};

use common::{auth_service, empty_db, request, seeded_db, to_json};

async fn seeded_schema() -> QuizSchema {
    let db = seeded_db().await;
    build_quiz_schema(db.clone(), auth_service(&db))
}

// ============================================================================
// Queries
// ============================================================================

#[tokio::test]
async fn test_all_quizzes_resolve_their_category() {
    let schema = seeded_schema().await;

    let body = to_json(
        schema
            .execute(request("{ allQuizzes { id title category { id name } } }"))
            .await,
    );

    assert_eq!(
        body["data"],
        json!({
            "allQuizzes": [
                { "id": "1", "title": "Basic Physics", "category": { "id": "1", "name": "Science" } },
                { "id": "2", "title": "Rust Basics", "category": { "id": "2", "name": "Programming" } },
            ]
        })
    );
}

#[tokio::test]
async fn test_all_questions_resolve_nested_relations() {
    let schema = seeded_schema().await;

    let body = to_json(
        schema
            .execute(request("{ allQuestions { title quiz { title category { name } } } }"))
            .await,
    );

    let questions = body["data"]["allQuestions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(
        questions[2],
        json!({
            "title": "Which keyword makes a binding mutable?",
            "quiz": { "title": "Rust Basics", "category": { "name": "Programming" } }
        })
    );
}

#[tokio::test]
async fn test_list_queries_match_row_counts_and_are_repeatable() {
    let db = seeded_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    let quizzes_before = db.quizzes().count().await.unwrap();
    let questions_before = db.questions().count().await.unwrap();

    for (query, field, expected) in [
        ("{ allQuizzes { id title } }", "allQuizzes", quizzes_before),
        ("{ allQuestions { title quiz { id } } }", "allQuestions", questions_before),
    ] {
        let first = to_json(schema.execute(request(query)).await);
        let second = to_json(schema.execute(request(query)).await);

        assert_eq!(first, second);
        let rows = first["data"][field].as_array().unwrap();
        assert_eq!(rows.len() as i64, expected);
    }

    assert_eq!(db.quizzes().count().await.unwrap(), quizzes_before);
    assert_eq!(db.questions().count().await.unwrap(), questions_before);
}

#[tokio::test]
async fn test_get_question_by_id() {
    let schema = seeded_schema().await;

    let body = to_json(
        schema
            .execute(request("{ getQuestion(quesId: 1) { title quiz { id } } }"))
            .await,
    );

    assert_eq!(
        body["data"],
        json!({ "getQuestion": { "title": "What is the SI unit of force?", "quiz": { "id": "1" } } })
    );
}

#[tokio::test]
async fn test_get_question_unknown_id_is_not_found() {
    let schema = seeded_schema().await;

    let body = to_json(schema.execute(request("{ getQuestion(quesId: 999) { title } }")).await);

    assert_eq!(body["data"], json!({ "getQuestion": null }));
    assert_eq!(body["errors"][0]["extensions"]["code"], json!("NOT_FOUND"));
    assert_eq!(
        body["errors"][0]["message"],
        json!("Question matching id 999 does not exist")
    );
}

#[tokio::test]
async fn test_get_all_answers_for_question() {
    let schema = seeded_schema().await;

    let body = to_json(
        schema
            .execute(request("{ getAllAnswers(quesId: 1) { answerText question { title } } }"))
            .await,
    );

    let answers = body["data"]["getAllAnswers"].as_array().unwrap();
    let texts: Vec<_> = answers.iter().map(|a| a["answerText"].clone()).collect();
    assert_eq!(texts, vec![json!("Newton"), json!("Joule"), json!("Watt")]);
    assert_eq!(
        answers[0]["question"]["title"],
        json!("What is the SI unit of force?")
    );
}

#[tokio::test]
async fn test_get_all_answers_unknown_question_is_empty() {
    let schema = seeded_schema().await;

    let body = to_json(schema.execute(request("{ getAllAnswers(quesId: 999) { answerText } }")).await);

    assert_eq!(body["data"], json!({ "getAllAnswers": [] }));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_question_does_not_expose_internal_columns() {
    let schema = seeded_schema().await;

    let response = schema.execute(request("{ allQuestions { difficulty } }")).await;
    assert!(!response.errors.is_empty());

    let response = schema.execute(request("{ getAllAnswers(quesId: 1) { isRight } }")).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_books_are_not_served_by_quiz_schema() {
    let schema = seeded_schema().await;

    let response = schema.execute(request("{ allBooks { id } }")).await;

    assert!(!response.errors.is_empty());
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_category_is_visible_to_later_queries() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));

    let body = to_json(
        schema
            .execute(request(r#"mutation { createCategory(name: "History") { category { id name } } }"#))
            .await,
    );
    assert_eq!(
        body["data"],
        json!({ "createCategory": { "category": { "id": "1", "name": "History" } } })
    );

    let body = to_json(schema.execute(request("{ allCategories { id name } }")).await);
    assert_eq!(
        body["data"],
        json!({ "allCategories": [{ "id": "1", "name": "History" }] })
    );
}

#[tokio::test]
async fn test_create_category_allows_duplicate_names() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    let mutation = r#"mutation { createCategory(name: "Art") { category { id } } }"#;

    let first = to_json(schema.execute(request(mutation)).await);
    let second = to_json(schema.execute(request(mutation)).await);

    assert_eq!(first["data"]["createCategory"]["category"]["id"], json!("1"));
    assert_eq!(second["data"]["createCategory"]["category"]["id"], json!("2"));
}

#[tokio::test]
async fn test_create_category_requires_name() {
    let schema = seeded_schema().await;

    let response = schema
        .execute(request("mutation { createCategory { category { id } } }"))
        .await;

    assert!(!response.errors.is_empty());

    let body = to_json(schema.execute(request("{ allCategories { id } }")).await);
    assert_eq!(body["data"]["allCategories"].as_array().map(Vec::len), Some(2));
}

// ============================================================================
// Accounts
// ============================================================================

const REGISTER: &str = r#"mutation {
    register(username: "alice", email: "alice@example.com", password: "correct-horse") {
        success errors token user { id username email isActive }
    }
}"#;

#[tokio::test]
async fn test_register_then_login_then_me() {
    let db = empty_db().await;
    let auth = auth_service(&db);
    let schema = build_quiz_schema(db.clone(), auth.clone());

    let body = to_json(schema.execute(request(REGISTER)).await);
    let register = &body["data"]["register"];
    assert_eq!(register["success"], json!(true));
    assert_eq!(
        register["user"],
        json!({ "id": "1", "username": "alice", "email": "alice@example.com", "isActive": true })
    );

    let body = to_json(
        schema
            .execute(request(
                r#"mutation { tokenAuth(username: "alice", password: "correct-horse") { success token } }"#,
            ))
            .await,
    );
    assert_eq!(body["data"]["tokenAuth"]["success"], json!(true));
    let token = body["data"]["tokenAuth"]["token"].as_str().unwrap().to_string();

    let user = verify_token(&auth, &token).unwrap();
    let body = to_json(
        schema
            .execute(request("{ me { username lastLogin } }").data(user))
            .await,
    );
    assert_eq!(body["data"]["me"]["username"], json!("alice"));
    assert!(body["data"]["me"]["lastLogin"].is_string());
}

#[tokio::test]
async fn test_me_is_null_when_anonymous() {
    let schema = seeded_schema().await;

    let body = to_json(schema.execute(request("{ me { id } }")).await);

    assert_eq!(body["data"], json!({ "me": null }));
    assert!(body.get("errors").is_none());
}

#[tokio::test]
async fn test_register_rejects_duplicate_and_short_password() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    schema.execute(request(REGISTER)).await;

    let body = to_json(schema.execute(request(REGISTER)).await);
    assert_eq!(
        body["data"]["register"]["errors"],
        json!(["A user with that username already exists"])
    );
    assert_eq!(body["data"]["register"]["token"], json!(null));

    let body = to_json(
        schema
            .execute(request(
                r#"mutation { register(username: "bob", email: "bob@example.com", password: "short") { success } }"#,
            ))
            .await,
    );
    assert_eq!(body["data"]["register"]["success"], json!(false));
}

#[tokio::test]
async fn test_token_auth_wrong_password() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    schema.execute(request(REGISTER)).await;

    let body = to_json(
        schema
            .execute(request(
                r#"mutation { tokenAuth(username: "alice", password: "wrong-password") { success errors token } }"#,
            ))
            .await,
    );

    assert_eq!(
        body["data"]["tokenAuth"],
        json!({ "success": false, "errors": ["Please enter valid credentials"], "token": null })
    );
}

#[tokio::test]
async fn test_verify_token() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    let body = to_json(schema.execute(request(REGISTER)).await);
    let token = body["data"]["register"]["token"].as_str().unwrap().to_string();

    let query = format!(r#"mutation {{ verifyToken(token: "{}") {{ success username }} }}"#, token);
    let body = to_json(schema.execute(request(&query)).await);
    assert_eq!(
        body["data"]["verifyToken"],
        json!({ "success": true, "username": "alice" })
    );

    let body = to_json(
        schema
            .execute(request(r#"mutation { verifyToken(token: "not-a-token") { success errors } }"#))
            .await,
    );
    assert_eq!(body["data"]["verifyToken"]["success"], json!(false));
}

#[tokio::test]
async fn test_users_filter_and_lookup() {
    let db = empty_db().await;
    let schema = build_quiz_schema(db.clone(), auth_service(&db));
    schema.execute(request(REGISTER)).await;

    let body = to_json(
        schema
            .execute(request(
                r#"{
                    users(username: "alice") { id }
                    missing: users(username: "nobody") { id }
                    inactive: users(isActive: false) { id }
                    user(id: "1") { email }
                    unknown: user(id: "42") { email }
                }"#,
            ))
            .await,
    );

    assert_eq!(
        body["data"],
        json!({
            "users": [{ "id": "1" }],
            "missing": [],
            "inactive": [],
            "user": { "email": "alice@example.com" },
            "unknown": null
        })
    );
}
