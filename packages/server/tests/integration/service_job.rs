use serde_json::json;

use crate::common::{TestApp, routes};

mod service_job_creation {
    use super::*;

    #[tokio::test]
    async fn first_job_of_the_day_gets_sequence_001() {
        let app = TestApp::spawn().await;

        let res = app.create_service_job("CAB-4521").await;

        assert_eq!(res.number(), "SJ-250114001");
        assert_eq!(res.body["vehicle_number"], "CAB-4521");
        assert_eq!(res.body["customer_name"], "Nimal Perera");
        assert_eq!(res.body["mileage"], 48200);
        assert_eq!(res.body["defects"], json!(["Brake noise"]));
        assert_eq!(res.body["recommendations"], json!(["Replace wiper blades"]));
    }

    #[tokio::test]
    async fn jobs_on_the_same_day_are_numbered_in_order() {
        let app = TestApp::spawn().await;

        for expected in 1..=5 {
            let res = app.create_service_job("CAB-4521").await;
            assert_eq!(res.number(), format!("SJ-250114{expected:03}"));
        }
    }

    #[tokio::test]
    async fn fields_are_trimmed_and_blank_notes_dropped() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SERVICE_JOBS,
                &json!({
                    "vehicle_number": "  WP-KA-1234 ",
                    "customer_name": " Sunil ",
                    "notes": "   ",
                    "defects": [" Oil leak "],
                }),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert_eq!(res.body["vehicle_number"], "WP-KA-1234");
        assert_eq!(res.body["customer_name"], "Sunil");
        assert!(res.body["notes"].is_null());
        assert_eq!(res.body["defects"], json!(["Oil leak"]));
        assert_eq!(res.body["recommendations"], json!([]));
    }

    #[tokio::test]
    async fn children_keep_their_submitted_order() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SERVICE_JOBS,
                &json!({
                    "vehicle_number": "CAB-4521",
                    "customer_name": "Nimal Perera",
                    "defects": ["Brake noise", "Worn tyres", "Cracked windscreen"],
                    "recommendations": ["Wheel alignment", "Coolant flush"],
                }),
            )
            .await;
        assert_eq!(res.status, 201, "{}", res.text);

        let fetched = app.get(&routes::service_job(res.id())).await;
        assert_eq!(fetched.status, 200);
        assert_eq!(
            fetched.body["defects"],
            json!(["Brake noise", "Worn tyres", "Cracked windscreen"])
        );
        assert_eq!(
            fetched.body["recommendations"],
            json!(["Wheel alignment", "Coolant flush"])
        );
    }
}

mod service_job_validation {
    use super::*;

    #[tokio::test]
    async fn blank_vehicle_number_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SERVICE_JOBS,
                &json!({ "vehicle_number": "   ", "customer_name": "Nimal" }),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn negative_mileage_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::SERVICE_JOBS,
                &json!({
                    "vehicle_number": "CAB-4521",
                    "customer_name": "Nimal",
                    "mileage": -5,
                }),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_raw(routes::SERVICE_JOBS, r#"{"vehicle_number": "CAB"#)
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn rejected_request_does_not_consume_a_number() {
        let app = TestApp::spawn().await;

        let bad = app
            .post(
                routes::SERVICE_JOBS,
                &json!({ "vehicle_number": "", "customer_name": "Nimal" }),
            )
            .await;
        assert_eq!(bad.status, 400);

        let res = app.create_service_job("CAB-4521").await;
        assert_eq!(res.number(), "SJ-250114001");
    }
}

mod service_job_lifecycle {
    use super::*;

    #[tokio::test]
    async fn get_returns_the_created_job() {
        let app = TestApp::spawn().await;
        let created = app.create_service_job("CAB-4521").await;

        let res = app.get(&routes::service_job(created.id())).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.number(), "SJ-250114001");
        assert_eq!(res.body["vehicle_number"], "CAB-4521");
    }

    #[tokio::test]
    async fn unknown_job_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::service_job(9999)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn deleted_job_is_hidden_and_cannot_be_deleted_twice() {
        let app = TestApp::spawn().await;
        let created = app.create_service_job("CAB-4521").await;

        let res = app.delete(&routes::service_job(created.id())).await;
        assert_eq!(res.status, 204);

        let res = app.get(&routes::service_job(created.id())).await;
        assert_eq!(res.status, 404);

        let res = app.delete(&routes::service_job(created.id())).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn deleting_the_latest_job_frees_its_number() {
        let app = TestApp::spawn().await;
        app.create_service_job("CAB-0001").await;
        app.create_service_job("CAB-0002").await;
        let third = app.create_service_job("CAB-0003").await;
        assert_eq!(third.number(), "SJ-250114003");

        let res = app.delete(&routes::service_job(third.id())).await;
        assert_eq!(res.status, 204);

        let res = app.create_service_job("CAB-0004").await;
        assert_eq!(res.number(), "SJ-250114003");
    }

    #[tokio::test]
    async fn deleting_an_earlier_job_does_not_reuse_its_number() {
        let app = TestApp::spawn().await;
        let first = app.create_service_job("CAB-0001").await;
        app.create_service_job("CAB-0002").await;

        let res = app.delete(&routes::service_job(first.id())).await;
        assert_eq!(res.status, 204);

        let res = app.create_service_job("CAB-0003").await;
        assert_eq!(res.number(), "SJ-250114003");
    }
}
