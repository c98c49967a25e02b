//! End-to-end pipeline tests against a mocked E-utilities server
//!
//! wiremock stands in for the ESearch and ESummary endpoints so the full
//! query -> ids -> summaries -> records flow runs without network access.

mod common;

use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{create_mock_client, create_mock_pipeline, esearch_body};

/// Test the documented happy path: one id summarised, one silently missing
#[tokio::test]
#[traced_test]
async fn test_pipeline_drops_ids_without_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("term", "cancer treatment"))
        .and(query_param("retmode", "json"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_body(&["111", "222"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .and(query_param("db", "pubmed"))
        .and(query_param("id", "111,222"))
        .and(query_param("retmode", "json"))
        .and(query_param("api_key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "uids": ["111"],
                "111": {
                    "uid": "111",
                    "title": "Novel biologics for solid tumours",
                    "pubdate": "2024 Feb",
                    "authors": [{"name": "Jane Doe", "affiliation": "Acme Biotech Inc"}],
                    "affiliation": "Acme Biotech Inc"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let records = pipeline
        .run("cancer treatment")
        .await
        .expect("pipeline should succeed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.pmid, "111");
    assert_eq!(record.title, "Novel biologics for solid tumours");
    assert_eq!(record.publication_date, "2024 Feb");
    assert_eq!(record.non_academic_authors, vec!["Jane Doe"]);
    assert_eq!(record.company_affiliations, vec!["Acme Biotech Inc"]);
    assert_eq!(record.corresponding_email, "");
    assert!(records.iter().all(|r| r.pmid != "222"));
}

/// Test that a failing ESummary call fails the whole run
#[tokio::test]
#[traced_test]
async fn test_pipeline_summary_http_error_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_body(&["111", "222"])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let err = pipeline
        .run("cancer treatment")
        .await
        .expect_err("summary failure should propagate");

    assert!(err.is_fetch_error());
}

/// Test that a failing ESearch call never reaches ESummary
#[tokio::test]
#[traced_test]
async fn test_pipeline_search_http_error_skips_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Too Many Requests"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": {}})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let err = pipeline.run("cancer").await.expect_err("search should fail");
    assert!(matches!(
        err,
        papers_client::PubMedError::ApiError { status: 429, .. }
    ));
}

/// Test that an empty search result makes no ESummary request
#[tokio::test]
#[traced_test]
async fn test_pipeline_empty_search_makes_single_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_body(&[])))
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let records = pipeline
        .run("zzzz no results zzzz")
        .await
        .expect("empty search should succeed");

    assert!(records.is_empty());
    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received_requests.len(),
        1,
        "Only the ESearch request should be made"
    );
}

/// Test that a non-JSON ESummary body is reported as a parse error
#[tokio::test]
#[traced_test]
async fn test_pipeline_malformed_summary_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_body(&["111"])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let err = pipeline.run("cancer").await.expect_err("should not parse");
    assert!(err.is_parse_error());
}

/// Test that an ESearch body without `esearchresult` is a parse error
#[tokio::test]
#[traced_test]
async fn test_search_missing_container_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"header": {}})))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let err = client
        .search_articles("cancer")
        .await
        .expect_err("missing esearchresult should fail");
    assert!(err.is_parse_error());
}

/// Test that the query text reaches ESearch verbatim
#[tokio::test]
#[traced_test]
async fn test_search_passes_query_verbatim() {
    let mock_server = MockServer::start().await;
    let query = "(BRCA1[gene]) AND \"breast cancer\" & 2024";

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_body(&["42"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);

    let pmids = client.search_articles(query).await.expect("search");
    assert_eq!(pmids, vec!["42"]);
}

/// Test that an empty id slice never reaches the server
#[tokio::test]
#[traced_test]
async fn test_fetch_summaries_empty_input() {
    let mock_server = MockServer::start().await;
    let client = create_mock_client(&mock_server);

    let records = client
        .fetch_summaries(&[])
        .await
        .expect("Empty batch should return Ok");

    assert!(records.is_empty());
    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        received_requests.len(),
        0,
        "No HTTP requests should be made for empty input"
    );
}

/// Test that an ESearch ERROR field inside a 200 response yields no records
#[tokio::test]
#[traced_test]
async fn test_pipeline_empty_query_search_error_is_not_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .and(query_param("term", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": {
                "ERROR": "Empty term and query_key - nothing todo",
                "idlist": []
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = create_mock_pipeline(&mock_server);

    let records = pipeline.run("").await.expect("empty query should succeed");

    assert!(records.is_empty());
    let received_requests = mock_server.received_requests().await.unwrap();
    assert_eq!(received_requests.len(), 1);
}
