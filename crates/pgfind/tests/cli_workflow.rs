//! End-to-end tests of the `pgfind` binary.
//!
//! Each test runs the real binary against a mock listings source and a
//! throwaway config and storage directory.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn listing_rows() -> Value {
    serde_json::json!([
        {
            "PG_Name": "Sunrise PG",
            "Address": "Andheri",
            "Rent_Price": 3000,
            "amenities": ["WiFi", "Meals"],
            "Rating": 4.5
        },
        {
            "PG_Name": "Parkview PG",
            "Address": "Bandra",
            "Rent_Price": "2,500",
            "amenities": "WiFi, Gym, Parking",
            "Rating": "3.8"
        },
        {
            "PG_Name": "Harbour Stay",
            "Address": "Dadar",
            "Rent_Price": 14000
        }
    ])
}

struct Sandbox {
    _dir: TempDir,
    config_path: PathBuf,
    data_dir: PathBuf,
}

impl Sandbox {
    fn new(source_url: &str) -> Self {
        let dir = TempDir::new().expect("failed to create sandbox");
        let config_path = dir.path().join("config.toml");
        let data_dir = dir.path().join("data");

        let config = format!(
            "version = 1\n\n[source]\nurl = \"{}\"\napi_key = \"test-key\"\n\n[storage]\ndir = \"{}\"\n",
            source_url,
            data_dir.display()
        );
        fs::write(&config_path, config).expect("failed to write config");

        Self {
            _dir: dir,
            config_path,
            data_dir,
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pgfind"));
        cmd.args(args)
            .env("PGFIND_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("PGFIND_SOURCE_URL")
            .env_remove("PGFIND_API_KEY")
            .env("RUST_LOG", "off");
        cmd
    }

    async fn run(&self, args: &[&str]) -> Output {
        let mut cmd = self.command(args);
        tokio::task::spawn_blocking(move || cmd.output())
            .await
            .expect("join failed")
            .expect("failed to run pgfind")
    }

    async fn run_json(&self, args: &[&str]) -> Value {
        let output = self.run(args).await;
        assert!(
            output.status.success(),
            "pgfind {:?} failed\nstderr:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}

async fn source_with_rows() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/insert_pg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_rows()))
        .mount(&server)
        .await;
    server
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_applies_default_ceiling_and_filters() {
    let server = source_with_rows().await;
    let sandbox = Sandbox::new(&server.uri());

    let all = sandbox.run_json(&["--json", "list"]).await;
    // Harbour Stay is above the default 12000 ceiling
    assert_eq!(all["count"], 2);

    let gym = sandbox.run_json(&["--json", "list", "--amenity", "Gym"]).await;
    assert_eq!(gym["count"], 1);
    assert_eq!(gym["listings"][0]["name"], "Parkview PG");
    assert_eq!(gym["listings"][0]["rating"], 3.8);

    let everything = sandbox
        .run_json(&["--json", "list", "--max-price", "15000", "--location", "all"])
        .await;
    assert_eq!(everything["count"], 3);
    assert_eq!(everything["listings"][2]["location"], "Dadar");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_table_empty_state() {
    let server = source_with_rows().await;
    let sandbox = Sandbox::new(&server.uri());

    let output = sandbox.run(&["list", "--search", "nothing like this"]).await;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "No PGs found matching your filters."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_reports_source_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    let sandbox = Sandbox::new(&server.uri());

    let output = sandbox.run(&["--json", "list"]).await;

    assert_eq!(output.status.code(), Some(2));
    let stdout: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout["count"], 0);
    let stderr: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(stderr["error"]["code"], "API_ERROR");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_rating_is_rejected_before_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_rows()))
        .expect(0)
        .mount(&server)
        .await;
    let sandbox = Sandbox::new(&server.uri());

    let output = sandbox.run(&["list", "--min-rating", "9"]).await;

    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_favourite_toggle_round_trip() {
    let server = source_with_rows().await;
    let sandbox = Sandbox::new(&server.uri());

    let added = sandbox
        .run_json(&["--json", "fav", "toggle", "Sunrise PG"])
        .await;
    assert_eq!(added["action"], "added");

    let favourites = sandbox.run_json(&["--json", "fav", "list"]).await;
    assert_eq!(favourites["items"][0]["name"], "Sunrise PG");
    assert!(sandbox.data_dir.join("favourites.json").exists());

    let listed = sandbox.run_json(&["--json", "list"]).await;
    assert_eq!(listed["listings"][0]["favourite"], true);

    let removed = sandbox
        .run_json(&["--json", "fav", "toggle", "Sunrise PG"])
        .await;
    assert_eq!(removed["action"], "removed");

    let favourites = sandbox.run_json(&["--json", "fav", "list"]).await;
    assert_eq!(favourites["items"], serde_json::json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cart_summary_and_clear() {
    let server = source_with_rows().await;
    let sandbox = Sandbox::new(&server.uri());

    sandbox.run_json(&["--json", "cart", "add", "Sunrise PG"]).await;
    sandbox.run_json(&["--json", "cart", "add", "parkview pg"]).await;

    let cart = sandbox.run_json(&["--json", "cart", "list"]).await;
    assert_eq!(cart["summary"]["total_items"], 2);
    assert_eq!(cart["summary"]["estimated_total"], 5500);
    assert_eq!(cart["summary"]["estimated_total_display"], "₹5,500");

    let table = sandbox.run(&["cart"]).await;
    let text = String::from_utf8_lossy(&table.stdout);
    assert!(text.contains("Total Items: 2"));
    assert!(text.contains("Estimated Total: ₹5,500"));

    // No terminal to confirm on
    let refused = sandbox.run(&["cart", "clear"]).await;
    assert_eq!(refused.status.code(), Some(5));
    let cart = sandbox.run_json(&["--json", "cart", "list"]).await;
    assert_eq!(cart["summary"]["total_items"], 2);

    sandbox.run_json(&["--json", "cart", "clear", "--force"]).await;
    let cart = sandbox.run_json(&["--json", "cart", "list"]).await;
    assert_eq!(cart["items"], serde_json::json!([]));
    assert_eq!(cart["summary"]["estimated_total"], 0);

    let empty = sandbox.run(&["cart", "list"]).await;
    assert_eq!(
        String::from_utf8_lossy(&empty.stdout).trim(),
        "Your cart is empty."
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_suggests_similar_name() {
    let server = source_with_rows().await;
    let sandbox = Sandbox::new(&server.uri());

    let output = sandbox.run(&["--json", "show", "Sunrse PG"]).await;

    assert_eq!(output.status.code(), Some(4));
    let stderr: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(stderr["error"]["code"], "NOT_FOUND");
    assert!(stderr["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Did you mean 'Sunrise PG'?"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_source_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[storage]\ndir = \"unused\"\n").unwrap();

    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_pgfind"))
            .args(["--json", "list"])
            .env("PGFIND_CONFIG", &config_path)
            .env_remove("PGFIND_SOURCE_URL")
            .env_remove("PGFIND_API_KEY")
            .env("RUST_LOG", "off")
            .output()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(output.status.code(), Some(5));
    let stderr: Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(stderr["error"]["code"], "CONFIG_ERROR");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_config_show_masks_key() {
    let sandbox = Sandbox::new("https://example.supabase.co");
    let mut cmd = sandbox.command(&["--json", "config", "set", "source.api_key", "abcdefghijklmnop"]);
    let status = tokio::task::spawn_blocking(move || cmd.status())
        .await
        .unwrap()
        .unwrap();
    assert!(status.success());

    let shown = sandbox.run_json(&["--json", "config", "show"]).await;
    assert_eq!(shown["config"]["source"]["api_key"], "abcd...mnop");
    assert_eq!(shown["config"]["source"]["url"], "https://example.supabase.co");
}
