use std::net::SocketAddr;
use std::sync::Arc;

use ::common::storage::FilesystemFileStore;
use reqwest::Client;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::{Value, json};
use tempfile::TempDir;

use agency_server::config::{
    AppConfig, CorsConfig, DatabaseConfig, SeedConfig, ServerConfig, StorageConfig,
};
use agency_server::entity::artist;
use agency_server::repository::SeaOrmStore;
use agency_server::state::AppState;

pub mod routes {
    pub const UPLOAD: &str = "/api/upload";
    pub const USER_ADD: &str = "/api/user/add";
    pub const USER_LOGIN: &str = "/api/user/login";
    pub const ARTIST_ADD: &str = "/api/artist/add";
    pub const ARTIST_UPDATE: &str = "/api/artist/update";
    pub const ARTIST_DELETE: &str = "/api/artist/delete";
    pub const ARTIST_GET: &str = "/api/artist/get";
    pub const DEMO_ADD: &str = "/api/demo/add";
    pub const EVAL_ADD: &str = "/api/eval/add";
    pub const EVAL_LIST: &str = "/api/eval/list";
    pub const STATS_LATEST: &str = "/api/stats/latest";
    pub const STATS_PARTNERSHIP: &str = "/api/stats/partnership";
    pub const CASTING_SELECT: &str = "/api/casting/select";
}

/// Upload size limit used by every test server.
pub const MAX_UPLOAD_SIZE: u64 = 1024 * 1024;

/// A running test server backed by its own SQLite file and upload directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    /// Keeps the database file and uploads alive for the test's duration.
    pub dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestResponse {
    async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.expect("Failed to read response body");
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// Envelope `code` field.
    pub fn code(&self) -> i64 {
        self.body["code"]
            .as_i64()
            .unwrap_or_else(|| panic!("Response has no numeric code: {}", self.text))
    }

    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// Assert a successful envelope.
    pub fn assert_ok(&self) -> &Value {
        assert_eq!(self.status, 200, "HTTP status: {}", self.text);
        assert_eq!(self.code(), 0, "Unexpected failure: {}", self.text);
        assert_eq!(self.body["msg"], "success");
        self.data()
    }

    /// Assert a failure envelope carrying `code`.
    pub fn assert_code(&self, code: i64) {
        assert_eq!(self.status, 200, "HTTP status: {}", self.text);
        assert_eq!(self.code(), code, "Unexpected envelope: {}", self.text);
        assert_eq!(self.data(), &json!({}), "Failure data must be empty");
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());
        let upload_dir = dir.path().join("uploads");

        let db = agency_server::database::init_db(&db_url)
            .await
            .expect("Failed to initialize test database");

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig::default(),
            },
            database: DatabaseConfig { url: db_url },
            storage: StorageConfig {
                upload_dir: upload_dir.clone(),
                max_upload_size: MAX_UPLOAD_SIZE,
            },
            seed: SeedConfig::default(),
        };

        let files = FilesystemFileStore::new(upload_dir, MAX_UPLOAD_SIZE)
            .await
            .expect("Failed to create upload store");
        let store = Arc::new(SeaOrmStore::new(db.clone()));
        agency_server::seed::seed_default_admin(&*store, &app_config.seed)
            .await
            .expect("Failed to seed admin");

        let state = AppState {
            store,
            files: Arc::new(files),
            config: app_config,
        };
        let app = agency_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST `{"params": params}` to `path`.
    pub async fn post_params(&self, path: &str, params: Value) -> TestResponse {
        self.post_json(path, &json!({ "params": params })).await
    }

    /// POST a raw JSON body.
    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request")
    }

    /// Multipart upload with an optional `name` purpose field.
    pub async fn upload(
        &self,
        file_name: &str,
        file_bytes: Vec<u8>,
        purpose: Option<&str>,
    ) -> TestResponse {
        let part = reqwest::multipart::Part::bytes(file_bytes).file_name(file_name.to_string());
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(purpose) = purpose {
            form = form.text("name", purpose.to_string());
        }

        let res = self
            .client
            .post(self.url(routes::UPLOAD))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart upload request");

        TestResponse::from_response(res).await
    }

    /// Create an artist via the API and return its `artistId`.
    pub async fn create_artist(&self, nick_name: &str, job: i32, salary: i32) -> i32 {
        let res = self
            .post_params(routes::ARTIST_ADD, artist_params(nick_name, job, salary))
            .await;
        let data = res.assert_ok();
        data["artistId"]
            .as_i64()
            .expect("addArtist should return artistId") as i32
    }

    /// Record an evaluation via the API.
    pub async fn evaluate(&self, artist_id: i32, score: i32, time: i64) {
        self.post_params(
            routes::EVAL_ADD,
            json!({
                "content": "Audition",
                "time": time,
                "director": "Director Wang",
                "artistId": artist_id,
                "evaluate": "Confident stage presence, clear voice, good rhythm.",
                "score": score,
            }),
        )
        .await
        .assert_ok();
    }

    /// Register a demo via the API.
    pub async fn add_demo(&self, artist_id: i32, demo_type: i32, file_url: &str) {
        self.post_params(
            routes::DEMO_ADD,
            json!({"demoType": demo_type, "fileUrl": file_url, "artistId": artist_id}),
        )
        .await
        .assert_ok();
    }

    /// Overwrite stored artist columns the API does not expose.
    pub async fn backdate_artist(&self, artist_id: i32, create_time: i64) {
        let model = artist::Entity::find_by_id(artist_id)
            .one(&self.db)
            .await
            .expect("Failed to load artist")
            .expect("Artist should exist");
        let mut active: artist::ActiveModel = model.into();
        active.create_time = Set(create_time);
        active.update(&self.db).await.expect("Failed to backdate artist");
    }
}

/// A complete `addArtist` parameter object.
pub fn artist_params(nick_name: &str, job: i32, salary: i32) -> Value {
    json!({
        "avatar": format!("/uploads/{nick_name}.png"),
        "name": format!("Name of {nick_name}"),
        "nickName": nick_name,
        "job": job,
        "address": "Beijing",
        "ID": "110101199001011234",
        "qq": "10001",
        "wechat": format!("{nick_name}_wx"),
        "telephone": "13900000000",
        "emergencyTelphone": "13800000000",
        "creditCardNum": "6222000000000000",
        "identityCardFront": "/uploads/front.png",
        "identityCardReverse": "/uploads/back.png",
        "salary": salary,
        "gender": 0,
    })
}
