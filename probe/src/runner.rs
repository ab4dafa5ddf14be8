use crate::config::SmokeConfig;
use crate::report::Report;
use crate::result::{TestResult, TestStatus};
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SmokeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type SmokeResult<T> = Result<T, SmokeError>;

/// Frontend routes probed during the route phase, with a short description
/// used in the per-check message.
const FRONTEND_ROUTES: &[(&str, &str)] = &[
    ("/", "landing page"),
    ("/home", "home page"),
    ("/about", "about page"),
    ("/projects", "project list"),
    ("/projects/create", "project creation"),
    ("/projects/1", "project detail"),
    ("/projects/1/edit", "project editing"),
    ("/projects/1/calculate", "NESMA calculation"),
];

/// Backend API endpoints. 401 is acceptable here: the service is present but
/// locked down behind auth.
const API_ENDPOINTS: &[(&str, &str)] = &[
    ("/actuator/health", "health check"),
    ("/api/projects", "project API"),
    ("/api/nesma", "NESMA calculation API"),
];

/// Static assets served by the dev server. Missing assets degrade the UI but
/// do not break it, so anything short of a 200 is a warning.
const STATIC_RESOURCES: &[(&str, &str)] = &[
    ("/favicon.ico", "site icon"),
    ("/@vite/client", "Vite client"),
    ("/src/main.ts", "application entry"),
];

/// Sequential smoke-test runner. Owns the HTTP client and the append-only
/// result list for one run; probe failures are recorded, never propagated.
pub struct SmokeRunner {
    config: SmokeConfig,
    client: reqwest::Client,
    results: Vec<TestResult>,
}

impl SmokeRunner {
    pub fn new(config: SmokeConfig) -> SmokeResult<Self> {
        config
            .validate()
            .map_err(|msg| SmokeError::InvalidConfig { message: msg })?;

        // Timeouts differ per phase, so they are applied per request rather
        // than on the client.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            config,
            client,
            results: Vec::new(),
        })
    }

    pub fn with_default_config() -> SmokeResult<Self> {
        Self::new(SmokeConfig::default())
    }

    /// Run every probe phase in order and print the summary report.
    pub async fn run(&mut self) -> Report {
        self.check_availability().await;
        self.check_routes().await;
        self.check_api_endpoints().await;
        self.check_static_resources().await;

        let report = Report::from_results(&self.results);
        report.print(&self.results);
        report
    }

    /// Results recorded so far, in probe order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// GET the frontend base URL and, on a 200, check the HTML for the
    /// markers a working dev build always carries.
    pub async fn check_availability(&mut self) {
        println!("\n🌐 Application availability");
        println!("{}", "-".repeat(50));

        let url = self.config.frontend_url.clone();
        let start = Instant::now();
        match self.get(&url, self.config.home_timeout).await {
            Ok(response) if response.status() == StatusCode::OK => {
                let elapsed = start.elapsed().as_secs_f64();
                self.log_result(
                    "Home page",
                    TestStatus::Pass,
                    format!("status 200, responded in {:.2}s", elapsed),
                );

                match response.text().await {
                    Ok(html) => self.check_home_markers(&html),
                    Err(e) => self.log_result(
                        "Home page",
                        TestStatus::Fail,
                        format!("failed to read body: {}", e),
                    ),
                }
            }
            Ok(response) => {
                self.log_result(
                    "Home page",
                    TestStatus::Fail,
                    format!("HTTP {}", response.status().as_u16()),
                );
            }
            Err(e) => {
                self.log_result("Home page", TestStatus::Fail, connection_error(&e));
            }
        }
    }

    /// Substring checks against the served HTML. A missing mount point or
    /// entry module is fatal for the UI; a missing Vite client only means HMR
    /// is off, so it warns instead.
    pub fn check_home_markers(&mut self, html: &str) {
        if html.contains("id=\"app\"") {
            self.log_result("App mount point", TestStatus::Pass, "mount point present");
        } else {
            self.log_result("App mount point", TestStatus::Fail, "mount point missing");
        }

        if html.contains("main.ts") {
            self.log_result("TypeScript entry", TestStatus::Pass, "entry module loaded");
        } else {
            self.log_result("TypeScript entry", TestStatus::Fail, "entry module not found");
        }

        if html.contains("@vite/client") {
            self.log_result("Vite dev server", TestStatus::Pass, "HMR client connected");
        } else {
            self.log_result(
                "Vite dev server",
                TestStatus::Warn,
                "Vite client may be misconfigured",
            );
        }
    }

    /// Probe every frontend route for plain reachability.
    pub async fn check_routes(&mut self) {
        println!("\n🛣️  Route availability");
        println!("{}", "-".repeat(50));

        for (route, description) in FRONTEND_ROUTES {
            let url = join_url(&self.config.frontend_url, route);
            let name = format!("Route {}", route);

            match self.get(&url, self.config.route_timeout).await {
                Ok(response) if response.status() == StatusCode::OK => {
                    self.log_result(name, TestStatus::Pass, format!("{} reachable", description));
                }
                Ok(response) => {
                    self.log_result(
                        name,
                        TestStatus::Fail,
                        format!("{} - HTTP {}", description, response.status().as_u16()),
                    );
                }
                Err(e) => {
                    self.log_result(
                        name,
                        TestStatus::Fail,
                        format!("{} - {}", description, connection_error(&e)),
                    );
                }
            }
        }
    }

    /// Probe the backend API. A 401 still counts as a pass: the service is
    /// up, it just requires auth.
    pub async fn check_api_endpoints(&mut self) {
        println!("\n🔗 API endpoints");
        println!("{}", "-".repeat(50));

        for (endpoint, description) in API_ENDPOINTS {
            let url = join_url(&self.config.backend_url, endpoint);
            let name = format!("API {}", endpoint);

            match self.get(&url, self.config.route_timeout).await {
                Ok(response) if response.status() == StatusCode::OK => {
                    self.log_result(name, TestStatus::Pass, format!("{} responding", description));
                }
                Ok(response) if response.status() == StatusCode::UNAUTHORIZED => {
                    self.log_result(
                        name,
                        TestStatus::Pass,
                        format!("{} - requires auth (acceptable)", description),
                    );
                }
                Ok(response) => {
                    self.log_result(
                        name,
                        TestStatus::Fail,
                        format!("{} - HTTP {}", description, response.status().as_u16()),
                    );
                }
                Err(_) => {
                    self.log_result(
                        name,
                        TestStatus::Fail,
                        format!("{} - cannot reach backend service", description),
                    );
                }
            }
        }
    }

    /// Probe the dev server's static assets. Failures here only warn.
    pub async fn check_static_resources(&mut self) {
        println!("\n🎨 Static resources");
        println!("{}", "-".repeat(50));

        for (resource, description) in STATIC_RESOURCES {
            let url = join_url(&self.config.frontend_url, resource);
            let name = format!("Resource {}", resource);

            match self.get(&url, self.config.resource_timeout).await {
                Ok(response) if response.status() == StatusCode::OK => {
                    self.log_result(name, TestStatus::Pass, format!("{} loaded", description));
                }
                Ok(response) => {
                    self.log_result(
                        name,
                        TestStatus::Warn,
                        format!("{} - status {}", description, response.status().as_u16()),
                    );
                }
                Err(_) => {
                    self.log_result(name, TestStatus::Warn, format!("{} unreachable", description));
                }
            }
        }
    }

    async fn get(&self, url: &str, timeout: Duration) -> Result<reqwest::Response, reqwest::Error> {
        debug!("GET {} (timeout {:?})", url, timeout);
        self.client.get(url).timeout(timeout).send().await
    }

    fn log_result(
        &mut self,
        test: impl Into<String>,
        status: TestStatus,
        message: impl Into<String>,
    ) {
        let result = TestResult::new(test, status, message);
        println!("{} {}: {}", result.status.icon(), result.test, result.message);
        match result.status {
            TestStatus::Pass => info!("{}: {}", result.test, result.message),
            TestStatus::Fail | TestStatus::Warn => warn!("{}: {}", result.test, result.message),
        }
        self.results.push(result);
    }
}

fn connection_error(e: &reqwest::Error) -> String {
    format!("connection error: {}", e)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:5173", "/"), "http://localhost:5173/");
        assert_eq!(
            join_url("http://localhost:5173/", "/about"),
            "http://localhost:5173/about"
        );
        assert_eq!(
            join_url("http://localhost:8080", "/actuator/health"),
            "http://localhost:8080/actuator/health"
        );
    }

    #[test]
    fn test_runner_rejects_invalid_config() {
        let config = SmokeConfig::new().with_frontend_url("not-a-url");
        assert!(matches!(
            SmokeRunner::new(config),
            Err(SmokeError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_home_markers_all_present() {
        let mut runner = SmokeRunner::with_default_config().unwrap();
        runner.check_home_markers(
            "<html><div id=\"app\"></div><script src=\"/src/main.ts\"></script>\
             <script src=\"/@vite/client\"></script></html>",
        );

        let results = runner.results();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.status == TestStatus::Pass));
    }

    #[test]
    fn test_home_markers_missing_vite_client_warns() {
        let mut runner = SmokeRunner::with_default_config().unwrap();
        runner.check_home_markers("<html><div id=\"app\"></div><script src=\"main.ts\"></script></html>");

        let results = runner.results();
        assert_eq!(results[0].status, TestStatus::Pass);
        assert_eq!(results[1].status, TestStatus::Pass);
        assert_eq!(results[2].status, TestStatus::Warn);
    }

    #[test]
    fn test_home_markers_missing_mount_point_fails() {
        let mut runner = SmokeRunner::with_default_config().unwrap();
        runner.check_home_markers("<html><body>plain page</body></html>");

        let results = runner.results();
        assert_eq!(results[0].status, TestStatus::Fail);
        assert_eq!(results[1].status, TestStatus::Fail);
        assert_eq!(results[2].status, TestStatus::Warn);
    }
}
