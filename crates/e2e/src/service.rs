//! Driver service management - spawning and health checking a local
//! chromedriver / geckodriver / msedgedriver process

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::driver::BrowserKind;
use crate::error::{E2eError, E2eResult};

/// Handle to a running driver process
pub struct DriverService {
    child: Child,
    executable: PathBuf,
    url: String,
    port: u16,
    stopped: bool,
}

impl DriverService {
    /// Spawn `executable` and wait until its status endpoint answers
    pub async fn spawn(
        kind: BrowserKind,
        executable: &Path,
        port: Option<u16>,
        startup_timeout: Duration,
    ) -> E2eResult<Self> {
        let port = match port {
            Some(port) => port,
            None => find_free_port()?,
        };
        let url = format!("http://127.0.0.1:{}", port);

        info!("Spawning {} on port {}", executable.display(), port);

        let child = Command::new(executable)
            .args(kind.driver_port_args(port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                E2eError::DriverStartup(format!("Failed to spawn {}: {}", executable.display(), e))
            })?;

        let mut service = DriverService {
            child,
            executable: executable.to_path_buf(),
            url,
            port,
            stopped: false,
        };

        if let Err(e) = service.wait_for_ready(startup_timeout).await {
            let _ = service.stop().await;
            return Err(e);
        }

        info!("Driver is ready at {}", service.url);
        Ok(service)
    }

    /// Poll `GET /status` until the driver reports success
    async fn wait_for_ready(&mut self, timeout_duration: Duration) -> E2eResult<()> {
        let status_url = format!("{}/status", self.url);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()?;

        let start = std::time::Instant::now();
        let mut attempts = 0;

        while start.elapsed() < timeout_duration {
            attempts += 1;

            if let Some(status) = self.child.try_wait()? {
                return Err(E2eError::DriverStartup(format!(
                    "{} exited during startup ({})",
                    self.executable.display(),
                    status
                )));
            }

            match client.get(&status_url).send().await {
                Ok(resp) if resp.status().is_success() => {
                    return Ok(());
                }
                Ok(resp) => {
                    warn!("Driver status returned {}", resp.status());
                }
                Err(e) => {
                    if attempts == 1 {
                        info!("Waiting for driver to start...");
                    }
                    // Connection refused is expected while the driver is starting
                    if !e.is_connect() {
                        warn!("Driver status error: {}", e);
                    }
                }
            }

            sleep(Duration::from_millis(100)).await;
        }

        Err(E2eError::DriverHealthCheck(attempts))
    }

    /// WebDriver endpoint of this service
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Stop the driver process
    pub async fn stop(&mut self) -> E2eResult<()> {
        if self.stopped {
            return Ok(());
        }
        self.stopped = true;

        info!("Stopping driver (pid: {})", self.child.id());

        // Try graceful shutdown first
        #[cfg(unix)]
        {
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            let pid = Pid::from_raw(self.child.id() as i32);
            if kill(pid, Signal::SIGTERM).is_ok() {
                sleep(Duration::from_millis(200)).await;
            }
        }

        self.force_kill();
        Ok(())
    }

    fn force_kill(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Drop for DriverService {
    fn drop(&mut self) {
        // No grace period outside an async context
        if !self.stopped {
            self.stopped = true;
            self.force_kill();
        }
    }
}

/// Find a free local port for the driver to listen on
pub fn find_free_port() -> E2eResult<u16> {
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}
