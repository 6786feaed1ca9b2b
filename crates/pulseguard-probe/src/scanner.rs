//! TCP connect scanning with a bounded in-flight window.

use crate::classify::{classify, ProbeOutcome};
use crate::error::{ProbeError, ProbeResult};
use crate::ports::service_name;
use pulseguard_core::{PortProbeResult, Protocol, ScanSummary};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::{lookup_host, TcpStream};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default bounded in-flight window for port probes.
///
/// Large enough that a full 1-65535 sweep finishes in minutes at common
/// timeouts, small enough not to exhaust local ephemeral ports or flood the
/// target. Quick/common presets are far below this and effectively run fully
/// concurrent.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 256;

/// Default per-port probe timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Scan configuration
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Timeout applied to each individual port probe
    pub timeout_per_port: Duration,

    /// Maximum number of probes in flight at once
    pub max_in_flight: usize,

    /// Optional hard deadline for the whole batch. Ports not yet classified
    /// when it expires are recorded as filtered and the scan completes.
    pub overall_timeout: Option<Duration>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_per_port: DEFAULT_TIMEOUT,
            max_in_flight: DEFAULT_MAX_IN_FLIGHT,
            overall_timeout: None,
        }
    }
}

/// Port scanner running TCP connect probes against a single target.
///
/// Each scan invocation is independent: no classifier state or result buffers
/// are shared between concurrent scans.
#[derive(Debug, Clone, Default)]
pub struct PortScanner {
    config: ScanConfig,
}

impl PortScanner {
    /// Create a scanner with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom configuration
    #[must_use]
    pub const fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Set the per-port probe timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout_per_port = timeout;
        self
    }

    /// Set the bounded in-flight window
    #[must_use]
    pub const fn max_in_flight(mut self, window: usize) -> Self {
        self.config.max_in_flight = window;
        self
    }

    /// Set a hard deadline for the whole batch
    #[must_use]
    pub const fn overall_timeout(mut self, deadline: Duration) -> Self {
        self.config.overall_timeout = Some(deadline);
        self
    }

    /// Probe `ports` on `target` and aggregate the outcome.
    ///
    /// The result sequence preserves the order of `ports` regardless of probe
    /// completion order.
    pub async fn scan(&self, target: &str, ports: &[u16]) -> ProbeResult<ScanSummary> {
        self.scan_with_cancel(target, ports, CancellationToken::new()).await
    }

    /// Variant accepting a `CancellationToken`.
    ///
    /// When the token fires, in-flight probes are abandoned, no partial
    /// result is delivered, and the scan fails with [`ProbeError::Cancelled`].
    pub async fn scan_with_cancel(
        &self,
        target: &str,
        ports: &[u16],
        cancel: CancellationToken,
    ) -> ProbeResult<ScanSummary> {
        if ports.is_empty() {
            return Err(ProbeError::InvalidPorts("a scan needs at least one port".into()));
        }

        let ip = resolve_target(target).await?;
        debug!(target, ip = %ip, ports = ports.len(), "starting port scan");

        let start = Instant::now();
        let sem = Arc::new(Semaphore::new(self.config.max_in_flight.max(1)));
        let mut set: JoinSet<(usize, u16, Option<ProbeOutcome>)> = JoinSet::new();

        for (idx, &port) in ports.iter().enumerate() {
            let sem = Arc::clone(&sem);
            let cancel = cancel.clone();
            let addr = SocketAddr::new(ip, port);
            let timeout = self.config.timeout_per_port;

            set.spawn(async move {
                let Ok(_permit) = sem.acquire_owned().await else {
                    return (idx, port, None);
                };
                if cancel.is_cancelled() {
                    return (idx, port, None);
                }
                let outcome = tokio::select! {
                    () = cancel.cancelled() => None,
                    outcome = probe_port(addr, timeout) => Some(outcome),
                };
                (idx, port, outcome)
            });
        }

        // Results are re-slotted by index so completion order never leaks
        // into the output sequence.
        let mut results: Vec<Option<PortProbeResult>> = vec![None; ports.len()];

        let deadline_expired = async {
            match self.config.overall_timeout {
                Some(budget) => time::sleep_until(start + budget).await,
                None => std::future::pending().await,
            }
        };
        tokio::pin!(deadline_expired);

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    set.abort_all();
                    return Err(ProbeError::Cancelled);
                }
                () = &mut deadline_expired => {
                    set.abort_all();
                    debug!(target, "scan deadline reached, recording outstanding ports as filtered");
                    break;
                }
                joined = set.join_next() => match joined {
                    None => break,
                    Some(Ok((idx, port, Some(outcome)))) => {
                        results[idx] = Some(port_result(port, outcome));
                    }
                    // Aborted, or the task observed cancellation first.
                    Some(Ok((_, _, None))) | Some(Err(_)) => {}
                }
            }
        }

        if cancel.is_cancelled() {
            return Err(ProbeError::Cancelled);
        }

        let port_results: Vec<PortProbeResult> = results
            .into_iter()
            .zip(ports.iter())
            .map(|(slot, &port)| slot.unwrap_or_else(|| port_result(port, ProbeOutcome::TimedOut)))
            .collect();

        let scan_time_ms = elapsed_ms(start).max(1);
        let summary = ScanSummary::tally(target, scan_time_ms, port_results);
        debug!(
            target,
            open = summary.open_ports,
            closed = summary.closed_ports,
            filtered = summary.filtered_ports,
            elapsed_ms = summary.scan_time_ms,
            "scan complete"
        );

        Ok(summary)
    }
}

/// Resolve the scan target to an address, or fail the whole scan.
///
/// Resolution failure is a scan-level error, deliberately distinct from any
/// per-port classification.
async fn resolve_target(target: &str) -> ProbeResult<IpAddr> {
    if let Ok(ip) = target.parse::<IpAddr>() {
        return Ok(ip);
    }

    let mut addrs = lookup_host((target, 0u16))
        .await
        .map_err(|e| ProbeError::Resolve(format!("{target}: {e}")))?;

    addrs
        .next()
        .map(|addr| addr.ip())
        .ok_or_else(|| ProbeError::Resolve(format!("{target}: no addresses returned")))
}

async fn probe_port(addr: SocketAddr, timeout: Duration) -> ProbeOutcome {
    let start = Instant::now();
    match time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => ProbeOutcome::Connected { elapsed_ms: elapsed_ms(start) },
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::ConnectionRefused => {
            ProbeOutcome::Refused { elapsed_ms: elapsed_ms(start) }
        }
        // Unreachable-network errors carry no refusal signal from the peer;
        // classify like silence.
        Ok(Err(_)) | Err(_) => ProbeOutcome::TimedOut,
    }
}

fn port_result(port: u16, outcome: ProbeOutcome) -> PortProbeResult {
    PortProbeResult {
        port,
        protocol: Protocol::Tcp,
        status: classify(outcome),
        service: service_name(port).unwrap_or("Unknown").to_string(),
        response_time_ms: outcome.response_time_ms(),
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
