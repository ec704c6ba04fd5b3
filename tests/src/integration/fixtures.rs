//! Shared test fixtures: counting repositories, spy handlers, and a
//! buffer-backed log capture for asserting on handler output.

use async_trait::async_trait;
use sqm_audit::{AuditRepository, AuditStatus, QualityAudit};
use sqm_bus::{EventEnvelope, EventHandler};
use sqm_customer::{Customer, CustomerRepository};
use sqm_inspection::{Inspection, InspectionRepository, InspectionStatus};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Customer repository that records every lookup.
pub struct CountingCustomerRepo {
    records: HashMap<String, Customer>,
    pub lookups: Mutex<Vec<String>>,
}

impl CountingCustomerRepo {
    pub fn with(customer: Customer) -> Arc<Self> {
        let mut records = HashMap::new();
        records.insert(customer.id.clone(), customer);
        Arc::new(Self {
            records,
            lookups: Mutex::new(Vec::new()),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            records: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CustomerRepository for CountingCustomerRepo {
    async fn find_by_id(&self, customer_id: &str) -> anyhow::Result<Option<Customer>> {
        self.lookups.lock().unwrap().push(customer_id.to_string());
        Ok(self.records.get(customer_id).cloned())
    }
}

/// Inspection repository that records every query.
pub struct CountingInspectionRepo {
    scheduled: Vec<Inspection>,
    pub queries: Mutex<Vec<(String, InspectionStatus)>>,
}

impl CountingInspectionRepo {
    pub fn with_scheduled(scheduled: Vec<Inspection>) -> Arc<Self> {
        Arc::new(Self {
            scheduled,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl InspectionRepository for CountingInspectionRepo {
    async fn find_by_customer_and_status(
        &self,
        customer_id: &str,
        status: InspectionStatus,
    ) -> anyhow::Result<Vec<Inspection>> {
        self.queries
            .lock()
            .unwrap()
            .push((customer_id.to_string(), status));
        Ok(self.scheduled.clone())
    }
}

/// Audit repository that records every query.
pub struct CountingAuditRepo {
    open: Vec<QualityAudit>,
    pub queries: Mutex<Vec<(String, AuditStatus)>>,
}

impl CountingAuditRepo {
    pub fn with_open(open: Vec<QualityAudit>) -> Arc<Self> {
        Arc::new(Self {
            open,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AuditRepository for CountingAuditRepo {
    async fn find_by_supplier_and_status(
        &self,
        supplier_id: &str,
        status: AuditStatus,
    ) -> anyhow::Result<Vec<QualityAudit>> {
        self.queries
            .lock()
            .unwrap()
            .push((supplier_id.to_string(), status));
        Ok(self.open.clone())
    }
}

/// Handler that only counts invocations.
#[derive(Default)]
pub struct SpyHandler {
    pub invocations: AtomicUsize,
}

impl SpyHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventHandler for SpyHandler {
    fn name(&self) -> &'static str {
        "test.spy"
    }

    async fn handle(&self, _event: &EventEnvelope) -> anyhow::Result<()> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Captures formatted tracing output into a shared buffer.
///
/// Install with [`LogCapture::install`]; the returned guard scopes the
/// subscriber to the current thread, which is sufficient for
/// current-thread `#[tokio::test]` runtimes.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(capture.clone())
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

pub struct LogCaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogCaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogCaptureWriter {
            buffer: Arc::clone(&self.buffer),
        }
    }
}
