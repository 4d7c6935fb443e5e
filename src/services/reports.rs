use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::models::{ReportQuery, ReportView},
    infrastructure::state::AppState,
};

use super::errors::ServiceError;

pub struct ReportService {
    pub state: Arc<AppState>,
}

impl ReportService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// One upstream call per lookup. Nothing is cached between calls.
    pub async fn lookup(&self, report_number: &str) -> Result<ReportView, ServiceError> {
        let payload = ReportQuery::new(self.state.query.as_str(), report_number);

        let reply = match self.state.gateway.post(&payload).await {
            Ok(reply) => reply,
            Err(fault) => {
                warn!(report_number, error = %fault, "upstream report request failed");
                return Err(fault.into());
            }
        };

        let view = ReportView::from_body(report_number, &reply.body)
            .map_err(|err| ServiceError::MalformedResponse(err.to_string()))?;

        info!(report_number, status = %reply.status, "{}", view.raw_data);
        info!(
            report_number,
            elapsed_ms = reply.elapsed.as_millis() as u64,
            "Returned in {:.3}",
            reply.elapsed.as_secs_f64()
        );

        Ok(view)
    }

    pub fn render(&self, view: &ReportView) -> Result<String, ServiceError> {
        Ok(self.state.views.render_report(view)?)
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use async_trait::async_trait;
    use parking_lot::Mutex;
    use reqwest::StatusCode;

    use super::ReportService;
    use crate::{
        domain::models::ReportQuery,
        infrastructure::{
            config::Config,
            query::QueryDocument,
            state::AppState,
            upstream::{ReportGateway, TransportFault, UpstreamReply},
            views::Views,
        },
        services::errors::ServiceError,
    };

    #[derive(Default)]
    struct CapturingGateway {
        calls: Mutex<Vec<ReportQuery>>,
        fault: Option<TransportFault>,
    }

    #[async_trait]
    impl ReportGateway for CapturingGateway {
        async fn post(&self, payload: &ReportQuery) -> Result<UpstreamReply, TransportFault> {
            self.calls.lock().push(payload.clone());
            if let Some(fault) = &self.fault {
                return Err(fault.clone());
            }
            Ok(UpstreamReply {
                status: StatusCode::OK,
                body: br#"{"data":{"report":null}}"#.to_vec(),
                elapsed: Duration::from_millis(3),
            })
        }
    }

    fn service(gateway: Arc<CapturingGateway>) -> ReportService {
        let views = Views::from_raw(&[("report.html", "{{ report_number }}")]).expect("views");
        let state = AppState::new(
            Arc::new(Config::new("key", "http://upstream.invalid/graphql")),
            QueryDocument::from("query { getReport }"),
            gateway,
            Arc::new(views),
        );
        ReportService::new(Arc::new(state))
    }

    #[tokio::test]
    async fn empty_report_number_is_forwarded_unchanged() {
        let gateway = Arc::new(CapturingGateway::default());
        let service = service(Arc::clone(&gateway));

        let view = service.lookup("").await.expect("lookup succeeds");

        let calls = gateway.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].variables.report_number, "");
        assert_eq!(calls[0].query, "query { getReport }");
        assert_eq!(view.report_number, "");
    }

    #[tokio::test]
    async fn transport_fault_is_returned_as_service_error() {
        let gateway = Arc::new(CapturingGateway {
            fault: Some(TransportFault::new("dns error: no such host")),
            ..Default::default()
        });
        let service = service(Arc::clone(&gateway));

        let err = service.lookup("123").await.expect_err("fault expected");

        assert!(matches!(err, ServiceError::Transport(_)));
        assert_eq!(err.to_string(), "dns error: no such host");
    }
}
