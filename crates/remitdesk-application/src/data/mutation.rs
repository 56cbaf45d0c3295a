use super::data_access::DataAccess;
use remitdesk_core::repository::{ActionReceipt, AdminAction, AdminRepository};
use remitdesk_core::transaction::TransactionStatus;
use remitdesk_core::{ApiError, ApiResult};
use std::future::Future;
use std::sync::Arc;

/// Statuses for which a failed backend call is retried against the simulator.
const FALLBACK_STATUSES: [u16; 3] = [400, 404, 502];

/// True when `err` should trigger the simulated fallback: a 400, 404 or 502
/// answer, or no answer at all.
pub fn should_fall_back(err: &ApiError) -> bool {
    match err.status {
        None => true,
        Some(status) => FALLBACK_STATUSES.contains(&status),
    }
}

/// Runs a mutation against the backend with an optional simulated stand-in.
///
/// 1. In simulation mode, the simulated source is tried first; if it fails
///    the backend is tried.
/// 2. When the backend fails and a simulated source exists, it runs once
///    more if simulation mode is on or [`should_fall_back`] holds. If that
///    also fails, the backend's error is returned.
///
/// There is no retry beyond that single fallback.
#[derive(Debug, Clone, Copy)]
pub struct MutationPipeline {
    use_mock: bool,
}

impl MutationPipeline {
    pub fn new(use_mock: bool) -> Self {
        Self { use_mock }
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock
    }

    pub async fn run<T, R, RFut, M, MFut>(&self, real: R, mock: Option<M>) -> ApiResult<T>
    where
        R: FnOnce() -> RFut,
        RFut: Future<Output = ApiResult<T>>,
        M: Fn() -> MFut,
        MFut: Future<Output = ApiResult<T>>,
    {
        if self.use_mock {
            if let Some(mock) = &mock {
                match mock().await {
                    Ok(value) => return Ok(value),
                    Err(e) => tracing::debug!("Simulated mutation failed, trying backend: {}", e),
                }
            }
        }

        let err = match real().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        if let Some(mock) = &mock {
            if self.use_mock || should_fall_back(&err) {
                tracing::warn!(status = ?err.status, "Backend mutation failed, using simulated result: {}", err);
                if let Ok(value) = mock().await {
                    return Ok(value);
                }
            }
        }

        Err(err)
    }
}

/// The admin mutations offered by the console.
///
/// Each call goes through the [`MutationPipeline`] and, on success, drops the
/// cached list of the entity it touched.
pub struct AdminMutations {
    pipeline: MutationPipeline,
    backend: Option<Arc<dyn AdminRepository>>,
    simulated: Option<Arc<dyn AdminRepository>>,
    data: Arc<DataAccess>,
}

impl AdminMutations {
    /// # Arguments
    ///
    /// * `pipeline` - Fallback policy
    /// * `backend` - HTTP repository, absent when no backend URL is configured
    /// * `simulated` - Simulator used as stand-in
    /// * `data` - Cached reads to invalidate
    pub fn new(
        pipeline: MutationPipeline,
        backend: Option<Arc<dyn AdminRepository>>,
        simulated: Option<Arc<dyn AdminRepository>>,
        data: Arc<DataAccess>,
    ) -> Self {
        Self {
            pipeline,
            backend,
            simulated,
            data,
        }
    }

    pub async fn apply(&self, action: &AdminAction) -> ApiResult<ActionReceipt> {
        let backend = self.backend.as_ref();
        let real = move || async move {
            match backend {
                Some(repository) => repository.apply(action).await,
                None => Err(ApiError::network("No backend configured")),
            }
        };
        let mock = self
            .simulated
            .as_ref()
            .map(|repository| move || repository.apply(action));

        let receipt = self.pipeline.run(real, mock).await?;
        self.data.invalidate(action.entity()).await;
        tracing::info!(entity = %receipt.entity, id = %receipt.id, status = %receipt.status, simulated = receipt.simulated, "Mutation applied");
        Ok(receipt)
    }

    pub async fn approve_kyc(&self, user_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::ApproveKyc {
            user_id: user_id.to_string(),
        })
        .await
    }

    pub async fn block_user(&self, user_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::BlockUser {
            user_id: user_id.to_string(),
        })
        .await
    }

    pub async fn unblock_user(&self, user_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::UnblockUser {
            user_id: user_id.to_string(),
        })
        .await
    }

    pub async fn approve_kyb(&self, business_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::ApproveKyb {
            business_id: business_id.to_string(),
        })
        .await
    }

    pub async fn decline_kyb(&self, business_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::DeclineKyb {
            business_id: business_id.to_string(),
        })
        .await
    }

    pub async fn block_business(&self, business_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::BlockBusiness {
            business_id: business_id.to_string(),
        })
        .await
    }

    pub async fn unblock_business(&self, business_id: &str) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::UnblockBusiness {
            business_id: business_id.to_string(),
        })
        .await
    }

    pub async fn update_transaction_status(
        &self,
        transaction_id: &str,
        status: TransactionStatus,
    ) -> ApiResult<ActionReceipt> {
        self.apply(&AdminAction::UpdateTransactionStatus {
            transaction_id: transaction_id.to_string(),
            status,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remitdesk_core::ApiErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rejected(status: u16) -> ApiError {
        ApiError::rejected(status, format!("HTTP {}", status))
    }

    #[test]
    fn test_fallback_predicate() {
        for status in [400, 404, 502] {
            assert!(should_fall_back(&rejected(status)), "status {}", status);
        }
        for status in [401, 403, 409, 500, 503] {
            assert!(!should_fall_back(&rejected(status)), "status {}", status);
        }
        assert!(should_fall_back(&ApiError::network("refused")));
        assert!(should_fall_back(&ApiError::timeout("slow")));
    }

    #[tokio::test]
    async fn test_real_success_skips_mock_in_real_mode() {
        let mock_calls = AtomicUsize::new(0);
        let calls = &mock_calls;
        let result = MutationPipeline::new(false)
            .run(
                || async { Ok("real") },
                Some(move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("mock")
                }),
            )
            .await;

        assert_eq!(result, Ok("real"));
        assert_eq!(mock_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_mock_mode_tries_mock_first() {
        let real_calls = AtomicUsize::new(0);
        let calls = &real_calls;
        let result = MutationPipeline::new(true)
            .run(
                move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("real")
                },
                Some(|| async { Ok("mock") }),
            )
            .await;

        assert_eq!(result, Ok("mock"));
        assert_eq!(real_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_eligible_failure_falls_back_once() {
        let mock_calls = AtomicUsize::new(0);
        let calls = &mock_calls;
        let result = MutationPipeline::new(false)
            .run(
                || async { Err(rejected(404)) },
                Some(move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("mock")
                }),
            )
            .await;

        assert_eq!(result, Ok("mock"));
        assert_eq!(mock_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ineligible_failure_is_returned() {
        let mock_calls = AtomicUsize::new(0);
        let calls = &mock_calls;
        let result: ApiResult<&str> = MutationPipeline::new(false)
            .run(
                || async { Err(rejected(409)) },
                Some(move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("mock")
                }),
            )
            .await;

        assert_eq!(result.unwrap_err().status, Some(409));
        assert_eq!(mock_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failed_fallback_returns_original_error() {
        let result: ApiResult<&str> = MutationPipeline::new(false)
            .run(
                || async { Err(ApiError::network("refused")) },
                Some(|| async { Err(rejected(404)) }),
            )
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.status, None);
    }

    #[tokio::test]
    async fn test_mock_mode_retries_mock_after_backend_failure() {
        let mock_calls = AtomicUsize::new(0);
        let calls = &mock_calls;
        let result: ApiResult<&str> = MutationPipeline::new(true)
            .run(
                || async { Err(rejected(500)) },
                Some(move || async move {
                    let n = calls.fetch_add(1, Ordering::SeqCst);
                    if n == 0 { Err(rejected(404)) } else { Ok("mock") }
                }),
            )
            .await;

        assert_eq!(result, Ok("mock"));
        assert_eq!(mock_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_without_mock_the_error_passes_through() {
        let result: ApiResult<&str> = MutationPipeline::new(true)
            .run(
                || async { Err(rejected(404)) },
                None::<fn() -> std::future::Ready<ApiResult<&'static str>>>,
            )
            .await;

        assert_eq!(result.unwrap_err().status, Some(404));
    }
}
