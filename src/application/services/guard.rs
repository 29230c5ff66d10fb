//! Inference Guard - 推理调用的并发与超时控制
//!
//! 模型实例是进程级共享资源，推理运行时通常不保证并发安全，
//! 因此每个模型配一个 semaphore，并给单次调用加超时

use std::future::Future;
use std::time::Duration;

use tokio::sync::Semaphore;

use crate::application::error::GenerationError;
use crate::application::ports::InferenceError;

pub struct InferenceGuard {
    permits: Semaphore,
    timeout: Duration,
}

impl InferenceGuard {
    pub fn new(max_concurrent: usize, timeout: Duration) -> Self {
        Self {
            permits: Semaphore::new(max_concurrent.max(1)),
            timeout,
        }
    }

    /// 持有 permit 执行一次推理调用
    pub async fn run<T, F>(&self, call: F) -> Result<T, GenerationError>
    where
        F: Future<Output = Result<T, InferenceError>>,
    {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| GenerationError::failure("inference guard closed"))?;

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result.map_err(GenerationError::from),
            Err(_) => Err(InferenceError::Timeout.into()),
        }
    }

    pub fn available_permits(&self) -> usize {
        self.permits.available_permits()
    }
}
