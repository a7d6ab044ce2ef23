//! Asynchronous employee create path
//!
//! A bounded in-process channel stands between the producing HTTP endpoint
//! and a listener task that persists received employees through the same
//! service create path as the synchronous API.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::domain::employee::Employee;
use crate::domain::error::DomainError;
use crate::infrastructure::employee::EmployeeService;

/// Producer half of the employee create queue
#[derive(Debug, Clone)]
pub struct EmployeeQueue {
    sender: mpsc::Sender<Employee>,
}

impl EmployeeQueue {
    /// Create a queue with the given capacity, returning the producer and
    /// the receiver to hand to [`run_listener`]
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Employee>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }

    /// Hand a validated employee to the queue
    ///
    /// Waits for channel capacity; fails only when the listener is gone.
    pub async fn send(&self, employee: Employee) -> Result<(), DomainError> {
        self.sender
            .send(employee)
            .await
            .map_err(|_| DomainError::internal("Employee queue listener is no longer running"))
    }
}

/// Drain the queue, persisting each employee through the shared create path
///
/// Runs until every producer handle is dropped. Failures are logged and the
/// employee is discarded; there are no retries.
pub async fn run_listener(mut receiver: mpsc::Receiver<Employee>, service: Arc<EmployeeService>) {
    while let Some(employee) = receiver.recv().await {
        info!("Received employee from queue");

        if let Err(error) = service.create(employee).await {
            warn!(%error, "Failed to persist employee from queue");
        }
    }

    info!("Employee queue listener stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::employee::Gender;
    use crate::infrastructure::employee::InMemoryEmployeeRepository;

    fn create_service() -> Arc<EmployeeService> {
        Arc::new(EmployeeService::new(Arc::new(
            InMemoryEmployeeRepository::new(),
        )))
    }

    fn valid_employee() -> Employee {
        Employee::new("Ann", "Lee")
            .with_gender(Gender::Female)
            .with_date_of_birth(NaiveDate::from_ymd_opt(1990, 4, 2).unwrap())
    }

    #[tokio::test]
    async fn test_queued_employee_is_persisted() {
        let service = create_service();
        let (queue, receiver) = EmployeeQueue::new(8);

        queue.send(valid_employee()).await.unwrap();
        drop(queue);

        run_listener(receiver, Arc::clone(&service)).await;

        assert_eq!(service.count().await.unwrap(), 1);
        let all = service.find_all().await.unwrap();
        assert_eq!(all[0].first_name.as_deref(), Some("Ann"));
        assert!(all[0].employee_id.is_some());
    }

    #[tokio::test]
    async fn test_invalid_queued_employee_is_discarded() {
        let service = create_service();
        let (queue, receiver) = EmployeeQueue::new(8);

        let mut invalid = valid_employee();
        invalid.first_name = None;

        queue.send(invalid).await.unwrap();
        queue.send(valid_employee()).await.unwrap();
        drop(queue);

        run_listener(receiver, Arc::clone(&service)).await;

        // the invalid record is dropped, the valid one lands
        assert_eq!(service.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_send_fails_after_listener_stopped() {
        let (queue, receiver) = EmployeeQueue::new(8);
        drop(receiver);

        let err = queue.send(valid_employee()).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }
}
