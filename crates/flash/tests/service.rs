//! View-model tests against a mock chain source.

use std::{collections::HashMap, sync::Mutex};

use alloy_primitives::{Address, Bytes, U256};
use ftusdt_flash::{CreateFlashRequest, FlashError, FlashService, FlashSource, RawFlashRequest};
use ftusdt_primitives::{FlashStatus, FlashTransaction, FTUSDT_DECIMALS};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MockError(&'static str);

#[derive(Default)]
struct MockSource {
    ids: Vec<U256>,
    records: HashMap<U256, FlashTransaction>,
    failing: Option<U256>,
    created: Mutex<Vec<RawFlashRequest>>,
    executed: Mutex<Vec<U256>>,
    cancelled: Mutex<Vec<U256>>,
}

impl FlashSource for MockSource {
    type Error = MockError;

    async fn transaction_ids(&self, _account: Address) -> Result<Vec<U256>, Self::Error> {
        Ok(self.ids.clone())
    }

    async fn transaction(&self, id: U256) -> Result<FlashTransaction, Self::Error> {
        if self.failing == Some(id) {
            return Err(MockError("record resolution rejected"));
        }
        self.records.get(&id).cloned().ok_or(MockError("unknown id"))
    }

    async fn create(&self, request: &RawFlashRequest) -> Result<(), Self::Error> {
        self.created.lock().unwrap().push(request.clone());
        Ok(())
    }

    async fn execute(&self, id: U256) -> Result<(), Self::Error> {
        self.executed.lock().unwrap().push(id);
        Ok(())
    }

    async fn cancel(&self, id: U256) -> Result<(), Self::Error> {
        self.cancelled.lock().unwrap().push(id);
        Ok(())
    }
}

fn record(id: u64, purpose: &'static [u8]) -> FlashTransaction {
    FlashTransaction {
        id: U256::from(id),
        sender: Address::from([0x11; 20]),
        recipient: Address::from([0x22; 20]),
        amount: U256::from(10_000_000u64),
        deadline: 2_000,
        min_execution_time: 1_000,
        fee: U256::from(10_000u64),
        executed: false,
        cancelled: false,
        purpose: Bytes::from_static(purpose),
        required_approvals: 2,
        current_approvals: 1,
    }
}

fn source_with(ids: &[u64], records: Vec<FlashTransaction>) -> MockSource {
    MockSource {
        ids: ids.iter().copied().map(U256::from).collect(),
        records: records.into_iter().map(|r| (r.id, r)).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn lists_records_in_id_order_with_converted_units() {
    let source = source_with(&[1, 2], vec![record(1, b"rent"), record(2, b"invoice")]);
    let service = FlashService::new(source, FTUSDT_DECIMALS);

    let views = service.list_for_account(Address::from([0x11; 20])).await.unwrap();
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].id, U256::from(1));
    assert_eq!(views[1].id, U256::from(2));
    assert_eq!(views[0].amount, "10");
    assert_eq!(views[0].fee, "0.01");
    assert_eq!(views[0].purpose, "rent");
    assert_eq!(views[0].status, FlashStatus::Pending);
    assert_eq!(views[0].current_approvals, 1);
    assert_eq!(views[0].required_approvals, 2);
}

#[tokio::test]
async fn one_failing_resolver_fails_the_whole_list() {
    let mut source = source_with(&[1, 2, 3], vec![record(1, b"a"), record(3, b"c")]);
    source.failing = Some(U256::from(2));
    let service = FlashService::new(source, FTUSDT_DECIMALS);

    let err = service.list_for_account(Address::from([0x11; 20])).await.unwrap_err();
    assert!(matches!(err, FlashError::Source(_)));
}

#[tokio::test]
async fn corrupt_purpose_bytes_surface_as_an_error_not_a_partial_record() {
    let source = source_with(&[1, 2], vec![record(1, b"ok"), record(2, &[0xff, 0xfe])]);
    let service = FlashService::new(source, FTUSDT_DECIMALS);

    let err = service.list_for_account(Address::from([0x11; 20])).await.unwrap_err();
    assert!(matches!(err, FlashError::View(_)));
}

#[tokio::test]
async fn create_converts_user_units_before_submission() {
    let service = FlashService::new(MockSource::default(), FTUSDT_DECIMALS);
    let request = CreateFlashRequest {
        recipient: Address::from([0x22; 20]),
        amount: "10.5".to_string(),
        time_window_minutes: 60,
        min_execution_delay_minutes: 1,
        required_approvals: 2,
        purpose: "rent".to_string(),
    };

    service.create(&request).await.unwrap();

    let created = service_source(&service).created.lock().unwrap().clone();
    assert_eq!(
        created,
        vec![RawFlashRequest {
            recipient: Address::from([0x22; 20]),
            amount: U256::from(10_500_000u64),
            time_window_secs: 3_600,
            min_execution_delay_secs: 60,
            required_approvals: 2,
            purpose: Bytes::from_static(b"rent"),
        }]
    );
}

#[tokio::test]
async fn create_rejects_invalid_requests_before_submission() {
    let service = FlashService::new(MockSource::default(), FTUSDT_DECIMALS);
    let request = CreateFlashRequest {
        recipient: Address::from([0x22; 20]),
        amount: "10".to_string(),
        // Converts to a zero-second window, below the one-minute floor.
        time_window_minutes: 0,
        min_execution_delay_minutes: 1,
        required_approvals: 1,
        purpose: String::new(),
    };

    let err = service.create(&request).await.unwrap_err();
    assert!(matches!(err, FlashError::Validation(_)));
    assert!(service_source(&service).created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn execute_and_cancel_pass_ids_through() {
    let service = FlashService::new(MockSource::default(), FTUSDT_DECIMALS);
    service.execute(U256::from(7)).await.unwrap();
    service.cancel(U256::from(9)).await.unwrap();

    assert_eq!(*service_source(&service).executed.lock().unwrap(), vec![U256::from(7)]);
    assert_eq!(*service_source(&service).cancelled.lock().unwrap(), vec![U256::from(9)]);
}

#[tokio::test]
async fn execute_enablement_boundary_is_inclusive() {
    let source = source_with(&[1], vec![record(1, b"x")]);
    let service = FlashService::new(source, FTUSDT_DECIMALS);
    let views = service.list_for_account(Address::from([0x11; 20])).await.unwrap();
    let view = &views[0];

    assert!(!view.executable_at(999));
    assert!(view.executable_at(1_000));
    assert!(view.executable_at(1_001));
}

fn service_source<S: FlashSource>(service: &FlashService<S>) -> &S {
    service.source()
}
