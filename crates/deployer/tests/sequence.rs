//! Deployment-sequence tests against a scripted mock deployer.

use std::{collections::VecDeque, path::PathBuf, sync::Mutex};

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolConstructor;
use ftusdt_contracts::Ftusdt;
use ftusdt_deployer::{run_deployment, Deploy, DeployError, DeploymentPlan};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct MockError(&'static str);

struct MockDeployer {
    results: Mutex<VecDeque<Result<Address, MockError>>>,
    calls: Mutex<Vec<(String, Bytes)>>,
}

impl MockDeployer {
    fn scripted(results: Vec<Result<Address, MockError>>) -> Self {
        Self { results: Mutex::new(results.into()), calls: Mutex::new(Vec::new()) }
    }
}

impl Deploy for MockDeployer {
    type Error = MockError;

    async fn deploy(&self, name: &str, init_code: Bytes) -> Result<Address, Self::Error> {
        self.calls.lock().unwrap().push((name.to_string(), init_code));
        self.results.lock().unwrap().pop_front().unwrap_or(Err(MockError("unscripted call")))
    }
}

fn plan() -> DeploymentPlan {
    DeploymentPlan {
        price_oracle_code: Bytes::from_static(&[0x01]),
        collateral_manager_code: Bytes::from_static(&[0x02]),
        token_code: Bytes::from_static(&[0x03]),
    }
}

fn addr(byte: u8) -> Address {
    Address::from([byte; 20])
}

fn output_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".env")
}

#[tokio::test]
async fn writes_the_three_address_assignments() {
    let deployer =
        MockDeployer::scripted(vec![Ok(addr(0xAA)), Ok(addr(0xBB)), Ok(addr(0xCC))]);
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);

    let addresses =
        run_deployment(&deployer, &plan(), U256::from(1_000_000u64), &output).await.unwrap();
    assert_eq!(addresses.price_oracle, addr(0xAA));
    assert_eq!(addresses.token, addr(0xCC));

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            format!("PRICE_ORACLE_ADDRESS={}", addr(0xAA)),
            format!("COLLATERAL_MANAGER_ADDRESS={}", addr(0xBB)),
            format!("CONTRACT_ADDRESS={}", addr(0xCC)),
        ]
    );
}

#[tokio::test]
async fn deploys_in_dependency_order_with_constructor_args() {
    let deployer =
        MockDeployer::scripted(vec![Ok(addr(0xAA)), Ok(addr(0xBB)), Ok(addr(0xCC))]);
    let dir = tempfile::tempdir().unwrap();

    run_deployment(&deployer, &plan(), U256::from(1_000_000u64), &output_path(&dir))
        .await
        .unwrap();

    let calls = deployer.calls.lock().unwrap();
    assert_eq!(calls[0].0, "PriceOracle");
    assert_eq!(calls[1].0, "CollateralManager");
    assert_eq!(calls[2].0, "FTUSDT");

    // Oracle and collateral manager deploy with bare bytecode.
    assert_eq!(calls[0].1, plan().price_oracle_code);
    assert_eq!(calls[1].1, plan().collateral_manager_code);

    // The token's init code is its bytecode plus the encoded constructor
    // arguments wiring in the two prior deployments.
    let constructor = Ftusdt::constructorCall {
        initialSupply: U256::from(1_000_000u64),
        priceOracle: addr(0xAA),
        collateralManager: addr(0xBB),
    };
    let expected = Bytes::from([plan().token_code.to_vec(), constructor.abi_encode()].concat());
    assert_eq!(calls[2].1, expected);
}

#[tokio::test]
async fn aborts_without_writing_when_a_step_fails() {
    let deployer = MockDeployer::scripted(vec![
        Ok(addr(0xAA)),
        Err(MockError("collateral manager deployment rejected")),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let output = output_path(&dir);

    let err = run_deployment(&deployer, &plan(), U256::from(1_000_000u64), &output)
        .await
        .unwrap_err();
    assert!(matches!(err, DeployError::Step(_)));
    assert!(!output.exists());

    // The failing second step stops the sequence before the token deploy.
    assert_eq!(deployer.calls.lock().unwrap().len(), 2);
}
